use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::router::HealthApiDoc,
    meal::router::MealApiDoc, rating::router::RatingApiDoc,
    recipe::{handlers::get_home::__path_get_home, router::RecipeApiDoc},
    recommendation::router::RecommendationApiDoc, user::router::UserApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ladle API",
        description = "Recipe sharing and meal tracking"
    ),
    modifiers(&BearerSecurity),
    paths(get_home),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/profile", api = UserApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/recipes/{recipe_id}/rating", api = RatingApiDoc),
        (path = "/meals", api = MealApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
