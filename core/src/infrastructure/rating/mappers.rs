use crate::{
    domain::{
        rating::{
            entities::Rating,
            value_objects::{RatedRecipe, RecipeReview},
        },
        recipe::entities::Recipe,
    },
    entity::{ratings, recipes, users},
};

impl From<&ratings::Model> for Rating {
    fn from(model: &ratings::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            score: model.score,
            comment: model.comment.clone(),
            rated_at: model.rated_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ratings::Model> for Rating {
    fn from(model: ratings::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_reviews(rows: Vec<(ratings::Model, Option<users::Model>)>) -> Vec<RecipeReview> {
    rows.into_iter()
        .map(|(rating, user)| RecipeReview {
            rating: Rating::from(rating),
            username: user.map(|u| u.username).unwrap_or_default(),
        })
        .collect()
}

pub fn map_rated_recipes(rows: Vec<(ratings::Model, Option<recipes::Model>)>) -> Vec<RatedRecipe> {
    rows.into_iter()
        .filter_map(|(rating, recipe)| {
            recipe.map(|recipe| RatedRecipe {
                rating: Rating::from(rating),
                recipe: Recipe::from(recipe),
            })
        })
        .collect()
}
