use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::LadlePolicy},
    recipe::{entities::Recipe, ports::RecipePolicy},
};

impl RecipePolicy for LadlePolicy {
    fn can_update_recipe(&self, identity: &Identity, recipe: &Recipe) -> Result<bool, CoreError> {
        Ok(identity.is_admin() || recipe.author_id == identity.id())
    }
}
