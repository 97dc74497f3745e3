use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Recommendations {
    /// Most frequent tags among the user's highly rated recipes.
    pub favorite_tags: Vec<String>,
    pub recommended_recipes: Vec<Recipe>,
}
