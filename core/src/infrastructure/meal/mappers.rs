use crate::{
    domain::{
        meal::{entities::Meal, value_objects::MealEntry},
        recipe::entities::Recipe,
    },
    entity::{meals, recipes},
};

impl From<&meals::Model> for Meal {
    fn from(model: &meals::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            logged_at: model.logged_at.to_utc(),
        }
    }
}

impl From<meals::Model> for Meal {
    fn from(model: meals::Model) -> Self {
        Self::from(&model)
    }
}

/// Rows whose recipe did not load are skipped.
pub fn map_meal_entries(rows: Vec<(meals::Model, Option<recipes::Model>)>) -> Vec<MealEntry> {
    rows.into_iter()
        .filter_map(|(meal, recipe)| {
            recipe.map(|recipe| MealEntry {
                meal: Meal::from(meal),
                recipe: Recipe::from(recipe),
            })
        })
        .collect()
}
