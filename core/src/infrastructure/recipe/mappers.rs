use sea_orm::ActiveValue::Set;

use crate::{domain::recipe::entities::Recipe, entity::recipes};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            name: model.name.clone(),
            instructions: model.instructions.clone(),
            cooking_time: model.cooking_time,
            image_url: model.image_url.clone(),
            protein: model.protein,
            carbs: model.carbs,
            fat: model.fat,
            calories: model.calories,
            ingredients: model.ingredients.clone(),
            tags: model.tags.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl From<Recipe> for recipes::ActiveModel {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: Set(recipe.id),
            author_id: Set(recipe.author_id),
            name: Set(recipe.name),
            instructions: Set(recipe.instructions),
            cooking_time: Set(recipe.cooking_time),
            image_url: Set(recipe.image_url),
            protein: Set(recipe.protein),
            carbs: Set(recipe.carbs),
            fat: Set(recipe.fat),
            calories: Set(recipe.calories),
            ingredients: Set(recipe.ingredients),
            tags: Set(recipe.tags),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        }
    }
}
