use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{meal::entities::Meal, nutrition::NutritionFacts, recipe::entities::Recipe};

pub struct LogMealInput {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealEntry {
    pub meal: Meal,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMeals {
    /// UTC calendar day.
    pub date: NaiveDate,
    pub meals: Vec<MealEntry>,
    pub daily_calories: f64,
    pub nutrition: NutritionFacts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealLog {
    pub days: Vec<DailyMeals>,
    pub total_calories: f64,
    pub total_carbs: f64,
    pub total_proteins: f64,
    pub total_fats: f64,
}

impl MealLog {
    /// Groups meal entries by the UTC day they were logged, newest day first.
    /// Entries keep newest-first order inside a day whatever the input order.
    pub fn from_entries(mut entries: Vec<MealEntry>) -> Self {
        entries.sort_by(|a, b| b.meal.logged_at.cmp(&a.meal.logged_at));

        let mut days: Vec<DailyMeals> = Vec::new();
        let mut totals = NutritionFacts::default();

        for entry in entries {
            let date = entry.meal.logged_at.date_naive();
            let nutrition = entry.recipe.nutrition();
            totals += nutrition;

            match days.last_mut() {
                Some(day) if day.date == date => {
                    day.nutrition += nutrition;
                    day.daily_calories = day.nutrition.calories;
                    day.meals.push(entry);
                }
                _ => days.push(DailyMeals {
                    date,
                    meals: vec![entry],
                    daily_calories: nutrition.calories,
                    nutrition,
                }),
            }
        }

        Self {
            days,
            total_calories: totals.calories,
            total_carbs: totals.carbs,
            total_proteins: totals.protein,
            total_fats: totals.fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::sample_recipe;
    use chrono::{TimeZone, Utc};

    fn entry(recipe: &Recipe, y: i32, m: u32, d: u32, h: u32) -> MealEntry {
        let mut meal = Meal::new(Uuid::new_v4(), recipe.id);
        meal.logged_at = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        MealEntry {
            meal,
            recipe: recipe.clone(),
        }
    }

    #[test]
    fn empty_log_has_zero_totals() {
        let log = MealLog::from_entries(Vec::new());
        assert!(log.days.is_empty());
        assert_eq!(log.total_calories, 0.0);
        assert_eq!(log.total_fats, 0.0);
    }

    #[test]
    fn groups_by_day_newest_first() {
        let mut light = sample_recipe(Uuid::new_v4(), "Salad", "");
        light.calories = 150.0;
        light.protein = 5.0;
        let heavy = sample_recipe(Uuid::new_v4(), "Burger", "");

        let log = MealLog::from_entries(vec![
            entry(&light, 2024, 3, 1, 8),
            entry(&heavy, 2024, 3, 2, 12),
            entry(&light, 2024, 3, 2, 19),
            entry(&heavy, 2024, 3, 1, 23),
        ]);

        assert_eq!(log.days.len(), 2);

        let latest = &log.days[0];
        assert_eq!(latest.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(latest.meals[0].recipe.name, "Salad");
        assert_eq!(latest.meals[1].recipe.name, "Burger");
        assert_eq!(latest.daily_calories, 550.0);
        assert_eq!(latest.nutrition.protein, 30.0);

        let earliest = &log.days[1];
        assert_eq!(earliest.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(earliest.meals[0].recipe.name, "Burger");
        assert_eq!(earliest.daily_calories, 550.0);

        assert_eq!(log.total_calories, 1100.0);
        assert_eq!(log.total_proteins, 60.0);
        assert_eq!(log.total_carbs, 200.0);
        assert_eq!(log.total_fats, 40.0);
    }
}
