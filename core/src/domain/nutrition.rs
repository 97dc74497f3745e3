use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Nutrition facts of one serving, in grams (calories in kcal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFacts {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Invalid(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a NutritionFacts> for NutritionFacts {
    fn sum<I: Iterator<Item = &'a NutritionFacts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_field() {
        let total: NutritionFacts = [
            NutritionFacts::new(500.0, 30.0, 40.0, 20.0),
            NutritionFacts::new(250.5, 10.0, 5.5, 2.0),
        ]
        .iter()
        .sum();

        assert_eq!(total, NutritionFacts::new(750.5, 40.0, 45.5, 22.0));
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: NutritionFacts = Vec::<NutritionFacts>::new().into_iter().sum();
        assert_eq!(total, NutritionFacts::default());
    }

    #[test]
    fn rejects_negative_or_non_finite_values() {
        assert!(NutritionFacts::new(100.0, 1.0, 1.0, 1.0).validate().is_ok());
        assert!(NutritionFacts::new(-1.0, 1.0, 1.0, 1.0).validate().is_err());
        assert!(NutritionFacts::new(1.0, f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(
            NutritionFacts::new(1.0, 1.0, f64::INFINITY, 1.0)
                .validate()
                .is_err()
        );
    }
}
