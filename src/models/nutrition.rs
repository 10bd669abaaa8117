//! Shared nutrition data structure
//!
//! Used by catalog foods, logged food entries, and the daily stats.

use serde::{Deserialize, Serialize};

/// Nutritional information for one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// True when every field is finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }

    #[test]
    fn test_sum_adds_each_field() {
        let total: Nutrition = vec![
            Nutrition::new(130.0, 2.7, 28.0, 0.3),
            Nutrition::new(165.0, 31.0, 0.0, 3.6),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.calories, 295.0);
        assert!((total.protein - 33.7).abs() < 1e-9);
        assert_eq!(total.carbs, 28.0);
        assert!((total.fat - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(Nutrition::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Nutrition::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Nutrition::new(f64::NAN, 0.0, 0.0, 0.0).is_valid());
    }
}
