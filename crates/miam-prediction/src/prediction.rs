//! Prediction record for one day.

use miam_core::order::Day;
use serde::Serialize;

use crate::meal::Meal;

/// Lunch and dinner predicted for one day. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub day: Day,
    pub lunch: Meal,
    pub dinner: Meal,
}

impl Prediction {
    /// Flat triangle index of the lunch of `day`.
    pub fn lunch_index(day: Day) -> usize {
        2 * (day.get() as usize - 1)
    }

    /// Flat triangle index of the dinner of `day`. Past the apex on day 53.
    pub fn dinner_index(day: Day) -> usize {
        2 * day.get() as usize - 1
    }
}
