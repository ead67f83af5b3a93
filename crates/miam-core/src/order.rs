//! Order and day value types handed over by the input collaborator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::{Catalog, DishId};
use crate::constants::{MAX_DAY, ORDER_LEN};
use crate::errors::{PredictionError, PredictionResult};

/// The 14 meals a customer orders for the first week, lunch then dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    meals: Vec<DishId>,
}

impl Order {
    /// Build an order from catalog ids, checking length and membership.
    pub fn new(meals: Vec<DishId>, catalog: &Catalog) -> PredictionResult<Self> {
        if meals.len() != ORDER_LEN {
            return Err(PredictionError::InvalidOrderLength {
                expected: ORDER_LEN,
                actual: meals.len(),
            });
        }
        if let Some(stray) = meals.iter().find(|id| !catalog.contains(**id)) {
            return Err(PredictionError::UnknownSymbol {
                symbol: stray.to_string(),
            });
        }
        Ok(Self { meals })
    }

    /// Parse order text such as `🍣🍕🥦🍣🍕🥦🍣🍕🥦🍣🍕🥦🍣🍕`.
    ///
    /// Accepts exactly the strings matched by [`Catalog::order_pattern`].
    /// Surrounding whitespace is ignored.
    pub fn parse(text: &str, catalog: &Catalog) -> PredictionResult<Self> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual != ORDER_LEN {
            return Err(PredictionError::InvalidOrderLength {
                expected: ORDER_LEN,
                actual,
            });
        }
        let meals = text
            .chars()
            .map(|c| catalog.index_of(c))
            .collect::<PredictionResult<Vec<_>>>()?;
        Ok(Self { meals })
    }

    pub fn meals(&self) -> &[DishId] {
        &self.meals
    }

    /// The order as symbols, for echoing back to the customer.
    pub fn render(&self, catalog: &Catalog) -> PredictionResult<String> {
        self.meals.iter().map(|id| catalog.symbol(*id)).collect()
    }
}

/// A day to predict, counted from the first day of the order (1 to 53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Day(u32);

impl Day {
    pub fn new(day: u32) -> PredictionResult<Self> {
        if (1..=MAX_DAY).contains(&day) {
            Ok(Self(day))
        } else {
            Err(PredictionError::InvalidDay {
                day: day.to_string(),
                max: MAX_DAY,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this is the last day, whose dinner lies outside the triangle.
    pub fn is_last(self) -> bool {
        self.0 == MAX_DAY
    }
}

impl FromStr for Day {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let day = trimmed
            .parse::<u32>()
            .map_err(|_| PredictionError::InvalidDay {
                day: trimmed.to_string(),
                max: MAX_DAY,
            })?;
        Self::new(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
