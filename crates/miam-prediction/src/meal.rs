//! A predicted meal slot.

use std::fmt;

use miam_core::catalog::{Catalog, DishId};
use miam_core::constants::UNDETERMINED_SYMBOL;
use miam_core::errors::PredictionResult;
use serde::Serialize;

/// What is served at one lunch or dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    /// A dish from the catalog.
    Planned(DishId),
    /// No dish can be derived (the dinner of the last day).
    Undetermined,
}

impl Meal {
    /// The dish id, if any.
    pub fn dish(self) -> Option<DishId> {
        match self {
            Self::Planned(id) => Some(id),
            Self::Undetermined => None,
        }
    }

    pub fn is_undetermined(self) -> bool {
        matches!(self, Self::Undetermined)
    }

    /// Symbol to show for this meal.
    pub fn symbol(self, catalog: &Catalog) -> PredictionResult<char> {
        match self {
            Self::Planned(id) => catalog.symbol(id),
            Self::Undetermined => Ok(UNDETERMINED_SYMBOL),
        }
    }
}

impl From<DishId> for Meal {
    fn from(id: DishId) -> Self {
        Self::Planned(id)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned(id) => write!(f, "{id}"),
            Self::Undetermined => write!(f, "{UNDETERMINED_SYMBOL}"),
        }
    }
}
