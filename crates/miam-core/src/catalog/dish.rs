//! Dish entries and their stable identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Position of a dish in the catalog.
///
/// Ids are compared by value; catalog membership is checked with
/// [`Catalog::contains`](super::Catalog::contains), never by symbol text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DishId(pub u8);

impl DishId {
    /// Create an id from a catalog position.
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        // Catalog positions are < CATALOG_SIZE.
        Self(index as u8)
    }

    /// The catalog position as a `usize`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A dish on the menu: a display name and a one-character emoji symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    name: String,
    code_point: u32,
    symbol: char,
}

impl Dish {
    /// Create a dish. Fails when `code_point` is not a Unicode scalar value.
    pub fn new(name: String, code_point: u32) -> Result<Self, CatalogError> {
        let symbol = char::from_u32(code_point).ok_or_else(|| CatalogError::InvalidCodePoint {
            name: name.clone(),
            code_point,
        })?;
        Ok(Self {
            name,
            code_point,
            symbol,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
