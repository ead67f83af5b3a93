//! The dish catalog (the menu).
//!
//! A fixed, ordered list of exactly three dishes. Each dish's position is its
//! [`DishId`], and the combination rule does arithmetic on those positions,
//! so the order of the catalog is part of its identity.

pub mod dish;

pub use dish::{Dish, DishId};

use std::collections::HashSet;

use crate::config::CatalogConfig;
use crate::constants::{CATALOG_SIZE, DEFAULT_DISHES, ORDER_LEN};
use crate::errors::{CatalogError, PredictionError, PredictionResult};

/// Ordered set of the three selectable dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Build a catalog from dishes in catalog order.
    ///
    /// Rejects anything other than exactly three entries, and repeated symbols.
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        if dishes.len() != CATALOG_SIZE {
            return Err(CatalogError::WrongSize {
                expected: CATALOG_SIZE,
                actual: dishes.len(),
            });
        }
        let mut seen = HashSet::with_capacity(CATALOG_SIZE);
        for dish in &dishes {
            if !seen.insert(dish.symbol()) {
                return Err(CatalogError::DuplicateSymbol {
                    code_point: dish.code_point(),
                });
            }
        }
        Ok(Self { dishes })
    }

    /// Build a catalog from the `[catalog]` config section.
    /// An empty dish list selects the built-in menu.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if config.dishes.is_empty() {
            return Ok(Self::default());
        }
        let dishes = config
            .dishes
            .iter()
            .map(|d| Dish::new(d.name.clone(), d.code_point))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dishes)
    }

    /// Number of dishes. Always 3.
    pub fn size(&self) -> usize {
        self.dishes.len()
    }

    /// Position of `symbol` in the catalog.
    pub fn index_of(&self, symbol: char) -> PredictionResult<DishId> {
        self.dishes
            .iter()
            .position(|d| d.symbol() == symbol)
            .map(DishId::from_index)
            .ok_or_else(|| PredictionError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Dish at position `id`.
    pub fn at(&self, id: DishId) -> PredictionResult<&Dish> {
        self.dishes
            .get(id.index())
            .ok_or_else(|| PredictionError::UnknownSymbol {
                symbol: format!("#{}", id.index()),
            })
    }

    /// Whether `id` names one of the catalog's dishes.
    pub fn contains(&self, id: DishId) -> bool {
        id.index() < self.dishes.len()
    }

    /// Symbol of the dish at `id`.
    pub fn symbol(&self, id: DishId) -> PredictionResult<char> {
        self.at(id).map(Dish::symbol)
    }

    /// Dishes in catalog order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Ids of all dishes, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = DishId> + '_ {
        (0..self.dishes.len()).map(DishId::from_index)
    }

    /// Input pattern accepted for an order: any 14 catalog symbols,
    /// e.g. `[🍣🍕🥦]{14}`.
    pub fn order_pattern(&self) -> String {
        let symbols: String = self.dishes.iter().map(Dish::symbol).collect();
        format!("[{symbols}]{{{ORDER_LEN}}}")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let dishes = DEFAULT_DISHES
            .iter()
            .filter_map(|(name, code_point)| Dish::new((*name).to_string(), *code_point).ok())
            .collect();
        Self { dishes }
    }
}
