//! The exclusive-combination rule over a 3-dish catalog.

use miam_core::catalog::{Catalog, DishId};
use miam_core::constants::CATALOG_SIZE;
use miam_core::errors::{PredictionError, PredictionResult};

/// Combine two dishes.
///
/// The same dish twice gives that dish. Two different dishes give the third
/// one: distinct indices in {0, 1, 2} sum to 1, 2 or 3, and the missing
/// index is `3 - sum`.
///
/// | i1 | i2 | sum | result |
/// |----|----|-----|--------|
/// | 0  | 1  | 1   | 2      |
/// | 0  | 2  | 2   | 1      |
/// | 1  | 2  | 3   | 0      |
///
/// The operation is commutative but not associative.
pub fn combine(catalog: &Catalog, d1: DishId, d2: DishId) -> PredictionResult<DishId> {
    debug_assert_eq!(catalog.size(), CATALOG_SIZE);
    for id in [d1, d2] {
        if !catalog.contains(id) {
            return Err(PredictionError::UnknownSymbol {
                symbol: id.to_string(),
            });
        }
    }
    if d1 == d2 {
        return Ok(d1);
    }
    Ok(DishId::new(3 - (d1.0 + d2.0)))
}
