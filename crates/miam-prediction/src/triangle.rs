//! MealTriangle — the 105 derived meals, stored row-major in one flat Vec.

use miam_core::catalog::{Catalog, DishId};
use miam_core::constants::{ORDER_LEN, TRIANGLE_CELLS};
use miam_core::errors::{PredictionError, PredictionResult};

use crate::combine::combine;

/// Triangular arrangement of meals.
///
/// Row 0 is the order, row `r` has `14 - r` cells, and cell `i` of row `r`
/// combines cells `i` and `i + 1` of row `r - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealTriangle {
    cells: Vec<DishId>,
}

impl MealTriangle {
    /// Build the full triangle from a 14-meal order.
    pub fn build(order: &[DishId], catalog: &Catalog) -> PredictionResult<Self> {
        if order.len() != ORDER_LEN {
            return Err(PredictionError::InvalidOrderLength {
                expected: ORDER_LEN,
                actual: order.len(),
            });
        }

        let mut cells = Vec::with_capacity(TRIANGLE_CELLS);
        cells.extend_from_slice(order);

        let mut row_start = 0;
        let mut row_len = ORDER_LEN;
        while row_len > 1 {
            let next = cells[row_start..row_start + row_len]
                .windows(2)
                .map(|pair| combine(catalog, pair[0], pair[1]))
                .collect::<PredictionResult<Vec<_>>>()?;
            cells.extend(next);
            row_start += row_len;
            row_len -= 1;
        }

        debug_assert_eq!(cells.len(), TRIANGLE_CELLS);
        Ok(Self { cells })
    }

    /// Number of cells. Always 105.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[DishId] {
        &self.cells
    }

    /// Cell at flat index `index`.
    pub fn get(&self, index: usize) -> Option<DishId> {
        self.cells.get(index).copied()
    }

    /// Number of rows. Always 14.
    pub fn row_count(&self) -> usize {
        ORDER_LEN
    }

    /// Flat index of the first cell of row `row`.
    pub fn row_start(row: usize) -> usize {
        // sum of (14 - i) for i in 0..row
        row * ORDER_LEN - row * row.saturating_sub(1) / 2
    }

    /// Cells of row `row`, or `None` past the apex.
    pub fn row(&self, row: usize) -> Option<&[DishId]> {
        if row >= ORDER_LEN {
            return None;
        }
        let start = Self::row_start(row);
        self.cells.get(start..start + ORDER_LEN - row)
    }

    /// Rows from the order down to the apex.
    pub fn rows(&self) -> impl Iterator<Item = &[DishId]> + '_ {
        (0..ORDER_LEN).filter_map(move |r| self.row(r))
    }

    /// The order this triangle was built from.
    pub fn order(&self) -> &[DishId] {
        &self.cells[..ORDER_LEN]
    }

    /// Render the triangle row by row, each row shifted one more space right.
    pub fn render(&self, catalog: &Catalog) -> PredictionResult<String> {
        let mut output = String::new();
        for (depth, row) in self.rows().enumerate() {
            output.push_str(&" ".repeat(depth));
            let symbols = row
                .iter()
                .map(|id| catalog.symbol(*id).map(String::from))
                .collect::<PredictionResult<Vec<_>>>()?;
            output.push_str(&symbols.join(" "));
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_starts_follow_shrinking_rows() {
        assert_eq!(MealTriangle::row_start(0), 0);
        assert_eq!(MealTriangle::row_start(1), 14);
        assert_eq!(MealTriangle::row_start(2), 27);
        assert_eq!(MealTriangle::row_start(13), 104);
    }

    #[test]
    fn uniform_order_stays_uniform() {
        let catalog = Catalog::default();
        let order = vec![DishId::new(1); ORDER_LEN];
        let triangle = MealTriangle::build(&order, &catalog).unwrap();
        assert!(triangle.cells().iter().all(|id| *id == DishId::new(1)));
    }
}
