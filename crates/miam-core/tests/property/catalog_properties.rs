use miam_core::catalog::Catalog;
use miam_core::errors::PredictionError;
use miam_core::order::{Day, Order};
use proptest::prelude::*;

proptest! {
    #[test]
    fn only_catalog_symbols_resolve(c in any::<char>()) {
        let catalog = Catalog::default();
        let known = catalog.dishes().iter().any(|d| d.symbol() == c);
        prop_assert_eq!(catalog.index_of(c).is_ok(), known);
    }

    #[test]
    fn any_fourteen_catalog_symbols_parse(indices in prop::collection::vec(0usize..3, 14)) {
        let catalog = Catalog::default();
        let text: String = indices.iter().map(|i| catalog.dishes()[*i].symbol()).collect();
        let order = Order::parse(&text, &catalog).unwrap();
        prop_assert_eq!(order.render(&catalog).unwrap(), text);
    }

    #[test]
    fn other_lengths_never_parse(len in 0usize..40) {
        prop_assume!(len != 14);
        let catalog = Catalog::default();
        let text: String = std::iter::repeat('\u{1F355}').take(len).collect();
        let is_length_error = matches!(
            Order::parse(&text, &catalog),
            Err(PredictionError::InvalidOrderLength { .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn day_range_is_one_to_fifty_three(day in any::<u32>()) {
        prop_assert_eq!(Day::new(day).is_ok(), (1..=53).contains(&day));
    }
}
