use miam_core::catalog::{Catalog, DishId};
use miam_prediction::{combine, Meal, MealTriangle, PredictionEngine};
use proptest::prelude::*;

fn dish() -> impl Strategy<Value = DishId> {
    (0u8..3).prop_map(DishId::new)
}

fn order() -> impl Strategy<Value = Vec<DishId>> {
    prop::collection::vec(dish(), 14)
}

proptest! {
    #[test]
    fn combine_is_commutative(a in dish(), b in dish()) {
        let catalog = Catalog::default();
        prop_assert_eq!(combine(&catalog, a, b).unwrap(), combine(&catalog, b, a).unwrap());
    }

    #[test]
    fn distinct_pairs_give_the_missing_dish(a in dish(), b in dish()) {
        prop_assume!(a != b);
        let catalog = Catalog::default();
        let c = combine(&catalog, a, b).unwrap();
        prop_assert!(c != a && c != b);
    }

    #[test]
    fn triangle_keeps_order_as_first_row(order in order()) {
        let catalog = Catalog::default();
        let triangle = MealTriangle::build(&order, &catalog).unwrap();
        prop_assert_eq!(triangle.len(), 105);
        prop_assert_eq!(triangle.row(0).unwrap(), order.as_slice());
    }

    #[test]
    fn last_dinner_is_always_undetermined(order in order()) {
        let mut engine = PredictionEngine::new(Catalog::default());
        engine.register_order_and_predict(&order).unwrap();
        let last = engine.get_one_prediction(53).unwrap();
        prop_assert_eq!(last.dinner, Meal::Undetermined);
        prop_assert!(last.lunch.dish().is_some());
    }

    #[test]
    fn day_one_echoes_first_two_meals(order in order()) {
        let mut engine = PredictionEngine::new(Catalog::default());
        engine.register_order_and_predict(&order).unwrap();
        let first = engine.get_one_prediction(1).unwrap();
        prop_assert_eq!(first.lunch, Meal::Planned(order[0]));
        prop_assert_eq!(first.dinner, Meal::Planned(order[1]));
    }

    #[test]
    fn days_walk_the_triangle_two_cells_at_a_time(order in order(), day in 1u32..53) {
        let mut engine = PredictionEngine::new(Catalog::default());
        engine.register_order_and_predict(&order).unwrap();
        let cells = engine.triangle().unwrap().cells().to_vec();
        let p = engine.get_one_prediction(day).unwrap();
        let i = 2 * (day as usize - 1);
        prop_assert_eq!(p.lunch, Meal::Planned(cells[i]));
        prop_assert_eq!(p.dinner, Meal::Planned(cells[i + 1]));
    }
}
