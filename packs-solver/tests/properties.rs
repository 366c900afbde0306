//! Property tests over randomly generated catalogs and amounts.

use packs_solver::{
    CalculationResult, PackCalculator, PackCalculatorService, Strategy as SolveStrategy,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn catalog_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(50i64..=500, 1..=4)
        .prop_map(|sizes: BTreeSet<i64>| sizes.into_iter().collect())
}

fn check_invariants(sizes: &[i64], amount: i64, result: &CalculationResult) {
    let amount = amount as u64;
    assert!(result.total_items >= amount);
    assert_eq!(result.requested_amount, amount);
    assert_eq!(result.overage, result.total_items - amount);
    assert_eq!(result.total_packs, result.packs.values().sum::<u64>());
    assert_eq!(
        result.total_items,
        result.packs.iter().map(|(size, count)| size * count).sum::<u64>()
    );
    for (&size, &count) in &result.packs {
        assert!(sizes.contains(&(size as i64)));
        assert!(count > 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_results_hold_invariants(sizes in catalog_strategy(), amount in 1i64..=2000) {
        for strategy in [SolveStrategy::Search, SolveStrategy::Dynamic] {
            let calc = PackCalculator::new(&sizes, strategy).unwrap();
            let result = calc.calculate_packs(amount).unwrap();
            check_invariants(&sizes, amount, &result);
            prop_assert_eq!(&result, &calc.calculate_packs(amount).unwrap());
        }
    }

    #[test]
    fn prop_search_finds_lowest_overage(sizes in catalog_strategy(), amount in 1i64..=2000) {
        let search = PackCalculator::new(&sizes, SolveStrategy::Search).unwrap();
        let dynamic = PackCalculator::new(&sizes, SolveStrategy::Dynamic).unwrap();
        let found = search.calculate_packs(amount).unwrap();
        let optimal = dynamic.calculate_packs(amount).unwrap();

        prop_assert_eq!(found.overage, optimal.overage);
        prop_assert!(optimal.total_packs <= found.total_packs);
        // Only the exact-match short-circuit may settle for more packs
        if found.overage > 0 {
            prop_assert_eq!(found.total_packs, optimal.total_packs);
        }
    }

    #[test]
    fn prop_amount_below_every_size_uses_one_smallest_pack(sizes in catalog_strategy(), offset in 1i64..50) {
        let smallest = *sizes.iter().min().unwrap();
        let amount = (smallest - offset).max(1);
        for strategy in [SolveStrategy::Search, SolveStrategy::Dynamic] {
            let calc = PackCalculator::new(&sizes, strategy).unwrap();
            let result = calc.calculate_packs(amount).unwrap();
            prop_assert_eq!(result.packs.len(), 1);
            prop_assert_eq!(result.packs.get(&(smallest as u64)), Some(&1));
        }
    }

    #[test]
    fn prop_amount_equal_to_a_size_uses_that_pack(sizes in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let size = sizes[pick.index(sizes.len())];
        for strategy in [SolveStrategy::Search, SolveStrategy::Dynamic] {
            let calc = PackCalculator::new(&sizes, strategy).unwrap();
            let result = calc.calculate_packs(size).unwrap();
            prop_assert_eq!(result.overage, 0);
            prop_assert_eq!(result.total_packs, 1);
            prop_assert_eq!(result.packs.get(&(size as u64)), Some(&1));
        }
    }
}
