//! Property tests for permission filtering and invoice totals.

use std::collections::HashSet;

use bizmate_core::catalog::{DASHBOARD_MENU, REPORTS};
use bizmate_core::invoice::{compute_totals, LineAmounts};
use bizmate_core::permissions::{filter_items, Role};
use proptest::prelude::*;

fn module_names() -> Vec<&'static str> {
    DASHBOARD_MENU
        .iter()
        .chain(REPORTS)
        .map(|item| item.module_name)
        .chain(["payroll", "unknown_module"])
        .collect()
}

fn granted_strategy() -> impl Strategy<Value = HashSet<String>> {
    proptest::sample::subsequence(module_names(), 0..=module_names().len())
        .prop_map(|names| names.into_iter().map(str::to_string).collect())
}

fn lines_strategy() -> impl Strategy<Value = Vec<LineAmounts>> {
    prop::collection::vec(
        (0.0f64..1_000.0, 0.0f64..10_000.0).prop_map(|(q, p)| LineAmounts::new(q, p)),
        0..20,
    )
}

proptest! {
    #[test]
    fn unrestricted_roles_see_whole_catalog(
        role in any::<i64>().prop_filter("restricted", |r| *r != 3),
        granted in granted_strategy(),
    ) {
        let visible = filter_items(Role::new(role), &granted, DASHBOARD_MENU);
        let expected: Vec<_> = DASHBOARD_MENU.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn restricted_role_sees_granted_in_order(granted in granted_strategy()) {
        for catalog in [DASHBOARD_MENU, REPORTS] {
            let visible = filter_items(Role::new(3), &granted, catalog);
            let expected: Vec<_> = catalog
                .iter()
                .filter(|item| granted.contains(item.module_name))
                .collect();
            prop_assert_eq!(visible, expected);
        }
    }

    #[test]
    fn subtotal_is_sum_of_line_products(
        lines in lines_strategy(),
        tax in 0.0f64..100.0,
        discount in 0.0f64..100.0,
    ) {
        let totals = compute_totals(&lines, tax, discount, None);
        let expected: f64 = lines.iter().map(|l| l.quantity * l.unit_price).sum();
        prop_assert_eq!(totals.subtotal, expected);
        prop_assert_eq!(totals.tax_amount, expected * tax / 100.0);
        prop_assert_eq!(totals.discount_amount, expected * discount / 100.0);
    }

    #[test]
    fn totals_are_idempotent(
        lines in lines_strategy(),
        tax in 0.0f64..100.0,
        discount in 0.0f64..100.0,
        override_amount in proptest::option::of(0.0f64..500.0),
    ) {
        let first = compute_totals(&lines, tax, discount, override_amount);
        let second = compute_totals(&lines, tax, discount, override_amount);
        prop_assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
        prop_assert_eq!(first.tax_amount.to_bits(), second.tax_amount.to_bits());
        prop_assert_eq!(first.discount_amount.to_bits(), second.discount_amount.to_bits());
        prop_assert_eq!(first.total_amount.to_bits(), second.total_amount.to_bits());
    }

    #[test]
    fn non_zero_override_ignores_discount_percentage(
        lines in lines_strategy(),
        discount in 0.0f64..100.0,
        override_amount in 0.01f64..500.0,
    ) {
        let totals = compute_totals(&lines, 0.0, discount, Some(override_amount));
        prop_assert_eq!(totals.discount_amount, override_amount);
        prop_assert_eq!(totals.total_amount, totals.subtotal - override_amount);
    }
}
