use rust_decimal::Decimal;

use crate::domain::order::OrderRecord;

/// Gift budget backing a target ROI percentage: a straight share of the
/// order value. A zero-value order yields a zero budget.
pub fn derive_budget(order: &OrderRecord, target_roi_pct: Decimal) -> Decimal {
    target_roi_pct / Decimal::from(100u32) * order.total_value
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::domain::order::OrderRecord;

    use super::derive_budget;

    fn order_worth(total_value: Decimal) -> OrderRecord {
        OrderRecord { quantities: BTreeMap::new(), prices: BTreeMap::new(), total_value }
    }

    #[test]
    fn budget_is_roi_share_of_order_value() {
        let order = order_worth(Decimal::from(328u32));
        assert_eq!(derive_budget(&order, Decimal::from(5u32)), Decimal::new(164, 1));
    }

    #[test]
    fn budget_is_linear_in_both_inputs() {
        let order = order_worth(Decimal::from(1000u32));
        let base = derive_budget(&order, Decimal::from(7u32));

        let doubled_value = order_worth(Decimal::from(2000u32));
        assert_eq!(derive_budget(&doubled_value, Decimal::from(7u32)), base * Decimal::TWO);
        assert_eq!(derive_budget(&order, Decimal::from(14u32)), base * Decimal::TWO);
    }

    #[test]
    fn zero_order_value_yields_zero_budget() {
        let order = order_worth(Decimal::ZERO);
        assert_eq!(derive_budget(&order, Decimal::from(13u32)), Decimal::ZERO);
    }
}
