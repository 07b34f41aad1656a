use rust_decimal::Decimal;

use crate::domain::customer::CustomerCategory;
use crate::domain::gift::{cash_back_cap, GiftAllocation, GiftKind, HOOKAH_MAX_UNITS};
use crate::domain::order::OrderRecord;
use crate::engine::allocator::floor_units;

/// Achieved ROI: total gift cost as a percentage of order value, two
/// decimal places. Zero budget or zero order value short-circuits to 0.
pub fn compute_roi(order: &OrderRecord, gifts: &GiftAllocation, budget: Decimal) -> Decimal {
    if budget.is_zero() || order.total_value.is_zero() {
        return Decimal::ZERO;
    }

    let actual_cost = gifts.total_cost(order.total_value);
    (actual_cost / order.total_value * Decimal::from(100u32)).round_dp(2)
}

/// Per-kind upper bounds for interactive adjustment of one offer's
/// allocation, so an edit can never request more than the budget buys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GiftCaps {
    pub pack_foc: u32,
    pub hookah: u32,
    pub af_points: u32,
    /// Percentage, one decimal place, never above the cash-back cap.
    pub cash_back_pct: Decimal,
}

pub fn max_gift_quantities(
    budget: Decimal,
    category: CustomerCategory,
    order_value: Decimal,
) -> GiftCaps {
    let hookah = if category.hardware_eligible() {
        floor_units(budget, GiftKind::Hookah.unit_cost().unwrap_or_default())
            .min(HOOKAH_MAX_UNITS)
    } else {
        0
    };

    let cash_back_pct = if order_value > Decimal::ZERO {
        (budget / order_value * Decimal::from(100u32)).min(cash_back_cap()).round_dp(1)
    } else {
        Decimal::ZERO
    };

    GiftCaps {
        pack_foc: floor_units(budget, GiftKind::PackFoc.unit_cost().unwrap_or_default()),
        hookah,
        af_points: floor_units(budget, Decimal::ONE),
        cash_back_pct,
    }
}
