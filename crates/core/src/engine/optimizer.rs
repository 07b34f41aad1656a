use rust_decimal::Decimal;

use crate::domain::customer::CustomerCategory;
use crate::domain::gift::{GiftAllocation, GiftKind};
use crate::domain::order::OrderRecord;
use crate::engine::allocator::{floor_units, recommend_gifts};
use crate::engine::budget::derive_budget;
use crate::engine::tiers::is_gift_eligible;

/// Derive the budget for a target ROI, take the initial recommendation,
/// then greedily spend any unallocated remainder: free packs first while
/// at least one is affordable, then loyalty points. One pass; hardware
/// is never revisited and the budget is never exceeded.
pub fn optimize_budget(
    order: &OrderRecord,
    category: CustomerCategory,
    target_roi_pct: Decimal,
) -> GiftAllocation {
    if !is_gift_eligible(order) {
        return GiftAllocation::zero();
    }

    let budget = derive_budget(order, target_roi_pct);
    let mut gifts = recommend_gifts(order, category, budget);

    let pack_cost = GiftKind::PackFoc.unit_cost().unwrap_or_default();
    let spent = Decimal::from(gifts.pack_foc) * pack_cost
        + Decimal::from(gifts.hookah) * GiftKind::Hookah.unit_cost().unwrap_or_default()
        + Decimal::from(gifts.af_points);
    let mut remaining = budget - spent;

    if remaining > pack_cost {
        let extra_packs = floor_units(remaining, pack_cost);
        gifts.pack_foc += extra_packs;
        remaining -= Decimal::from(extra_packs) * pack_cost;
    }

    if remaining > Decimal::ONE {
        gifts.af_points += floor_units(remaining, Decimal::ONE);
    }

    gifts
}
