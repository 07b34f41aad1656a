use rust_decimal::Decimal;

use crate::domain::customer::CustomerCategory;
use crate::domain::gift::{cash_back_cap, GiftAllocation, GiftChange, GiftKind, HOOKAH_MAX_UNITS};
use crate::engine::allocator::floor_units;

fn unit_cost(kind: GiftKind) -> Decimal {
    kind.unit_cost().unwrap_or_default()
}

/// Recompute the sibling gift quantities after a single-kind edit so
/// total spend tracks the offer budget.
///
/// The changed kind keeps its new value. When it alone consumes the
/// budget, every sibling drops to zero. When the siblings had no prior
/// cost there is no proportion to preserve, so the remainder fills by
/// fixed priority (hookah, packs, points, cash-back); otherwise each
/// sibling gets the remainder in proportion to its prior cost share.
/// Unit kinds floor; hookah needs a full $400 share to register a unit;
/// cash-back caps at 30% and rounds to one decimal place.
pub fn rebalance(
    allocation: &GiftAllocation,
    change: GiftChange,
    offer_budget: Decimal,
    order_value: Decimal,
    category: CustomerCategory,
) -> GiftAllocation {
    let mut updated = allocation.clone();
    updated.apply(change);

    let changed_kind = change.kind();
    let changed_cost = updated.cost_of(changed_kind, order_value);
    let remaining = offer_budget - changed_cost;

    let siblings: Vec<GiftKind> =
        GiftKind::ALL.into_iter().filter(|kind| *kind != changed_kind).collect();
    let prior_total: Decimal =
        siblings.iter().map(|kind| allocation.cost_of(*kind, order_value)).sum();

    if remaining <= Decimal::ZERO {
        for kind in siblings {
            updated.clear(kind);
        }
        return updated;
    }

    if prior_total <= Decimal::ZERO {
        fill_by_priority(&mut updated, &siblings, remaining, order_value, category);
    } else {
        distribute_proportionally(
            &mut updated,
            &siblings,
            allocation,
            remaining,
            prior_total,
            order_value,
        );
    }

    updated
}

fn fill_by_priority(
    updated: &mut GiftAllocation,
    siblings: &[GiftKind],
    mut remaining: Decimal,
    order_value: Decimal,
    category: CustomerCategory,
) {
    if siblings.contains(&GiftKind::Hookah)
        && category.hardware_eligible()
        && remaining >= unit_cost(GiftKind::Hookah)
    {
        let units = floor_units(remaining, unit_cost(GiftKind::Hookah)).min(HOOKAH_MAX_UNITS);
        updated.hookah = units;
        remaining -= Decimal::from(units) * unit_cost(GiftKind::Hookah);
    }

    if siblings.contains(&GiftKind::PackFoc) && remaining >= unit_cost(GiftKind::PackFoc) {
        let units = floor_units(remaining, unit_cost(GiftKind::PackFoc));
        updated.pack_foc = units;
        remaining -= Decimal::from(units) * unit_cost(GiftKind::PackFoc);
    }

    if siblings.contains(&GiftKind::AfPoints) && remaining > Decimal::ZERO {
        let units = floor_units(remaining, Decimal::ONE);
        updated.af_points = units;
        remaining -= Decimal::from(units);
    }

    if siblings.contains(&GiftKind::CashBack)
        && remaining > Decimal::ZERO
        && order_value > Decimal::ZERO
    {
        let pct = (remaining / order_value * Decimal::from(100u32)).min(cash_back_cap());
        updated.cash_back_pct = pct.round_dp(1);
    }
}

fn distribute_proportionally(
    updated: &mut GiftAllocation,
    siblings: &[GiftKind],
    prior: &GiftAllocation,
    remaining: Decimal,
    prior_total: Decimal,
    order_value: Decimal,
) {
    for kind in siblings {
        let proportion = prior.cost_of(*kind, order_value) / prior_total;
        let share = remaining * proportion;

        match kind {
            GiftKind::Hookah => {
                updated.hookah = if share >= unit_cost(GiftKind::Hookah) {
                    floor_units(share, unit_cost(GiftKind::Hookah)).min(HOOKAH_MAX_UNITS)
                } else {
                    0
                };
            }
            GiftKind::PackFoc => {
                updated.pack_foc = if share >= unit_cost(GiftKind::PackFoc) {
                    floor_units(share, unit_cost(GiftKind::PackFoc))
                } else {
                    0
                };
            }
            GiftKind::AfPoints => {
                updated.af_points = floor_units(share, Decimal::ONE);
            }
            GiftKind::CashBack => {
                if order_value > Decimal::ZERO {
                    let pct = (share / order_value * Decimal::from(100u32)).min(cash_back_cap());
                    updated.cash_back_pct = pct.round_dp(1);
                }
            }
        }
    }
}
