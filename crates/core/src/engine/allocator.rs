use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::customer::CustomerCategory;
use crate::domain::gift::{GiftAllocation, GiftKind, HOOKAH_MAX_UNITS};
use crate::domain::order::OrderRecord;
use crate::engine::tiers::is_gift_eligible;

/// Whole units purchasable with `budget` at `unit_cost`, floored so the
/// allocation never overspends through rounding.
pub(crate) fn floor_units(budget: Decimal, unit_cost: Decimal) -> u32 {
    if unit_cost <= Decimal::ZERO || budget <= Decimal::ZERO {
        return 0;
    }
    (budget / unit_cost).floor().to_u32().unwrap_or(0)
}

fn hookah_unit_cost() -> Decimal {
    GiftKind::Hookah.unit_cost().unwrap_or_default()
}

fn pack_unit_cost() -> Decimal {
    GiftKind::PackFoc.unit_cost().unwrap_or_default()
}

/// Initial gift recommendation for an order and budget.
///
/// Ineligible orders get an all-zero allocation. Tobacco shops with a
/// large enough order and budget get hardware first; the rest of the
/// budget splits 70/30 between free packs and loyalty points, with all
/// unit counts floored.
pub fn recommend_gifts(
    order: &OrderRecord,
    category: CustomerCategory,
    budget: Decimal,
) -> GiftAllocation {
    if !is_gift_eligible(order) {
        return GiftAllocation::zero();
    }

    let mut gifts = GiftAllocation::zero();
    let score = order.weighted_score();
    if score == 0 {
        return gifts;
    }

    let mut remaining = budget;
    if category.hardware_eligible() && remaining >= hookah_unit_cost() {
        if score > 100 && remaining > Decimal::from(800u32) {
            let count = floor_units(remaining, hookah_unit_cost()).min(HOOKAH_MAX_UNITS);
            gifts.hookah = count;
            remaining -= Decimal::from(count) * hookah_unit_cost();
        } else if score > 50 {
            gifts.hookah = 1;
            remaining -= hookah_unit_cost();
        }
    }

    // 70/30 split of the budget left after hardware.
    let pack_share = Decimal::new(7, 1) * remaining;
    let points_share = Decimal::new(3, 1) * remaining;
    gifts.pack_foc = floor_units(pack_share, pack_unit_cost());
    gifts.af_points = floor_units(points_share, Decimal::ONE);

    gifts
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::domain::customer::CustomerCategory;
    use crate::domain::gift::GiftAllocation;
    use crate::domain::order::{OrderRecord, PackSize};

    use super::{floor_units, recommend_gifts};

    fn order(q50: u32, q250: u32, q1kg: u32, total_value: Decimal) -> OrderRecord {
        let quantities = BTreeMap::from([
            (PackSize::G50, q50),
            (PackSize::G250, q250),
            (PackSize::Kg1, q1kg),
        ]);
        OrderRecord { quantities, prices: BTreeMap::new(), total_value }
    }

    #[test]
    fn ineligible_orders_get_nothing() {
        let record = order(9, 2, 1, Decimal::from(500u32));
        let gifts =
            recommend_gifts(&record, CustomerCategory::TobaccoShop, Decimal::from(1000u32));
        assert_eq!(gifts, GiftAllocation::zero());
    }

    #[test]
    fn small_order_splits_budget_seventy_thirty() {
        // 10 x 50g at $32.80, budget $20 at ~6% ROI.
        let record = order(10, 0, 0, Decimal::new(32800, 2));
        let gifts = recommend_gifts(&record, CustomerCategory::Retailer, Decimal::from(20u32));

        assert_eq!(gifts.hookah, 0);
        assert_eq!(gifts.pack_foc, 0); // floor(14 / 38)
        assert_eq!(gifts.af_points, 6); // floor(6)
    }

    #[test]
    fn large_tobacco_shop_order_gets_two_hookahs() {
        // Weighted score 120 > 100, budget $1000 > $800.
        let record = order(0, 0, 6, Decimal::from(10_000u32));
        let gifts =
            recommend_gifts(&record, CustomerCategory::TobaccoShop, Decimal::from(1000u32));

        assert_eq!(gifts.hookah, 2); // min(2, floor(1000/400))
        assert_eq!(gifts.pack_foc, 3); // floor(0.7 * 200 / 38)
        assert_eq!(gifts.af_points, 60); // floor(0.3 * 200)
    }

    #[test]
    fn mid_sized_tobacco_shop_order_gets_one_hookah() {
        // Score 60 sits in the 50..=100 band; budget covers one unit.
        let record = order(0, 12, 0, Decimal::from(2_000u32));
        let gifts =
            recommend_gifts(&record, CustomerCategory::TobaccoShop, Decimal::from(500u32));

        assert_eq!(gifts.hookah, 1);
        assert_eq!(gifts.pack_foc, 1); // floor(0.7 * 100 / 38)
        assert_eq!(gifts.af_points, 30);
    }

    #[test]
    fn retailers_never_get_hardware() {
        let record = order(0, 0, 6, Decimal::from(10_000u32));
        let gifts = recommend_gifts(&record, CustomerCategory::Retailer, Decimal::from(1000u32));

        assert_eq!(gifts.hookah, 0);
        assert_eq!(gifts.pack_foc, 18); // floor(700 / 38)
        assert_eq!(gifts.af_points, 300);
    }

    #[test]
    fn allocation_never_exceeds_budget() {
        for budget in [0u32, 20, 150, 400, 801, 1000, 2500] {
            let record = order(10, 5, 3, Decimal::from(5_000u32));
            let budget = Decimal::from(budget);
            let gifts = recommend_gifts(&record, CustomerCategory::TobaccoShop, budget);
            assert!(gifts.total_cost(record.total_value) <= budget);
        }
    }

    #[test]
    fn floor_units_rounds_toward_zero_spend() {
        assert_eq!(floor_units(Decimal::from(140u32), Decimal::from(38u32)), 3);
        assert_eq!(floor_units(Decimal::from(37u32), Decimal::from(38u32)), 0);
        assert_eq!(floor_units(Decimal::ZERO, Decimal::from(38u32)), 0);
    }
}
