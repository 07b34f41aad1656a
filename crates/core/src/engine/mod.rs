pub mod allocator;
pub mod budget;
pub mod investment;
pub mod optimizer;
pub mod rebalance;
pub mod roi;
pub mod summary;
pub mod tiers;

use tracing::debug;

use crate::domain::customer::CustomerCategory;
use crate::domain::offer::Offer;
use crate::domain::order::OrderRecord;

pub use self::allocator::recommend_gifts;
pub use self::budget::derive_budget;
pub use self::optimizer::optimize_budget;
pub use self::rebalance::rebalance;
pub use self::roi::{compute_roi, max_gift_quantities, GiftCaps};
pub use self::summary::summarize_order;
pub use self::tiers::{classify_tier, is_gift_eligible};

/// Seam for the offer generation pipeline. The deterministic engine is
/// the only production implementation; tests substitute their own.
pub trait OfferEngine: Send + Sync {
    fn generate_offers(&self, order: &OrderRecord, category: CustomerCategory) -> Vec<Offer>;
}

#[derive(Default)]
pub struct DeterministicOfferEngine;

impl OfferEngine for DeterministicOfferEngine {
    fn generate_offers(&self, order: &OrderRecord, category: CustomerCategory) -> Vec<Offer> {
        generate_offers(order, category)
    }
}

/// One offer per tier from Silver up to the order's resolved tier.
///
/// Both gates apply: the order must resolve to a tier (weight + 1kg
/// mix) and pass gift eligibility (raw pack counts); failing either
/// yields no offers at all.
pub fn generate_offers(order: &OrderRecord, category: CustomerCategory) -> Vec<Offer> {
    if !is_gift_eligible(order) {
        debug!(total_packs = order.total_packs(), "order below gift eligibility thresholds");
        return Vec::new();
    }

    let Some(resolved) = classify_tier(order) else {
        debug!(total_grams = order.total_grams(), "order weight resolves to no tier");
        return Vec::new();
    };

    resolved
        .ladder()
        .map(|tier| {
            let target_roi = tier.target_roi();
            let budget = derive_budget(order, target_roi);
            let gifts = optimize_budget(order, category, target_roi);
            let achieved_roi = compute_roi(order, &gifts, budget);
            Offer { tier, target_roi, budget, gifts, achieved_roi }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::domain::customer::CustomerCategory;
    use crate::domain::offer::Tier;
    use crate::domain::order::{OrderRecord, PackSize};

    use super::{generate_offers, DeterministicOfferEngine, OfferEngine};

    fn order(q50: u32, q250: u32, q1kg: u32, total_value: Decimal) -> OrderRecord {
        let quantities = BTreeMap::from([
            (PackSize::G50, q50),
            (PackSize::G250, q250),
            (PackSize::Kg1, q1kg),
        ]);
        OrderRecord { quantities, prices: BTreeMap::new(), total_value }
    }

    #[test]
    fn resolved_tier_unlocks_the_whole_ladder_below_it() {
        // 200kg with 1kg packs -> Diamond.
        let record = order(0, 400, 100, Decimal::from(150_000u32));
        let offers = generate_offers(&record, CustomerCategory::TobaccoShop);

        let tiers: Vec<Tier> = offers.iter().map(|offer| offer.tier).collect();
        assert_eq!(tiers, vec![Tier::Silver, Tier::Gold, Tier::Diamond]);

        for offer in &offers {
            assert_eq!(offer.target_roi, offer.tier.target_roi());
            assert!(offer.gifts.total_cost(record.total_value) <= offer.budget);
            assert!(offer.achieved_roi <= offer.target_roi);
        }
    }

    #[test]
    fn no_tier_means_no_offers_even_when_gift_eligible() {
        // 3 x 250g passes gift eligibility but only weighs 750g.
        let record = order(0, 3, 0, Decimal::from(480u32));
        assert!(generate_offers(&record, CustomerCategory::Retailer).is_empty());
    }

    #[test]
    fn gift_ineligible_orders_get_no_offers() {
        let record = order(9, 2, 1, Decimal::from(1_200u32));
        assert!(generate_offers(&record, CustomerCategory::Retailer).is_empty());
    }

    #[test]
    fn deterministic_engine_matches_free_function() {
        let record = order(120, 0, 0, Decimal::from(4_000u32));
        let engine = DeterministicOfferEngine;
        assert_eq!(
            engine.generate_offers(&record, CustomerCategory::Retailer),
            generate_offers(&record, CustomerCategory::Retailer)
        );
    }
}
