use crate::domain::offer::Tier;
use crate::domain::order::{OrderRecord, PackSize};

/// Resolve the order's tier from total weight and 1kg presence.
///
/// Bands above Silver require a 1kg pack; orders whose weight qualifies
/// for a higher band without one degrade to Silver. Weight below the
/// Silver floor, or falling between two bands, resolves to no tier.
pub fn classify_tier(order: &OrderRecord) -> Option<Tier> {
    let total_grams = order.total_grams();
    let has_kilo = order.has_kilo_pack();

    let band = Tier::ALL.into_iter().find(|tier| {
        let (min, max) = tier.weight_range();
        total_grams >= min && max.map_or(true, |max| total_grams <= max)
    })?;

    if band.requires_kilo_pack() && !has_kilo {
        return Some(Tier::Silver);
    }
    Some(band)
}

/// Gift eligibility from raw pack counts, independent of weight-based
/// tiering. Both gates must pass before any offers are generated.
pub fn is_gift_eligible(order: &OrderRecord) -> bool {
    order.quantity(PackSize::G50) >= 10
        || order.quantity(PackSize::G250) >= 3
        || order.quantity(PackSize::Kg1) >= 2
}
