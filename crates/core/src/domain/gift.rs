use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gift instruments the program can offer. Closed set so allocation and
/// rebalancing switch logic stays exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftKind {
    /// Free-of-charge product packs, $38 per unit.
    PackFoc,
    /// Premium hardware, $400 per unit, tobacco shops only, max 2.
    Hookah,
    /// Loyalty points, $1 per point.
    AfPoints,
    /// Cash-back expressed as a percentage of order value, capped at 30%.
    CashBack,
}

/// Hookahs are never allocated beyond this many units per offer.
pub const HOOKAH_MAX_UNITS: u32 = 2;

impl GiftKind {
    pub const ALL: [GiftKind; 4] =
        [GiftKind::Hookah, GiftKind::PackFoc, GiftKind::AfPoints, GiftKind::CashBack];

    pub fn label(self) -> &'static str {
        match self {
            Self::PackFoc => "Pack FOC",
            Self::Hookah => "Hookah",
            Self::AfPoints => "AF Points",
            Self::CashBack => "Cash Back %",
        }
    }

    /// Fixed monetary cost per unit. Cash-back has none; its cost is a
    /// share of the order value.
    pub fn unit_cost(self) -> Option<Decimal> {
        match self {
            Self::PackFoc => Some(Decimal::from(38u32)),
            Self::Hookah => Some(Decimal::from(400u32)),
            Self::AfPoints => Some(Decimal::ONE),
            Self::CashBack => None,
        }
    }
}

/// Upper bound for the cash-back percentage.
pub fn cash_back_cap() -> Decimal {
    Decimal::from(30u32)
}

impl fmt::Display for GiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quantities per gift kind. Unit-counted kinds are integers; cash-back
/// is a percentage with one decimal place of precision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GiftAllocation {
    pub pack_foc: u32,
    pub hookah: u32,
    pub af_points: u32,
    pub cash_back_pct: Decimal,
}

impl GiftAllocation {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.pack_foc == 0
            && self.hookah == 0
            && self.af_points == 0
            && self.cash_back_pct.is_zero()
    }

    /// Monetary cost of one gift kind at its current quantity. Cash-back
    /// cost depends on the order value.
    pub fn cost_of(&self, kind: GiftKind, order_value: Decimal) -> Decimal {
        match kind {
            GiftKind::PackFoc => Decimal::from(self.pack_foc) * Decimal::from(38u32),
            GiftKind::Hookah => Decimal::from(self.hookah) * Decimal::from(400u32),
            GiftKind::AfPoints => Decimal::from(self.af_points),
            GiftKind::CashBack => self.cash_back_pct / Decimal::from(100u32) * order_value,
        }
    }

    pub fn total_cost(&self, order_value: Decimal) -> Decimal {
        GiftKind::ALL.iter().map(|kind| self.cost_of(*kind, order_value)).sum()
    }

    pub fn clear(&mut self, kind: GiftKind) {
        match kind {
            GiftKind::PackFoc => self.pack_foc = 0,
            GiftKind::Hookah => self.hookah = 0,
            GiftKind::AfPoints => self.af_points = 0,
            GiftKind::CashBack => self.cash_back_pct = Decimal::ZERO,
        }
    }

    pub fn apply(&mut self, change: GiftChange) {
        match change {
            GiftChange::PackFoc(units) => self.pack_foc = units,
            GiftChange::Hookah(units) => self.hookah = units,
            GiftChange::AfPoints(units) => self.af_points = units,
            GiftChange::CashBackPct(pct) => self.cash_back_pct = pct,
        }
    }
}

/// A single user edit to one gift kind, carrying the new quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftChange {
    PackFoc(u32),
    Hookah(u32),
    AfPoints(u32),
    CashBackPct(Decimal),
}

impl GiftChange {
    pub fn kind(self) -> GiftKind {
        match self {
            Self::PackFoc(_) => GiftKind::PackFoc,
            Self::Hookah(_) => GiftKind::Hookah,
            Self::AfPoints(_) => GiftKind::AfPoints,
            Self::CashBackPct(_) => GiftKind::CashBack,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{GiftAllocation, GiftChange, GiftKind};

    #[test]
    fn costs_use_fixed_unit_values() {
        let allocation = GiftAllocation {
            pack_foc: 3,
            hookah: 2,
            af_points: 60,
            cash_back_pct: Decimal::ZERO,
        };
        let order_value = Decimal::from(1000u32);
        assert_eq!(allocation.cost_of(GiftKind::PackFoc, order_value), Decimal::from(114u32));
        assert_eq!(allocation.cost_of(GiftKind::Hookah, order_value), Decimal::from(800u32));
        assert_eq!(allocation.cost_of(GiftKind::AfPoints, order_value), Decimal::from(60u32));
        assert_eq!(allocation.total_cost(order_value), Decimal::from(974u32));
    }

    #[test]
    fn cash_back_cost_is_share_of_order_value() {
        let allocation = GiftAllocation {
            cash_back_pct: Decimal::new(125, 1), // 12.5%
            ..GiftAllocation::zero()
        };
        let cost = allocation.cost_of(GiftKind::CashBack, Decimal::from(400u32));
        assert_eq!(cost, Decimal::from(50u32));
    }

    #[test]
    fn apply_replaces_only_the_changed_kind() {
        let mut allocation =
            GiftAllocation { pack_foc: 5, hookah: 1, af_points: 10, cash_back_pct: Decimal::ZERO };
        allocation.apply(GiftChange::Hookah(2));
        assert_eq!(allocation.hookah, 2);
        assert_eq!(allocation.pack_foc, 5);
        assert_eq!(allocation.af_points, 10);
    }

    #[test]
    fn zero_allocation_reports_zero() {
        assert!(GiftAllocation::zero().is_zero());
        let nonzero = GiftAllocation { cash_back_pct: Decimal::ONE, ..GiftAllocation::zero() };
        assert!(!nonzero.is_zero());
    }
}
