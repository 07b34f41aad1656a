use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::gift::GiftAllocation;
use crate::errors::DomainError;

/// Offer tiers, ordered by weight threshold and target ROI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Silver,
    Gold,
    Diamond,
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Silver, Tier::Gold, Tier::Diamond, Tier::Platinum];

    pub fn label(self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Diamond => "Diamond",
            Self::Platinum => "Platinum",
        }
    }

    /// Qualifying total-weight band in grams. Platinum is open-ended.
    pub fn weight_range(self) -> (u64, Option<u64>) {
        match self {
            Self::Silver => (6_000, Some(60_000)),
            Self::Gold => (66_050, Some(120_000)),
            Self::Diamond => (126_050, Some(240_000)),
            Self::Platinum => (246_050, None),
        }
    }

    /// Tiers above Silver require at least one 1kg pack in the order.
    pub fn requires_kilo_pack(self) -> bool {
        !matches!(self, Self::Silver)
    }

    /// Target ROI percentage the tier's gift budget is derived from.
    pub fn target_roi(self) -> Decimal {
        match self {
            Self::Silver => Decimal::from(5u32),
            Self::Gold => Decimal::from(7u32),
            Self::Diamond => Decimal::from(9u32),
            Self::Platinum => Decimal::from(13u32),
        }
    }

    /// Tiers from Silver up to and including `self`, the cumulative set
    /// an order resolving to `self` receives offers for.
    pub fn ladder(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().filter(move |tier| *tier <= self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "diamond" => Ok(Self::Diamond),
            "platinum" => Ok(Self::Platinum),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown tier `{other}` (expected silver|gold|diamond|platinum)"
            ))),
        }
    }
}

/// One computed offer for a tier. Target ROI and budget are fixed at
/// creation; the allocation and achieved ROI are recomputed when the
/// allocation is edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub tier: Tier,
    pub target_roi: Decimal,
    pub budget: Decimal,
    pub gifts: GiftAllocation,
    pub achieved_roi: Decimal,
}
