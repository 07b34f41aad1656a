use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Catalog pack sizes. Closed set: every price table row and order line
/// is keyed by one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackSize {
    G50,
    G250,
    Kg1,
}

impl PackSize {
    pub const ALL: [PackSize; 3] = [PackSize::G50, PackSize::G250, PackSize::Kg1];

    pub fn label(self) -> &'static str {
        match self {
            Self::G50 => "50g",
            Self::G250 => "250g",
            Self::Kg1 => "1kg",
        }
    }

    /// Nominal net weight of one pack, in grams.
    pub fn grams(self) -> u64 {
        match self {
            Self::G50 => 50,
            Self::G250 => 250,
            Self::Kg1 => 1000,
        }
    }

    /// Relative weight factor used by the allocation score.
    pub fn weight_factor(self) -> u64 {
        match self {
            Self::G50 => 1,
            Self::G250 => 5,
            Self::Kg1 => 20,
        }
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PackSize {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "50g" => Ok(Self::G50),
            "250g" => Ok(Self::G250),
            "1kg" | "1000g" => Ok(Self::Kg1),
            other => Err(DomainError::InvalidPriceTable(format!(
                "unknown pack size `{other}` (expected 50g|250g|1kg)"
            ))),
        }
    }
}

/// Unit prices per pack size. Every size an order requests must be
/// present; lookups never default to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable(BTreeMap<PackSize, Decimal>);

impl PriceTable {
    pub fn new(prices: BTreeMap<PackSize, Decimal>) -> Self {
        Self(prices)
    }

    pub fn set(&mut self, size: PackSize, unit_price: Decimal) {
        self.0.insert(size, unit_price);
    }

    pub fn price(&self, size: PackSize) -> Option<Decimal> {
        self.0.get(&size).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PackSize, Decimal)> + '_ {
        self.0.iter().map(|(size, price)| (*size, *price))
    }
}

impl FromIterator<(PackSize, Decimal)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (PackSize, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One priced order. Built once by `summarize_order` and never mutated;
/// a changed order produces a fresh record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub quantities: BTreeMap<PackSize, u32>,
    pub prices: BTreeMap<PackSize, Decimal>,
    pub total_value: Decimal,
}

impl OrderRecord {
    pub fn quantity(&self, size: PackSize) -> u32 {
        self.quantities.get(&size).copied().unwrap_or(0)
    }

    pub fn total_packs(&self) -> u32 {
        self.quantities.values().sum()
    }

    pub fn total_grams(&self) -> u64 {
        PackSize::ALL
            .iter()
            .map(|size| u64::from(self.quantity(*size)) * size.grams())
            .sum()
    }

    /// True when the order contains at least one 1kg pack. Tiers above
    /// Silver require this.
    pub fn has_kilo_pack(&self) -> bool {
        self.quantity(PackSize::Kg1) > 0
    }

    /// Size-weighted score (50g x1, 250g x5, 1kg x20) gating whether any
    /// allocation proceeds.
    pub fn weighted_score(&self) -> u64 {
        PackSize::ALL
            .iter()
            .map(|size| u64::from(self.quantity(*size)) * size.weight_factor())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use super::{OrderRecord, PackSize, PriceTable};

    fn order(q50: u32, q250: u32, q1kg: u32) -> OrderRecord {
        let quantities = BTreeMap::from([
            (PackSize::G50, q50),
            (PackSize::G250, q250),
            (PackSize::Kg1, q1kg),
        ]);
        OrderRecord { quantities, prices: BTreeMap::new(), total_value: Decimal::ZERO }
    }

    #[test]
    fn total_grams_sums_nominal_pack_weights() {
        let record = order(10, 4, 2);
        assert_eq!(record.total_grams(), 10 * 50 + 4 * 250 + 2 * 1000);
    }

    #[test]
    fn weighted_score_applies_size_factors() {
        let record = order(10, 4, 2);
        assert_eq!(record.weighted_score(), 10 + 4 * 5 + 2 * 20);
    }

    #[test]
    fn missing_sizes_count_as_zero() {
        let record =
            OrderRecord { quantities: BTreeMap::new(), prices: BTreeMap::new(), total_value: Decimal::ZERO };
        assert_eq!(record.quantity(PackSize::G50), 0);
        assert_eq!(record.total_grams(), 0);
        assert!(!record.has_kilo_pack());
    }

    #[test]
    fn pack_size_labels_round_trip() {
        for size in PackSize::ALL {
            assert_eq!(size.label().parse::<PackSize>().unwrap(), size);
        }
    }

    #[test]
    fn price_table_lookup_never_defaults() {
        let table: PriceTable =
            [(PackSize::G50, Decimal::new(3280, 2))].into_iter().collect();
        assert_eq!(table.price(PackSize::G50), Some(Decimal::new(3280, 2)));
        assert_eq!(table.price(PackSize::Kg1), None);
    }
}
