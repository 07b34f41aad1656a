use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Customer segments the gift program distinguishes. Only tobacco shops
/// qualify for hardware (hookah) gifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerCategory {
    Retailer,
    TobaccoShop,
}

impl CustomerCategory {
    pub fn hardware_eligible(self) -> bool {
        matches!(self, Self::TobaccoShop)
    }
}

impl fmt::Display for CustomerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retailer => f.write_str("Retailer"),
            Self::TobaccoShop => f.write_str("Tobacco Shop"),
        }
    }
}

impl FromStr for CustomerCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "retailer" | "retail" => Ok(Self::Retailer),
            "tobacco_shop" | "tobacco" => Ok(Self::TobaccoShop),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown customer category `{other}` (expected retailer|tobacco-shop)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CustomerCategory;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("retailer".parse::<CustomerCategory>().unwrap(), CustomerCategory::Retailer);
        assert_eq!(
            "Tobacco Shop".parse::<CustomerCategory>().unwrap(),
            CustomerCategory::TobaccoShop
        );
        assert_eq!(
            "tobacco-shop".parse::<CustomerCategory>().unwrap(),
            CustomerCategory::TobaccoShop
        );
    }

    #[test]
    fn only_tobacco_shops_get_hardware() {
        assert!(CustomerCategory::TobaccoShop.hardware_eligible());
        assert!(!CustomerCategory::Retailer.hardware_eligible());
    }
}
