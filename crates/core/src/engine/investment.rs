//! Program-level investment projection: given a master-case volume and
//! how it splits across products, tiers, and customer types, project
//! order value, gift budgets per tier, and net revenue.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::offer::Tier;
use crate::domain::order::PackSize;
use crate::errors::DomainError;

/// Wholesale price of one master case.
pub fn master_case_price(size: PackSize) -> Decimal {
    match size {
        PackSize::G50 => Decimal::from(3_936u32),
        PackSize::G250 => Decimal::new(42_435, 1),
        PackSize::Kg1 => Decimal::from(3_833u32),
    }
}

/// Packs per master case.
pub fn packs_per_master_case(size: PackSize) -> u32 {
    match size {
        PackSize::G50 => 120,
        PackSize::G250 => 24,
        PackSize::Kg1 => 6,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductMix {
    pub g50_pct: Decimal,
    pub g250_pct: Decimal,
    pub kg1_pct: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierMix {
    pub silver_pct: Decimal,
    pub gold_pct: Decimal,
    pub diamond_pct: Decimal,
    pub platinum_pct: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerMix {
    pub retailer_pct: Decimal,
    pub tobacco_shop_pct: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub total_master_cases: Decimal,
    pub product_mix: ProductMix,
    pub tier_mix: TierMix,
    pub customer_mix: CustomerMix,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeBreakdown {
    pub g50: Decimal,
    pub g250: Decimal,
    pub kg1: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub silver: Decimal,
    pub gold: Decimal,
    pub diamond: Decimal,
    pub platinum: Decimal,
}

impl TierBreakdown {
    pub fn total(&self) -> Decimal {
        self.silver + self.gold + self.diamond + self.platinum
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReport {
    pub master_cases: SizeBreakdown,
    pub order_value: SizeBreakdown,
    pub weight_grams: SizeBreakdown,
    pub retailer_value: Decimal,
    pub tobacco_shop_value: Decimal,
    pub tier_value: TierBreakdown,
    pub gift_budgets: TierBreakdown,
    pub retailer_budget: Decimal,
    pub tobacco_shop_budget: Decimal,
    pub net_revenue: Decimal,
    pub weighted_average_roi: Decimal,
}

fn pct(value: Decimal) -> Decimal {
    value / Decimal::from(100u32)
}

fn check_sums_to_100(label: &str, sum: Decimal) -> Result<(), DomainError> {
    if sum != Decimal::from(100u32) {
        return Err(DomainError::InvariantViolation(format!(
            "{label} percentages sum to {sum}, not 100"
        )));
    }
    Ok(())
}

pub fn calculate_investment(inputs: &InvestmentInputs) -> Result<InvestmentReport, DomainError> {
    let ProductMix { g50_pct, g250_pct, kg1_pct } = inputs.product_mix;
    let TierMix { silver_pct, gold_pct, diamond_pct, platinum_pct } = inputs.tier_mix;
    let CustomerMix { retailer_pct, tobacco_shop_pct } = inputs.customer_mix;

    check_sums_to_100("product mix", g50_pct + g250_pct + kg1_pct)?;
    check_sums_to_100("tier", silver_pct + gold_pct + diamond_pct + platinum_pct)?;
    check_sums_to_100("customer type", retailer_pct + tobacco_shop_pct)?;

    let mc_g50 = inputs.total_master_cases * pct(g50_pct);
    let mc_g250 = inputs.total_master_cases * pct(g250_pct);
    let mc_kg1 = inputs.total_master_cases * pct(kg1_pct);
    let master_cases = SizeBreakdown {
        g50: mc_g50,
        g250: mc_g250,
        kg1: mc_kg1,
        total: inputs.total_master_cases,
    };

    let value_g50 = mc_g50 * master_case_price(PackSize::G50);
    let value_g250 = mc_g250 * master_case_price(PackSize::G250);
    let value_kg1 = mc_kg1 * master_case_price(PackSize::Kg1);
    let total_value = value_g50 + value_g250 + value_kg1;
    let order_value =
        SizeBreakdown { g50: value_g50, g250: value_g250, kg1: value_kg1, total: total_value };

    let grams = |size: PackSize, cases: Decimal| {
        cases * Decimal::from(packs_per_master_case(size)) * Decimal::from(size.grams())
    };
    let weight_g50 = grams(PackSize::G50, mc_g50);
    let weight_g250 = grams(PackSize::G250, mc_g250);
    let weight_kg1 = grams(PackSize::Kg1, mc_kg1);
    let weight_grams = SizeBreakdown {
        g50: weight_g50,
        g250: weight_g250,
        kg1: weight_kg1,
        total: weight_g50 + weight_g250 + weight_kg1,
    };

    let tier_value = TierBreakdown {
        silver: total_value * pct(silver_pct),
        gold: total_value * pct(gold_pct),
        diamond: total_value * pct(diamond_pct),
        platinum: total_value * pct(platinum_pct),
    };

    let gift_budgets = TierBreakdown {
        silver: tier_value.silver * pct(Tier::Silver.target_roi()),
        gold: tier_value.gold * pct(Tier::Gold.target_roi()),
        diamond: tier_value.diamond * pct(Tier::Diamond.target_roi()),
        platinum: tier_value.platinum * pct(Tier::Platinum.target_roi()),
    };

    let budget_for_share = |share_pct: Decimal| {
        tier_value.silver * pct(share_pct) * pct(Tier::Silver.target_roi())
            + tier_value.gold * pct(share_pct) * pct(Tier::Gold.target_roi())
            + tier_value.diamond * pct(share_pct) * pct(Tier::Diamond.target_roi())
            + tier_value.platinum * pct(share_pct) * pct(Tier::Platinum.target_roi())
    };

    let weighted_average_roi = (Tier::Silver.target_roi() * silver_pct
        + Tier::Gold.target_roi() * gold_pct
        + Tier::Diamond.target_roi() * diamond_pct
        + Tier::Platinum.target_roi() * platinum_pct)
        / Decimal::from(100u32);

    Ok(InvestmentReport {
        master_cases,
        order_value,
        weight_grams,
        retailer_value: total_value * pct(retailer_pct),
        tobacco_shop_value: total_value * pct(tobacco_shop_pct),
        tier_value,
        gift_budgets,
        retailer_budget: budget_for_share(retailer_pct),
        tobacco_shop_budget: budget_for_share(tobacco_shop_pct),
        net_revenue: total_value - gift_budgets.total(),
        weighted_average_roi,
    })
}
