use clap::Args;
use rust_decimal::Decimal;

use offerly_core::engine::investment::{
    calculate_investment, CustomerMix, InvestmentInputs, InvestmentReport, ProductMix, TierMix,
};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct InvestmentArgs {
    #[arg(long, help = "Total master cases planned for the period")]
    pub master_cases: Decimal,
    #[arg(long, default_value = "85", help = "Product mix share of 50g packs (percent)")]
    pub mix_50g: Decimal,
    #[arg(long, default_value = "10", help = "Product mix share of 250g packs (percent)")]
    pub mix_250g: Decimal,
    #[arg(long, default_value = "5", help = "Product mix share of 1kg packs (percent)")]
    pub mix_1kg: Decimal,
    #[arg(long, default_value = "40", help = "Share of order value landing in Silver (percent)")]
    pub tier_silver: Decimal,
    #[arg(long, default_value = "30", help = "Share of order value landing in Gold (percent)")]
    pub tier_gold: Decimal,
    #[arg(long, default_value = "20", help = "Share of order value landing in Diamond (percent)")]
    pub tier_diamond: Decimal,
    #[arg(long, default_value = "10", help = "Share of order value landing in Platinum (percent)")]
    pub tier_platinum: Decimal,
    #[arg(long, default_value = "60", help = "Share of order value from retailers (percent)")]
    pub retailer: Decimal,
    #[arg(long, default_value = "40", help = "Share of order value from tobacco shops (percent)")]
    pub tobacco_shop: Decimal,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: InvestmentArgs) -> CommandResult {
    let inputs = InvestmentInputs {
        total_master_cases: args.master_cases,
        product_mix: ProductMix {
            g50_pct: args.mix_50g,
            g250_pct: args.mix_250g,
            kg1_pct: args.mix_1kg,
        },
        tier_mix: TierMix {
            silver_pct: args.tier_silver,
            gold_pct: args.tier_gold,
            diamond_pct: args.tier_diamond,
            platinum_pct: args.tier_platinum,
        },
        customer_mix: CustomerMix {
            retailer_pct: args.retailer,
            tobacco_shop_pct: args.tobacco_shop,
        },
    };

    let report = match calculate_investment(&inputs) {
        Ok(report) => report,
        Err(error) => return CommandResult::failure("investment", "domain", error.to_string(), 1),
    };

    if args.json {
        return match serde_json::to_string_pretty(&report) {
            Ok(output) => CommandResult::success(output),
            Err(error) => {
                CommandResult::failure("investment", "serialization", error.to_string(), 1)
            }
        };
    }

    CommandResult::success(render_report(&report))
}

fn render_report(report: &InvestmentReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "master cases: 50g {:.1}, 250g {:.1}, 1kg {:.1} (total {:.1})",
        report.master_cases.g50,
        report.master_cases.g250,
        report.master_cases.kg1,
        report.master_cases.total
    ));
    lines.push(format!(
        "order value: 50g ${:.2}, 250g ${:.2}, 1kg ${:.2} (total ${:.2})",
        report.order_value.g50,
        report.order_value.g250,
        report.order_value.kg1,
        report.order_value.total
    ));
    lines.push(format!("total weight: {:.0}g", report.weight_grams.total));
    lines.push(format!(
        "value by customer: retailers ${:.2}, tobacco shops ${:.2}",
        report.retailer_value, report.tobacco_shop_value
    ));
    lines.push(format!(
        "value by tier: Silver ${:.2}, Gold ${:.2}, Diamond ${:.2}, Platinum ${:.2}",
        report.tier_value.silver,
        report.tier_value.gold,
        report.tier_value.diamond,
        report.tier_value.platinum
    ));
    lines.push(format!(
        "gift budgets: Silver ${:.2}, Gold ${:.2}, Diamond ${:.2}, Platinum ${:.2} (total ${:.2})",
        report.gift_budgets.silver,
        report.gift_budgets.gold,
        report.gift_budgets.diamond,
        report.gift_budgets.platinum,
        report.gift_budgets.total()
    ));
    lines.push(format!(
        "budget by customer: retailers ${:.2}, tobacco shops ${:.2}",
        report.retailer_budget, report.tobacco_shop_budget
    ));
    lines.push(format!("net revenue: ${:.2}", report.net_revenue));
    lines.push(format!("weighted average ROI: {:.2}%", report.weighted_average_roi));
    lines.join("\n")
}
