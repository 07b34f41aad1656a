use std::collections::BTreeMap;

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use offerly_core::{
    compute_roi, rebalance, CustomerCategory, GiftAllocation, GiftChange, GiftKind, OrderRecord,
};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct RebalanceArgs {
    #[arg(long, default_value_t = 0, help = "Current pack FOC quantity")]
    pub pack_foc: u32,
    #[arg(long, default_value_t = 0, help = "Current hookah quantity")]
    pub hookah: u32,
    #[arg(long, default_value_t = 0, help = "Current AF points")]
    pub af_points: u32,
    #[arg(long, default_value = "0", help = "Current cash back percentage")]
    pub cash_back_pct: Decimal,
    #[arg(long, help = "Gift kind being edited: pack_foc, hookah, af_points or cash_back")]
    pub changed: String,
    #[arg(long, help = "New value for the edited gift kind")]
    pub value: String,
    #[arg(long, help = "Gift budget of the offer being edited")]
    pub budget: Decimal,
    #[arg(long, help = "Total order value the offer was generated from")]
    pub order_value: Decimal,
    #[arg(long, default_value = "retailer", help = "Customer category: retailer or tobacco_shop")]
    pub customer: String,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RebalancePayload {
    gifts: GiftAllocation,
    gift_cost: Decimal,
    budget: Decimal,
    achieved_roi: Decimal,
}

pub fn run(args: RebalanceArgs) -> CommandResult {
    let category: CustomerCategory = match args.customer.parse() {
        Ok(category) => category,
        Err(error) => {
            return CommandResult::failure("rebalance", "invalid_argument", error.to_string(), 2)
        }
    };

    let change = match parse_change(&args.changed, &args.value) {
        Ok(change) => change,
        Err(message) => return CommandResult::failure("rebalance", "invalid_argument", message, 2),
    };

    let current = GiftAllocation {
        pack_foc: args.pack_foc,
        hookah: args.hookah,
        af_points: args.af_points,
        cash_back_pct: args.cash_back_pct,
    };

    let gifts = rebalance(&current, change, args.budget, args.order_value, category);
    let gift_cost = gifts.total_cost(args.order_value);
    let order = OrderRecord {
        quantities: BTreeMap::new(),
        prices: BTreeMap::new(),
        total_value: args.order_value,
    };
    let achieved_roi = compute_roi(&order, &gifts, args.budget);

    if args.json {
        let payload = RebalancePayload { gifts, gift_cost, budget: args.budget, achieved_roi };
        return match serde_json::to_string_pretty(&payload) {
            Ok(output) => CommandResult::success(output),
            Err(error) => {
                CommandResult::failure("rebalance", "serialization", error.to_string(), 1)
            }
        };
    }

    CommandResult::success(format!(
        "rebalanced: pack FOC {}, hookah {}, AF points {}, cash back {}%, gift cost ${:.2} of ${:.2} budget, achieved ROI {}%",
        gifts.pack_foc,
        gifts.hookah,
        gifts.af_points,
        gifts.cash_back_pct,
        gift_cost,
        args.budget,
        achieved_roi
    ))
}

fn parse_change(kind: &str, value: &str) -> Result<GiftChange, String> {
    let parse_units = |value: &str| {
        value.parse::<u32>().map_err(|_| format!("`{value}` is not a whole gift quantity"))
    };

    match kind.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
        "pack_foc" | "pack" => Ok(GiftChange::PackFoc(parse_units(value)?)),
        "hookah" => Ok(GiftChange::Hookah(parse_units(value)?)),
        "af_points" | "points" => Ok(GiftChange::AfPoints(parse_units(value)?)),
        "cash_back" | "cash_back_pct" | "cashback" => {
            let pct = value
                .parse::<Decimal>()
                .map_err(|_| format!("`{value}` is not a cash back percentage"))?;
            Ok(GiftChange::CashBackPct(pct))
        }
        other => Err(format!(
            "unknown gift kind `{other}`; expected one of {}",
            GiftKind::ALL.map(|kind| kind.label()).join(", ")
        )),
    }
}
