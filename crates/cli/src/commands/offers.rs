use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use offerly_core::config::{AppConfig, LoadOptions};
use offerly_core::{
    generate_offers, summarize_order, CustomerCategory, Offer, OrderRecord, PackSize, PriceTable,
};

use crate::commands::CommandResult;
use crate::pricebook;

#[derive(Debug, Args)]
pub struct OffersArgs {
    #[arg(long, default_value_t = 0, help = "Quantity of 50g packs ordered")]
    pub qty_50g: u32,
    #[arg(long, default_value_t = 0, help = "Quantity of 250g packs ordered")]
    pub qty_250g: u32,
    #[arg(long, default_value_t = 0, help = "Quantity of 1kg packs ordered")]
    pub qty_1kg: u32,
    #[arg(long, default_value = "retailer", help = "Customer category: retailer or tobacco_shop")]
    pub customer: String,
    #[arg(long, help = "Price table CSV path (overrides configuration)")]
    pub prices: Option<PathBuf>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct OffersPayload {
    order: OrderRecord,
    customer_category: CustomerCategory,
    offers: Vec<Offer>,
}

pub fn run(args: OffersArgs) -> CommandResult {
    let category: CustomerCategory = match args.customer.parse() {
        Ok(category) => category,
        Err(error) => {
            return CommandResult::failure("offers", "invalid_argument", error.to_string(), 2)
        }
    };

    let (order, offers) = match prepare_offers(&args, category) {
        Ok(prepared) => prepared,
        Err(result) => return *result,
    };

    if args.json {
        let payload = OffersPayload { order, customer_category: category, offers };
        return match serde_json::to_string_pretty(&payload) {
            Ok(output) => CommandResult::success(output),
            Err(error) => {
                CommandResult::failure("offers", "serialization", error.to_string(), 1)
            }
        };
    }

    CommandResult::success(render_offers(&order, category, &offers))
}

fn prepare_offers(
    args: &OffersArgs,
    category: CustomerCategory,
) -> Result<(OrderRecord, Vec<Offer>), Box<CommandResult>> {
    let prices = load_prices("offers", args.prices.as_deref())?;

    let mut quantities = BTreeMap::new();
    quantities.insert(PackSize::G50, args.qty_50g);
    quantities.insert(PackSize::G250, args.qty_250g);
    quantities.insert(PackSize::Kg1, args.qty_1kg);

    let order = summarize_order(&prices, &quantities).map_err(|error| {
        Box::new(CommandResult::failure("offers", "domain", error.to_string(), 1))
    })?;
    let offers = generate_offers(&order, category);
    Ok((order, offers))
}

pub(crate) fn load_prices(
    command: &str,
    override_path: Option<&std::path::Path>,
) -> Result<PriceTable, Box<CommandResult>> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => {
            let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
                Box::new(CommandResult::failure(command, "configuration", error.to_string(), 1))
            })?;
            config.pricing.price_table_path
        }
    };

    pricebook::load_price_table(&path)
        .map_err(|error| Box::new(CommandResult::failure(command, "price_table", error.to_string(), 1)))
}

fn render_offers(order: &OrderRecord, category: CustomerCategory, offers: &[Offer]) -> String {
    let mut lines = vec![
        format!(
            "order: {} packs, {}g, ${:.2} ({category})",
            order.total_packs(),
            order.total_grams(),
            order.total_value
        ),
    ];

    if offers.is_empty() {
        lines.push("no offers: order does not meet gift eligibility or tier thresholds".to_string());
        return lines.join("\n");
    }

    lines.push(format!("{} offer(s):", offers.len()));
    for offer in offers {
        lines.push(render_offer(offer, order.total_value));
    }
    lines.join("\n")
}

fn render_offer(offer: &Offer, order_value: Decimal) -> String {
    let gifts = &offer.gifts;
    let cost = gifts.total_cost(order_value);
    format!(
        "- {} (target ROI {}%): budget ${:.2}, pack FOC {}, hookah {}, AF points {}, cash back {}%, gift cost ${:.2}, achieved ROI {}%",
        offer.tier.label(),
        offer.target_roi,
        offer.budget,
        gifts.pack_foc,
        gifts.hookah,
        gifts.af_points,
        gifts.cash_back_pct,
        cost,
        offer.achieved_roi
    )
}
