use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use offerly_core::{
    build_export, generate_offers, summarize_order, CustomerCategory, CustomerInfo, ExportRecord,
    PackSize, Tier,
};

use crate::commands::{offers, CommandResult};

#[derive(Debug, Args)]
pub struct ExportArgs {
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
    #[arg(long, help = "Customer name printed on the summary")]
    pub name: String,
    #[arg(long, default_value = "", help = "Customer address printed on the summary")]
    pub address: String,
    #[arg(long, help = "Tier of the offer to export")]
    pub tier: String,
    #[arg(long, help = "Destination CSV path")]
    pub output: PathBuf,
}

pub fn run(args: ExportArgs) -> CommandResult {
    let category: CustomerCategory = match args.customer.parse() {
        Ok(category) => category,
        Err(error) => {
            return CommandResult::failure("export", "invalid_argument", error.to_string(), 2)
        }
    };
    let tier: Tier = match args.tier.parse() {
        Ok(tier) => tier,
        Err(error) => {
            return CommandResult::failure("export", "invalid_argument", error.to_string(), 2)
        }
    };

    let prices = match offers::load_prices("export", args.prices.as_deref()) {
        Ok(prices) => prices,
        Err(result) => return *result,
    };

    let mut quantities = BTreeMap::new();
    quantities.insert(PackSize::G50, args.qty_50g);
    quantities.insert(PackSize::G250, args.qty_250g);
    quantities.insert(PackSize::Kg1, args.qty_1kg);

    let order = match summarize_order(&prices, &quantities) {
        Ok(order) => order,
        Err(error) => return CommandResult::failure("export", "domain", error.to_string(), 1),
    };

    let offers = generate_offers(&order, category);
    let Some(offer) = offers.iter().find(|offer| offer.tier == tier) else {
        return CommandResult::failure(
            "export",
            "no_offer",
            format!("the order does not qualify for a {} offer", tier.label()),
            1,
        );
    };

    let customer = CustomerInfo { name: args.name, category, address: args.address };
    let record = build_export(&customer, &order, offer);

    if let Err(error) = write_csv(&args.output, &record) {
        return CommandResult::failure("export", "io", error, 1);
    }

    CommandResult::success(format!(
        "exported {} offer for {} to {}",
        tier.label(),
        customer.name,
        args.output.display()
    ))
}

fn write_csv(path: &std::path::Path, record: &ExportRecord) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|error| format!("could not create `{}`: {error}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Field", "Value"])
        .map_err(|error| error.to_string())?;
    for row in &record.rows {
        writer.write_record([row.label.as_str(), row.value.as_str()]).map_err(|error| error.to_string())?;
    }
    writer
        .write_record(["Exported At", &Utc::now().format("%Y-%m-%d %H:%M UTC").to_string()])
        .map_err(|error| error.to_string())?;
    writer.flush().map_err(|error| error.to_string())
}
