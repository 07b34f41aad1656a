pub mod commands;
pub mod pricebook;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use offerly_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "offerly",
    about = "Offerly promotional offer CLI",
    long_about = "Generate tiered promotional offers for tobacco orders, rebalance gift \
                  allocations, project investment budgets, and inspect configuration.",
    after_help = "Examples:\n  offerly offers --qty-50g 100 --customer tobacco_shop\n  offerly rebalance --pack-foc 6 --af-points 100 --changed hookah --value 1 --budget 500 --order-value 10000 --customer tobacco_shop\n  offerly investment --master-cases 1000 --json\n  offerly config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Summarize an order and generate the cumulative tier offer ladder")]
    Offers(commands::offers::OffersArgs),
    #[command(about = "Recompute sibling gift quantities after a manual gift edit")]
    Rebalance(commands::rebalance::RebalanceArgs),
    #[command(about = "Project order value, gift budgets, and blended ROI for a planned mix")]
    Investment(commands::investment::InvestmentArgs),
    #[command(about = "Write the offer summary sheet for one tier to a CSV file")]
    Export(commands::export::ExportArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use offerly_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    // CLI output goes to stdout; diagnostics stay on stderr.
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);
    let _ = match config.logging.format {
        Compact => builder.compact().try_init(),
        Pretty => builder.pretty().try_init(),
        Json => builder.json().try_init(),
    };
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    init_logging(&config);

    let result = match cli.command {
        Command::Offers(args) => commands::offers::run(args),
        Command::Rebalance(args) => commands::rebalance::run(args),
        Command::Investment(args) => commands::investment::run(args),
        Command::Export(args) => commands::export::run(args),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
