//! Pizza CLI - order from a fixed menu
//!
//! Usage:
//!   pizza order <name> [--delivery]    Bake a pizza, then deliver it or hand it over
//!   pizza menu [--json]                Show the menu

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pizza_order::output::{self, Console};
use pizza_order::{Fulfillment, Registry, Size, place_order};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pizza")]
#[command(about = "Choose a pizza from our menu! 🍕")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for simulated durations (reproducible output)
    #[arg(long, global = true, env = "PIZZA_SEED")]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bakes and delivers a pizza
    Order {
        /// Pizza name (case-insensitive)
        pizza_name: String,

        /// Deliver instead of pickup
        #[arg(long)]
        delivery: bool,

        /// Pizza size (L or XL)
        #[arg(long, env = "PIZZA_SIZE")]
        size: Option<String>,
    },

    /// Shows the menu
    Menu {
        /// Print the menu as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = Registry::standard();

    match cli.command {
        Commands::Order {
            pizza_name,
            delivery,
            size,
        } => {
            let size = size.as_deref().map(str::parse::<Size>).transpose()?;
            let mut rng = create_rng(cli.seed);
            let pizza = place_order(
                &registry,
                &pizza_name,
                Fulfillment::from_delivery_flag(delivery),
                size,
                rng.as_mut(),
                &mut Console,
            )?;
            if cli.verbose {
                output::info(&format!("Order complete: {}", pizza));
            }
        }

        Commands::Menu { json } => {
            if json {
                let rendered = serde_json::to_string_pretty(&registry.entries())
                    .context("Failed to serialize menu")?;
                println!("{}", rendered);
            } else {
                for line in registry.menu_lines() {
                    output::menu_item(&line);
                }
            }
        }
    }

    Ok(())
}

/// Seeded generator when a seed is configured, OS-seeded otherwise
fn create_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            log::debug!("seeding durations with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

/// `--verbose` forces debug; otherwise RUST_LOG, defaulting to warnings only
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
