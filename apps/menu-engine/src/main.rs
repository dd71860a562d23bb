//! Menu Engine Binary
//!
//! Operator tool over the menu store.
//!
//! # Usage
//!
//! ```bash
//! menu-engine list
//! menu-engine show <establishment>
//! menu-engine quote <establishment> <order.json>
//! menu-engine --config other.yaml list
//! ```
//!
//! # Environment Variables
//!
//! - `MENU_ENGINE_CONFIG`: Path to the YAML config (default: config.yaml;
//!   built-in defaults when the file does not exist)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menu_engine::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use menu_engine::telemetry::init_telemetry;
use menu_engine::{CheckoutUseCase, JsonFileMenuStore, MenuRecord, MenuStore, OrderDto};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Menu pricing and order validation tool")]
struct Cli {
    /// YAML config file
    #[arg(short, long, env = "MENU_ENGINE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List stored establishments
    List,
    /// Print an establishment's stored menu
    Show {
        /// Establishment name
        establishment: String,
    },
    /// Price an order against an establishment's menu
    Quote {
        /// Establishment name
        establishment: String,
        /// Order JSON file
        order: PathBuf,
    },
}

fn load_configuration(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let display = path.display().to_string();
    load_config(Some(display.as_str())).with_context(|| format!("loading config from {display}"))
}

fn list(store: &JsonFileMenuStore) -> Result<()> {
    for name in store.list()? {
        println!("{name}");
    }
    Ok(())
}

fn show(store: &JsonFileMenuStore, establishment: &str) -> Result<()> {
    let menu = store
        .load(establishment)
        .with_context(|| format!("loading menu for {establishment}"))?;
    let record = MenuRecord::from(&menu);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn quote(store: &JsonFileMenuStore, establishment: &str, order_path: &Path) -> Result<()> {
    let menu = store
        .load(establishment)
        .with_context(|| format!("loading menu for {establishment}"))?;
    let raw = std::fs::read_to_string(order_path)
        .with_context(|| format!("reading order from {}", order_path.display()))?;
    let dto: OrderDto = serde_json::from_str(&raw).context("parsing order JSON")?;
    let order = dto.into_order(&menu)?;

    let summary = CheckoutUseCase::new(&menu).summary(&order);
    println!("{}", summary.text());
    for violation in &summary.violations {
        println!("! {violation}");
    }
    info!(
        establishment,
        total = %summary.total,
        violations = summary.violations.len(),
        "Quoted order"
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_configuration(&cli.config)?;
    init_telemetry(&config.observability.logging);
    let store = JsonFileMenuStore::from_config(&config.store);

    match cli.command {
        Command::List => list(&store),
        Command::Show { establishment } => show(&store, &establishment),
        Command::Quote {
            establishment,
            order,
        } => quote(&store, &establishment, &order),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
