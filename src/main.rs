mod error;
mod io;
mod model;
mod planning;
mod strategy;

use crate::error::Result;
use crate::io::inventory;
use crate::io::logging::setup_tracing;
use crate::io::reporting;
use crate::io::weather::StaticWeather;
use crate::model::product::Product;
use crate::model::store::{Inventory, Store};
use crate::planning::config::PlanningConfig;
use crate::planning::engine::{Rebalancer, RunReport};
use crate::planning::forecast::Weekday;
use crate::planning::transfers::BalanceStatus;
use crate::strategy::implementations::UniformNoise;
use std::env;
use std::io as stdio;
use std::process::ExitCode;
use tracing::error;

/// Usage: `perishable-rebalancer [city] [weekday] [inventory.csv | -]`
///
/// `-` reads the inventory CSV from stdin; no path uses the built-in demo
/// stores. Set `REBALANCER_SEED` to make the forecast noise reproducible.
fn main() -> ExitCode {
    setup_tracing();
    println!("=== Perishable Inventory Rebalancer ===");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum InventorySource {
    Demo,
    Stdin,
    File(String),
}

#[derive(Debug, Clone, PartialEq)]
struct RunArgs {
    city: String,
    weekday: Weekday,
    inventory: InventorySource,
}

/// Positional arguments: city, weekday, then the inventory source.
fn parse_args(args: &[String]) -> Result<RunArgs> {
    let city = args.first().map(String::as_str).unwrap_or("Hyderabad");
    let weekday: Weekday = args.get(1).map(String::as_str).unwrap_or("Saturday").parse()?;
    let inventory = match args.get(2).map(String::as_str) {
        None => InventorySource::Demo,
        Some("-") => InventorySource::Stdin,
        Some(path) => InventorySource::File(path.to_string()),
    };

    Ok(RunArgs {
        city: city.to_string(),
        weekday,
        inventory,
    })
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;

    // 1. LOAD INVENTORY
    let mut inventory = match &args.inventory {
        InventorySource::Demo => demo_inventory()?,
        InventorySource::Stdin => inventory::read_inventory(stdio::stdin().lock())?,
        InventorySource::File(path) => inventory::load_inventory(path)?,
    };
    print_inventory("Current Inventory Levels", &inventory);

    // 2. RUN ONE PLANNING CYCLE
    let noise = match env::var("REBALANCER_SEED").ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(seed) => UniformNoise::seeded(seed),
        None => UniformNoise::new(),
    };
    let mut rebalancer = Rebalancer::new(PlanningConfig::default(), Box::new(noise));
    let report =
        rebalancer.run_for_city(&StaticWeather::demo(), &args.city, args.weekday, &mut inventory)?;

    // 3. PRESENT
    print_report(&report);
    print_inventory("Inventory After Transfers", &inventory);

    // 4. EXPORT
    reporting::write_transfers("transfers.csv", &report.transfers)?;
    reporting::write_reorders("reorders.csv", &report.reorder)?;

    Ok(())
}

/// Three stores with Milk spread unevenly.
fn demo_inventory() -> Result<Inventory> {
    // (id, [(stock, capacity); Milk, Eggs, Bread])
    let rows = [
        ("Store A", [(10, 50), (20, 40), (5, 30)]),
        ("Store B", [(40, 60), (8, 40), (25, 30)]),
        ("Store C", [(2, 35), (15, 40), (12, 30)]),
    ];

    let mut stores = Vec::with_capacity(rows.len());
    for (id, levels) in rows {
        let mut store = Store::new(id);
        for (product, (stock, capacity)) in Product::ALL.into_iter().zip(levels) {
            store = store.with_product(product, stock, capacity)?;
        }
        stores.push(store);
    }
    Inventory::new(stores)
}

fn print_inventory(title: &str, inventory: &Inventory) {
    println!("\n=== {} ===", title);
    for store in inventory.stores() {
        let levels: Vec<String> = Product::ALL
            .iter()
            .map(|&p| format!("{}: {}/{}", p, store.stock(p), store.capacity(p)))
            .collect();
        println!("{}: {}", store.id, levels.join(", "));
    }

    let totals: Vec<String> = Product::ALL
        .iter()
        .map(|&p| format!("{}: {}", p, inventory.total_stock(p)))
        .collect();
    println!("Total: {} ({} units)", totals.join(", "), inventory.total_units());
}

fn print_report(report: &RunReport) {
    println!(
        "\nWeather in {}: {}, {:.1}°C ({})",
        report.weather.city, report.weather.condition, report.weather.temperature, report.weekday
    );

    println!("\n=== Demand Forecast ===");
    for (product, quantity) in report.forecast.iter() {
        println!("{}: {}", product, quantity);
    }

    println!("\n=== Balance Before Transfers ===");
    for balance in &report.balance {
        match balance.status {
            BalanceStatus::Needs(n) => {
                println!("{} needs +{} {} (target {})", balance.store, n, balance.product, balance.target)
            }
            BalanceStatus::Surplus(n) => {
                println!("{} has surplus {} {} (target {})", balance.store, n, balance.product, balance.target)
            }
            BalanceStatus::Balanced => println!("{} is balanced for {}", balance.store, balance.product),
        }
    }

    println!("\n=== Suggested Transfers ===");
    if report.transfers.is_empty() {
        println!("No transfers needed.");
    }
    for t in &report.transfers {
        println!(
            "{} x{}: {} -> {} (${} per unit, ${} total)",
            t.product,
            t.quantity,
            t.origin,
            t.destination,
            t.unit_cost,
            t.total_cost()
        );
    }

    println!("\n=== Profitability ===");
    let p = &report.profit;
    println!("Revenue: ${}", p.revenue);
    println!("Material Cost: ${}", p.material_cost);
    println!("Redistribution Cost: ${}", p.redistribution_cost);
    println!("Holding Cost: ${}", p.holding_cost);
    println!("Profit: ${}", p.profit);

    println!("\n=== Supplier Reorders ===");
    if report.reorder.is_empty() {
        println!("No reorders needed.");
    }
    for (store, lines) in &report.reorder {
        let items: Vec<String> = lines.iter().map(|(p, q)| format!("{}: {}", p, q)).collect();
        println!("{}: {}", store, items.join(", "));
    }
}
