// src/planning/transfers.rs

use crate::model::product::Product;
use crate::model::store::Inventory;
use crate::model::transfer::{Transfer, TransportCosts};
use crate::planning::forecast::DemandForecast;
use serde::Serialize;
use tracing::{debug, warn};

/// Where a store sits relative to the per-store target for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceStatus {
    Needs(u32),
    Surplus(u32),
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreBalance {
    pub store: String,
    pub product: Product,
    pub stock: u32,
    pub target: u32,
    pub status: BalanceStatus,
}

/// Per-store target: total forecast split evenly, rounded down.
///
/// Every store gets the same target regardless of its size.
pub fn target_per_store(forecast: &DemandForecast, product: Product, store_count: usize) -> u32 {
    if store_count == 0 {
        return 0;
    }
    let count = u32::try_from(store_count).unwrap_or(u32::MAX);
    forecast.demand(product) / count
}

/// Reports every store/product against its target without moving anything.
pub fn assess_balance(inventory: &Inventory, forecast: &DemandForecast) -> Vec<StoreBalance> {
    let mut balances = Vec::with_capacity(inventory.len() * Product::ALL.len());

    for product in Product::ALL {
        let target = target_per_store(forecast, product, inventory.len());
        for store in inventory.stores() {
            let stock = store.stock(product);
            let status = if stock > target {
                BalanceStatus::Surplus(stock - target)
            } else if stock < target {
                BalanceStatus::Needs(target - stock)
            } else {
                BalanceStatus::Balanced
            };
            balances.push(StoreBalance {
                store: store.id.clone(),
                product,
                stock,
                target,
                status,
            });
        }
    }

    balances
}

/// Plans transfers for every product and applies them to `inventory`.
///
/// Products are planned independently, in catalog order. Transfers come back
/// in the order they were made.
pub fn plan_transfers(
    inventory: &mut Inventory,
    forecast: &DemandForecast,
    transport: &TransportCosts,
) -> Vec<Transfer> {
    let mut transfers = Vec::new();
    for product in Product::ALL {
        plan_product(inventory, forecast, transport, product, &mut transfers);
    }
    transfers
}

/// Greedy largest-surplus to largest-deficit matching for one product.
///
/// Each round re-sorts both lists (stable, so ties keep their current order)
/// and pairs the two heads. A receiver with no shelf space left is dropped
/// for this product; its deficit goes unmet.
fn plan_product(
    inventory: &mut Inventory,
    forecast: &DemandForecast,
    transport: &TransportCosts,
    product: Product,
    transfers: &mut Vec<Transfer>,
) {
    let target = target_per_store(forecast, product, inventory.len());

    // (store index, remaining amount)
    let mut surplus: Vec<(usize, u32)> = Vec::new();
    let mut deficit: Vec<(usize, u32)> = Vec::new();

    for (idx, store) in inventory.stores().iter().enumerate() {
        let stock = store.stock(product);
        if stock > target {
            surplus.push((idx, stock - target));
        } else if stock < target {
            deficit.push((idx, target - stock));
        }
    }

    let stores = inventory.stores_mut();

    while !surplus.is_empty() && !deficit.is_empty() {
        surplus.sort_by(|a, b| b.1.cmp(&a.1));
        deficit.sort_by(|a, b| b.1.cmp(&a.1));

        let (donor, donor_left) = surplus[0];
        let (receiver, receiver_left) = deficit[0];

        let space = stores[receiver].available_space(product);
        let quantity = donor_left.min(receiver_left).min(space);

        if quantity == 0 {
            warn!(
                %product,
                store = %stores[receiver].id,
                unmet = receiver_left,
                "Receiver at capacity, dropping"
            );
            deficit.remove(0);
            continue;
        }

        let origin = stores[donor].id.clone();
        let destination = stores[receiver].id.clone();
        let unit_cost = transport.cost(&origin, &destination);

        stores[donor].remove_stock(product, quantity);
        stores[receiver].add_stock(product, quantity);

        debug!(%product, %origin, %destination, quantity, unit_cost, "Transfer");
        transfers.push(Transfer {
            product,
            quantity,
            origin,
            destination,
            unit_cost,
        });

        if donor_left == quantity {
            surplus.remove(0);
        } else {
            surplus[0].1 = donor_left - quantity;
        }

        if receiver_left == quantity {
            deficit.remove(0);
        } else {
            deficit[0].1 = receiver_left - quantity;
        }
    }
}
