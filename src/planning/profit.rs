// src/planning/profit.rs

use crate::model::product::{Catalog, Product, ProductInfo};
use crate::model::store::Inventory;
use crate::model::transfer::Transfer;
use crate::planning::forecast::DemandForecast;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfitBreakdown {
    pub revenue: i64,
    pub material_cost: i64,
    pub redistribution_cost: i64,
    pub holding_cost: i64,
    pub profit: i64,
}

/// Profitability of the post-transfer inventory.
///
/// Each store is assumed to sell up to the full product forecast on its own;
/// the forecast is not split across stores. Holding is charged at the flat
/// per-unit rate on everything left on the shelves.
pub fn calculate_profit(
    inventory: &Inventory,
    forecast: &DemandForecast,
    transfers: &[Transfer],
    catalog: &Catalog,
) -> ProfitBreakdown {
    let mut revenue = 0i64;
    let mut material_cost = 0i64;

    for store in inventory.stores() {
        for product in Product::ALL {
            let info = catalog.info(product);
            let stock = store.stock(product);
            let sold = stock.min(forecast.demand(product)) as i64;

            revenue += sold * info.selling_price;
            material_cost += sold * info.purchase_price;
        }
    }

    let holding_cost = ProductInfo::HOLDING_COST * inventory.total_units() as i64;

    let redistribution_cost = transfers.iter().map(Transfer::total_cost).sum();

    ProfitBreakdown {
        revenue,
        material_cost,
        redistribution_cost,
        holding_cost,
        profit: revenue - material_cost - redistribution_cost - holding_cost,
    }
}
