// src/model/transfer.rs

use crate::model::product::Product;
use serde::Serialize;
use std::collections::BTreeMap;

/// One planned movement of stock between two stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub product: Product,
    pub quantity: u32,
    pub origin: String,
    pub destination: String,
    /// Transport cost per unit on this route.
    pub unit_cost: i64,
}

impl Transfer {
    pub fn total_cost(&self) -> i64 {
        self.quantity as i64 * self.unit_cost
    }
}

/// Per-unit transport cost for directed store pairs.
///
/// Routes are asymmetric: A -> B and B -> A are looked up independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCosts {
    routes: BTreeMap<(String, String), i64>,
    missing_route_cost: i64,
}

impl TransportCosts {
    /// Cost charged for a pair with no configured route.
    pub const MISSING_ROUTE_COST: i64 = 999;

    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
            missing_route_cost: Self::MISSING_ROUTE_COST,
        }
    }

    pub fn with_route(mut self, origin: &str, destination: &str, unit_cost: i64) -> Self {
        self.routes
            .insert((origin.to_string(), destination.to_string()), unit_cost);
        self
    }

    /// Looks up a route. A miss is not an error; it costs the sentinel.
    pub fn cost(&self, origin: &str, destination: &str) -> i64 {
        self.routes
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
            .unwrap_or(self.missing_route_cost)
    }
}

impl Default for TransportCosts {
    fn default() -> Self {
        Self::new()
            .with_route("Store A", "Store B", 5)
            .with_route("Store B", "Store A", 5)
            .with_route("Store A", "Store C", 8)
            .with_route("Store C", "Store A", 7)
            .with_route("Store B", "Store C", 4)
            .with_route("Store C", "Store B", 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_directional() {
        let costs = TransportCosts::new().with_route("A", "B", 3);
        assert_eq!(costs.cost("A", "B"), 3);
        assert_eq!(costs.cost("B", "A"), 999);
    }

    #[test]
    fn test_transfer_total_cost() {
        let transfer = Transfer {
            product: Product::Milk,
            quantity: 12,
            origin: "A".into(),
            destination: "B".into(),
            unit_cost: 4,
        };
        assert_eq!(transfer.total_cost(), 48);
    }
}
