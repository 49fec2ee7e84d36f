// src/model/store.rs

use crate::error::{RebalanceError, Result};
use crate::model::product::Product;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A single retail store: its on-hand stock and shelf capacity per product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: String,
    stock: BTreeMap<Product, u32>,
    capacity: BTreeMap<Product, u32>,
}

impl Store {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stock: BTreeMap::new(),
            capacity: BTreeMap::new(),
        }
    }

    /// Sets stock and capacity for one product.
    ///
    /// Values arrive signed from the outside world; negatives are rejected
    /// rather than clamped.
    pub fn with_product(mut self, product: Product, stock: i64, capacity: i64) -> Result<Self> {
        let stock = to_quantity(&self.id, product, "stock", stock)?;
        let capacity = to_quantity(&self.id, product, "capacity", capacity)?;
        self.stock.insert(product, stock);
        self.capacity.insert(product, capacity);
        Ok(self)
    }

    pub fn stock(&self, product: Product) -> u32 {
        self.stock.get(&product).copied().unwrap_or(0)
    }

    pub fn capacity(&self, product: Product) -> u32 {
        self.capacity.get(&product).copied().unwrap_or(0)
    }

    /// Room left on the shelf. Zero when the store is already at or over capacity.
    pub fn available_space(&self, product: Product) -> u32 {
        self.capacity(product).saturating_sub(self.stock(product))
    }

    pub fn total_stock(&self) -> u64 {
        self.stock.values().map(|&q| q as u64).sum()
    }

    fn carries(&self, product: Product) -> bool {
        self.stock.contains_key(&product) && self.capacity.contains_key(&product)
    }

    pub(crate) fn add_stock(&mut self, product: Product, quantity: u32) {
        *self.stock.entry(product).or_insert(0) += quantity;
    }

    pub(crate) fn remove_stock(&mut self, product: Product, quantity: u32) {
        let current = self.stock.entry(product).or_insert(0);
        *current = current.saturating_sub(quantity);
    }
}

fn to_quantity(store: &str, product: Product, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        RebalanceError::InvalidInventoryState(format!(
            "{} {} for {} must be a non-negative integer, got {}",
            store, field, product, value
        ))
    })
}

/// The stock snapshot of every store, owned by the caller between runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    stores: Vec<Store>,
}

impl Inventory {
    /// Builds a validated inventory.
    ///
    /// Every store must carry stock and capacity for every product, and store
    /// ids must be unique. Store order is kept; the planner breaks ties by it.
    pub fn new(stores: Vec<Store>) -> Result<Self> {
        if stores.is_empty() {
            return Err(RebalanceError::InvalidInventoryState(
                "inventory has no stores".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for store in &stores {
            if !seen.insert(store.id.as_str()) {
                return Err(RebalanceError::InvalidInventoryState(format!(
                    "duplicate store id {}",
                    store.id
                )));
            }
            if let Some(missing) = Product::ALL.iter().find(|&&p| !store.carries(p)) {
                return Err(RebalanceError::InvalidInventoryState(format!(
                    "store {} has no stock/capacity entry for {}",
                    store.id, missing
                )));
            }
        }

        Ok(Self { stores })
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub(crate) fn stores_mut(&mut self) -> &mut [Store] {
        &mut self.stores
    }

    #[cfg(test)]
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Units of one product across all stores.
    pub fn total_stock(&self, product: Product) -> u64 {
        self.stores.iter().map(|s| s.stock(product) as u64).sum()
    }

    /// Units of every product across all stores.
    pub fn total_units(&self) -> u64 {
        self.stores.iter().map(Store::total_stock).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_store(id: &str, stock: i64, capacity: i64) -> Store {
        Store::new(id)
            .with_product(Product::Milk, stock, capacity)
            .and_then(|s| s.with_product(Product::Eggs, stock, capacity))
            .and_then(|s| s.with_product(Product::Bread, stock, capacity))
            .unwrap()
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let result = Store::new("A").with_product(Product::Milk, -1, 10);
        assert!(matches!(
            result,
            Err(RebalanceError::InvalidInventoryState(_))
        ));
    }

    #[test]
    fn test_negative_capacity_is_rejected() {
        let result = Store::new("A").with_product(Product::Milk, 1, -10);
        assert!(result.is_err());
    }

    #[test]
    fn test_inventory_requires_every_product() {
        let partial = Store::new("A").with_product(Product::Milk, 5, 10).unwrap();
        let result = Inventory::new(vec![partial]);
        assert!(matches!(
            result,
            Err(RebalanceError::InvalidInventoryState(_))
        ));
    }

    #[test]
    fn test_inventory_rejects_duplicates_and_empty() {
        assert!(Inventory::new(vec![]).is_err());
        let result = Inventory::new(vec![full_store("A", 1, 5), full_store("A", 2, 5)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_available_space_saturates_when_over_capacity() {
        let store = Store::new("A").with_product(Product::Milk, 40, 30).unwrap();
        assert_eq!(store.available_space(Product::Milk), 0);

        let store = Store::new("B").with_product(Product::Milk, 10, 30).unwrap();
        assert_eq!(store.available_space(Product::Milk), 20);
    }

    #[test]
    fn test_totals() {
        let inventory = Inventory::new(vec![full_store("A", 3, 10), full_store("B", 4, 10)]).unwrap();
        assert_eq!(inventory.total_stock(Product::Milk), 7);
        assert_eq!(inventory.total_units(), 21);
        assert_eq!(inventory.store("B").map(|s| s.stock(Product::Eggs)), Some(4));
        assert!(inventory.store("Z").is_none());
    }
}
