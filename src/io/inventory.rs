// src/io/inventory.rs

use crate::error::{RebalanceError, Result};
use crate::model::product::Product;
use crate::model::store::{Inventory, Store};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One line of an inventory file: `store,product,stock,capacity`.
///
/// Quantities are read as text so that malformed numbers surface as an
/// inventory error rather than a CSV one.
#[derive(Debug, Deserialize)]
struct InventoryRow {
    store: String,
    product: String,
    stock: String,
    capacity: String,
}

/// Loads an inventory snapshot from a CSV file.
pub fn load_inventory(file_path: &str) -> Result<Inventory> {
    let reader = csv::Reader::from_path(Path::new(file_path))?;
    read_rows(reader)
}

/// Same as [`load_inventory`] but from any reader.
pub fn read_inventory<R: Read>(source: R) -> Result<Inventory> {
    read_rows(csv::Reader::from_reader(source))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Inventory> {
    // Stores keep the order they first appear in.
    let mut stores: Vec<Store> = Vec::new();
    let mut seen: Vec<(String, Product)> = Vec::new();

    for row in reader.deserialize() {
        let row: InventoryRow = row?;
        let product: Product = row.product.parse()?;
        let store_id = row.store.trim().to_string();

        if seen.iter().any(|(s, p)| *s == store_id && *p == product) {
            return Err(RebalanceError::InvalidInventoryState(format!(
                "duplicate row for {} {}",
                store_id, product
            )));
        }
        seen.push((store_id.clone(), product));

        let stock = parse_quantity(&store_id, "stock", &row.stock)?;
        let capacity = parse_quantity(&store_id, "capacity", &row.capacity)?;

        match stores.iter().position(|s| s.id == store_id) {
            Some(idx) => {
                let store = stores.remove(idx);
                stores.insert(idx, store.with_product(product, stock, capacity)?);
            }
            None => stores.push(Store::new(store_id).with_product(product, stock, capacity)?),
        }
    }

    Inventory::new(stores)
}

fn parse_quantity(store: &str, field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        RebalanceError::InvalidInventoryState(format!(
            "{} {} is not an integer: {:?}",
            store, field, raw
        ))
    })
}
