// src/io/reporting.rs

use crate::error::Result;
use crate::model::product::Product;
use crate::model::transfer::Transfer;
use crate::planning::reorder::ReorderRecommendation;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Flat row for the reorder export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderLine {
    pub store: String,
    pub product: Product,
    pub quantity: u32,
}

/// Flattens a recommendation into one line per store/product.
pub fn reorder_lines(recommendation: &ReorderRecommendation) -> Vec<ReorderLine> {
    recommendation
        .iter()
        .flat_map(|(store, lines)| {
            lines.iter().map(move |(&product, &quantity)| ReorderLine {
                store: store.clone(),
                product,
                quantity,
            })
        })
        .collect()
}

/// Writes the planned transfers to a CSV file, in planning order.
pub fn write_transfers(file_path: &str, transfers: &[Transfer]) -> Result<()> {
    write_records(file_path, transfers)
}

/// Writes the reorder recommendation to a CSV file.
pub fn write_reorders(file_path: &str, recommendation: &ReorderRecommendation) -> Result<()> {
    write_records(file_path, &reorder_lines(recommendation))
}

fn write_records<T: Serialize>(file_path: &str, data: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = data.len(), file = file_path, "Exported");
    Ok(())
}
