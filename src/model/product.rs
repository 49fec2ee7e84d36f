// src/model/product.rs

use crate::error::RebalanceError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The perishable goods every store carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Product {
    Milk,
    Eggs,
    Bread,
}

impl Product {
    /// Catalog order. Planning and reporting iterate products in this order.
    pub const ALL: [Product; 3] = [Product::Milk, Product::Eggs, Product::Bread];

    fn index(self) -> usize {
        match self {
            Product::Milk => 0,
            Product::Eggs => 1,
            Product::Bread => 2,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Product {
    type Err = RebalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "milk" => Ok(Product::Milk),
            "eggs" => Ok(Product::Eggs),
            "bread" => Ok(Product::Bread),
            _ => Err(RebalanceError::UnknownProduct(s.to_string())),
        }
    }
}

/// Pricing and demand attributes of one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductInfo {
    pub selling_price: i64,
    pub purchase_price: i64,
    pub base_demand: u32,
}

impl ProductInfo {
    /// Cost of keeping one unit on the shelf for a planning cycle. The same
    /// for every product.
    pub const HOLDING_COST: i64 = 2;

    pub fn new(selling_price: i64, purchase_price: i64, base_demand: u32) -> Self {
        Self {
            selling_price,
            purchase_price,
            base_demand,
        }
    }
}

/// Static price list covering every [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: [ProductInfo; 3],
}

impl Catalog {
    pub fn new(milk: ProductInfo, eggs: ProductInfo, bread: ProductInfo) -> Self {
        Self {
            entries: [milk, eggs, bread],
        }
    }

    pub fn info(&self, product: Product) -> &ProductInfo {
        &self.entries[product.index()]
    }

    /// Replaces the entry for one product.
    #[cfg(test)]
    pub fn with_entry(mut self, product: Product, info: ProductInfo) -> Self {
        self.entries[product.index()] = info;
        self
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            ProductInfo::new(60, 45, 30), // Milk
            ProductInfo::new(90, 70, 24), // Eggs
            ProductInfo::new(40, 28, 20), // Bread
        )
    }
}
