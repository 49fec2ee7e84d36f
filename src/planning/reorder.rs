// src/planning/reorder.rs

use crate::model::product::Product;
use crate::model::store::Inventory;
use crate::planning::forecast::DemandForecast;
use std::collections::BTreeMap;

/// Supplier order quantities by store, then product.
///
/// Only positive quantities appear; a store needing nothing is absent.
pub type ReorderRecommendation = BTreeMap<String, BTreeMap<Product, u32>>;

/// Orders whatever each store is short of the full product forecast.
pub fn reorder_recommendation(
    inventory: &Inventory,
    forecast: &DemandForecast,
) -> ReorderRecommendation {
    let mut recommendation = ReorderRecommendation::new();

    for store in inventory.stores() {
        let lines: BTreeMap<Product, u32> = Product::ALL
            .iter()
            .map(|&p| (p, forecast.demand(p).saturating_sub(store.stock(p))))
            .filter(|&(_, qty)| qty > 0)
            .collect();

        if !lines.is_empty() {
            recommendation.insert(store.id.clone(), lines);
        }
    }

    recommendation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::Store;

    fn store(id: &str, milk: i64, eggs: i64, bread: i64) -> Store {
        Store::new(id)
            .with_product(Product::Milk, milk, 100)
            .and_then(|s| s.with_product(Product::Eggs, eggs, 100))
            .and_then(|s| s.with_product(Product::Bread, bread, 100))
            .unwrap()
    }

    #[test]
    fn test_single_store_short_on_milk() {
        let inventory = Inventory::new(vec![store("Store A", 10, 0, 0)]).unwrap();
        let forecast = DemandForecast::new().with_demand(Product::Milk, 20);

        let recommendation = reorder_recommendation(&inventory, &forecast);

        let mut expected = ReorderRecommendation::new();
        expected.insert("Store A".to_string(), BTreeMap::from([(Product::Milk, 10)]));
        assert_eq!(recommendation, expected);
    }

    #[test]
    fn test_stocked_stores_are_omitted() {
        let inventory =
            Inventory::new(vec![store("A", 30, 30, 30), store("B", 5, 40, 12)]).unwrap();
        let forecast = DemandForecast::new()
            .with_demand(Product::Milk, 20)
            .with_demand(Product::Eggs, 25)
            .with_demand(Product::Bread, 12);

        let recommendation = reorder_recommendation(&inventory, &forecast);

        assert!(!recommendation.contains_key("A"));
        let b = &recommendation["B"];
        assert_eq!(b.get(&Product::Milk), Some(&15));
        assert_eq!(b.get(&Product::Eggs), None);
        assert_eq!(b.get(&Product::Bread), None);
    }
}
