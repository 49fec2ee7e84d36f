// src/planning/config.rs

use crate::model::product::Catalog;
use crate::model::transfer::TransportCosts;

/// Adjustments the forecaster applies on top of base demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// At or above this temperature Milk demand rises by `hot_milk_boost`.
    pub hot_threshold: f64,
    pub hot_milk_boost: i64,
    /// At or below this temperature Milk demand drops by `cold_milk_drop`.
    pub cold_threshold: f64,
    pub cold_milk_drop: i64,
    pub weekend_eggs_boost: i64,
    pub weekend_bread_boost: i64,
    pub noise_min: i32,
    pub noise_max: i32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            hot_threshold: 30.0,
            hot_milk_boost: 7,
            cold_threshold: 15.0,
            cold_milk_drop: 5,
            weekend_eggs_boost: 5,
            weekend_bread_boost: 10,
            noise_min: -5,
            noise_max: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanningConfig {
    pub catalog: Catalog,
    pub transport: TransportCosts,
    pub forecast: ForecastConfig,
}
