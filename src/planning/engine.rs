// src/planning/engine.rs

use crate::error::{RebalanceError, Result};
use crate::io::weather::{WeatherReading, WeatherSource};
use crate::model::store::Inventory;
use crate::model::transfer::Transfer;
use crate::planning::config::PlanningConfig;
use crate::planning::forecast::{DemandForecast, DemandForecaster, Weekday};
use crate::planning::profit::{calculate_profit, ProfitBreakdown};
use crate::planning::reorder::{reorder_recommendation, ReorderRecommendation};
use crate::planning::transfers::{assess_balance, plan_transfers, StoreBalance};
use crate::strategy::traits::NoiseSource;
use serde::Serialize;
use tracing::{info, info_span, warn};

/// Everything one planning run produces, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub weather: WeatherReading,
    pub weekday: Weekday,
    pub forecast: DemandForecast,
    /// Store status against the target, taken before any transfer.
    pub balance: Vec<StoreBalance>,
    pub transfers: Vec<Transfer>,
    pub profit: ProfitBreakdown,
    pub reorder: ReorderRecommendation,
}

/// Runs forecast -> transfers -> {profit, reorder} over a caller-owned inventory.
pub struct Rebalancer {
    config: PlanningConfig,
    forecaster: DemandForecaster,
}

impl Rebalancer {
    pub fn new(config: PlanningConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            config,
            forecaster: DemandForecaster::new(noise),
        }
    }

    /// Looks up the weather for `city` and runs the pipeline.
    ///
    /// A failed lookup aborts before anything is forecast or moved.
    pub fn run_for_city(
        &mut self,
        weather: &dyn WeatherSource,
        city: &str,
        weekday: Weekday,
        inventory: &mut Inventory,
    ) -> Result<RunReport> {
        let reading = weather.current(city).inspect_err(|e| {
            warn!(city, error = %e, "Weather lookup failed");
        })?;
        self.run(reading, weekday, inventory)
    }

    /// Runs one planning cycle. `inventory` is updated with the transfers.
    ///
    /// A reading without a finite temperature is rejected before forecasting.
    pub fn run(
        &mut self,
        weather: WeatherReading,
        weekday: Weekday,
        inventory: &mut Inventory,
    ) -> Result<RunReport> {
        if !weather.temperature.is_finite() {
            warn!(city = %weather.city, temperature = weather.temperature, "Unusable weather reading");
            return Err(RebalanceError::WeatherUnavailable { city: weather.city });
        }

        let span = info_span!("rebalance", city = %weather.city, %weekday);
        let _guard = span.enter();

        // =================================================================
        // PHASE 1: FORECAST
        // =================================================================
        let forecast = self
            .forecaster
            .forecast(&self.config, weather.temperature, weekday);

        // =================================================================
        // PHASE 2: REDISTRIBUTE (mutates the inventory)
        // =================================================================
        let balance = assess_balance(inventory, &forecast);
        let transfers = plan_transfers(inventory, &forecast, &self.config.transport);

        // =================================================================
        // PHASE 3: EVALUATE the post-transfer inventory
        // =================================================================
        let profit = calculate_profit(inventory, &forecast, &transfers, &self.config.catalog);
        let reorder = reorder_recommendation(inventory, &forecast);

        info!(
            temperature = weather.temperature,
            transfers = transfers.len(),
            profit = profit.profit,
            reorder_stores = reorder.len(),
            "Run complete"
        );

        Ok(RunReport {
            weather,
            weekday,
            forecast,
            balance,
            transfers,
            profit,
            reorder,
        })
    }
}
