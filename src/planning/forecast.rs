// src/planning/forecast.rs

use crate::error::RebalanceError;
use crate::model::product::Product;
use crate::planning::config::PlanningConfig;
use crate::strategy::traits::NoiseSource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Weekday {
    type Err = RebalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Weekday::Monday,
            "tuesday" | "tue" => Weekday::Tuesday,
            "wednesday" | "wed" => Weekday::Wednesday,
            "thursday" | "thu" => Weekday::Thursday,
            "friday" | "fri" => Weekday::Friday,
            "saturday" | "sat" => Weekday::Saturday,
            "sunday" | "sun" => Weekday::Sunday,
            _ => return Err(RebalanceError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

/// Forecast demand per product for one planning cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemandForecast {
    demand: BTreeMap<Product, u32>,
}

impl DemandForecast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demand(mut self, product: Product, quantity: u32) -> Self {
        self.demand.insert(product, quantity);
        self
    }

    /// Forecast for `product`; products never forecast count as zero demand.
    pub fn demand(&self, product: Product) -> u32 {
        self.demand.get(&product).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Product, u32)> + '_ {
        self.demand.iter().map(|(&p, &q)| (p, q))
    }
}

/// Turns a temperature and weekday into a per-product demand forecast.
///
/// Each product starts from its catalog base demand. Milk follows the
/// temperature, Eggs and Bread pick up at the weekend, and every product
/// gets an independent noise draw. The sum never goes below zero.
#[derive(Debug)]
pub struct DemandForecaster {
    noise: Box<dyn NoiseSource>,
}

impl DemandForecaster {
    pub fn new(noise: Box<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    pub fn forecast(
        &mut self,
        config: &PlanningConfig,
        temperature: f64,
        weekday: Weekday,
    ) -> DemandForecast {
        let mut forecast = DemandForecast::new();

        for product in Product::ALL {
            let base = config.catalog.info(product).base_demand as i64;
            let weather = weather_adjustment(config, product, temperature);
            let calendar = weekday_adjustment(config, product, weekday);
            let noise = self.noise.draw(
                product,
                config.forecast.noise_min,
                config.forecast.noise_max,
            ) as i64;

            let raw = base + weather + calendar + noise;
            let quantity = u32::try_from(raw.max(0)).unwrap_or(u32::MAX);
            debug!(%product, base, weather, calendar, noise, quantity, "Forecast");

            forecast = forecast.with_demand(product, quantity);
        }

        forecast
    }
}

fn weather_adjustment(config: &PlanningConfig, product: Product, temperature: f64) -> i64 {
    if product != Product::Milk {
        return 0;
    }
    if temperature >= config.forecast.hot_threshold {
        config.forecast.hot_milk_boost
    } else if temperature <= config.forecast.cold_threshold {
        -config.forecast.cold_milk_drop
    } else {
        0
    }
}

fn weekday_adjustment(config: &PlanningConfig, product: Product, weekday: Weekday) -> i64 {
    if !weekday.is_weekend() {
        return 0;
    }
    match product {
        Product::Eggs => config.forecast.weekend_eggs_boost,
        Product::Bread => config.forecast.weekend_bread_boost,
        Product::Milk => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::{Catalog, ProductInfo};
    use crate::strategy::implementations::{FixedNoise, UniformNoise, ZeroNoise};

    fn zero_forecaster() -> DemandForecaster {
        DemandForecaster::new(Box::new(ZeroNoise))
    }

    #[test]
    fn test_weekday_parsing() {
        assert_eq!("Saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!(matches!(
            "Funday".parse::<Weekday>(),
            Err(RebalanceError::UnknownWeekday(_))
        ));
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }

    #[test]
    fn test_mild_weekday_is_base_demand() {
        let config = PlanningConfig::default();
        let forecast = zero_forecaster().forecast(&config, 22.0, Weekday::Wednesday);
        for product in Product::ALL {
            assert_eq!(
                forecast.demand(product),
                config.catalog.info(product).base_demand
            );
        }
    }

    #[test]
    fn test_temperature_thresholds_only_touch_milk() {
        let config = PlanningConfig::default();
        let mut forecaster = zero_forecaster();

        let hot = forecaster.forecast(&config, 30.0, Weekday::Monday);
        assert_eq!(hot.demand(Product::Milk), 37);
        assert_eq!(hot.demand(Product::Eggs), 24);

        let cold = forecaster.forecast(&config, 15.0, Weekday::Monday);
        assert_eq!(cold.demand(Product::Milk), 25);
        assert_eq!(cold.demand(Product::Bread), 20);

        let between = forecaster.forecast(&config, 29.9, Weekday::Monday);
        assert_eq!(between.demand(Product::Milk), 30);
    }

    #[test]
    fn test_weekend_boosts_eggs_and_bread() {
        let config = PlanningConfig::default();
        let forecast = zero_forecaster().forecast(&config, 20.0, Weekday::Saturday);
        assert_eq!(forecast.demand(Product::Milk), 30);
        assert_eq!(forecast.demand(Product::Eggs), 29);
        assert_eq!(forecast.demand(Product::Bread), 30);
    }

    #[test]
    fn test_noise_is_added_per_product() {
        let config = PlanningConfig::default();
        let noise = FixedNoise::new()
            .with_offset(Product::Milk, 3)
            .with_offset(Product::Bread, -4);
        let forecast =
            DemandForecaster::new(Box::new(noise)).forecast(&config, 20.0, Weekday::Tuesday);
        assert_eq!(forecast.demand(Product::Milk), 33);
        assert_eq!(forecast.demand(Product::Eggs), 24);
        assert_eq!(forecast.demand(Product::Bread), 16);
    }

    #[test]
    fn test_forecast_clamps_at_zero() {
        let mut config = PlanningConfig::default();
        config.catalog = Catalog::default().with_entry(Product::Milk, ProductInfo::new(60, 45, 2));
        let noise = FixedNoise::new().with_offset(Product::Milk, -5);
        let forecast =
            DemandForecaster::new(Box::new(noise)).forecast(&config, 0.0, Weekday::Monday);
        assert_eq!(forecast.demand(Product::Milk), 0);
    }

    #[test]
    fn test_random_forecasts_stay_within_bounds() {
        let mut config = PlanningConfig::default();
        config.catalog = Catalog::new(
            ProductInfo::new(1, 1, 3),
            ProductInfo::new(1, 1, 0),
            ProductInfo::new(1, 1, 40),
        );
        let mut forecaster = DemandForecaster::new(Box::new(UniformNoise::seeded(99)));

        for i in 0..500 {
            let temperature = -10.0 + (i % 50) as f64;
            let forecast = forecaster.forecast(&config, temperature, Weekday::Sunday);
            // Bread: 40 + 10 weekend, noise within +/-5.
            let bread = forecast.demand(Product::Bread);
            assert!((45..=55).contains(&bread));
            // Eggs base 0 + 5 weekend, noise within +/-5.
            assert!(forecast.demand(Product::Eggs) <= 10);
            assert!(forecast.demand(Product::Milk) <= 15);
        }
    }
}
