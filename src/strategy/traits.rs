// src/strategy/traits.rs

use crate::model::product::Product;
use std::fmt::Debug;

/// Supplies the random noise term added to each product's forecast.
///
/// The forecaster owns one of these, so tests can swap the random source for
/// a deterministic one.
pub trait NoiseSource: Debug + Send {
    /// Draws one noise value for `product`, within `min..=max`.
    fn draw(&mut self, product: Product, min: i32, max: i32) -> i32;
}
