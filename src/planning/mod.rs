pub mod config;
pub mod engine;
pub mod forecast;
pub mod profit;
pub mod reorder;
pub mod transfers;
