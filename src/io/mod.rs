pub mod inventory;
pub mod logging;
pub mod reporting;
pub mod weather;
