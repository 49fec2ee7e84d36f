pub mod product;
pub mod store;
pub mod transfer;
