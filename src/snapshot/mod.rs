pub mod error;
pub mod snapshot_model;
pub mod store;
