//! Lambda Handlers Module
//!
//! # Functions
//! - `store` - Resolves a JSON array of names to a name → value object
//! - `consumer` - Invokes `store` with a fixed name list and logs the result

pub mod consumer;
pub mod store;

pub use consumer::{consumer_handler, fetch_parameters, ConsumerState};
pub use store::{serve, store_handler, StoreState};
