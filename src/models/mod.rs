//! Parameter models shared by the cache, the remote client and the handlers.

pub mod name;
pub mod parameter;

// Re-export commonly used types
pub use name::ParameterName;
pub use parameter::{ParameterRecord, Parameters};

/// Names the consumer function asks the store function for.
pub const DEFAULT_PARAMETER_NAMES: [&str; 2] = ["DB_HOST", "DB_PORT"];
