//! Cache Module
//!
//! Read-through parameter cache living as long as one warm function instance.

mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::ParameterCache;

// == Fetch Failure Policy ==
/// What a read does when the remote fetch for its missing names fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Log the failure and return whatever was cached; failed names are absent
    #[default]
    Omit,
    /// Fail the whole read with the fetch error
    Abort,
}
