//! Chart metrics
//!
//! - `ohang`: weighted five-element aggregation and normalization
//! - `classifier`: strongest / weakest element

pub mod ohang;
pub mod classifier;

// Re-export metric functions
pub use ohang::{calculate_ohang, fallback_distribution, DistributionSource, OhangDistribution, OhangResult};
pub use classifier::{classify, Classification};
