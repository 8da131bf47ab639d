//! Error types raised while configuring the matcher.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while constructing a [`WeightedMatcher`](crate::WeightedMatcher).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// Provided category weights were unusable.
    #[error("category weights must be finite, non-negative, and sum to a positive value")]
    Invalid,
}
