//! Error types produced while validating or analysing a moving-load problem.

use std::fmt;

use thiserror::Error;

/// Error returned when an envelope analysis cannot start.
///
/// Validation runs before anything is allocated, so an error means no part of
/// the sweep was computed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when one of the inputs violates its constraint.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Identifies one of the two loads in a [`LoadPair`](crate::LoadPair).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadLabel {
    /// The load at the lower coordinate (`W1`).
    Leading,
    /// The load `spacing` behind the leading one (`W2`).
    Trailing,
}

impl fmt::Display for LoadLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leading => f.write_str("leading load W1"),
            Self::Trailing => f.write_str("trailing load W2"),
        }
    }
}

/// The constraint an input value failed.
///
/// The variants carry the rejected value so callers can present actionable
/// feedback to users.
///
/// # Examples
///
/// ```
/// use movingload::{analyze, AnalysisError, InputError};
///
/// let error = analyze(0.0, 40.0, 40.0, 3.0).expect_err("zero span is rejected");
/// assert_eq!(
///     error,
///     AnalysisError::InvalidInput(InputError::NonPositiveSpan { span: 0.0 })
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the beam length is zero, negative or not finite.
    #[error("span L must be positive and finite (received {span})")]
    NonPositiveSpan {
        /// Rejected beam length.
        span: f64,
    },
    /// Returned when the load spacing lies outside `[0, L]`.
    #[error("spacing x must lie between 0 and {span} (received {spacing})")]
    SpacingOutOfRange {
        /// Rejected spacing between the two loads.
        spacing: f64,
        /// Beam length the spacing was checked against.
        span: f64,
    },
    /// Returned when a load magnitude is zero, negative or not finite.
    #[error("{load} must be positive and finite (received {magnitude})")]
    NonPositiveLoad {
        /// Which load was rejected.
        load: LoadLabel,
        /// Rejected magnitude.
        magnitude: f64,
    },
    /// Returned when a grid would have fewer than two samples.
    #[error("grid resolution must be at least 2 (received {resolution})")]
    ResolutionTooSmall {
        /// Rejected number of samples.
        resolution: usize,
    },
}
