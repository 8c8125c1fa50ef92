#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod config;
mod envelope;
mod errors;
mod grid;
mod influence;
mod model;
mod reactions;
mod response;

pub use config::{ConfigError, EngineConfig, Scenario};
pub use envelope::{EnvelopeEngine, EnvelopeResult, Extreme, RowExtremes, Sweep};
pub use errors::{AnalysisError, InputError, LoadLabel};
pub use grid::{PositionGrid, DEFAULT_RESOLUTION};
pub use influence::{InfluenceLines, DEFAULT_INFLUENCE_POINTS};
pub use model::{Beam, LoadPair};
pub use reactions::{reaction_samples, ReactionSample};
pub use response::{Placement, ResponseField};

/// Envelope of a load pair crossing a simply supported beam, on the default
/// grid of [`DEFAULT_RESOLUTION`] samples.
///
/// `span` is the beam length `L`, `leading` and `trailing` are the load
/// magnitudes `W1` and `W2`, and `spacing` is the distance `x` between them.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] when `span` is not positive, when
/// `spacing` lies outside `[0, span]` or when either load is not positive.
///
/// # Examples
/// ```
/// let result = movingload::analyze(10.0, 40.0, 40.0, 3.0).expect("valid inputs");
/// assert_eq!(result.max_reaction_a, 68.0);
/// assert!((result.max_moment - 144.5).abs() < 1.0e-2);
/// ```
pub fn analyze(
    span: f64,
    leading: f64,
    trailing: f64,
    spacing: f64,
) -> Result<EnvelopeResult, AnalysisError> {
    EnvelopeEngine::new().analyze(span, leading, trailing, spacing)
}
