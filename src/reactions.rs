//! Support reactions for each placement of the load pair.
//!
//! Every term is a unit-load reaction influence ordinate, `(L - p) / L` at
//! support A or `p / L` at support B, scaled by the load sitting at `p`. The
//! beam is linear so the two loads superpose.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::grid::PositionGrid;
use crate::model::{Beam, LoadPair};

/// Reactions at both supports for one reference position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactionSample {
    /// Coordinate of the leading load.
    pub reference: f64,
    /// Reaction at support A (coordinate 0).
    pub at_a: f64,
    /// Reaction at support B (coordinate `L`).
    pub at_b: f64,
    /// Whether the trailing load is still on the span.
    pub trailing_on_span: bool,
}

impl ReactionSample {
    /// Compute the reactions with the leading load at `reference`.
    ///
    /// # Examples
    /// ```
    /// use movingload::{Beam, LoadPair, ReactionSample};
    ///
    /// let beam = Beam::new(10.0).expect("positive span");
    /// let loads = LoadPair::new(&beam, 40.0, 40.0, 3.0).expect("valid pair");
    /// let sample = ReactionSample::at(&beam, &loads, 0.0);
    /// assert_eq!(sample.at_a, 68.0);
    /// assert_eq!(sample.at_b, 12.0);
    /// ```
    #[must_use]
    pub fn at(beam: &Beam, loads: &LoadPair, reference: f64) -> Self {
        let length = beam.length();
        let trailing = loads.trailing_position(reference);
        let trailing_on_span = beam.carries(trailing);

        // The whole pair has left the span. A grid over [0, L] never gets here.
        if !beam.carries(reference) {
            return Self {
                reference,
                at_a: 0.0,
                at_b: 0.0,
                trailing_on_span: false,
            };
        }

        let (at_a, at_b) = if trailing_on_span {
            (
                loads.leading() * (length - reference) / length
                    + loads.trailing() * (length - trailing) / length,
                loads.leading() * reference / length + loads.trailing() * trailing / length,
            )
        } else {
            (
                loads.leading() * (length - reference) / length,
                loads.leading() * reference / length,
            )
        };

        Self {
            reference,
            at_a,
            at_b,
            trailing_on_span,
        }
    }

    /// Total load the supports carry for this placement.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.at_a + self.at_b
    }
}

/// Reactions for every reference position of `grid`, in grid order.
#[must_use]
pub fn reaction_samples(beam: &Beam, loads: &LoadPair, grid: &PositionGrid) -> Vec<ReactionSample> {
    grid.iter()
        .map(|reference| {
            let sample = ReactionSample::at(beam, loads, reference);
            trace!(
                "reference {:.6}: Ra = {:.6}, Rb = {:.6}",
                reference,
                sample.at_a,
                sample.at_b
            );
            sample
        })
        .collect()
}
