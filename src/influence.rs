//! Closed-form influence lines for a simply supported beam.
//!
//! Each ordinate is the response to a unit load at position `p`. These depend
//! on the span alone and are independent of the envelope sweep; they are meant
//! for tabulating or plotting by the caller.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::grid::PositionGrid;
use crate::model::Beam;

/// Number of unit-load positions used when none is requested.
pub const DEFAULT_INFLUENCE_POINTS: usize = 100;

/// Unit-load ordinates for reactions and mid-span shear and moment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfluenceLines {
    /// Unit-load positions, uniformly spaced over `[0, L]`.
    pub positions: Vec<f64>,
    /// Reaction at support A: `(L - p) / L`.
    pub reaction_a: Vec<f64>,
    /// Reaction at support B: `p / L`.
    pub reaction_b: Vec<f64>,
    /// Shear just at mid-span: `-p / L` up to `L / 2`, `(L - p) / L` beyond.
    pub midspan_shear: Vec<f64>,
    /// Moment at mid-span: `p / 2` up to `L / 2`, `(L - p) / 2` beyond.
    pub midspan_moment: Vec<f64>,
}

impl InfluenceLines {
    /// Tabulate the influence lines of a beam of span `length` at `points`
    /// unit-load positions.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositiveSpan`] for a span that is not positive
    /// and finite, and [`InputError::ResolutionTooSmall`] when `points < 2`.
    ///
    /// # Examples
    /// ```
    /// use movingload::InfluenceLines;
    ///
    /// let lines = InfluenceLines::for_span(8.0, 3).expect("valid span");
    /// assert_eq!(lines.reaction_a, vec![1.0, 0.5, 0.0]);
    /// assert_eq!(lines.midspan_moment, vec![0.0, 2.0, 0.0]);
    /// ```
    pub fn for_span(length: f64, points: usize) -> Result<Self, InputError> {
        let beam = Beam::new(length)?;
        let grid = PositionGrid::new(beam.length(), points)?;
        let half = length / 2.0;
        let ordinates = |f: &dyn Fn(f64) -> f64| -> Vec<f64> { grid.iter().map(f).collect() };

        let positions = grid.iter().collect();
        let reaction_a = ordinates(&|p| (length - p) / length);
        let reaction_b = ordinates(&|p| p / length);
        let midspan_shear = ordinates(&|p| {
            if p <= half {
                -p / length
            } else {
                (length - p) / length
            }
        });
        let midspan_moment = ordinates(&|p| if p <= half { p / 2.0 } else { (length - p) / 2.0 });

        Ok(Self {
            positions,
            reaction_a,
            reaction_b,
            midspan_shear,
            midspan_moment,
        })
    }

    /// Number of tabulated positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; at least two positions are tabulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over rows of `(p, reaction A, reaction B, shear, moment)`.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 5]> + '_ {
        (0..self.len()).map(move |i| {
            [
                self.positions[i],
                self.reaction_a[i],
                self.reaction_b[i],
                self.midspan_shear[i],
                self.midspan_moment[i],
            ]
        })
    }
}
