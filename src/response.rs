//! Shear force and bending moment along the beam for a fixed placement.

use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::grid::PositionGrid;
use crate::model::{Beam, LoadPair};
use crate::reactions::ReactionSample;

/// The load pair frozen at one reference position.
///
/// Exact comparisons against the load coordinates are intentional: the
/// observation points and reference positions come out of the same
/// [`PositionGrid`], so a sample that coincides with a load compares equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Load magnitudes and spacing.
    loads: LoadPair,
    /// Reactions produced by this placement.
    reactions: ReactionSample,
}

impl Placement {
    /// Place the leading load at `reference`.
    ///
    /// # Examples
    /// ```
    /// use movingload::{Beam, LoadPair, Placement};
    ///
    /// let beam = Beam::new(8.0).expect("positive span");
    /// // With the spacing equal to the span the trailing load is off the beam.
    /// let loads = LoadPair::new(&beam, 10.0, 1.0, 8.0).expect("valid pair");
    /// let placement = Placement::new(&beam, &loads, 4.0);
    /// assert_eq!(placement.moment_at(4.0), 10.0 * 8.0 / 4.0);
    /// assert_eq!(placement.shear_at(3.0), 5.0);
    /// assert_eq!(placement.shear_at(5.0), -5.0);
    /// ```
    #[must_use]
    pub fn new(beam: &Beam, loads: &LoadPair, reference: f64) -> Self {
        Self {
            loads: *loads,
            reactions: ReactionSample::at(beam, loads, reference),
        }
    }

    /// Coordinate of the leading load.
    #[must_use]
    pub fn reference(&self) -> f64 {
        self.reactions.reference
    }

    /// Reactions for this placement.
    #[must_use]
    pub fn reactions(&self) -> &ReactionSample {
        &self.reactions
    }

    /// Shear force at `point`.
    ///
    /// Exactly at a load the average of the left and right limits is reported.
    #[must_use]
    pub fn shear_at(&self, point: f64) -> f64 {
        let reference = self.reactions.reference;
        let trailing = self.loads.trailing_position(reference);
        let on_span = self.reactions.trailing_on_span;
        let ra = self.reactions.at_a;
        let w1 = self.loads.leading();
        let w2 = self.loads.trailing();

        if point < reference {
            ra
        } else if point == reference {
            ra - w1 / 2.0
        } else if on_span && point < trailing {
            ra - w1
        } else if on_span && point == trailing {
            ra - w1 - w2 / 2.0
        } else if on_span && point > trailing {
            ra - w1 - w2
        } else {
            ra - w1
        }
    }

    /// Bending moment at `point`.
    ///
    /// Moment is continuous under a point load, so the load coordinates need
    /// no special case.
    #[must_use]
    pub fn moment_at(&self, point: f64) -> f64 {
        let reference = self.reactions.reference;
        let trailing = self.loads.trailing_position(reference);
        let on_span = self.reactions.trailing_on_span;
        let ra = self.reactions.at_a;
        let w1 = self.loads.leading();
        let w2 = self.loads.trailing();

        if point < reference {
            ra * point
        } else if on_span && point > reference && point < trailing {
            ra * point - w1 * (point - reference)
        } else if on_span && point > trailing {
            ra * point - w1 * (point - reference) - w2 * (point - trailing)
        } else {
            ra * point - w1 * (point - reference)
        }
    }
}

/// Dense shear and moment tables for every placement on a grid.
///
/// Row `i` belongs to the leading load at grid sample `i`; column `j` is the
/// observation point at grid sample `j`. This is the only structure whose size
/// grows with the square of the resolution, so the engine only builds it when
/// asked to.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseField {
    /// Shear force, indexed by (reference, observation).
    shear: Array2<f64>,
    /// Bending moment, indexed by (reference, observation).
    moment: Array2<f64>,
}

impl ResponseField {
    /// Evaluate every placement of `loads` against every point of `grid`.
    #[must_use]
    pub fn compute(beam: &Beam, loads: &LoadPair, grid: &PositionGrid) -> Self {
        let n = grid.len();
        debug!("materializing {n}x{n} response field");
        let mut shear = Array2::zeros((n, n));
        let mut moment = Array2::zeros((n, n));
        for (i, reference) in grid.iter().enumerate() {
            let placement = Placement::new(beam, loads, reference);
            for (j, point) in grid.iter().enumerate() {
                shear[[i, j]] = placement.shear_at(point);
                moment[[i, j]] = placement.moment_at(point);
            }
        }
        Self { shear, moment }
    }

    /// Shear force table.
    #[must_use]
    pub fn shear(&self) -> &Array2<f64> {
        &self.shear
    }

    /// Bending moment table.
    #[must_use]
    pub fn moment(&self) -> &Array2<f64> {
        &self.moment
    }

    /// Number of placements (rows).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.shear.nrows()
    }

    /// Shear along the beam for placement `row`.
    #[must_use]
    pub fn shear_row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.shear.row(row)
    }

    /// Moment along the beam for placement `row`.
    #[must_use]
    pub fn moment_row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.moment.row(row)
    }
}
