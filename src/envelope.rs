//! The envelope sweep: every placement of the load pair against every
//! observation point, reduced to governing maxima.
//!
//! The default path never holds the full response field. Each placement is
//! scanned on its own and only its row extremes are kept, so memory stays
//! linear in the resolution while time is quadratic.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::errors::{AnalysisError, InputError};
use crate::grid::PositionGrid;
use crate::model::{Beam, LoadPair};
use crate::reactions::{reaction_samples, ReactionSample};
use crate::response::{Placement, ResponseField};

/// The largest entry found by a scan and where it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extreme {
    /// Grid index of the entry.
    pub index: usize,
    /// Value of the entry, with its sign.
    pub value: f64,
}

impl Extreme {
    /// Placeholder for a scan that saw no entries.
    const EMPTY: Self = Self {
        index: 0,
        value: f64::NAN,
    };

    /// First entry with the largest `key(value)`.
    ///
    /// Later entries only replace the current best when strictly larger, so
    /// ties go to the lowest index. An empty input yields index 0 and NaN; a
    /// grid row always has at least two entries.
    fn scan(values: impl IntoIterator<Item = f64>, key: fn(f64) -> f64) -> Self {
        let mut best = Self::EMPTY;
        for (index, value) in values.into_iter().enumerate() {
            if index == 0 || key(value) > key(best.value) {
                best = Self { index, value };
            }
        }
        best
    }
}

/// Signed ordering key.
fn signed(value: f64) -> f64 {
    value
}

/// Per-placement maxima folded into the envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowExtremes {
    /// Observation point with the largest absolute shear.
    pub shear: Extreme,
    /// Observation point with the largest signed moment.
    pub moment: Extreme,
}

impl RowExtremes {
    /// Reduce one row of shear and moment values.
    #[must_use]
    pub fn from_values(
        shear: impl IntoIterator<Item = f64>,
        moment: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            shear: Extreme::scan(shear, f64::abs),
            moment: Extreme::scan(moment, signed),
        }
    }
}

/// Running envelope over rows visited in reference order.
#[derive(Debug, Default)]
struct Fold {
    /// Governing shear as (reference index, extreme).
    shear: Option<(usize, Extreme)>,
    /// Governing moment as (reference index, extreme).
    moment: Option<(usize, Extreme)>,
}

impl Fold {
    /// Take in the extremes of row `reference`; earlier rows win ties.
    fn push(&mut self, reference: usize, row: RowExtremes) {
        match self.shear {
            Some((_, best)) if row.shear.value.abs() <= best.value.abs() => {}
            _ => self.shear = Some((reference, row.shear)),
        }
        match self.moment {
            Some((_, best)) if row.moment.value <= best.value => {}
            _ => self.moment = Some((reference, row.moment)),
        }
    }
}

/// Governing response quantities of one analysis.
///
/// Positions are coordinates along the span. A "reference position" is where
/// the leading load sat when the value occurred. The serialized field names
/// follow the usual hand-calculation labels (`max_SF`, `max_BM`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeResult {
    /// Largest reaction at support A.
    #[serde(rename = "max_reaction_A")]
    pub max_reaction_a: f64,
    /// Reference position producing [`Self::max_reaction_a`].
    #[serde(rename = "max_reaction_A_position")]
    pub max_reaction_a_position: f64,
    /// Largest reaction at support B.
    #[serde(rename = "max_reaction_B")]
    pub max_reaction_b: f64,
    /// Reference position producing [`Self::max_reaction_b`].
    #[serde(rename = "max_reaction_B_position")]
    pub max_reaction_b_position: f64,
    /// Moment at coordinate 0 with the leading load at coordinate 0.
    #[serde(rename = "BM_at_zero_ref")]
    pub moment_at_zero_reference: f64,
    /// Shear at the sample nearest mid-span with the leading load at
    /// coordinate 0.
    #[serde(rename = "SF_at_midspan_zero_ref")]
    pub shear_at_midspan_zero_reference: f64,
    /// Shear force with the largest magnitude, sign preserved.
    #[serde(rename = "max_SF")]
    pub max_shear: f64,
    /// Observation point of [`Self::max_shear`].
    #[serde(rename = "max_SF_position")]
    pub max_shear_position: f64,
    /// Reference position producing [`Self::max_shear`].
    #[serde(rename = "max_SF_reference_position")]
    pub max_shear_reference_position: f64,
    /// Largest signed bending moment.
    #[serde(rename = "max_BM")]
    pub max_moment: f64,
    /// Observation point of [`Self::max_moment`].
    #[serde(rename = "max_BM_position")]
    pub max_moment_position: f64,
    /// Reference position producing [`Self::max_moment`].
    #[serde(rename = "max_BM_reference_position")]
    pub max_moment_reference_position: f64,
    /// Number of grid samples the envelope was computed with.
    pub resolution: usize,
}

/// A validated problem laid out on its grid, ready to sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    /// The beam being crossed.
    beam: Beam,
    /// The moving load pair.
    loads: LoadPair,
    /// Shared grid of reference positions and observation points.
    grid: PositionGrid,
}

impl Sweep {
    /// Lay `loads` on `beam` over a grid of `resolution` samples.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ResolutionTooSmall`] when `resolution < 2`.
    pub fn new(beam: Beam, loads: LoadPair, resolution: usize) -> Result<Self, InputError> {
        let grid = PositionGrid::new(beam.length(), resolution)?;
        Ok(Self { beam, loads, grid })
    }

    /// The beam being crossed.
    #[must_use]
    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    /// The moving load pair.
    #[must_use]
    pub fn loads(&self) -> &LoadPair {
        &self.loads
    }

    /// The shared grid.
    #[must_use]
    pub fn grid(&self) -> &PositionGrid {
        &self.grid
    }

    /// The load pair with its leading load at grid sample `row`.
    #[must_use]
    pub fn placement(&self, row: usize) -> Placement {
        Placement::new(&self.beam, &self.loads, self.grid.at(row))
    }

    /// Reactions for every reference position, in grid order.
    #[must_use]
    pub fn reaction_samples(&self) -> Vec<ReactionSample> {
        reaction_samples(&self.beam, &self.loads, &self.grid)
    }

    /// Row extremes for the leading load at grid sample `row`.
    #[must_use]
    pub fn row_extremes(&self, row: usize) -> RowExtremes {
        let placement = self.placement(row);
        RowExtremes::from_values(
            self.grid.iter().map(|point| placement.shear_at(point)),
            self.grid.iter().map(|point| placement.moment_at(point)),
        )
    }

    /// Build the full shear and moment tables.
    ///
    /// Memory grows with the square of the resolution; [`Sweep::envelope`]
    /// gives the same maxima without it.
    #[must_use]
    pub fn response_field(&self) -> ResponseField {
        ResponseField::compute(&self.beam, &self.loads, &self.grid)
    }

    /// Compute the envelope row by row without storing the field.
    #[must_use]
    pub fn envelope(&self) -> EnvelopeResult {
        debug!(
            "sweeping {} placements of W1 = {}, W2 = {}, x = {} over L = {}",
            self.grid.len(),
            self.loads.leading(),
            self.loads.trailing(),
            self.loads.spacing(),
            self.beam.length()
        );
        let rows = self.all_row_extremes();
        let origin = self.placement(0);
        let midspan = self.grid.nearest_index(self.beam.length() / 2.0);
        self.reduce(
            rows,
            origin.moment_at(self.grid.at(0)),
            origin.shear_at(self.grid.at(midspan)),
        )
    }

    /// Reduce a field produced by [`Sweep::response_field`].
    ///
    /// Uses the same row reduction and tie-breaking as [`Sweep::envelope`].
    ///
    /// # Panics
    ///
    /// Panics when `field` was built on a different grid.
    #[must_use]
    pub fn envelope_from_field(&self, field: &ResponseField) -> EnvelopeResult {
        assert_eq!(field.rows(), self.grid.len(), "field built on another grid");
        let rows = (0..field.rows()).map(|row| {
            RowExtremes::from_values(
                field.shear_row(row).iter().copied(),
                field.moment_row(row).iter().copied(),
            )
        });
        let midspan = self.grid.nearest_index(self.beam.length() / 2.0);
        self.reduce(
            rows,
            field.moment()[[0, 0]],
            field.shear()[[0, midspan]],
        )
    }

    /// Row extremes of every placement, in grid order.
    #[cfg(not(feature = "parallel"))]
    fn all_row_extremes(&self) -> Vec<RowExtremes> {
        (0..self.grid.len()).map(|row| self.row_extremes(row)).collect()
    }

    /// Row extremes of every placement, computed on the rayon pool.
    #[cfg(feature = "parallel")]
    fn all_row_extremes(&self) -> Vec<RowExtremes> {
        use rayon::prelude::*;

        // Collecting an indexed parallel iterator keeps rows in grid order.
        (0..self.grid.len())
            .into_par_iter()
            .map(|row| self.row_extremes(row))
            .collect()
    }

    /// Fold row extremes and reactions into the final result.
    fn reduce(
        &self,
        rows: impl IntoIterator<Item = RowExtremes>,
        moment_at_zero_reference: f64,
        shear_at_midspan_zero_reference: f64,
    ) -> EnvelopeResult {
        let reactions = self.reaction_samples();
        let max_a = Extreme::scan(reactions.iter().map(|sample| sample.at_a), signed);
        let max_b = Extreme::scan(reactions.iter().map(|sample| sample.at_b), signed);

        let mut fold = Fold::default();
        for (reference, row) in rows.into_iter().enumerate() {
            fold.push(reference, row);
        }
        let (shear_reference, shear) = fold.shear.unwrap_or((0, Extreme::EMPTY));
        let (moment_reference, moment) = fold.moment.unwrap_or((0, Extreme::EMPTY));

        let result = EnvelopeResult {
            max_reaction_a: max_a.value,
            max_reaction_a_position: self.grid.at(max_a.index),
            max_reaction_b: max_b.value,
            max_reaction_b_position: self.grid.at(max_b.index),
            moment_at_zero_reference,
            shear_at_midspan_zero_reference,
            max_shear: shear.value,
            max_shear_position: self.grid.at(shear.index),
            max_shear_reference_position: self.grid.at(shear_reference),
            max_moment: moment.value,
            max_moment_position: self.grid.at(moment.index),
            max_moment_reference_position: self.grid.at(moment_reference),
            resolution: self.grid.len(),
        };
        debug!(
            "envelope: max SF = {:.4} at {:.4} (W1 at {:.4}), max BM = {:.4} at {:.4} (W1 at {:.4})",
            result.max_shear,
            result.max_shear_position,
            result.max_shear_reference_position,
            result.max_moment,
            result.max_moment_position,
            result.max_moment_reference_position
        );
        result
    }
}

/// Entry point for envelope analyses.
///
/// # Examples
/// ```
/// use movingload::{EngineConfig, EnvelopeEngine};
///
/// let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(201));
/// let result = engine.analyze(10.0, 40.0, 40.0, 3.0).expect("valid inputs");
/// assert_eq!(result.max_reaction_a, 68.0);
/// assert!(result.max_moment <= 80.0 * 10.0 / 4.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvelopeEngine {
    /// Engine settings.
    config: EngineConfig,
}

impl EnvelopeEngine {
    /// An engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with explicit settings.
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the inputs and lay them out on the grid.
    ///
    /// Checks run in order: span, spacing, leading load, trailing load,
    /// resolution. Nothing is computed when any of them fails.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] naming the first failed check.
    pub fn sweep(
        &self,
        span: f64,
        leading: f64,
        trailing: f64,
        spacing: f64,
    ) -> Result<Sweep, AnalysisError> {
        let beam = Beam::new(span)?;
        let loads = LoadPair::new(&beam, leading, trailing, spacing)?;
        Ok(Sweep::new(beam, loads, self.config.resolution)?)
    }

    /// Compute the envelope of the load pair crossing the beam.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] when any input is out of range.
    pub fn analyze(
        &self,
        span: f64,
        leading: f64,
        trailing: f64,
        spacing: f64,
    ) -> Result<EnvelopeResult, AnalysisError> {
        Ok(self.sweep(span, leading, trailing, spacing)?.envelope())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn scan_keeps_first_of_equal_entries() {
        let best = Extreme::scan([1.0, -3.0, 3.0, 2.0], f64::abs);
        assert_eq!(best, Extreme { index: 1, value: -3.0 });
        let best = Extreme::scan([1.0, -3.0, 3.0, 2.0], signed);
        assert_eq!(best, Extreme { index: 2, value: 3.0 });
    }

    #[test]
    fn fold_prefers_earlier_rows_on_ties() {
        let row = RowExtremes::from_values([0.0, -5.0], [0.0, 7.0]);
        let mut fold = Fold::default();
        fold.push(0, RowExtremes::from_values([1.0, 2.0], [0.0, 1.0]));
        fold.push(1, row);
        fold.push(2, RowExtremes::from_values([5.0, 0.0], [7.0, 0.0]));
        assert_eq!(fold.shear, Some((1, Extreme { index: 1, value: -5.0 })));
        assert_eq!(fold.moment, Some((1, Extreme { index: 1, value: 7.0 })));
    }

    #[test]
    fn negative_shear_can_govern() {
        // Past the trailing load the shear is -Rb. On a unit grid the last
        // placement with a sample beyond the heavy trailing load governs.
        let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(11));
        let result = engine.analyze(10.0, 10.0, 50.0, 5.0).expect("valid inputs");
        assert!(result.max_shear < 0.0);
        assert_relative_eq!(result.max_shear, -49.0, epsilon = 1.0e-9);
        assert_relative_eq!(result.max_shear_position, 10.0);
        assert_relative_eq!(result.max_shear_reference_position, 4.0, epsilon = 1.0e-9);
    }

    #[test]
    fn diagnostics_read_first_placement() {
        let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(101));
        let result = engine.analyze(10.0, 40.0, 40.0, 3.0).expect("valid inputs");
        assert_eq!(result.moment_at_zero_reference, 0.0);
        assert_relative_eq!(result.shear_at_midspan_zero_reference, -12.0, epsilon = 1.0e-9);
        assert_eq!(result.resolution, 101);
    }

    #[test]
    fn streamed_and_materialized_envelopes_agree() {
        let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(57));
        let sweep = engine.sweep(7.5, 12.0, 30.0, 2.2).expect("valid inputs");
        let field = sweep.response_field();
        assert_eq!(sweep.envelope(), sweep.envelope_from_field(&field));
    }

    #[test]
    fn resolution_is_validated_last() {
        let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(1));
        assert_eq!(
            engine.analyze(10.0, 1.0, 1.0, 1.0),
            Err(AnalysisError::InvalidInput(InputError::ResolutionTooSmall {
                resolution: 1
            }))
        );
        assert_eq!(
            engine.analyze(-1.0, 1.0, 1.0, 1.0),
            Err(AnalysisError::InvalidInput(InputError::NonPositiveSpan { span: -1.0 }))
        );
    }

    #[test]
    fn result_serializes_with_conventional_labels() {
        let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(21));
        let result = engine.analyze(10.0, 40.0, 40.0, 3.0).expect("valid inputs");
        let value = serde_json::to_value(result).expect("serializes");
        for key in [
            "max_reaction_A",
            "max_reaction_A_position",
            "max_reaction_B",
            "max_reaction_B_position",
            "BM_at_zero_ref",
            "SF_at_midspan_zero_ref",
            "max_SF",
            "max_SF_position",
            "max_SF_reference_position",
            "max_BM",
            "max_BM_position",
            "max_BM_reference_position",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        let back: EnvelopeResult = serde_json::from_value(value).expect("deserializes");
        assert_eq!(back, result);
    }
}
