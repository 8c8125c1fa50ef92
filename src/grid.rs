//! Uniform sampling of the span.

use ndarray::Array1;

use crate::errors::InputError;

/// Number of samples used when no resolution is configured.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Evenly spaced coordinates covering `[0, length]` with both ends included.
///
/// The engine uses one grid for two jobs: the reference positions of the
/// leading load and the observation points where shear and moment are read.
/// Because both roles share the same coordinates, load points can be matched
/// against observation points with exact equality.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionGrid {
    /// Sample coordinates in increasing order.
    coordinates: Array1<f64>,
}

impl PositionGrid {
    /// Build a grid of `resolution` samples over `[0, length]`.
    ///
    /// Sample `i` is `i * length / (resolution - 1)`; the last sample is set to
    /// `length` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ResolutionTooSmall`] when fewer than two samples
    /// are requested.
    ///
    /// # Examples
    /// ```
    /// use movingload::PositionGrid;
    ///
    /// let grid = PositionGrid::new(10.0, 5).expect("valid grid");
    /// assert_eq!(grid.coordinates().to_vec(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    /// ```
    pub fn new(length: f64, resolution: usize) -> Result<Self, InputError> {
        if resolution < 2 {
            return Err(InputError::ResolutionTooSmall { resolution });
        }
        let last = resolution - 1;
        let step = length / last as f64;
        let coordinates = Array1::from_shape_fn(resolution, |i| {
            if i == last {
                length
            } else {
                i as f64 * step
            }
        });
        Ok(Self { coordinates })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`; a grid holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate of sample `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds.
    #[must_use]
    pub fn at(&self, index: usize) -> f64 {
        self.coordinates[index]
    }

    /// All coordinates in increasing order.
    #[must_use]
    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    /// Iterate over the coordinates in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coordinates.iter().copied()
    }

    /// Index of the sample closest to `target`; the lower index wins a tie.
    #[must_use]
    pub fn nearest_index(&self, target: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, coordinate) in self.iter().enumerate() {
            let distance = (coordinate - target).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let grid = PositionGrid::new(7.3, 1000).expect("valid grid");
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.at(0), 0.0);
        assert_eq!(grid.at(999), 7.3);
    }

    #[test]
    fn spacing_is_uniform() {
        let grid = PositionGrid::new(3.0, 31).expect("valid grid");
        for index in 1..grid.len() {
            assert_relative_eq!(grid.at(index) - grid.at(index - 1), 0.1, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn single_sample_is_rejected() {
        let error = PositionGrid::new(1.0, 1).expect_err("too coarse");
        assert_eq!(error, InputError::ResolutionTooSmall { resolution: 1 });
    }

    #[test]
    fn nearest_index_prefers_lower_sample_on_tie() {
        let grid = PositionGrid::new(10.0, 4).expect("valid grid");
        // Samples sit at 0, 3.33, 6.67, 10; midspan is not a sample.
        assert_eq!(grid.nearest_index(5.0), 1);
        let even = PositionGrid::new(10.0, 3).expect("valid grid");
        assert_eq!(even.nearest_index(5.0), 1);
        assert_eq!(even.nearest_index(2.5), 0);
    }
}
