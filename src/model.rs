//! Validated beam and load descriptions.

use crate::errors::{InputError, LoadLabel};

/// Returns `true` when `value` is a finite number strictly greater than zero.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A simply supported beam with pinned supports at `0` and `length`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beam {
    /// Span between the two supports.
    length: f64,
}

impl Beam {
    /// Create a beam of the given span.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositiveSpan`] when `length` is not a positive,
    /// finite number.
    ///
    /// # Examples
    /// ```
    /// use movingload::Beam;
    ///
    /// let beam = Beam::new(12.0).expect("positive span");
    /// assert_eq!(beam.length(), 12.0);
    /// assert!(Beam::new(-1.0).is_err());
    /// ```
    pub fn new(length: f64) -> Result<Self, InputError> {
        if !is_positive(length) {
            return Err(InputError::NonPositiveSpan { span: length });
        }
        Ok(Self { length })
    }

    /// Span between the supports.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Whether a load at `coordinate` sits between the supports.
    #[must_use]
    pub fn carries(&self, coordinate: f64) -> bool {
        (0.0..=self.length).contains(&coordinate)
    }
}

/// Two point loads travelling together at a fixed spacing.
///
/// The leading load `W1` sits at the reference position `y`; the trailing load
/// `W2` sits at `y + spacing`. Only `y` ever changes during a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadPair {
    /// Magnitude of the leading load.
    leading: f64,
    /// Magnitude of the trailing load.
    trailing: f64,
    /// Distance from the leading to the trailing load.
    spacing: f64,
}

impl LoadPair {
    /// Create a load pair that fits on `beam`.
    ///
    /// Checks run in a fixed order: spacing, then the leading load, then the
    /// trailing load.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SpacingOutOfRange`] when `spacing` lies outside
    /// `[0, beam.length()]` and [`InputError::NonPositiveLoad`] when either
    /// magnitude is not a positive, finite number.
    ///
    /// # Examples
    /// ```
    /// use movingload::{Beam, InputError, LoadLabel, LoadPair};
    ///
    /// let beam = Beam::new(10.0).expect("positive span");
    /// let pair = LoadPair::new(&beam, 40.0, 25.0, 3.0).expect("valid pair");
    /// assert_eq!(pair.total(), 65.0);
    ///
    /// let error = LoadPair::new(&beam, 40.0, 0.0, 3.0).expect_err("zero load");
    /// assert_eq!(
    ///     error,
    ///     InputError::NonPositiveLoad { load: LoadLabel::Trailing, magnitude: 0.0 }
    /// );
    /// ```
    pub fn new(beam: &Beam, leading: f64, trailing: f64, spacing: f64) -> Result<Self, InputError> {
        if !(spacing.is_finite() && (0.0..=beam.length()).contains(&spacing)) {
            return Err(InputError::SpacingOutOfRange {
                spacing,
                span: beam.length(),
            });
        }
        if !is_positive(leading) {
            return Err(InputError::NonPositiveLoad {
                load: LoadLabel::Leading,
                magnitude: leading,
            });
        }
        if !is_positive(trailing) {
            return Err(InputError::NonPositiveLoad {
                load: LoadLabel::Trailing,
                magnitude: trailing,
            });
        }
        Ok(Self {
            leading,
            trailing,
            spacing,
        })
    }

    /// Magnitude of the leading load `W1`.
    #[must_use]
    pub const fn leading(&self) -> f64 {
        self.leading
    }

    /// Magnitude of the trailing load `W2`.
    #[must_use]
    pub const fn trailing(&self) -> f64 {
        self.trailing
    }

    /// Distance between the two loads.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Combined magnitude `W1 + W2`.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.leading + self.trailing
    }

    /// Coordinate of the trailing load when the leading load is at `reference`.
    #[must_use]
    pub fn trailing_position(&self, reference: f64) -> f64 {
        reference + self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_span() {
        for span in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let error = Beam::new(span).expect_err("span rejected");
            assert!(matches!(error, InputError::NonPositiveSpan { .. }));
        }
    }

    #[test]
    fn spacing_is_checked_before_loads() {
        let beam = Beam::new(10.0).expect("positive span");
        let error = LoadPair::new(&beam, 0.0, 0.0, 11.0).expect_err("both invalid");
        assert_eq!(
            error,
            InputError::SpacingOutOfRange {
                spacing: 11.0,
                span: 10.0
            }
        );
    }

    #[test]
    fn spacing_limits_are_inclusive() {
        let beam = Beam::new(10.0).expect("positive span");
        assert!(LoadPair::new(&beam, 1.0, 1.0, 0.0).is_ok());
        assert!(LoadPair::new(&beam, 1.0, 1.0, 10.0).is_ok());
        assert!(LoadPair::new(&beam, 1.0, 1.0, -0.1).is_err());
    }

    #[test]
    fn leading_load_is_checked_first() {
        let beam = Beam::new(10.0).expect("positive span");
        let error = LoadPair::new(&beam, -1.0, 0.0, 2.0).expect_err("leading rejected");
        assert_eq!(
            error,
            InputError::NonPositiveLoad {
                load: LoadLabel::Leading,
                magnitude: -1.0
            }
        );
    }

    #[test]
    fn beam_carries_loads_between_supports() {
        let beam = Beam::new(5.0).expect("positive span");
        assert!(beam.carries(0.0));
        assert!(beam.carries(5.0));
        assert!(!beam.carries(5.000_001));
    }
}
