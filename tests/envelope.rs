#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use movingload::{
    analyze, AnalysisError, Beam, EngineConfig, EnvelopeEngine, InputError, LoadLabel, LoadPair,
    Placement, Sweep,
};

#[derive(Debug, Clone, Copy)]
struct TwoAxleCase {
    span: f64,
    leading: f64,
    trailing: f64,
    spacing: f64,
}

impl Default for TwoAxleCase {
    fn default() -> Self {
        Self {
            span: 10.0,
            leading: 40.0,
            trailing: 40.0,
            spacing: 3.0,
        }
    }
}

impl TwoAxleCase {
    /// Closed-form envelope moment for two equal loads: the peak occurs under
    /// a load when mid-span bisects that load and the resultant.
    fn equal_load_peak_moment(&self) -> f64 {
        let total = self.leading + self.trailing;
        let lever = self.span / 2.0 - self.spacing / 4.0;
        total * lever * lever / self.span
    }
}

fn build_sweep(case: TwoAxleCase, resolution: usize) -> Sweep {
    EnvelopeEngine::with_config(EngineConfig::with_resolution(resolution))
        .sweep(case.span, case.leading, case.trailing, case.spacing)
        .expect("valid inputs")
}

#[test]
fn reactions_satisfy_equilibrium_at_every_placement() {
    let case = TwoAxleCase {
        span: 13.7,
        leading: 35.0,
        trailing: 52.5,
        spacing: 4.3,
    };
    let sweep = build_sweep(case, 1000);
    let samples = sweep.reaction_samples();
    assert_eq!(samples.len(), 1000);

    for sample in &samples {
        let expected = if sample.trailing_on_span {
            case.leading + case.trailing
        } else {
            case.leading
        };
        assert_relative_eq!(sample.total(), expected, max_relative = 1.0e-9);
    }
    assert!(samples.first().is_some_and(|sample| sample.trailing_on_span));
    assert!(samples.last().is_some_and(|sample| !sample.trailing_on_span));
}

#[test]
fn reactions_stay_within_total_load() {
    let case = TwoAxleCase::default();
    let total = case.leading + case.trailing;
    for sample in build_sweep(case, 1000).reaction_samples() {
        assert!(sample.at_a >= 0.0 && sample.at_a <= total + 1.0e-9);
        assert!(sample.at_b >= 0.0 && sample.at_b <= total + 1.0e-9);
    }
}

#[test]
fn single_load_reactions_peak_at_the_supports() {
    // With the spacing equal to the span the trailing load leaves as soon as
    // the pair starts moving, and its magnitude is negligible.
    let result = EnvelopeEngine::with_config(EngineConfig::with_resolution(401))
        .analyze(8.0, 50.0, 1.0e-9, 8.0)
        .expect("valid inputs");

    assert_relative_eq!(result.max_reaction_a, 50.0, epsilon = 1.0e-6);
    assert_relative_eq!(result.max_reaction_a_position, 0.0);
    assert_relative_eq!(result.max_reaction_b, 50.0, epsilon = 1.0e-6);
    assert_relative_eq!(result.max_reaction_b_position, 8.0);
}

#[test]
fn single_load_at_midspan_matches_closed_form() {
    let span = 6.0;
    let load = 12.0;
    let beam = Beam::new(span).expect("positive span");
    let loads = LoadPair::new(&beam, load, 1.0, span).expect("valid pair");
    let placement = Placement::new(&beam, &loads, span / 2.0);

    assert_relative_eq!(placement.moment_at(span / 2.0), load * span / 4.0);
    assert_relative_eq!(placement.shear_at(span / 2.0 - 1.0e-6), load / 2.0);
    assert_relative_eq!(placement.shear_at(span / 2.0 + 1.0e-6), -load / 2.0);
    // Exactly under the load the two limits are averaged.
    assert_relative_eq!(placement.shear_at(span / 2.0), 0.0);
}

#[test]
fn refining_nested_grids_never_lowers_peak_moment() {
    let case = TwoAxleCase::default();
    let analytic = case.equal_load_peak_moment();
    let mut previous = f64::NEG_INFINITY;

    // Each grid contains every sample of the one before it.
    for resolution in [11, 21, 41, 81, 161, 321] {
        let result = build_sweep(case, resolution).envelope();
        assert!(
            result.max_moment >= previous - 1.0e-9,
            "N = {resolution}: {} < {previous}",
            result.max_moment
        );
        assert!(result.max_moment <= analytic + 1.0e-9);
        previous = result.max_moment;
    }
    assert_relative_eq!(previous, analytic, epsilon = 1.0e-9);
}

#[test]
fn two_axle_scenario_matches_hand_calculation() {
    let case = TwoAxleCase::default();
    let result = analyze(case.span, case.leading, case.trailing, case.spacing)
        .expect("valid inputs");
    let total = case.leading + case.trailing;

    // Both loads on the span with the leading one over support A.
    assert_relative_eq!(result.max_reaction_a, 68.0, epsilon = 1.0e-12);
    assert_relative_eq!(result.max_reaction_a_position, 0.0);
    // Support B peaks when the trailing load arrives over it.
    assert!(result.max_reaction_b <= 68.0 + 1.0e-9);
    assert!(result.max_reaction_b > 67.9);
    assert!((result.max_reaction_b_position - 7.0).abs() < 0.02);

    assert_relative_eq!(result.moment_at_zero_reference, 0.0);
    assert_relative_eq!(result.shear_at_midspan_zero_reference, -12.0, epsilon = 1.0e-9);

    assert!(result.max_shear.abs() <= 68.0 + 1.0e-9);
    assert!(result.max_shear.abs() > 67.9);

    assert!((result.max_moment - case.equal_load_peak_moment()).abs() < 1.0e-2);
    assert!(result.max_moment <= total * case.span / 4.0);
    let reference = result.max_moment_reference_position;
    assert!(reference > 0.0 && reference < case.span);
    assert!((reference - 2.75).abs() < 0.02 || (reference - 4.25).abs() < 0.02);
    assert_eq!(result.resolution, 1000);
}

#[test]
fn materialized_field_reduces_to_streamed_envelope() {
    let sweep = build_sweep(
        TwoAxleCase {
            span: 9.0,
            leading: 20.0,
            trailing: 65.0,
            spacing: 2.5,
        },
        200,
    );
    let field = sweep.response_field();
    assert_eq!(field.shear().dim(), (200, 200));
    assert_eq!(sweep.envelope_from_field(&field), sweep.envelope());
}

#[test]
fn invalid_inputs_are_rejected_before_computation() {
    assert_eq!(
        analyze(0.0, 40.0, 40.0, 3.0),
        Err(AnalysisError::InvalidInput(InputError::NonPositiveSpan { span: 0.0 }))
    );
    assert_eq!(
        analyze(10.0, 40.0, 40.0, 11.0),
        Err(AnalysisError::InvalidInput(InputError::SpacingOutOfRange {
            spacing: 11.0,
            span: 10.0
        }))
    );
    assert_eq!(
        analyze(10.0, 0.0, 40.0, 3.0),
        Err(AnalysisError::InvalidInput(InputError::NonPositiveLoad {
            load: LoadLabel::Leading,
            magnitude: 0.0
        }))
    );
    assert!(analyze(10.0, 40.0, f64::NAN, 3.0).is_err());
}
