use movingload::{EnvelopeResult, InfluenceLines, Scenario};
use std::fmt::Write;

/// Render a textual summary of an envelope analysis.
///
/// Values are printed with two decimals in whatever consistent units the
/// inputs were given in, the way hand calculations are usually laid out.
#[must_use]
pub fn render_summary(scenario: &Scenario, result: &EnvelopeResult) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Moving load analysis: L = {:.2}, W1 = {:.2}, W2 = {:.2}, x = {:.2} ({} grid points)",
        scenario.span,
        scenario.leading_load,
        scenario.trailing_load,
        scenario.spacing,
        result.resolution
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Maximum reaction at A: {:.2} (W1 at {:.2})",
        result.max_reaction_a, result.max_reaction_a_position
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Maximum reaction at B: {:.2} (W1 at {:.2})",
        result.max_reaction_b, result.max_reaction_b_position
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Bending moment at 0 with W1 at 0: {:.2}",
        result.moment_at_zero_reference
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Shear force near mid-span with W1 at 0: {:.2}",
        result.shear_at_midspan_zero_reference
    )
    .expect("writing to string cannot fail");

    // Shear keeps its sign; the magnitude is what governed.
    writeln!(
        &mut output,
        "Maximum shear force: {:+.2} at {:.2} (W1 at {:.2})",
        result.max_shear, result.max_shear_position, result.max_shear_reference_position
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Maximum bending moment: {:.2} at {:.2} (W1 at {:.2})",
        result.max_moment, result.max_moment_position, result.max_moment_reference_position
    )
    .expect("writing to string cannot fail");

    output
}

/// Render influence-line ordinates as an aligned table.
#[must_use]
pub fn render_influence_table(lines: &InfluenceLines) -> String {
    let mut output = String::new();
    writeln!(
        &mut output,
        "{:>10} {:>10} {:>10} {:>12} {:>12}",
        "position", "R_A", "R_B", "V_midspan", "M_midspan"
    )
    .expect("writing to string cannot fail");
    for [position, reaction_a, reaction_b, shear, moment] in lines.rows() {
        writeln!(
            &mut output,
            "{position:>10.4} {reaction_a:>10.4} {reaction_b:>10.4} {shear:>12.4} {moment:>12.4}"
        )
        .expect("writing to string cannot fail");
    }
    output
}
