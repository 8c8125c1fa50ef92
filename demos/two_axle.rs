use movingload::{EngineConfig, EnvelopeEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 10 m span crossed by two 40 kN axles, 3 m apart
    let engine = EnvelopeEngine::with_config(EngineConfig::with_resolution(1000));
    let sweep = engine.sweep(10.0, 40.0, 40.0, 3.0)?;

    // Governing values over every placement
    let envelope = sweep.envelope();
    println!(
        "Max reaction at A: {:.2} kN with W1 at {:.2} m",
        envelope.max_reaction_a, envelope.max_reaction_a_position
    );
    println!(
        "Max bending moment: {:.2} kN·m at {:.2} m with W1 at {:.2} m",
        envelope.max_moment, envelope.max_moment_position, envelope.max_moment_reference_position
    );

    // Shear and moment along the beam for the governing placement
    let row = sweep.grid().nearest_index(envelope.max_moment_reference_position);
    let placement = sweep.placement(row);
    for point in [0.0, 2.5, 5.0, 7.5, 10.0] {
        println!(
            "  z = {point:>4.1} m: V = {:+7.2} kN, M = {:7.2} kN·m",
            placement.shear_at(point),
            placement.moment_at(point)
        );
    }

    Ok(())
}
