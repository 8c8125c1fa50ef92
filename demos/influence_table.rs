use movingload::InfluenceLines;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lines = InfluenceLines::for_span(12.0, 13)?;

    println!("   p     R_A    R_B   V_mid  M_mid");
    for [position, reaction_a, reaction_b, shear, moment] in lines.rows() {
        println!("{position:5.1} {reaction_a:6.3} {reaction_b:6.3} {shear:7.3} {moment:6.3}");
    }

    Ok(())
}
