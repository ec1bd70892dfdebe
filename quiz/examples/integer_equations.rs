use quiz::{GeneratorConfig, Notation, VarInput, generate, tex};
use rand::{SeedableRng as _, rngs::StdRng};

// Generates a 3×3 system in extensive notation, like a worksheet for kids who
// only know addition, and prints it together with its matrix form.
fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let input = VarInput::from(["x", "y", "z"]);
    let cfg = GeneratorConfig {
        var_range: 1..=4,
        coef_range: -1..=3,
        notation: Notation::Extensive,
        ..GeneratorConfig::default()
    };

    let system = match generate(&input, &cfg, &mut rng) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    println!("System of equations:");
    println!("{system}");

    println!("\nCompact:");
    for e in system.render(Notation::Compact) {
        println!("{e}");
    }

    println!("\nMatrix form:");
    println!(
        "{}{}={}",
        tex::underbrace(system.coefficients().to_tex(), tex::bold("A")),
        tex::underbrace(system.unknowns().to_tex(), tex::bold("x")),
        tex::underbrace(system.constants().to_tex(), tex::bold("b")),
    );

    println!("\nSolution:");
    for (var, value) in system.values().iter() {
        println!("{var} = {value}");
    }
}
