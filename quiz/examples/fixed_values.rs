use quiz::{integer_equations, tex};

// The values of the variables are fixed, only the coefficients are random.
fn main() {
    let system = match integer_equations([("a", 2), ("b", -1)], 1, 5, -3, 3, false) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    println!("{}", system.to_tex());
    println!("{}", system.coefficients().to_tex().environment("pmatrix"));
    println!("det = {}", system.determinant());

    // Arrays whose shape is only known at runtime go through `from_array`.
    let a = tex::Array::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    match tex::from_array(&a, tex::DEFAULT_ENVIRONMENT) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("{e}"),
    }
}
