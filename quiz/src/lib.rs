//! Small systems of linear equations with integer solutions for quizzes,
//! and LaTeX rendering of the matrices involved.
//!
//! ```no_run
//! use quiz::{GeneratorConfig, VarInput, generate_with_thread_rng, tex};
//!
//! let input: VarInput = "x, y, z".parse().unwrap();
//! let system = generate_with_thread_rng(&input, &GeneratorConfig::default()).unwrap();
//! println!("{system}");
//! println!("{}", system.coefficients().to_tex());
//! println!("{}", tex::from_array(&tex::Array::from_vec(vec![1, 2, 3]), "pmatrix").unwrap());
//! ```

// It would be nicer to import the symbol_table crate ourselves,
// and re-export GlobalSymbol, but we don't want to run into
// version conflicts.
pub use egg::Symbol;

pub mod equation;
pub mod error;
pub mod generator;
pub mod linear_system;
pub mod matrix;
pub mod tex;
pub mod valuation;
pub mod vector;

pub use equation::{Equation, Notation};
pub use error::{Error, Result};
pub use generator::{
    GeneratorConfig, VarInput, generate, generate_with_thread_rng,
    integer_equations,
};
pub use linear_system::LinearSystem;
