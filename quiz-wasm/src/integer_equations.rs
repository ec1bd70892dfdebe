use quiz::{GeneratorConfig, VarInput, tex};
use wasm_bindgen::prelude::*;

use crate::Notation;

/// Everything the quiz page shows for one generated system.
#[wasm_bindgen(getter_with_clone)]
pub struct QuizTrace {
    /// The equations as plain strings, one per row.
    pub equations: js_sys::Array,

    /// The equations as a TeX `cases` block.
    pub system: String,

    /// The matrix form `Ax=b` in TeX.
    #[wasm_bindgen(js_name = "matrixForm")]
    pub matrix_form: String,

    /// The solution, e.g. `x=1, y=2`.
    pub solution: String,
}

/// Generates a system of integer equations.
///
/// `variables` is either a list of names (`"x y z"` or `"x, y, z"`) or a list
/// of fixed values (`"x=1, y=2"`).
#[wasm_bindgen(js_name = "integerEquations")]
pub fn integer_equations(
    variables: String,
    #[wasm_bindgen(js_name = "varMin")] var_min: i32,
    #[wasm_bindgen(js_name = "varMax")] var_max: i32,
    #[wasm_bindgen(js_name = "coefMin")] coef_min: i32,
    #[wasm_bindgen(js_name = "coefMax")] coef_max: i32,
    notation: Notation,
) -> Result<QuizTrace, String> {
    let input: VarInput = variables.parse().map_err(|e: quiz::Error| e.to_string())?;

    let cfg = GeneratorConfig {
        var_range: var_min.into()..=var_max.into(),
        coef_range: coef_min.into()..=coef_max.into(),
        notation: notation.to_rust(),
        ..Default::default()
    };

    let system = quiz::generate(&input, &cfg, &mut rand::rng())
        .map_err(|e| e.to_string())?;

    let equations = system
        .equations()
        .iter()
        .map(|e| JsValue::from_str(e))
        .collect();

    let matrix_form = format!(
        "{}{}={}",
        tex::underbrace(system.coefficients().to_tex(), tex::bold("A")),
        tex::underbrace(system.unknowns().to_tex(), tex::bold("x")),
        tex::underbrace(system.constants().to_tex(), tex::bold("b")),
    );

    let solution = system
        .values()
        .iter()
        .map(|(var, value)| format!("{var}={value}"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(QuizTrace {
        equations,
        system: system.to_tex().to_string(),
        matrix_form,
        solution,
    })
}
