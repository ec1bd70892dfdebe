use quiz::tex::{self, Array};
use wasm_bindgen::prelude::*;

/// Converts a matrix to TeX.
///
/// Each line of `matrix_string` is a row and the entries are separated by
/// whitespace. A single line is treated as a (column) vector.
#[wasm_bindgen(js_name = "matrixToTex")]
pub fn matrix_to_tex(
    #[wasm_bindgen(js_name = "matrixString")] matrix_string: String,
    environment: Option<String>,
) -> Result<String, String> {
    let array = parse_matrix(&matrix_string)?;
    let env = environment.as_deref().unwrap_or(tex::DEFAULT_ENVIRONMENT);
    tex::from_array(&array, env).map_err(|e| e.to_string())
}

/// Parses the rows of a matrix. Blank lines are skipped and every entry has
/// to be a finite number.
fn parse_matrix(s: &str) -> Result<Array<f64>, String> {
    let mut rows = Vec::new();
    for (i, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let row = line
            .split_ascii_whitespace()
            .map(|e| match e.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(format!(
                    "Entry '{e}' in row {} is not a finite number",
                    i + 1
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    match rows.len() {
        0 => Err("The matrix must have at least one row".into()),
        1 => Ok(Array::from_vec(rows.remove(0))),
        _ => Ok(Array::from_rows(rows)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_and_vectors() {
        assert_eq!(
            parse_matrix("1 2\n\n3 4\n").unwrap(),
            Array::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        );
        assert_eq!(
            parse_matrix("  1 -2.5 3 ").unwrap(),
            Array::from_vec(vec![1.0, -2.5, 3.0])
        );
        assert!(parse_matrix("\n  \n").is_err());
    }

    #[test]
    fn non_finite_entries() {
        for s in ["NaN 1", "1 inf", "-inf", "1\n1e400 2", "infinity", "x"] {
            assert!(parse_matrix(s).is_err(), "{s}");
        }
    }

    #[test]
    fn to_tex() {
        assert_eq!(
            matrix_to_tex("1 2\n3 4".into(), Some("pmatrix".into())).unwrap(),
            "\\begin{pmatrix}\n1 & 2\\\\\n3 & 4\n\\end{pmatrix}"
        );
        assert!(matrix_to_tex("1 NaN".into(), None).is_err());
    }
}
