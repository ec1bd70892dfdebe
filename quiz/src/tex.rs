//! Generates LaTeX code for matrices, vectors and systems.
//!
//! Everything that is rendered as a matrix uses the same layout:
//! ```text
//! \begin{bmatrix}
//! 1 & 2\\
//! 3 & 4
//! \end{bmatrix}
//! ```
//! A vector is a single column. The environment can be any matrix-like
//! environment (`bmatrix`, `pmatrix`, `vmatrix`, ...), its name is inserted
//! verbatim.

use std::fmt::Display;

use itertools::Itertools as _;

use crate::{
    Symbol,
    error::{Error, Result},
    linear_system::LinearSystem,
    matrix::Matrix,
    vector::Vector,
};

/// The environment used when none is given.
pub const DEFAULT_ENVIRONMENT: &str = "bmatrix";

/// Separates the entries of a row.
const COL_SEP: &str = " & ";

/// Separates rows.
const ROW_SEP: &str = "\\\\\n";

pub fn bold<T>(t: T) -> TexBold<T> {
    TexBold(t)
}

pub struct TexBold<T>(T);

impl<T: Display> Display for TexBold<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\\mathbf{{{}}}", self.0)
    }
}

pub fn underbrace<T, U>(inner: T, label: U) -> TexUnderbrace<T, U> {
    TexUnderbrace { inner, label }
}

pub struct TexUnderbrace<T, U> {
    inner: T,
    label: U,
}

impl<T, U> Display for TexUnderbrace<T, U>
where
    T: Display,
    U: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\\underbrace{{{}}}_{{{}}}", self.inner, self.label)
    }
}

/// Writes a variable name so that TeX reads it as one symbol.
///
/// A single letter stays as it is and longer names are wrapped in
/// `\mathit`. The part after the first `_` becomes a subscript, so `x_10` is
/// written `x_{10}` and `my_var` is written `\mathit{my}_{\mathit{var}}`.
pub fn var(var: Symbol) -> TexVar {
    TexVar(var)
}

pub struct TexVar(Symbol);

impl TexVar {
    /// A part without a subscript. Digits and single characters need no
    /// wrapping. Any remaining `_` is escaped.
    fn write_part(f: &mut std::fmt::Formatter<'_>, part: &str) -> std::fmt::Result {
        if part.chars().count() == 1 || part.chars().all(|c| c.is_ascii_digit()) {
            return f.write_str(part);
        }

        write!(f, "\\mathit{{{}}}", part.replace('_', "\\_"))
    }
}

impl Display for TexVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.0.as_str();
        match name.split_once('_') {
            Some((base, sub)) if !base.is_empty() && !sub.is_empty() => {
                Self::write_part(f, base)?;
                f.write_str("_{")?;
                Self::write_part(f, sub)?;
                f.write_str("}")
            },
            _ => Self::write_part(f, name),
        }
    }
}

/// Writes `\begin{env}`, the rows separated by [`ROW_SEP`] and `\end{env}`.
fn write_environment<I>(
    f: &mut std::fmt::Formatter<'_>,
    env: &str,
    rows: I,
) -> std::fmt::Result
where
    I: Iterator,
    I::Item: Display,
{
    write!(f, "\\begin{{{env}}}\n{}\n\\end{{{env}}}", rows.format(ROW_SEP))
}

impl<T: Display> Vector<T> {
    pub fn to_tex(&self) -> TexVector<'_, T> {
        TexVector { vector: self, env: DEFAULT_ENVIRONMENT }
    }
}

pub struct TexVector<'a, T> {
    vector: &'a Vector<T>,
    env: &'a str,
}

impl<'a, T> TexVector<'a, T> {
    /// Use a different environment than [`DEFAULT_ENVIRONMENT`].
    pub fn environment(self, env: &'a str) -> Self {
        Self { env, ..self }
    }
}

impl<T: Display> Display for TexVector<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_environment(f, self.env, self.vector.iter())
    }
}

impl<T: Display> Matrix<T> {
    pub fn to_tex(&self) -> TexMatrix<'_, T> {
        TexMatrix { matrix: self, env: DEFAULT_ENVIRONMENT }
    }
}

pub struct TexMatrix<'a, T> {
    matrix: &'a Matrix<T>,
    env: &'a str,
}

impl<'a, T> TexMatrix<'a, T> {
    /// Use a different environment than [`DEFAULT_ENVIRONMENT`].
    pub fn environment(self, env: &'a str) -> Self {
        Self { env, ..self }
    }
}

impl<T: Display> Display for TexMatrix<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_environment(
            f,
            self.env,
            self.matrix.rows().map(|row| row.iter().format(COL_SEP)),
        )
    }
}

impl LinearSystem {
    /// The equations as a `cases` block.
    pub fn to_tex(&self) -> TexSystem<'_> {
        TexSystem { system: self }
    }
}

pub struct TexSystem<'a> {
    system: &'a LinearSystem,
}

impl Display for TexSystem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let notation = self.system.notation();
        write_environment(
            f,
            "cases",
            self.system.iter().map(|e| e.display_tex(notation)),
        )
    }
}

/// A number or an arbitrarily nested sequence of numbers.
///
/// This is the input of [`from_array`] when the shape is only known at
/// runtime. Statically shaped data should use [`Matrix::to_tex`] and
/// [`Vector::to_tex`].
#[derive(Debug, Clone, PartialEq)]
pub enum Array<T> {
    Scalar(T),
    Seq(Vec<Array<T>>),
}

impl<T> Array<T> {
    pub fn scalar(t: T) -> Self {
        Array::Scalar(t)
    }

    /// A one-dimensional array.
    pub fn from_vec(v: Vec<T>) -> Self {
        Array::Seq(v.into_iter().map(Array::Scalar).collect())
    }

    /// A two-dimensional array. The rows are not checked for equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Array::Seq(rows.into_iter().map(Array::from_vec).collect())
    }

    /// The nesting depth. A scalar has 0 dimensions and an empty sequence 1.
    pub fn ndim(&self) -> usize {
        match self {
            Array::Scalar(_) => 0,
            Array::Seq(items) => {
                1 + items.iter().map(Array::ndim).max().unwrap_or(0)
            },
        }
    }
}

impl<T: Clone> From<&Vector<T>> for Array<T> {
    fn from(v: &Vector<T>) -> Self {
        Array::from_vec(v.as_slice().to_vec())
    }
}

impl<T: Clone> From<&Matrix<T>> for Array<T> {
    fn from(m: &Matrix<T>) -> Self {
        Array::from_rows(m.rows().map(<[T]>::to_vec).collect())
    }
}

/// Converts a one- or two-dimensional array to a LaTeX matrix in the
/// environment `env`.
///
/// Fails with [`Error::InvalidInput`] for scalars, arrays with more than two
/// dimensions, rows of different lengths, and sequences that mix numbers and
/// rows.
pub fn from_array<T: Display>(array: &Array<T>, env: &str) -> Result<String> {
    let Array::Seq(items) = array else {
        return Err(Error::invalid("expected a sequence, got a scalar"));
    };

    let ndim = array.ndim();
    if ndim > 2 {
        return Err(Error::invalid(format!(
            "only one- or two-dimensional arrays are supported, got {ndim} dimensions"
        )));
    }

    let mut lines = Vec::with_capacity(items.len());
    let mut cols = None;
    for item in items {
        let line = match (ndim, item) {
            (1, Array::Scalar(e)) => e.to_string(),
            (2, Array::Seq(row)) => {
                if *cols.get_or_insert(row.len()) != row.len() {
                    return Err(Error::invalid(
                        "all rows need to have the same number of entries",
                    ));
                }

                let mut entries = Vec::with_capacity(row.len());
                for e in row {
                    match e {
                        Array::Scalar(e) => entries.push(e.to_string()),
                        Array::Seq(_) => {
                            return Err(Error::invalid(
                                "only one- or two-dimensional arrays are supported",
                            ));
                        },
                    }
                }
                entries.join(COL_SEP)
            },
            _ => {
                return Err(Error::invalid(
                    "a sequence can't contain both numbers and rows",
                ));
            },
        };
        lines.push(line);
    }

    Ok(format!(
        "\\begin{{{env}}}\n{}\n\\end{{{env}}}",
        lines.iter().join(ROW_SEP)
    ))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{equation::Notation, valuation::Valuation};

    #[test]
    fn one_dimensional() {
        let a = Array::from_vec(vec![1, 2, 3]);
        assert_eq!(
            from_array(&a, DEFAULT_ENVIRONMENT).unwrap(),
            "\\begin{bmatrix}\n1\\\\\n2\\\\\n3\n\\end{bmatrix}"
        );

        let a = Array::from_vec(vec![-1, 3, -2]);
        assert_eq!(
            from_array(&a, "pmatrix").unwrap(),
            "\\begin{pmatrix}\n-1\\\\\n3\\\\\n-2\n\\end{pmatrix}"
        );
    }

    #[test]
    fn two_dimensional() {
        let a = Array::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(
            from_array(&a, "pmatrix").unwrap(),
            "\\begin{pmatrix}\n1 & 2\\\\\n3 & 4\n\\end{pmatrix}"
        );

        let a = Array::from_rows(vec![vec![1.5, 2.0], vec![3.25, -4.0]]);
        assert_eq!(
            from_array(&a, "vmatrix").unwrap(),
            "\\begin{vmatrix}\n1.5 & 2\\\\\n3.25 & -4\n\\end{vmatrix}"
        );
    }

    #[test]
    fn environment_is_verbatim() {
        let a = Array::from_vec(vec![7]);
        assert_eq!(
            from_array(&a, "not a real env").unwrap(),
            "\\begin{not a real env}\n7\n\\end{not a real env}"
        );
    }

    #[test]
    fn empty() {
        let a = Array::<i64>::from_vec(Vec::new());
        assert_eq!(a.ndim(), 1);
        assert_eq!(
            from_array(&a, DEFAULT_ENVIRONMENT).unwrap(),
            "\\begin{bmatrix}\n\n\\end{bmatrix}"
        );
    }

    #[test]
    fn invalid_arrays() {
        let scalar = Array::scalar(5);
        assert_eq!(scalar.ndim(), 0);
        assert!(from_array(&scalar, DEFAULT_ENVIRONMENT).unwrap_err().is_invalid_input());

        let three_dim = Array::Seq(vec![Array::from_rows(vec![vec![1, 2], vec![3, 4]])]);
        assert_eq!(three_dim.ndim(), 3);
        assert!(from_array(&three_dim, DEFAULT_ENVIRONMENT).unwrap_err().is_invalid_input());

        let ragged = Array::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(from_array(&ragged, DEFAULT_ENVIRONMENT).unwrap_err().is_invalid_input());

        let mixed = Array::Seq(vec![Array::scalar(1), Array::from_vec(vec![2, 3])]);
        assert!(from_array(&mixed, DEFAULT_ENVIRONMENT).unwrap_err().is_invalid_input());
    }

    #[test]
    fn typed_and_dynamic_agree() {
        let m = Matrix::<i64>::from_rows(&[[1, -2, 0], [3, 4, 5]]);
        assert_eq!(
            m.to_tex().environment("pmatrix").to_string(),
            from_array(&Array::from(&m), "pmatrix").unwrap()
        );

        let v = Vector::<i64>::from_entries([1, 2, 3]);
        assert_eq!(
            v.to_tex().to_string(),
            "\\begin{bmatrix}\n1\\\\\n2\\\\\n3\n\\end{bmatrix}"
        );
        assert_eq!(
            v.to_tex().to_string(),
            from_array(&Array::from(&v), DEFAULT_ENVIRONMENT).unwrap()
        );
    }

    #[test]
    fn system() {
        let values = Valuation::from_vec(vec![("x".into(), 1), ("y".into(), 2)]);
        let a = Matrix::from_rows(&[[1, 1], [1, -1]]);
        let s = LinearSystem::from_parts(values, a, Notation::Compact).unwrap();
        assert_eq!(
            s.to_tex().to_string(),
            "\\begin{cases}\nx+y=3\\\\\nx-y=-1\n\\end{cases}"
        );
    }

    #[test]
    fn system_with_long_names() {
        let values = Valuation::from_vec(vec![
            ("x_10".into(), 1),
            ("speed".into(), 2),
            ("my_var".into(), 3),
        ]);
        let a = Matrix::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let s = LinearSystem::from_parts(values, a, Notation::Compact).unwrap();
        assert_eq!(
            s.to_tex().to_string(),
            "\\begin{cases}\nx_{10}=1\\\\\n\\mathit{speed}=2\\\\\n\\mathit{my}_{\\mathit{var}}=3\n\\end{cases}"
        );
        // The plain equations keep the names as they are.
        assert_eq!(s.equations(), ["x_10=1", "speed=2", "my_var=3"]);
    }

    #[test]
    fn variables() {
        let tex = |name: &str| var(Symbol::from(name)).to_string();
        assert_eq!(tex("x"), "x");
        assert_eq!(tex("x_1"), "x_{1}");
        assert_eq!(tex("x_10"), "x_{10}");
        assert_eq!(tex("speed"), "\\mathit{speed}");
        assert_eq!(tex("a_b_c"), "a_{\\mathit{b\\_c}}");
        assert_eq!(tex("_x"), "\\mathit{\\_x}");
        assert_eq!(tex("x_"), "\\mathit{x\\_}");
    }

    #[test]
    fn helpers() {
        assert_eq!(
            underbrace(bold("x"), "y").to_string(),
            "\\underbrace{\\mathbf{x}}_{y}"
        );
    }
}
