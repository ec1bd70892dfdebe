//! A square system of linear equations together with its integer solution.

use std::fmt::Display;

use num_bigint::BigInt;

use crate::{
    Symbol,
    equation::{Equation, MAX_EXTENSIVE_COEFFICIENT, Notation},
    error::{Error, Result},
    matrix::Matrix,
    valuation::Valuation,
    vector::Vector,
};

/// A system `coefficients · unknowns = constants` with a unique solution.
///
/// Everything is fixed on construction. The rendered equations are stored in
/// the notation the system was created with, [`LinearSystem::render`] gives
/// the other one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    /// The variables and their values.
    values: Valuation,

    /// The variables in order. Same as `values.vars()`, but as a slice so
    /// that [`Equation`]s can borrow it.
    vars: Vec<Symbol>,

    coefficients: Matrix<i64>,
    unknowns: Vector<i64>,
    constants: Vector<i64>,
    notation: Notation,
    equations: Vec<String>,
}

impl LinearSystem {
    /// Builds the system for a coefficient matrix that is already known to be
    /// non-singular and small enough that the constants fit into an `i64`.
    pub(crate) fn assemble(
        values: Valuation,
        coefficients: Matrix<i64>,
        notation: Notation,
    ) -> Self {
        let unknowns = values.values();
        let constants = coefficients.mul_vec_post(&unknowns);
        Self::with_constants(values, coefficients, unknowns, constants, notation)
    }

    fn with_constants(
        values: Valuation,
        coefficients: Matrix<i64>,
        unknowns: Vector<i64>,
        constants: Vector<i64>,
        notation: Notation,
    ) -> Self {
        let vars: Vec<_> = values.vars().collect();
        let mut system = Self {
            values,
            vars,
            coefficients,
            unknowns,
            constants,
            notation,
            equations: Vec::new(),
        };
        system.equations = system.render(notation);
        system
    }

    /// Creates a system from a valuation and a coefficient matrix chosen by
    /// the caller.
    ///
    /// Fails with [`Error::InvalidInput`] if the matrix is not n×n for n
    /// variables, if it is singular, if a constant overflows an `i64`, or if
    /// a coefficient is too large for [`Notation::Extensive`].
    pub fn from_parts(
        values: Valuation,
        coefficients: Matrix<i64>,
        notation: Notation,
    ) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::invalid("a system needs at least one variable"));
        }

        if coefficients.num_rows() != n || coefficients.num_cols() != n {
            return Err(Error::invalid(format!(
                "expected a {n}×{n} coefficient matrix, got {}×{}",
                coefficients.num_rows(),
                coefficients.num_cols()
            )));
        }

        if coefficients.is_singular() {
            return Err(Error::invalid("the coefficient matrix is singular"));
        }

        if notation == Notation::Extensive
            && coefficients
                .entries_row_major()
                .any(|c| c.unsigned_abs() > MAX_EXTENSIVE_COEFFICIENT)
        {
            return Err(Error::invalid(format!(
                "coefficients above {MAX_EXTENSIVE_COEFFICIENT} can't be written in \
                 the extensive notation"
            )));
        }

        let unknowns = values.values();
        let constants = coefficients
            .rows()
            .map(|row| {
                let sum: i128 = row
                    .iter()
                    .zip(unknowns.iter())
                    .map(|(&c, &v)| c as i128 * v as i128)
                    .sum();
                i64::try_from(sum).map_err(|_| {
                    Error::invalid(format!("the constant {sum} overflows an i64"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::with_constants(
            values,
            coefficients,
            unknowns,
            Vector::from_entries(constants),
            notation,
        ))
    }

    /// The number of equations (and variables).
    pub fn dim(&self) -> usize {
        self.vars.len()
    }

    /// The variables in order.
    pub fn vars(&self) -> &[Symbol] {
        &self.vars
    }

    /// The value of each variable.
    pub fn values(&self) -> &Valuation {
        &self.values
    }

    /// The n×n coefficient matrix.
    pub fn coefficients(&self) -> &Matrix<i64> {
        &self.coefficients
    }

    /// The solution, i.e. the values of the variables in order.
    pub fn unknowns(&self) -> &Vector<i64> {
        &self.unknowns
    }

    /// The right-hand sides.
    pub fn constants(&self) -> &Vector<i64> {
        &self.constants
    }

    /// The notation of [`LinearSystem::equations`].
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// The rendered equations, one per row.
    pub fn equations(&self) -> &[String] {
        &self.equations
    }

    /// The equation in row `i`.
    pub fn equation(&self, i: usize) -> Equation<'_> {
        Equation::new(&self.vars, self.coefficients.row(i), self.constants[i])
    }

    /// Iterates over the equations.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Equation<'_>> {
        (0..self.dim()).map(|i| self.equation(i))
    }

    /// Renders every equation in the given notation.
    ///
    /// The extensive notation writes one token per unit of each coefficient,
    /// see [`MAX_EXTENSIVE_COEFFICIENT`].
    pub fn render(&self, notation: Notation) -> Vec<String> {
        self.iter().map(|e| e.display(notation).to_string()).collect()
    }

    /// The exact determinant of the coefficient matrix. Never zero.
    pub fn determinant(&self) -> BigInt {
        self.coefficients.determinant()
    }

    /// Does the solution actually solve the system?
    pub fn check(&self) -> bool {
        self.coefficients.mul_vec_post(&self.unknowns) == self.constants
    }
}

impl Display for LinearSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.equations.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            f.write_str(e)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn xy(x: i64, y: i64) -> Valuation {
        Valuation::from_vec(vec![("x".into(), x), ("y".into(), y)])
    }

    #[test]
    fn from_parts() {
        let a = Matrix::from_rows(&[[2, -1], [1, 3]]);
        let s = LinearSystem::from_parts(xy(1, 2), a, Notation::Compact).unwrap();
        assert_eq!(s.dim(), 2);
        assert_eq!(s.constants(), &Vector::from_entries([0, 7]));
        assert_eq!(s.equations(), ["2x-y=0", "x+3y=7"]);
        assert_eq!(s.render(Notation::Extensive), ["x+x-y=0", "x+y+y+y=7"]);
        assert_eq!(s.to_string(), "2x-y=0\nx+3y=7");
        assert_eq!(s.determinant(), 7.into());
        assert!(s.check());
    }

    #[test]
    fn from_parts_rejects_singular() {
        let a = Matrix::from_rows(&[[1, 1], [2, 2]]);
        let err = LinearSystem::from_parts(xy(1, 2), a, Notation::Compact);
        assert!(err.unwrap_err().is_invalid_input());
    }

    #[test]
    fn from_parts_rejects_wrong_shape() {
        let a = Matrix::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let err = LinearSystem::from_parts(xy(1, 2), a, Notation::Compact);
        assert!(err.unwrap_err().is_invalid_input());
    }

    #[test]
    fn from_parts_rejects_overflow() {
        let a = Matrix::from_rows(&[[i64::MAX, 1], [0, 1]]);
        let err = LinearSystem::from_parts(xy(2, 0), a, Notation::Compact);
        assert!(err.unwrap_err().is_invalid_input());
    }

    #[test]
    fn from_parts_rejects_large_extensive_coefficients() {
        let big = MAX_EXTENSIVE_COEFFICIENT as i64 + 1;
        let a = Matrix::from_rows(&[[big, 0], [0, 1]]);
        let err = LinearSystem::from_parts(xy(1, 2), a.clone(), Notation::Extensive);
        assert!(err.unwrap_err().is_invalid_input());

        let s = LinearSystem::from_parts(xy(1, 2), a, Notation::Compact).unwrap();
        assert_eq!(s.equations(), [format!("{big}x={big}"), "y=2".to_owned()]);
    }
}
