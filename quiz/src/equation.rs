//! Formatting of a single linear equation like `2x-y+z=3`.

use std::fmt::Display;

use crate::Symbol;

/// How the terms of an equation are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// A numeric multiplier in front of the variable, e.g. `3x-y`.
    #[default]
    Compact,

    /// The variable is repeated as many times as the absolute value of the
    /// coefficient, e.g. `x+x+x-y`. Meant for children that have not seen
    /// multiplication yet.
    Extensive,
}

/// The largest absolute coefficient that may be written in
/// [`Notation::Extensive`]. Every unit of a coefficient is one token, so
/// anything larger would not be readable anyway.
pub const MAX_EXTENSIVE_COEFFICIENT: u64 = 100;

/// One row of a linear system.
///
/// This borrows everything from the system it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation<'a> {
    vars: &'a [Symbol],
    coefficients: &'a [i64],
    constant: i64,
}

impl<'a> Equation<'a> {
    /// Creates an equation `coefficients · vars = constant`.
    ///
    /// Panics if the number of coefficients and variables differ.
    pub fn new(vars: &'a [Symbol], coefficients: &'a [i64], constant: i64) -> Self {
        assert_eq!(
            vars.len(),
            coefficients.len(),
            "Every variable needs exactly one coefficient."
        );
        Self { vars, coefficients, constant }
    }

    /// The variables in order.
    pub fn vars(&self) -> &'a [Symbol] {
        self.vars
    }

    /// The coefficient of each variable.
    pub fn coefficients(&self) -> &'a [i64] {
        self.coefficients
    }

    /// The right-hand side.
    pub fn constant(&self) -> i64 {
        self.constant
    }

    /// Creates a wrapper struct that implements [`Display`] and uses the given
    /// `notation` to format the terms.
    pub fn display(&self, notation: Notation) -> DisplayableEquation<'a> {
        DisplayableEquation { eq: *self, notation, tex: false }
    }

    /// Like [`Equation::display`], but the variables are written as TeX
    /// (see [`tex::var`](crate::tex::var)).
    pub fn display_tex(&self, notation: Notation) -> DisplayableEquation<'a> {
        DisplayableEquation { eq: *self, notation, tex: true }
    }
}

impl Display for Equation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(Notation::Compact).fmt(f)
    }
}

pub struct DisplayableEquation<'a> {
    eq: Equation<'a>,
    notation: Notation,
    tex: bool,
}

impl DisplayableEquation<'_> {
    /// `first` is set for the first term that is written in this row. It is
    /// the only one that doesn't get a `+` in front of it.
    fn write_compact_term<V: Display>(
        f: &mut std::fmt::Formatter<'_>,
        var: V,
        c: i64,
        first: bool,
    ) -> std::fmt::Result {
        match c {
            1 if first => write!(f, "{var}"),
            1 => write!(f, "+{var}"),
            -1 => write!(f, "-{var}"),
            c if first => write!(f, "{c}{var}"),
            c => write!(f, "{c:+}{var}"),
        }
    }

    fn write_extensive_term<V: Display>(
        f: &mut std::fmt::Formatter<'_>,
        var: V,
        c: i64,
        first: bool,
    ) -> std::fmt::Result {
        for i in 0..c.unsigned_abs() {
            let sign = match c.is_negative() {
                true => "-",
                false if first && i == 0 => "",
                false => "+",
            };
            write!(f, "{sign}{var}")?;
        }

        Ok(())
    }

    fn write_term<V: Display>(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        var: V,
        c: i64,
        first: bool,
    ) -> std::fmt::Result {
        match self.notation {
            Notation::Compact => Self::write_compact_term(f, var, c, first),
            Notation::Extensive => Self::write_extensive_term(f, var, c, first),
        }
    }
}

impl Display for DisplayableEquation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let terms = self.eq.vars.iter().zip(self.eq.coefficients);
        for (&var, &c) in terms.filter(|(_, c)| **c != 0) {
            match self.tex {
                true => self.write_term(f, crate::tex::var(var), c, first)?,
                false => self.write_term(f, var, c, first)?,
            }
            first = false;
        }

        // A row of zeros has no terms, which leaves just `=0`.
        write!(f, "={}", self.eq.constant)
    }
}
