//! Random generation of linear systems with a unique integer solution.
//!
//! The algorithm is plain rejection sampling: pick the values of the
//! variables, then sample coefficient matrices until one is non-singular. For
//! the default ranges almost every sample is accepted, but tiny coefficient
//! ranges (e.g. `0..=1` with many variables) can make this fail, which is why
//! the number of attempts is bounded.

use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::{
    Symbol,
    equation::{MAX_EXTENSIVE_COEFFICIENT, Notation},
    error::{Error, Result},
    linear_system::LinearSystem,
    matrix::Matrix,
    valuation::Valuation,
};

/// The variables of the system to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarInput {
    /// Just the names. The values are sampled from
    /// [`GeneratorConfig::var_range`].
    Names(Vec<String>),

    /// Names with fixed values that are used as is.
    Fixed(Vec<(String, i64)>),
}

impl VarInput {
    /// The number of variables.
    pub fn len(&self) -> usize {
        match self {
            VarInput::Names(names) => names.len(),
            VarInput::Fixed(vals) => vals.len(),
        }
    }

    /// Are there no variables at all?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that there is at least one variable, that every name is an
    /// identifier, and that no name occurs twice.
    pub fn validate(&self) -> Result<Vec<Symbol>> {
        let names: Vec<&str> = match self {
            VarInput::Names(names) => names.iter().map(String::as_str).collect(),
            VarInput::Fixed(vals) => vals.iter().map(|(n, _)| n.as_str()).collect(),
        };

        if names.is_empty() {
            return Err(Error::invalid("there must be at least one variable"));
        }

        let mut vars: Vec<Symbol> = Vec::with_capacity(names.len());
        for name in names {
            if !is_identifier(name) {
                return Err(Error::invalid(format!(
                    "'{name}' is not a valid variable name"
                )));
            }

            let var = Symbol::from(name);
            if vars.contains(&var) {
                return Err(Error::invalid(format!(
                    "the variable '{name}' appears more than once"
                )));
            }
            vars.push(var);
        }

        Ok(vars)
    }
}

/// Variable names must start with a letter or `_` and continue with letters,
/// digits or `_`. Anything else would make the rendered equations ambiguous.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        },
        _ => false,
    }
}

/// Parses `"x y z"` or `"x, y, z"` as names and `"x=1, y=-2"` as fixed
/// values. Mixing both forms or a value that is not an integer is an error.
impl FromStr for VarInput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let entries: Vec<&str> = match s.contains(',') {
            true => s.split(',').map(str::trim).collect(),
            false => s.split_whitespace().collect(),
        };

        let mut names = Vec::new();
        let mut fixed = Vec::new();
        for entry in entries {
            match entry.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim();
                    let value = value.parse::<i64>().map_err(|_| {
                        Error::invalid(format!(
                            "the value '{value}' of '{}' is not an integer",
                            name.trim()
                        ))
                    })?;
                    fixed.push((name.trim().to_owned(), value));
                },
                None => names.push(entry.to_owned()),
            }
        }

        match (names.is_empty(), fixed.is_empty()) {
            (_, true) => Ok(VarInput::Names(names)),
            (true, false) => Ok(VarInput::Fixed(fixed)),
            (false, false) => Err(Error::invalid(
                "either all variables or none of them need a value",
            )),
        }
    }
}

impl From<Vec<String>> for VarInput {
    fn from(names: Vec<String>) -> Self {
        VarInput::Names(names)
    }
}

impl From<&[&str]> for VarInput {
    fn from(names: &[&str]) -> Self {
        VarInput::Names(names.iter().map(|&n| n.to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for VarInput {
    fn from(names: [&str; N]) -> Self {
        names.as_slice().into()
    }
}

impl From<Vec<(String, i64)>> for VarInput {
    fn from(vals: Vec<(String, i64)>) -> Self {
        VarInput::Fixed(vals)
    }
}

impl<const N: usize> From<[(&str, i64); N]> for VarInput {
    fn from(vals: [(&str, i64); N]) -> Self {
        VarInput::Fixed(vals.iter().map(|&(n, v)| (n.to_owned(), v)).collect())
    }
}

/// Settings for [`generate`].
/// Use `GeneratorConfig::default()` to get the usual quiz settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The range the values of the variables are sampled from. Ignored for
    /// [`VarInput::Fixed`].
    ///
    /// The default is `1..=5`.
    pub var_range: RangeInclusive<i64>,

    /// The range every coefficient is sampled from.
    ///
    /// The default is `-2..=2`.
    pub coef_range: RangeInclusive<i64>,

    /// How the equations are written.
    ///
    /// The default is [`Notation::Compact`].
    pub notation: Notation,

    /// How many coefficient matrices are sampled before giving up.
    ///
    /// The default is 100.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    /// Returns the usual quiz settings.
    /// See the documentation of the members for the default values.
    fn default() -> Self {
        Self {
            var_range: 1..=5,
            coef_range: -2..=2,
            notation: Notation::Compact,
            max_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the coefficient range is non-empty and the retry budget is
    /// positive. In [`Notation::Extensive`] no coefficient may exceed
    /// [`MAX_EXTENSIVE_COEFFICIENT`] in absolute value. The variable range is
    /// only checked by [`generate`] when values are actually sampled from it.
    pub fn validate(&self) -> Result<()> {
        if self.coef_range.is_empty() {
            return Err(Error::invalid(format!(
                "the coefficient range {:?} is empty",
                self.coef_range
            )));
        }

        if self.notation == Notation::Extensive
            && max_abs(&self.coef_range) > MAX_EXTENSIVE_COEFFICIENT
        {
            return Err(Error::invalid(format!(
                "coefficients in {:?} are too large for the extensive notation, \
                 the limit is {MAX_EXTENSIVE_COEFFICIENT}",
                self.coef_range
            )));
        }

        if self.max_attempts == 0 {
            return Err(Error::invalid("at least one attempt is needed"));
        }

        Ok(())
    }
}

fn max_abs(range: &RangeInclusive<i64>) -> u64 {
    range.start().unsigned_abs().max(range.end().unsigned_abs())
}

/// Makes sure that no constant `Σ coef·value` of an `n`-variable system can
/// overflow an `i64`.
fn check_bounds(n: usize, coef_abs: u64, value_abs: u64) -> Result<()> {
    let bound = (n as u128)
        .checked_mul(coef_abs as u128)
        .and_then(|b| b.checked_mul(value_abs as u128));

    match bound {
        Some(b) if b <= i64::MAX as u128 => Ok(()),
        _ => Err(Error::invalid(format!(
            "{n} variables with coefficients up to {coef_abs} and values up \
             to {value_abs} could overflow the constants"
        ))),
    }
}

/// Generates a system with one equation per variable that has a unique
/// integer solution.
///
/// Fails with [`Error::InvalidInput`] if the input or config are malformed and
/// with [`Error::Unsolvable`] if none of the
/// [`GeneratorConfig::max_attempts`] sampled coefficient matrices was
/// non-singular.
pub fn generate<Rand: Rng>(
    input: &VarInput,
    cfg: &GeneratorConfig,
    rng: &mut Rand,
) -> Result<LinearSystem> {
    let vars = input.validate()?;
    cfg.validate()?;
    let n = vars.len();

    let (values, value_abs) = match input {
        VarInput::Names(_) => {
            if cfg.var_range.is_empty() {
                return Err(Error::invalid(format!(
                    "the variable range {:?} is empty",
                    cfg.var_range
                )));
            }

            (
                Valuation::random(&vars, &cfg.var_range, rng),
                max_abs(&cfg.var_range),
            )
        },
        VarInput::Fixed(vals) => {
            let val = Valuation::from_vec(
                vars.iter().zip(vals).map(|(&var, &(_, e))| (var, e)).collect(),
            );
            let value_abs = val.max_abs();
            (val, value_abs)
        },
    };

    check_bounds(n, max_abs(&cfg.coef_range), value_abs)?;

    for attempt in 1..=cfg.max_attempts {
        let coefficients = Matrix::random(n, n, &cfg.coef_range, rng);
        if coefficients.is_singular() {
            log::debug!("Attempt {attempt}: {coefficients:?} is singular");
            continue;
        }

        log::info!("Found a non-singular {n}×{n} system after {attempt} attempts");
        return Ok(LinearSystem::assemble(values, coefficients, cfg.notation));
    }

    log::warn!(
        "No non-singular {n}×{n} system with coefficients in {:?} after {} attempts",
        cfg.coef_range,
        cfg.max_attempts
    );
    Err(Error::Unsolvable { attempts: cfg.max_attempts })
}

/// [`generate`] using the thread-local random number generator.
pub fn generate_with_thread_rng(
    input: &VarInput,
    cfg: &GeneratorConfig,
) -> Result<LinearSystem> {
    generate(input, cfg, &mut rand::rng())
}

/// Generates a system from loose arguments.
///
/// `extensive` selects [`Notation::Extensive`]. Everything else about the
/// generation is the default configuration.
pub fn integer_equations(
    input: impl Into<VarInput>,
    var_min: i64,
    var_max: i64,
    coef_min: i64,
    coef_max: i64,
    extensive: bool,
) -> Result<LinearSystem> {
    let cfg = GeneratorConfig {
        var_range: var_min..=var_max,
        coef_range: coef_min..=coef_max,
        notation: match extensive {
            true => Notation::Extensive,
            false => Notation::Compact,
        },
        ..GeneratorConfig::default()
    };

    generate_with_thread_rng(&input.into(), &cfg)
}
