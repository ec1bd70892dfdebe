//! Basically a key-value store for variable names and their values.
//! The order of insertion is the order of the variables in a system.

use std::ops::{Index, RangeInclusive};

use rand::Rng;

use crate::{Symbol, vector::Vector};

/// Stores the value of each variable of a system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    /// The key value pairs are stored as a Vector
    /// because there are only a handful of variables
    /// and the order matters.
    vals: Vec<(Symbol, i64)>,
}

impl Valuation {
    /// Initializes a valuation from a list of pairs of variables and values.
    ///
    /// The variables should be unique. This is not checked here, the
    /// generator validates its input before building a valuation.
    pub fn from_vec(vals: Vec<(Symbol, i64)>) -> Self {
        debug_assert!(
            vals.iter()
                .enumerate()
                .all(|(i, (v, _))| vals[..i].iter().all(|(w, _)| w != v)),
            "Duplicate variable in valuation."
        );
        Self { vals }
    }

    /// Assigns each variable a value sampled uniformly from `range`.
    ///
    /// The range must not be empty.
    pub fn random<Rand: Rng>(
        vars: &[Symbol],
        range: &RangeInclusive<i64>,
        rng: &mut Rand,
    ) -> Self {
        Self::from_vec(
            vars.iter()
                .map(|&v| (v, rng.random_range(range.clone())))
                .collect(),
        )
    }

    /// The number of variables.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Are there no variables?
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Returns the value of a variable if it is in the valuation.
    pub fn value(&self, var: Symbol) -> Option<i64> {
        self.vals.iter().find(|(v, _)| *v == var).map(|(_, e)| *e)
    }

    /// The variables in order.
    pub fn vars(&self) -> impl ExactSizeIterator<Item = Symbol> + '_ {
        self.vals.iter().map(|(v, _)| *v)
    }

    /// The values in the order of the variables.
    pub fn values(&self) -> Vector<i64> {
        Vector::from_iter(self.len(), self.vals.iter().map(|(_, e)| *e))
    }

    /// Iterates over the pairs of variables and values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Symbol, i64)> + '_ {
        self.vals.iter().copied()
    }

    /// The largest absolute value of any variable, zero if there are none.
    pub fn max_abs(&self) -> u64 {
        self.vals.iter().map(|(_, e)| e.unsigned_abs()).max().unwrap_or(0)
    }
}

impl Index<Symbol> for Valuation {
    type Output = i64;

    /// Panics if the variable is not in the valuation.
    fn index(&self, index: Symbol) -> &Self::Output {
        match self.vals.iter().find(|(v, _)| *v == index) {
            Some((_, e)) => e,
            None => panic!("Variable {index} not found in valuation."),
        }
    }
}

impl Index<&str> for Valuation {
    type Output = i64;

    fn index(&self, index: &str) -> &Self::Output {
        &self[Symbol::from(index)]
    }
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    #[test]
    fn lookup() {
        let val = Valuation::from_vec(vec![("x".into(), 1), ("y".into(), -2)]);
        assert_eq!(val.len(), 2);
        assert_eq!(val["x"], 1);
        assert_eq!(val[Symbol::from("y")], -2);
        assert_eq!(val.value("z".into()), None);
        assert_eq!(val.max_abs(), 2);
        assert_eq!(val.values(), [1, -2]);
    }

    #[test]
    fn random_keeps_order() {
        let rng = &mut StdRng::seed_from_u64(0);
        let vars: Vec<Symbol> = ["c", "a", "b"].map(Symbol::from).to_vec();
        let val = Valuation::random(&vars, &(1..=5), rng);
        assert!(val.vars().eq(vars.iter().copied()));
        assert!(val.iter().all(|(_, e)| (1..=5).contains(&e)));
    }
}
