//! Matrices.
//!
//! Entries are stored in row-major order in a single `Vec`. Rows are handed
//! out as slices, so there are no separate view types.

use std::{
    fmt::Debug,
    ops::{Index, IndexMut, RangeInclusive},
};

use itertools::iproduct;
use num_bigint::BigInt;
use num_traits::{Num, One, Zero};
use rand::Rng;
use rand::distr::uniform::SampleUniform;

use crate::vector::Vector;

/// An owned matrix.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    entries: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Return an empty matrix.
    pub fn empty() -> Self {
        Self { entries: Vec::new(), rows: 0, cols: 0 }
    }

    /// Creates a matrix from an iterator in row-major order.
    pub fn from_iter<I: Iterator<Item = T>>(r: usize, c: usize, iter: I) -> Self {
        let entries: Vec<_> = iter.take(r * c).collect();
        assert_eq!(
            entries.len(),
            r * c,
            "The iterator needs to return at least r * c items."
        );

        Self { entries, rows: r, cols: c }
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// Panics if the rows don't all have the same length.
    pub fn from_rows<U, V>(rows: &[U]) -> Self
    where
        U: AsRef<[V]>,
        V: Into<T> + Clone,
    {
        if rows.is_empty() {
            return Self::empty();
        }

        let r = rows.len();
        let c = rows[0].as_ref().len();
        assert!(rows.iter().all(|r| r.as_ref().len() == c));

        Self::from_iter(
            r,
            c,
            rows.iter()
                .flat_map(|r| r.as_ref().iter().map(|e| e.clone().into())),
        )
    }

    /// The number of rows of the matrix.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of the matrix.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Does the matrix have as many rows as columns?
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the row `r`.
    pub fn row(&self, r: usize) -> &[T] {
        &self.entries[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + DoubleEndedIterator {
        (0..self.rows).map(|r| self.row(r))
    }

    /// Returns an iterator over the entries in row-major order.
    pub fn entries_row_major(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Call a function on each entry and return the resulting matrix.
    pub fn transform<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix {
            entries: self.entries.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Swap two rows.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }

        let (i, j) = (i.min(j), i.max(j));
        let (top, bottom) = self.entries.split_at_mut(j * self.cols);
        top[i * self.cols..(i + 1) * self.cols]
            .swap_with_slice(&mut bottom[..self.cols]);
    }
}

impl<T: Copy + Num> Matrix<T> {
    /// Post-multiply a matrix with a vector.
    ///
    /// Entry `i` of the result is the dot product of row `i` with `rhs`.
    pub fn mul_vec_post(&self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(self.cols, rhs.dim(), "Dimension mismatch.");
        Vector::from_iter(self.rows, self.rows().map(|row| rhs.dot(row)))
    }
}

impl<T: Copy + SampleUniform + PartialOrd> Matrix<T> {
    /// Creates a random matrix whose entries are sampled uniformly and
    /// independently from `range`.
    ///
    /// The range must not be empty.
    pub fn random<Rand: Rng>(
        r: usize,
        c: usize,
        range: &RangeInclusive<T>,
        rng: &mut Rand,
    ) -> Self {
        Self::from_iter(
            r,
            c,
            std::iter::repeat_with(|| rng.random_range(range.clone())),
        )
    }
}

impl<T: Clone + Into<BigInt>> Matrix<T> {
    /// Computes the determinant exactly.
    ///
    /// This uses the fraction-free Bareiss algorithm, so every intermediate
    /// value is itself a minor of the matrix and all divisions are exact.
    /// The determinant of the 0×0 matrix is 1.
    ///
    /// Panics if the matrix is not square.
    pub fn determinant(&self) -> BigInt {
        assert!(self.is_square(), "Determinant of a non-square matrix.");
        let n = self.rows;
        let mut a = self.transform(|e| e.clone().into());

        let mut negate = false;
        let mut prev = BigInt::one();
        for k in 0..n.saturating_sub(1) {
            // Choose the first non-zero pivot in the kth column.
            let Some(pivot) = (k..n).find(|&i| !a[(i, k)].is_zero()) else {
                // The rest of the column is zero.
                return BigInt::zero();
            };

            if pivot != k {
                a.swap_rows(k, pivot);
                negate = !negate;
            }

            for (i, j) in iproduct!(k + 1..n, k + 1..n) {
                let e = (&a[(i, j)] * &a[(k, k)] - &a[(i, k)] * &a[(k, j)])
                    / &prev;
                a[(i, j)] = e;
            }

            prev = a[(k, k)].clone();
        }

        let det = match n {
            0 => BigInt::one(),
            _ => a[(n - 1, n - 1)].clone(),
        };

        if negate { -det } else { det }
    }

    /// Is the determinant zero?
    ///
    /// Non-square matrices are always considered singular.
    pub fn is_singular(&self) -> bool {
        !self.is_square() || self.determinant().is_zero()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        self.row(index)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        debug_assert!(r < self.rows && c < self.cols);
        &self.entries[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.entries[r * self.cols + c]
    }
}

impl<T: Debug> Debug for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    #[test]
    fn row() {
        let m = Matrix::<i64>::from_rows(&[[2, 3], [4, 5]]);
        assert_eq!(m.row(0), &[2, 3]);
        assert_eq!(m.row(1), &[4, 5]);
        assert_eq!(m[1], [4, 5]);
        assert_eq!(m[(1, 0)], 4);
    }

    #[test]
    fn rows_iter_rev() {
        let m = Matrix::<i64>::from_rows(&[[2, 3], [4, 5]]);
        let mut r = m.rows();
        assert_eq!(r.next_back().unwrap(), &[4, 5]);
        assert_eq!(r.next_back().unwrap(), &[2, 3]);
        assert!(r.next_back().is_none());
    }

    #[test]
    fn swap_rows() {
        let mut m = Matrix::<i64>::from_rows(&[[1, 2], [3, 4], [5, 6]]);
        m.swap_rows(2, 0);
        assert_eq!(m, Matrix::from_rows(&[[5, 6], [3, 4], [1, 2]]));
        m.swap_rows(1, 1);
        assert_eq!(m[1], [3, 4]);
    }

    #[test]
    fn mul_vec_post() {
        let m = Matrix::<i64>::from_rows(&[[1, 2], [-3, 4]]);
        let v = Vector::from_entries([5, 6]);
        assert_eq!(m.mul_vec_post(&v), [17, 9]);
    }

    #[test]
    fn determinant_small() {
        assert_eq!(Matrix::<i64>::empty().determinant(), BigInt::one());
        assert_eq!(Matrix::<i64>::from_rows(&[[-7]]).determinant(), (-7).into());
        assert_eq!(
            Matrix::<i64>::from_rows(&[[1, 2], [3, 4]]).determinant(),
            (-2).into()
        );
        let identity = Matrix::<i64>::from_rows(&[
            [1, 0, 0, 0],
            [0, 1, 0, 0],
            [0, 0, 1, 0],
            [0, 0, 0, 1],
        ]);
        assert_eq!(identity.determinant(), BigInt::one());
    }

    #[test]
    fn determinant_needs_pivoting() {
        // The top left entry is zero, so a row swap is necessary.
        let m = Matrix::<i64>::from_rows(&[[0, 2, 1], [1, 1, 1], [2, 0, 3]]);
        // 0*(3-0) - 2*(3-2) + 1*(0-2) = -4
        assert_eq!(m.determinant(), (-4).into());
    }

    #[test]
    fn singular() {
        let m = Matrix::<i64>::from_rows(&[[1, 2, 3], [2, 4, 6], [0, 1, 1]]);
        assert!(m.is_singular());
        let m = Matrix::<i64>::from_rows(&[[0, 0], [1, 1]]);
        assert!(m.is_singular());
        assert!(Matrix::<i64>::from_rows(&[[1, 0, 0], [0, 1, 0]]).is_singular());
    }

    /// Cofactor expansion along the first row, only for cross-checking.
    fn laplace(m: &Matrix<i64>) -> i128 {
        let n = m.num_rows();
        if n == 0 {
            return 1;
        }

        (0..n)
            .map(|c| {
                let minor = Matrix::from_iter(
                    n - 1,
                    n - 1,
                    iproduct!(1..n, (0..n).filter(|&j| j != c))
                        .map(|(i, j)| m[(i, j)]),
                );
                let sign = if c % 2 == 0 { 1 } else { -1 };
                sign * m[(0, c)] as i128 * laplace(&minor)
            })
            .sum()
    }

    #[test]
    fn determinant_matches_laplace() {
        let rng = &mut StdRng::seed_from_u64(0);
        for n in 0..6 {
            for _ in 0..50 {
                let m = Matrix::<i64>::random(n, n, &(-3..=3), rng);
                assert_eq!(m.determinant(), BigInt::from(laplace(&m)), "{m:?}");
            }
        }
    }
}
