use std::array::from_fn;
use std::ops::{Add, AddAssign, Mul};

use super::F;

/// Symmetric 4x4 matrix, only the upper triangle is stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymMatrix4 {
    pub(crate) data: [F; 10],
}

impl SymMatrix4 {
    #[inline]
    pub fn new(data: [F; 10]) -> Self {
        Self { data }
    }
    pub fn zero() -> Self {
        Self { data: [0.; 10] }
    }

    #[rustfmt::skip]
    pub const SYM_IDX: [[usize; 4]; 4] = [
      [0, 1, 2, 3],
      [1, 4, 5, 6],
      [2, 5, 7, 8],
      [3, 6, 8, 9],
    ];

    /// `p * p^T`
    #[inline]
    pub fn outer([a, b, c, d]: [F; 4]) -> Self {
        Self::new([
            a * a,
            a * b,
            a * c,
            a * d,
            b * b,
            b * c,
            b * d,
            c * c,
            c * d,
            d * d,
        ])
    }

    #[inline]
    pub fn v(&self, x: usize, y: usize) -> F {
        self.data[Self::SYM_IDX[x][y]]
    }

    pub fn vec_mul(&self, v: [F; 4]) -> [F; 4] {
        from_fn(|i| (0..4).map(|j| self.v(i, j) * v[j]).sum())
    }

    /// Upper-left 3x3 block.
    pub fn upper3(&self) -> [[F; 3]; 3] {
        from_fn(|r| from_fn(|c| self.v(r, c)))
    }

    pub fn to_dense(&self) -> [[F; 4]; 4] {
        from_fn(|r| from_fn(|c| self.v(r, c)))
    }
}

impl Add for SymMatrix4 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(from_fn(|i| self.data[i] + o.data[i]))
    }
}

impl AddAssign for SymMatrix4 {
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl Mul<F> for SymMatrix4 {
    type Output = Self;
    fn mul(self, o: F) -> Self {
        Self::new(from_fn(|i| self.data[i] * o))
    }
}
