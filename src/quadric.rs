use super::sym::SymMatrix4;
use super::{F, cross, dot, kmul, length, midpoint, sub};

use core::ops::{Add, AddAssign, Mul};

/// Triangles whose unnormalized normal is shorter than this have zero area.
pub const DEGENERATE_EPS: F = 1e-12;
/// Smallest pivot accepted by [`solve3`] before the system counts as singular.
pub const PIVOT_EPS: F = 1e-12;

/// Sum of squared distances to a set of planes, as a symmetric 4x4 matrix acting
/// on homogeneous points `(x, y, z, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadric {
    pub m: SymMatrix4,
}

impl Quadric {
    /// `K = p * p^T` for the plane `ax + by + cz + d = 0`.
    pub fn from_plane(p: [F; 4]) -> Self {
        Self {
            m: SymMatrix4::outer(p),
        }
    }

    /// Plane `(a, b, c, d)` with unit normal through a triangle, or `None` if the
    /// triangle has zero area.
    pub fn plane([p0, p1, p2]: [[F; 3]; 3]) -> Option<[F; 4]> {
        let n = cross(sub(p1, p0), sub(p2, p0));
        let len = length(n);
        if len < DEGENERATE_EPS {
            return None;
        }
        let n = kmul(len.recip(), n);
        let [a, b, c] = n;
        Some([a, b, c, -dot(n, p0)])
    }

    pub fn from_triangle(tri: [[F; 3]; 3]) -> Option<Self> {
        Self::plane(tri).map(Self::from_plane)
    }

    /// `v'^T Q v'` with `v' = (x, y, z, 1)`.
    pub fn cost(&self, [x, y, z]: [F; 3]) -> F {
        let v = [x, y, z, 1.];
        dot(v, self.m.vec_mul(v))
    }

    /// Point minimizing [`Quadric::cost`], if the 3x3 system is well conditioned.
    pub fn optimal_point(&self) -> Option<[F; 3]> {
        let a = self.m.upper3();
        let b = [-self.m.v(0, 3), -self.m.v(1, 3), -self.m.v(2, 3)];
        solve3(a, b)
    }

    /// Contraction target for an edge between `p0` and `p1` under this quadric.
    /// Falls back to the midpoint when the system is singular.
    pub fn point(&self, p0: [F; 3], p1: [F; 3]) -> [F; 3] {
        self.optimal_point().unwrap_or_else(|| midpoint(p0, p1))
    }
}

/// Solves `A x = b` by Gaussian elimination with partial pivoting.
/// Returns `None` if a pivot falls below [`PIVOT_EPS`].
pub fn solve3(a: [[F; 3]; 3], b: [F; 3]) -> Option<[F; 3]> {
    let mut m = [
        [a[0][0], a[0][1], a[0][2], b[0]],
        [a[1][0], a[1][1], a[1][2], b[1]],
        [a[2][0], a[2][1], a[2][2], b[2]],
    ];
    for i in 0..3 {
        let mut piv = i;
        let mut pv = m[i][i].abs();
        for (r, row) in m.iter().enumerate().skip(i + 1) {
            let av = row[i].abs();
            if av > pv {
                piv = r;
                pv = av;
            }
        }
        if pv < PIVOT_EPS {
            return None;
        }
        m.swap(i, piv);

        let div = m[i][i];
        for c in i..4 {
            m[i][c] /= div;
        }
        let pivot_row = m[i];
        for row in m.iter_mut().skip(i + 1) {
            let f = row[i];
            for c in i..4 {
                row[c] -= f * pivot_row[c];
            }
        }
    }

    let mut x = [0.; 3];
    for i in (0..3).rev() {
        let mut s = m[i][3];
        for c in i + 1..3 {
            s -= m[i][c] * x[c];
        }
        x[i] = s;
    }
    Some(x)
}

impl Add for Quadric {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self { m: self.m + o.m }
    }
}

impl AddAssign for Quadric {
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl Mul<F> for Quadric {
    type Output = Self;
    fn mul(self, o: F) -> Self {
        Self { m: self.m * o }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quadric_has_no_cost() {
        assert_eq!(Quadric::default().cost([1., 2., 3.]), 0.);
    }

    #[test]
    fn test_plane_quadric_measures_squared_distance() {
        let q = Quadric::from_triangle([[0., 0., 0.], [1., 0., 0.], [0., 1., 0.]]).unwrap();
        assert!(q.cost([5., -3., 0.]).abs() < 1e-12);
        assert!((q.cost([0., 0., 2.]) - 4.).abs() < 1e-12);
    }

    #[test]
    fn test_plane_offset() {
        let [a, b, c, d] = Quadric::plane([[0., 0., 1.], [1., 0., 1.], [0., 1., 1.]]).unwrap();
        assert_eq!([a, b, c], [0., 0., 1.]);
        assert_eq!(d, -1.);
    }

    #[test]
    fn test_degenerate_triangle() {
        // collinear
        assert!(Quadric::plane([[0., 0., 0.], [1., 1., 1.], [2., 2., 2.]]).is_none());
        // repeated corner
        assert!(Quadric::from_triangle([[1., 0., 0.], [1., 0., 0.], [0., 1., 0.]]).is_none());
    }

    #[test]
    fn test_optimal_point_at_plane_intersection() {
        let q = Quadric::from_plane([1., 0., 0., -1.])
            + Quadric::from_plane([0., 1., 0., -2.])
            + Quadric::from_plane([0., 0., 1., -3.]);
        let [x, y, z] = q.optimal_point().unwrap();
        assert!((x - 1.).abs() < 1e-12);
        assert!((y - 2.).abs() < 1e-12);
        assert!((z - 3.).abs() < 1e-12);
        assert!(q.cost([x, y, z]).abs() < 1e-12);
    }

    #[test]
    fn test_singular_falls_back_to_midpoint() {
        // a single plane leaves two free directions
        let q = Quadric::from_plane([0., 0., 1., 0.]) * 3.;
        assert!(q.optimal_point().is_none());
        assert_eq!(q.point([0., 0., 0.], [2., 4., 0.]), [1., 2., 0.]);
    }

    #[test]
    fn test_solve3_pivots() {
        // zero on the leading diagonal needs a row swap
        let a = [[0., 2., 0.], [1., 0., 0.], [0., 0., 4.]];
        let x = solve3(a, [4., 3., 8.]).unwrap();
        assert_eq!(x, [3., 2., 2.]);
        assert!(solve3([[1., 2., 3.], [2., 4., 6.], [0., 0., 1.]], [1., 2., 3.]).is_none());
    }
}
