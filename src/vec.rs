use super::F;

use std::array::from_fn;

#[inline]
pub fn cross([x, y, z]: [F; 3], [a, b, c]: [F; 3]) -> [F; 3] {
    [y * c - z * b, z * a - x * c, x * b - y * a]
}

#[inline]
pub fn add<const N: usize>(a: [F; N], b: [F; N]) -> [F; N] {
    from_fn(|i| a[i] + b[i])
}

#[inline]
pub fn sub<const N: usize>(a: [F; N], b: [F; N]) -> [F; N] {
    from_fn(|i| a[i] - b[i])
}

/// L-2 norm of a vector
pub fn length<const N: usize>(v: [F; N]) -> F {
    dot(v, v).sqrt()
}

#[inline]
pub fn dot<const N: usize>(a: [F; N], b: [F; N]) -> F {
    (0..N).map(|i| a[i] * b[i]).sum()
}

#[inline]
pub fn kmul<const N: usize>(k: F, xyz: [F; N]) -> [F; N] {
    xyz.map(|v| v * k)
}

#[inline]
pub fn midpoint<const N: usize>(a: [F; N], b: [F; N]) -> [F; N] {
    kmul(0.5, add(a, b))
}
