//! Equidistant quadrature on the unit-circle circumference.
//!
//! `n` equally spaced points with uniform weights `2*pi/n` integrate
//! `cos^j(phi) * sin^k(phi)` exactly for every total degree up to `n - 1`:
//! such a monomial is a trigonometric polynomial of the same degree, and the
//! equidistant sum is exact until aliasing sets in at degree `n`.

use ndarray::{Array1, Array2};
use std::f64::consts::PI;

use crate::error::{QuadratureError, Result};
use crate::rule::QuadratureRule;

/// Equidistant rule with `n >= 1` points on the unit circumference,
/// exact to degree `n - 1`.
pub fn equidistant(n: usize) -> Result<QuadratureRule> {
    if n == 0 {
        return Err(QuadratureError::InvalidPointCount {
            family: "equidistant circle",
            n,
        });
    }

    let mut points = Vec::with_capacity(2 * n);
    for i in 0..n {
        let phi = 2.0 * PI * i as f64 / n as f64;
        points.push(phi.cos());
        points.push(phi.sin());
    }
    let weights = Array1::from_elem(n, 2.0 * PI / n as f64);

    Ok(QuadratureRule::new(
        format!("Equidistant({})", n),
        n as u32 - 1,
        Array2::from_shape_vec((n, 2), points).expect("point count matches shape"),
        weights,
    ))
}
