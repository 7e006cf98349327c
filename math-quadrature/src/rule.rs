//! The quadrature rule type shared by every rule family.

use ndarray::{Array1, Array2, ArrayView1};

/// A quadrature rule on a reference domain.
///
/// `points` holds one sample point per row; `weights` matches `points` by row.
/// After construction the rule is immutable. The weights sum to the measure of
/// the reference domain (triangle area 1/2, tetrahedron volume 1/6, wedge
/// volume 1, circle circumference 2π, interval length 2).
#[derive(Debug, Clone)]
pub struct QuadratureRule {
    /// Rule name, e.g. "Felippa(4)"
    pub name: String,
    /// Polynomial degree the published rule claims to integrate exactly
    pub degree: u32,
    /// Sample points, one per row
    pub points: Array2<f64>,
    /// Integration weights, matching `points` by row
    pub weights: Array1<f64>,
}

impl QuadratureRule {
    pub(crate) fn new(
        name: impl Into<String>,
        degree: u32,
        points: Array2<f64>,
        weights: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(points.nrows(), weights.len());
        Self {
            name: name.into(),
            degree,
            points,
            weights,
        }
    }

    /// Number of sample points
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the rule has no points
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Spatial dimension of the sample points
    pub fn dim(&self) -> usize {
        self.points.ncols()
    }

    /// Sum of the weights; equals the measure of the reference domain
    pub fn weight_sum(&self) -> f64 {
        self.weights.sum()
    }

    /// Approximate the integral of `f` over the reference domain as the
    /// weighted sum of point evaluations.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(ArrayView1<'_, f64>) -> f64,
    {
        self.points
            .outer_iter()
            .zip(self.weights.iter())
            .map(|(x, w)| w * f(x))
            .sum()
    }
}
