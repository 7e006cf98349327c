//! Structured records for table-driven rules.
//!
//! Each embedded JSON table carries the rule's claimed degree plus one vector
//! per symmetry-orbit grouping. Rows are `[weight, param...]` with weights
//! normalized so the rule sums to 1 before domain scaling. Deserialization is
//! strict: an unrecognized key in a table is an error, a missing grouping is
//! an empty one.

use serde::Deserialize;

use crate::symmetry;

/// Coefficient table for a symmetric triangle rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriangleTable {
    /// Claimed polynomial exactness degree
    pub degree: u32,
    /// Centroid entries: `[weight]`, 1 point each
    #[serde(default)]
    pub s1: Vec<[f64; 1]>,
    /// 3-fold entries: `[weight, a]`, 3 points each
    #[serde(default)]
    pub s2: Vec<[f64; 2]>,
    /// 6-fold entries: `[weight, a, b]`, 6 points each
    #[serde(default)]
    pub s3: Vec<[f64; 3]>,
}

impl TriangleTable {
    /// Total point count implied by the orbit groupings.
    pub fn point_count(&self) -> usize {
        self.s1.len() + 3 * self.s2.len() + 6 * self.s3.len()
    }

    /// Expand the groupings into flattened barycentric points and weights,
    /// weights repeated per orbit in the same order as the points.
    pub fn expand(&self) -> (Vec<[f64; 3]>, Vec<f64>) {
        let mut points = Vec::with_capacity(self.point_count());
        let mut weights = Vec::with_capacity(self.point_count());
        for &[w] in &self.s1 {
            append(&mut points, &mut weights, w, symmetry::tri1());
        }
        for &[w, a] in &self.s2 {
            append(&mut points, &mut weights, w, symmetry::tri3(a));
        }
        for &[w, a, b] in &self.s3 {
            append(&mut points, &mut weights, w, symmetry::tri6(a, b));
        }
        (points, weights)
    }
}

/// Coefficient table for a symmetric tetrahedron rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TetrahedronTable {
    /// Claimed polynomial exactness degree
    pub degree: u32,
    /// Centroid entries: `[weight]`, 1 point each
    #[serde(default)]
    pub s4: Vec<[f64; 1]>,
    /// 4-fold entries: `[weight, a]`, 4 points each
    #[serde(default)]
    pub s31: Vec<[f64; 2]>,
    /// 6-fold entries: `[weight, a]`, 6 points each
    #[serde(default)]
    pub s22: Vec<[f64; 2]>,
}

impl TetrahedronTable {
    /// Total point count implied by the orbit groupings.
    pub fn point_count(&self) -> usize {
        self.s4.len() + 4 * self.s31.len() + 6 * self.s22.len()
    }

    /// Expand the groupings into flattened barycentric points and weights.
    pub fn expand(&self) -> (Vec<[f64; 4]>, Vec<f64>) {
        let mut points = Vec::with_capacity(self.point_count());
        let mut weights = Vec::with_capacity(self.point_count());
        for &[w] in &self.s4 {
            append(&mut points, &mut weights, w, symmetry::tet1());
        }
        for &[w, a] in &self.s31 {
            append(&mut points, &mut weights, w, symmetry::tet4(a));
        }
        for &[w, a] in &self.s22 {
            append(&mut points, &mut weights, w, symmetry::tet6(a));
        }
        (points, weights)
    }
}

fn append<const N: usize>(
    points: &mut Vec<[f64; N]>,
    weights: &mut Vec<f64>,
    w: f64,
    orbit: Vec<[f64; N]>,
) {
    weights.extend(std::iter::repeat(w).take(orbit.len()));
    points.extend(orbit);
}
