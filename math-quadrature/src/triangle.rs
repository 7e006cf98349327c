//! Table-driven symmetric rules for the unit triangle.
//!
//! Coefficients from the Dunavant family:
//!
//! D. A. Dunavant,
//! High degree efficient symmetrical Gaussian quadrature rules for the
//! triangle, International Journal for Numerical Methods in Engineering,
//! Volume 21, 1985, pages 1129-1148.
//!
//! Each table stores unit-sum barycentric weight groupings; construction
//! expands the orbits, scales the weights by the reference triangle area 1/2
//! and drops the dependent barycentric coordinate to obtain Cartesian points
//! on the triangle (0,0), (1,0), (0,1).

use ndarray::{Array1, Array2};

use crate::error::{QuadratureError, Result};
use crate::rule::QuadratureRule;
use crate::table::TriangleTable;

const FAMILY: &str = "Dunavant triangle";

/// Reference triangle area, the global weight scale for unit-sum tables.
const MEASURE: f64 = 0.5;

static TABLES: [&str; 6] = [
    include_str!("../data/triangle/dunavant_01.json"),
    include_str!("../data/triangle/dunavant_02.json"),
    include_str!("../data/triangle/dunavant_03.json"),
    include_str!("../data/triangle/dunavant_04.json"),
    include_str!("../data/triangle/dunavant_05.json"),
    include_str!("../data/triangle/dunavant_06.json"),
];

/// Dunavant's triangle rule with the given index (1..=6); the index equals
/// the rule's exactness degree.
pub fn dunavant(index: usize) -> Result<QuadratureRule> {
    let raw = index
        .checked_sub(1)
        .and_then(|i| TABLES.get(i).copied())
        .ok_or(QuadratureError::UnknownIndex {
            family: FAMILY,
            index,
            max: TABLES.len(),
        })?;
    let table: TriangleTable =
        serde_json::from_str(raw).map_err(|source| QuadratureError::BadTable {
            family: FAMILY,
            index,
            source,
        })?;

    let (bary, weights) = table.expand();
    let n = bary.len();

    // Cartesian coordinates: drop the first (dependent) barycentric coordinate
    let mut flat = Vec::with_capacity(2 * n);
    for p in &bary {
        flat.extend_from_slice(&p[1..]);
    }
    let weights = Array1::from_iter(weights.into_iter().map(|w| w * MEASURE));

    Ok(QuadratureRule::new(
        format!("Dunavant({})", index),
        table.degree,
        Array2::from_shape_vec((n, 2), flat).expect("orbit sizes match shape"),
        weights,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_counts_follow_orbit_multiplicities() {
        let expected = [1, 3, 4, 6, 7, 12];
        for (index, &count) in (1..=6).zip(expected.iter()) {
            let rule = dunavant(index).unwrap();
            assert_eq!(rule.len(), count, "Dunavant({}) point count", index);
        }
    }

    #[test]
    fn test_weights_sum_to_triangle_area() {
        for index in 1..=6 {
            let rule = dunavant(index).unwrap();
            assert!(
                (rule.weight_sum() - 0.5).abs() < 1e-14,
                "Dunavant({}) weight sum = {}",
                index,
                rule.weight_sum()
            );
        }
    }

    #[test]
    fn test_centroid_rule() {
        let rule = dunavant(1).unwrap();
        assert_eq!(rule.len(), 1);
        assert!((rule.points[[0, 0]] - 1.0 / 3.0).abs() < 1e-15);
        assert!((rule.points[[0, 1]] - 1.0 / 3.0).abs() < 1e-15);
        assert!((rule.weights[0] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_points_inside_closed_triangle() {
        // Dunavant(3) has a negative centroid weight but all points stay
        // inside the triangle
        for index in 1..=6 {
            let rule = dunavant(index).unwrap();
            for p in rule.points.outer_iter() {
                assert!(p[0] >= 0.0 && p[1] >= 0.0 && p[0] + p[1] <= 1.0 + 1e-14);
            }
        }
    }

    #[test]
    fn test_unknown_index_is_fatal() {
        assert!(matches!(
            dunavant(0),
            Err(QuadratureError::UnknownIndex { index: 0, max: 6, .. })
        ));
        assert!(dunavant(7).is_err());
    }
}
