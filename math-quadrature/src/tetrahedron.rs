//! Table-driven symmetric rules for the unit tetrahedron.
//!
//! Classic fully-symmetric rules of degrees 1, 2, 3 and 5; see e.g.
//!
//! Linbo Zhang, Tao Cui and Hui Liu,
//! A set of symmetric quadrature rules on triangles and tetrahedra,
//! Journal of Computational Mathematics, Vol. 27, No. 1, 2009, pages 89-96.
//!
//! Tables store unit-sum barycentric weight groupings; construction expands
//! the orbits, scales by the reference tetrahedron volume 1/6 and drops the
//! dependent barycentric coordinate.

use ndarray::{Array1, Array2};

use crate::error::{QuadratureError, Result};
use crate::rule::QuadratureRule;
use crate::table::TetrahedronTable;

const FAMILY: &str = "symmetric tetrahedron";

/// Reference tetrahedron volume, the global weight scale for unit-sum tables.
const MEASURE: f64 = 1.0 / 6.0;

static TABLES: [&str; 4] = [
    include_str!("../data/tetrahedron/sym_01.json"),
    include_str!("../data/tetrahedron/sym_02.json"),
    include_str!("../data/tetrahedron/sym_03.json"),
    include_str!("../data/tetrahedron/sym_04.json"),
];

/// Symmetric tetrahedron rule with the given index (1..=4).
///
/// Degrees by index: 1, 2, 3, 5.
pub fn symmetric(index: usize) -> Result<QuadratureRule> {
    let raw = index
        .checked_sub(1)
        .and_then(|i| TABLES.get(i).copied())
        .ok_or(QuadratureError::UnknownIndex {
            family: FAMILY,
            index,
            max: TABLES.len(),
        })?;
    let table: TetrahedronTable =
        serde_json::from_str(raw).map_err(|source| QuadratureError::BadTable {
            family: FAMILY,
            index,
            source,
        })?;

    let (bary, weights) = table.expand();
    let n = bary.len();

    let mut flat = Vec::with_capacity(3 * n);
    for p in &bary {
        flat.extend_from_slice(&p[1..]);
    }
    let weights = Array1::from_iter(weights.into_iter().map(|w| w * MEASURE));

    Ok(QuadratureRule::new(
        format!("TetSym({})", index),
        table.degree,
        Array2::from_shape_vec((n, 3), flat).expect("orbit sizes match shape"),
        weights,
    ))
}
