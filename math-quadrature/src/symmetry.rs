//! Symmetry-orbit expansion functions.
//!
//! Published rules list one representative parameter set per orbit; the full
//! point set is recovered by applying the domain's symmetry group. The wedge
//! orbits (`s3`, `s3_z`, `s21`, `s21_z`, `s111_z`) mix barycentric xy
//! coordinates with a Cartesian z offset; the simplex orbits (`tri*`, `tet*`)
//! permute full barycentric coordinates and feed the table-driven rules.
//!
//! Parameters come straight from the source publications and are not range
//! checked. The point order of each orbit is fixed: rule constructors repeat
//! each weight in exactly this order, and that positional pairing is what
//! makes the assembled rule correct.

/// Wedge centroid point, orbit size 1.
pub fn s3() -> Vec<[f64; 3]> {
    vec![[1.0 / 3.0, 1.0 / 3.0, 0.0]]
}

/// Wedge centroid duplicated at `±z`, orbit size 2.
pub fn s3_z(z: f64) -> Vec<[f64; 3]> {
    vec![[1.0 / 3.0, 1.0 / 3.0, z], [1.0 / 3.0, 1.0 / 3.0, -z]]
}

/// 3-fold orbit in the wedge midplane, `b = 1 - 2a`.
pub fn s21(a: f64) -> Vec<[f64; 3]> {
    let b = 1.0 - 2.0 * a;
    vec![[a, b, 0.0], [b, a, 0.0], [a, a, 0.0]]
}

/// The `s21` triple at `+z` then at `-z`, orbit size 6.
pub fn s21_z(a: f64, z: f64) -> Vec<[f64; 3]> {
    let b = 1.0 - 2.0 * a;
    vec![
        [a, b, z],
        [b, a, z],
        [a, a, z],
        [a, b, -z],
        [b, a, -z],
        [a, a, -z],
    ]
}

/// Full 6-fold permutation of `(a, b, c = 1 - a - b)` at `+z` then `-z`,
/// orbit size 12.
pub fn s111_z(a: f64, b: f64, z: f64) -> Vec<[f64; 3]> {
    let c = 1.0 - a - b;
    vec![
        [b, c, z],
        [a, b, z],
        [c, a, z],
        [c, b, z],
        [a, c, z],
        [b, a, z],
        [b, c, -z],
        [a, b, -z],
        [c, a, -z],
        [c, b, -z],
        [a, c, -z],
        [b, a, -z],
    ]
}

/// Triangle centroid in barycentric coordinates, orbit size 1.
pub fn tri1() -> Vec<[f64; 3]> {
    vec![[1.0 / 3.0; 3]]
}

/// Triangle 3-fold orbit of `(a, a, b = 1 - 2a)`.
pub fn tri3(a: f64) -> Vec<[f64; 3]> {
    let b = 1.0 - 2.0 * a;
    vec![[a, a, b], [a, b, a], [b, a, a]]
}

/// Triangle 6-fold orbit of three distinct barycentric coordinates.
pub fn tri6(a: f64, b: f64) -> Vec<[f64; 3]> {
    let c = 1.0 - a - b;
    vec![
        [a, b, c],
        [c, a, b],
        [b, c, a],
        [b, a, c],
        [c, b, a],
        [a, c, b],
    ]
}

/// Tetrahedron centroid in barycentric coordinates, orbit size 1.
pub fn tet1() -> Vec<[f64; 4]> {
    vec![[0.25; 4]]
}

/// Tetrahedron 4-fold orbit of `(a, a, a, b = 1 - 3a)`.
pub fn tet4(a: f64) -> Vec<[f64; 4]> {
    let b = 1.0 - 3.0 * a;
    vec![[a, a, a, b], [a, a, b, a], [a, b, a, a], [b, a, a, a]]
}

/// Tetrahedron 6-fold orbit of `(a, a, b, b)` with `b = 1/2 - a`.
pub fn tet6(a: f64) -> Vec<[f64; 4]> {
    let b = 0.5 - a;
    vec![
        [a, a, b, b],
        [a, b, a, b],
        [a, b, b, a],
        [b, a, a, b],
        [b, a, b, a],
        [b, b, a, a],
    ]
}
