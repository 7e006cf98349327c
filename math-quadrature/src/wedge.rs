//! Felippa's quadrature rules for the unit wedge.
//!
//! The reference wedge is the unit triangle in barycentric xy coordinates
//! extruded over `[-1, 1]` in z, volume 1. Coefficients transcribed from:
//!
//! Carlos Felippa,
//! A compendium of FEM integration formulas for symbolic work,
//! Engineering Computation, Volume 21, Number 8, 2004, pages 867-890.

use ndarray::{Array1, Array2};

use crate::error::{QuadratureError, Result};
use crate::rule::QuadratureRule;
use crate::symmetry::{s111_z, s21, s21_z, s3, s3_z};

const FAMILY: &str = "Felippa wedge";
const MAX_INDEX: usize = 6;

/// Felippa's wedge rule with the given index (1..=6).
///
/// Degrees by index: 1, 2, 2, 4, 5, 6.
pub fn felippa(index: usize) -> Result<QuadratureRule> {
    match index {
        1 => Ok(assemble("Felippa(1)", 1, vec![(1.0, s3())])),
        2 => Ok(assemble(
            "Felippa(2)",
            2,
            vec![(1.0 / 6.0, s21_z(1.0 / 6.0, (1.0f64 / 3.0).sqrt()))],
        )),
        3 => Ok(assemble(
            "Felippa(3)",
            2,
            vec![(1.0 / 6.0, s21_z(0.5, (1.0f64 / 3.0).sqrt()))],
        )),
        4 => Ok(assemble(
            "Felippa(4)",
            4,
            vec![
                (
                    0.6205044157722541e-01,
                    s21_z(0.4459484909159649, 0.7745966692414834),
                ),
                (
                    0.3054215101536719e-01,
                    s21_z(0.9157621350977074e-01, 0.7745966692414834),
                ),
                (0.9928070652356065e-01, s21(0.4459484909159649)),
                (0.4886744162458750e-01, s21(0.9157621350977074e-01)),
            ],
        )),
        5 => Ok(assemble(
            "Felippa(5)",
            5,
            vec![
                (
                    0.3498310570689643e-01,
                    s21_z(0.1012865073234563, 0.7745966692414834),
                ),
                (
                    0.3677615355236283e-01,
                    s21_z(0.4701420641051151, 0.7745966692414834),
                ),
                (0.6250000000000000e-01, s3_z(0.7745966692414834)),
                (0.5597296913103428e-01, s21(0.1012865073234563)),
                (0.5884184568378053e-01, s21(0.4701420641051151)),
                (0.1000000000000000, s3()),
            ],
        )),
        6 => Ok(assemble(
            "Felippa(6)",
            6,
            vec![
                (
                    0.8843323515718317e-02,
                    s21_z(0.6308901449150223e-01, -0.8611363115940526),
                ),
                (
                    0.2031233592848984e-01,
                    s21_z(0.2492867451709104, -0.8611363115940526),
                ),
                (
                    0.1441007403935041e-01,
                    s111_z(
                        0.5314504984481695e-01,
                        0.3103524510337844,
                        0.8611363115940526,
                    ),
                ),
                (
                    0.1657912966938509e-01,
                    s21_z(0.6308901449150223e-01, 0.3399810435848563),
                ),
                (
                    0.3808080193469984e-01,
                    s21_z(0.2492867451709104, 0.3399810435848563),
                ),
                (
                    0.2701546376983638e-01,
                    s111_z(
                        0.5314504984481695e-01,
                        0.3103524510337844,
                        0.3399810435848563,
                    ),
                ),
            ],
        )),
        _ => Err(QuadratureError::UnknownIndex {
            family: FAMILY,
            index,
            max: MAX_INDEX,
        }),
    }
}

/// Concatenate `(weight, orbit)` groups into a rule. Each weight is repeated
/// once per point of its orbit, which keeps the weight and point orders
/// positionally aligned by construction.
fn assemble(name: &str, degree: u32, groups: Vec<(f64, Vec<[f64; 3]>)>) -> QuadratureRule {
    let n: usize = groups.iter().map(|(_, orbit)| orbit.len()).sum();
    let mut flat = Vec::with_capacity(3 * n);
    let mut weights = Vec::with_capacity(n);
    for (w, orbit) in groups {
        for p in orbit {
            flat.extend_from_slice(&p);
            weights.push(w);
        }
    }
    QuadratureRule::new(
        name,
        degree,
        Array2::from_shape_vec((n, 3), flat).expect("orbit sizes match shape"),
        Array1::from_vec(weights),
    )
}
