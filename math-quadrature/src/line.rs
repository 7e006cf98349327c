//! Gauss-Legendre quadrature on the reference interval `[-1, 1]`.

use ndarray::{Array1, Array2};

use crate::error::{QuadratureError, Result};
use crate::rule::QuadratureRule;

const FAMILY: &str = "Gauss-Legendre";
const MAX_ORDER: usize = 5;

/// Gauss-Legendre rule with `order` points, exact for polynomials of degree
/// `2 * order - 1`. Orders 1 through 5 are catalogued.
pub fn gauss_legendre(order: usize) -> Result<QuadratureRule> {
    let (nodes, weights): (Vec<f64>, Vec<f64>) = match order {
        1 => (vec![0.0], vec![2.0]),
        2 => {
            let x = 1.0 / 3.0_f64.sqrt();
            (vec![-x, x], vec![1.0, 1.0])
        }
        3 => {
            let x = (3.0 / 5.0_f64).sqrt();
            (vec![-x, 0.0, x], vec![5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0])
        }
        4 => {
            let a = (3.0 / 7.0 - 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let b = (3.0 / 7.0 + 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let wa = (18.0 + 30.0_f64.sqrt()) / 36.0;
            let wb = (18.0 - 30.0_f64.sqrt()) / 36.0;
            (vec![-b, -a, a, b], vec![wb, wa, wa, wb])
        }
        5 => {
            let a = (5.0 - 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let b = (5.0 + 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let wa = (322.0 + 13.0 * 70.0_f64.sqrt()) / 900.0;
            let wb = (322.0 - 13.0 * 70.0_f64.sqrt()) / 900.0;
            (
                vec![-b, -a, 0.0, a, b],
                vec![wb, wa, 128.0 / 225.0, wa, wb],
            )
        }
        _ => {
            return Err(QuadratureError::UnknownIndex {
                family: FAMILY,
                index: order,
                max: MAX_ORDER,
            });
        }
    };

    let n = nodes.len();
    Ok(QuadratureRule::new(
        format!("GaussLegendre({})", order),
        2 * order as u32 - 1,
        Array2::from_shape_vec((n, 1), nodes).expect("node count matches shape"),
        Array1::from_vec(weights),
    ))
}
