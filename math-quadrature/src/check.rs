//! Polynomial-exactness verification.
//!
//! A rule claiming degree `d` must reproduce the exact integral of every
//! monomial of total degree `<= d` over its reference domain. The helpers
//! here evaluate monomials at the rule's points, compare against closed-form
//! Beta/Gamma integrals, and report the largest degree that actually holds.
//!
//! The closed forms use `lgamma` so that high-degree factorials never
//! overflow; monomial evaluation works in the log domain for the same reason,
//! with explicit sign and zero corrections for nonpositive coordinates.

use libm::lgamma;
use ndarray::ArrayView1;

/// Error slack for the 1-D check, in multiples of machine epsilon.
pub const SLACK_1D: f64 = 1.0e1;

/// Error slack for the multi-dimensional check, in multiples of machine
/// epsilon. Empirically tuned: accumulated floating-point error grows with
/// dimensionality and point count.
pub const SLACK_ND: f64 = 1.0e5;

/// All non-negative integer exponent tuples of length `dim` with the given
/// total degree, ordered by descending leading exponent.
pub fn exponents(dim: usize, degree: u32) -> Vec<Vec<u32>> {
    assert!(dim >= 1, "exponent tuples need at least one dimension");
    if dim == 1 {
        return vec![vec![degree]];
    }
    let mut out = Vec::new();
    for lead in (0..=degree).rev() {
        for tail in exponents(dim - 1, degree - lead) {
            let mut k = Vec::with_capacity(dim);
            k.push(lead);
            k.extend(tail);
            out.push(k);
        }
    }
    out
}

/// Exact integral of `x0^k0 * x1^k1 * ...` over the standard simplex
/// (unit triangle, unit tetrahedron, ...):
///
/// `prod(k_i!) / (dim + sum(k_i))!`
///
/// evaluated as `exp(sum(lgamma(k_i + 1)) - lgamma(sum(k_i + 1) + 1))`.
pub fn integrate_monomial_over_standard_simplex(k: &[u32]) -> f64 {
    let num: f64 = k.iter().map(|&ki| lgamma(ki as f64 + 1.0)).sum();
    let den = lgamma(k.iter().map(|&ki| ki as f64 + 1.0).sum::<f64>() + 1.0);
    (num - den).exp()
}

/// Exact integral of `cos^k0(phi) * sin^k1(phi)` over `[0, 2pi]`.
///
/// Zero whenever either exponent is odd; otherwise the Beta-function identity
/// `2 B((k0+1)/2, (k1+1)/2)` expressed through `lgamma`.
pub fn integrate_monomial_over_unit_circle(k: [u32; 2]) -> f64 {
    if k[0] % 2 == 1 || k[1] % 2 == 1 {
        return 0.0;
    }
    2.0 * (lgamma(0.5 * (k[0] as f64 + 1.0)) + lgamma(0.5 * (k[1] as f64 + 1.0))
        - lgamma(0.5 * (k[0] + k[1]) as f64 + 1.0))
        .exp()
}

/// Exact integral of `x^k` over `[-1, 1]`.
pub fn integrate_monomial_over_interval(k: u32) -> f64 {
    if k % 2 == 1 {
        0.0
    } else {
        2.0 / (k as f64 + 1.0)
    }
}

/// Exact monomial integral over the unit wedge (unit triangle in xy,
/// `[-1, 1]` in z): the xy and z parts factorize.
pub fn integrate_monomial_over_unit_wedge(k: [u32; 3]) -> f64 {
    integrate_monomial_over_standard_simplex(&k[..2]) * integrate_monomial_over_interval(k[2])
}

/// Evaluate the monomial with exponents `k` at the point `x` via a log-domain
/// product, `exp(sum(k_i * ln|x_i|))`.
///
/// Two corrections keep this valid on all of the reference domains:
/// the sign is recovered from the parity of odd exponents applied to negative
/// coordinates, and a positive exponent on an exactly-zero coordinate forces
/// the result to 0 (`0^positive = 0`, but `ln(0)` is undefined).
pub fn eval_monomial(k: &[u32], x: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(k.len(), x.len());
    let mut log_sum = 0.0;
    let mut negative_count = 0u32;
    for (&ki, &xi) in k.iter().zip(x.iter()) {
        if ki == 0 {
            continue;
        }
        if xi == 0.0 {
            return 0.0;
        }
        log_sum += ki as f64 * xi.abs().ln();
        if xi < 0.0 && ki % 2 == 1 {
            negative_count += 1;
        }
    }
    let sign = if negative_count % 2 == 1 { -1.0 } else { 1.0 };
    sign * log_sum.exp()
}

/// Empirically determine the exactness degree of a multi-dimensional rule.
///
/// `quadrature` maps an integrand to the rule's weighted-sum approximation,
/// `exact` maps exponent tuples to closed-form integrals and `exponents`
/// generates all tuples of a requested total degree. Monomials are checked in
/// increasing total degree; the result is `max_degree` if every one passes,
/// otherwise the total degree of the first failure minus one (so a rule that
/// cannot even integrate constants reports -1).
pub fn check_degree<Q, E, G>(
    quadrature: Q,
    exact: E,
    exponents: G,
    max_degree: u32,
    tol: f64,
) -> i32
where
    Q: Fn(&dyn Fn(ArrayView1<'_, f64>) -> f64) -> f64,
    E: Fn(&[u32]) -> f64,
    G: Fn(u32) -> Vec<Vec<u32>>,
{
    let eps = f64::EPSILON;
    for degree in 0..=max_degree {
        for k in exponents(degree) {
            let approx = quadrature(&|x| eval_monomial(&k, x));
            let exact_val = exact(&k);
            let alpha = exact_val.abs() * tol + (SLACK_ND + tol + exact_val.abs()) * eps;
            if (exact_val - approx).abs() > alpha {
                return k.iter().sum::<u32>() as i32 - 1;
            }
        }
    }
    max_degree as i32
}

/// 1-D variant of [`check_degree`]: plain powers `x^0 .. x^max_degree`, no
/// exponent-tuple or log-domain machinery needed.
pub fn check_degree_1d<Q, E>(quadrature: Q, exact: E, max_degree: u32, tol: f64) -> i32
where
    Q: Fn(&dyn Fn(f64) -> f64) -> f64,
    E: Fn(u32) -> f64,
{
    let eps = f64::EPSILON;
    for degree in 0..=max_degree {
        let approx = quadrature(&|x: f64| x.powi(degree as i32));
        let exact_val = exact(degree);
        let alpha = exact_val.abs() * tol + (SLACK_1D + tol + exact_val.abs()) * eps;
        if (exact_val - approx).abs() > alpha {
            return degree as i32 - 1;
        }
    }
    max_degree as i32
}
