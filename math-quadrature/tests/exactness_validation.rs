//! Validation of claimed polynomial-exactness degrees
//!
//! Every catalogued rule is checked empirically: all monomials of total
//! degree up to the rule's claim are integrated numerically and compared
//! against closed-form exact integrals. A shortfall means the transcribed
//! coefficients are wrong.

use ndarray::ArrayView1;
use quadrature::check::{
    check_degree, check_degree_1d, exponents, integrate_monomial_over_interval,
    integrate_monomial_over_standard_simplex, integrate_monomial_over_unit_circle,
    integrate_monomial_over_unit_wedge,
};
use quadrature::{circle, line, tetrahedron, triangle, wedge, QuadratureRule};

const TOL: f64 = 1.0e-14;

/// Run the multi-dimensional degree check for a rule against an exact
/// monomial-integral function, up to the rule's claimed degree.
fn verified_degree<E>(rule: &QuadratureRule, exact: E) -> i32
where
    E: Fn(&[u32]) -> f64,
{
    let dim = rule.dim();
    check_degree(
        |f: &dyn Fn(ArrayView1<'_, f64>) -> f64| rule.integrate(f),
        exact,
        |degree| exponents(dim, degree),
        rule.degree,
        TOL,
    )
}

#[test]
fn test_triangle_rules_reach_claimed_degree() {
    for index in 1..=6 {
        let rule = triangle::dunavant(index).unwrap();
        assert_eq!(rule.points.nrows(), rule.weights.len());
        let degree = verified_degree(&rule, |k| integrate_monomial_over_standard_simplex(k));
        assert_eq!(
            degree, rule.degree as i32,
            "{} falls short of its claimed degree",
            rule.name
        );
    }
}

#[test]
fn test_tetrahedron_rules_reach_claimed_degree() {
    for index in 1..=4 {
        let rule = tetrahedron::symmetric(index).unwrap();
        assert_eq!(rule.points.nrows(), rule.weights.len());
        let degree = verified_degree(&rule, |k| integrate_monomial_over_standard_simplex(k));
        assert_eq!(
            degree, rule.degree as i32,
            "{} falls short of its claimed degree",
            rule.name
        );
    }
}

#[test]
fn test_wedge_rules_reach_claimed_degree() {
    for index in 1..=6 {
        let rule = wedge::felippa(index).unwrap();
        assert_eq!(rule.points.nrows(), rule.weights.len());
        let degree = verified_degree(&rule, |k| {
            integrate_monomial_over_unit_wedge([k[0], k[1], k[2]])
        });
        assert_eq!(
            degree, rule.degree as i32,
            "{} falls short of its claimed degree",
            rule.name
        );
    }
}

#[test]
fn test_circle_rules_reach_claimed_degree() {
    for n in 1..=8 {
        let rule = circle::equidistant(n).unwrap();
        let degree = verified_degree(&rule, |k| integrate_monomial_over_unit_circle([k[0], k[1]]));
        assert_eq!(
            degree,
            n as i32 - 1,
            "{} falls short of its claimed degree",
            rule.name
        );
    }
}

#[test]
fn test_line_rules_reach_claimed_degree() {
    for order in 1..=5 {
        let rule = line::gauss_legendre(order).unwrap();
        let degree = check_degree_1d(
            |f: &dyn Fn(f64) -> f64| rule.integrate(|x| f(x[0])),
            integrate_monomial_over_interval,
            rule.degree,
            TOL,
        );
        assert_eq!(
            degree, rule.degree as i32,
            "{} falls short of its claimed degree",
            rule.name
        );
    }
}

#[test]
fn test_overclaimed_rule_reports_shortfall() {
    // The centroid rule is exact for degree 1 only; inflate its claim and
    // the verification must come back lower
    let mut rule = triangle::dunavant(1).unwrap();
    rule.degree = 3;
    let degree = verified_degree(&rule, |k| integrate_monomial_over_standard_simplex(k));
    assert_eq!(degree, 1);
}

#[test]
fn test_weight_sums_match_domain_measures() {
    let cases: Vec<(QuadratureRule, f64)> = vec![
        (triangle::dunavant(4).unwrap(), 0.5),
        (tetrahedron::symmetric(4).unwrap(), 1.0 / 6.0),
        (wedge::felippa(5).unwrap(), 1.0),
        (circle::equidistant(6).unwrap(), 2.0 * std::f64::consts::PI),
        (line::gauss_legendre(3).unwrap(), 2.0),
    ];
    for (rule, measure) in cases {
        assert!(
            (rule.weight_sum() - measure).abs() < 1e-13,
            "{} weight sum {} != domain measure {}",
            rule.name,
            rule.weight_sum(),
            measure
        );
    }
}
