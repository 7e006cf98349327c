//! Precomputed quadrature rules for reference domains
//!
//! This crate provides published quadrature rules (sample points and weights)
//! for the reference domains used in finite element integration, together with
//! helpers that verify the polynomial exactness degree each rule claims.
//!
//! # Features
//!
//! - **Line**: Gauss-Legendre rules on `[-1, 1]`
//! - **Triangle**: table-driven symmetric rules (Dunavant family)
//! - **Tetrahedron**: table-driven symmetric rules
//! - **Wedge**: Felippa's compendium rules, built from symmetry orbits
//! - **Circle**: equidistant rules on the unit circumference
//! - **Verification**: empirical exactness-degree checks against closed-form
//!   monomial integrals
//!
//! # Example
//!
//! ```ignore
//! use quadrature::{triangle, check};
//!
//! let rule = triangle::dunavant(5)?;
//! let degree = check::check_degree(
//!     |f| rule.integrate(f),
//!     |k| check::integrate_monomial_over_standard_simplex(k),
//!     |d| check::exponents(2, d),
//!     rule.degree,
//!     1.0e-14,
//! );
//! assert_eq!(degree, rule.degree as i32);
//! ```

pub mod check;
pub mod circle;
pub mod error;
pub mod line;
pub mod rule;
pub mod symmetry;
pub mod table;
pub mod tetrahedron;
pub mod triangle;
pub mod wedge;

pub use error::{QuadratureError, Result};
pub use rule::QuadratureRule;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
