//! Extended-precision path for the Lorentz factor and relativistic kinetic
//! energy.
//!
//! In double precision `1 − (v/c)²` rounds to 1 for slow speeds and loses
//! most of its digits just below `c`. Here β² and 1 − β² are formed in 128-bit
//! fixed point, and γ − 1 is evaluated as `β²/(s·(1 + s))` with
//! `s = sqrt(1 − β²)`, which has no cancellation at either end.

use az::Cast;

use crate::constants::SPEED_OF_LIGHT;
use crate::error::Result;
use crate::quantity::{Dimension, Quantity};
use crate::relativity::beta;

type ExtendedScalar = fixed::types::U1F127;

struct BetaTerms {
    beta_squared: f64,
    one_minus_beta_squared: f64,
}

fn beta_terms(operation: &'static str, velocity: Quantity) -> Result<BetaTerms> {
    let beta = ExtendedScalar::from_num(beta(operation, velocity)?.abs());
    let beta_squared = beta * beta;
    let one_minus_beta_squared = ExtendedScalar::from_num(1) - beta_squared;
    log::trace!("{operation}: 1 - beta^2 = {one_minus_beta_squared}");
    Ok(BetaTerms {
        beta_squared: beta_squared.cast(),
        one_minus_beta_squared: one_minus_beta_squared.cast(),
    })
}

/// [`crate::relativity::lorentz_factor`] with 1 − β² formed in fixed point.
pub fn lorentz_factor_extended(velocity: Quantity) -> Result<f64> {
    let terms = beta_terms("lorentz_factor_extended", velocity)?;
    Ok(1.0 / terms.one_minus_beta_squared.sqrt())
}

/// γ − 1 without cancellation.
pub fn lorentz_factor_minus_one_extended(velocity: Quantity) -> Result<f64> {
    let terms = beta_terms("lorentz_factor_minus_one_extended", velocity)?;
    let s = terms.one_minus_beta_squared.sqrt();
    Ok(terms.beta_squared / (s * (1.0 + s)))
}

/// [`crate::relativity::relativistic_kinetic_energy`] accurate from rest up
/// to just below `c`.
pub fn relativistic_kinetic_energy_extended(
    mass: Quantity,
    velocity: Quantity,
) -> Result<Quantity> {
    const OP: &str = "relativistic_kinetic_energy_extended";
    let mass = mass.expect(Dimension::MASS, OP)?.non_negative(OP, "mass")?;
    Ok(mass * SPEED_OF_LIGHT.powi(2) * lorentz_factor_minus_one_extended(velocity)?)
}
