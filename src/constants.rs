//! Physical constants, as raw SI `f64` and as [`Quantity`].
//!
//! Values follow CODATA 2018. The speed of light is exact by SI definition;
//! the other constants carry their published significant figures.

use crate::quantity::{Dimension, Quantity};

/// Speed of light in vacuum, m/s (exact).
pub const C: f64 = 299_792_458.0;
/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻².
// https://en.wikipedia.org/wiki/Gravitational_constant
pub const G: f64 = 6.674_30e-11;
/// Stefan-Boltzmann constant, W m⁻² K⁻⁴.
pub const SIGMA: f64 = 5.670_374_419e-8;
/// Vacuum permeability, H/m.
pub const MU_0: f64 = 1.256_637_062_12e-6;
/// Standard gravity, m/s² (exact).
pub const G_0: f64 = 9.806_65;

pub const SPEED_OF_LIGHT: Quantity = Quantity::from_si(C, Dimension::VELOCITY);
pub const GRAVITATIONAL_CONSTANT: Quantity =
    Quantity::from_si(G, Dimension::new(-1, 3, -2, 0, 0, 0));
pub const STEFAN_BOLTZMANN: Quantity = Quantity::from_si(SIGMA, Dimension::new(1, 0, -3, -4, 0, 0));
pub const VACUUM_PERMEABILITY: Quantity =
    Quantity::from_si(MU_0, Dimension::new(1, 1, -2, 0, 0, -2));
pub const STANDARD_GRAVITY: Quantity = Quantity::from_si(G_0, Dimension::ACCELERATION);
/// Solid angle of a full sphere, 4π sr.
pub const FULL_SPHERE: Quantity =
    Quantity::from_si(12.566_370_614_359_172, Dimension::SOLID_ANGLE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sphere_is_four_pi() {
        assert_eq!(FULL_SPHERE.si_value(), 4.0 * std::f64::consts::PI);
    }

    #[test]
    fn constant_dimensions_are_consistent() {
        // G·M/r² is an acceleration.
        let mass = Quantity::from_si(1.0, Dimension::MASS);
        let radius = Quantity::from_si(1.0, Dimension::LENGTH);
        let accel = GRAVITATIONAL_CONSTANT * mass / radius.powi(2);
        assert_eq!(accel.dimension(), Dimension::ACCELERATION);

        // σT⁴ is an irradiance.
        let temperature = Quantity::from_si(1.0, Dimension::TEMPERATURE);
        assert_eq!(
            (STEFAN_BOLTZMANN * temperature.powi(4)).dimension(),
            Dimension::IRRADIANCE
        );
    }
}
