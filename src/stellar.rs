//! Stellar output and planetary radiative balance.
//!
//! Irradiance is computed from the fraction of the star's output that a body
//! intercepts, i.e. the body's solid angle as seen from the star over the
//! full sphere, then spread over the body's cross-section.

use std::f64::consts::PI;

use crate::constants::{FULL_SPHERE, STEFAN_BOLTZMANN};
use crate::error::{PhysicsError, Result};
use crate::geometry::cone_solid_angle;
use crate::quantity::{Dimension, Quantity};

pub(crate) fn check_albedo(operation: &'static str, albedo: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&albedo) {
        Ok(albedo)
    } else {
        Err(PhysicsError::domain(operation, "albedo", albedo, "must lie in [0, 1]"))
    }
}

/// Black-body luminosity `4π·r²·σ·T⁴`.
pub fn stellar_luminosity(star_radius: Quantity, surface_temperature: Quantity) -> Result<Quantity> {
    const OP: &str = "stellar_luminosity";
    let radius = star_radius
        .expect(Dimension::LENGTH, OP)?
        .non_negative(OP, "star radius")?;
    let temperature = surface_temperature
        .expect(Dimension::TEMPERATURE, OP)?
        .non_negative(OP, "surface temperature")?;
    Ok(4.0 * PI * radius.powi(2) * STEFAN_BOLTZMANN * temperature.powi(4))
}

/// Power a body of `body_radius` at `orbit_radius` intercepts, `L·Ω/4π`.
pub fn intercepted_power(
    luminosity: Quantity,
    orbit_radius: Quantity,
    body_radius: Quantity,
) -> Result<Quantity> {
    const OP: &str = "intercepted_power";
    let luminosity = luminosity
        .expect(Dimension::POWER, OP)?
        .non_negative(OP, "luminosity")?;
    let omega = cone_solid_angle(orbit_radius, body_radius)?;
    Ok(luminosity * omega / FULL_SPHERE)
}

/// Flux density at the body: intercepted power over its cross-section.
pub fn stellar_irradiance(
    luminosity: Quantity,
    orbit_radius: Quantity,
    body_radius: Quantity,
) -> Result<Quantity> {
    const OP: &str = "stellar_irradiance";
    let body_radius = body_radius
        .expect(Dimension::LENGTH, OP)?
        .positive(OP, "body radius")?;
    let power = intercepted_power(luminosity, orbit_radius, body_radius)?;
    Ok(power / (PI * body_radius.powi(2)))
}

/// `(F·(1 − A)/(4σ))^¼` for a fast-rotating body.
pub fn planetary_equilibrium_temperature(irradiance: Quantity, albedo: f64) -> Result<Quantity> {
    const OP: &str = "planetary_equilibrium_temperature";
    let irradiance = irradiance
        .expect(Dimension::IRRADIANCE, OP)?
        .non_negative(OP, "irradiance")?;
    let albedo = check_albedo(OP, albedo)?;
    (irradiance * (1.0 - albedo) / (4.0 * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Equilibrium temperature from the star's luminosity and the body's orbit.
pub fn planetary_equilibrium_temperature_from_star(
    luminosity: Quantity,
    orbit_radius: Quantity,
    body_radius: Quantity,
    albedo: f64,
) -> Result<Quantity> {
    let irradiance = stellar_irradiance(luminosity, orbit_radius, body_radius)?;
    planetary_equilibrium_temperature(irradiance, albedo)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::*;

    fn sun_luminosity() -> Quantity {
        Quantity::new(1.0, SOLAR_LUMINOSITY)
    }

    #[test]
    fn sun_luminosity_from_radius_and_temperature() {
        let l = stellar_luminosity(Quantity::new(695_700.0, KILOMETER), Quantity::new(5772.0, KELVIN))
            .unwrap();
        assert_eq!(l.dimension(), Dimension::POWER);
        assert_relative_eq!(l.value_in(SOLAR_LUMINOSITY).unwrap(), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn solar_constant_at_one_au() {
        let f = stellar_irradiance(
            sun_luminosity(),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
            Quantity::new(6_371.0, KILOMETER),
        )
        .unwrap();
        assert_relative_eq!(f.value_in(WATT_PER_SQUARE_METER).unwrap(), 1361.0, max_relative = 1e-3);
    }

    #[test]
    fn intercepted_power_is_a_small_fraction() {
        let p = intercepted_power(
            sun_luminosity(),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
            Quantity::new(6_371.0, KILOMETER),
        )
        .unwrap();
        assert_eq!(p.dimension(), Dimension::POWER);
        assert_relative_eq!(p.value_in(WATT).unwrap(), 1.74e17, max_relative = 1e-2);
    }

    #[test]
    fn earth_equilibrium_temperature() {
        let t = planetary_equilibrium_temperature_from_star(
            sun_luminosity(),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
            Quantity::new(6_371.0, KILOMETER),
            0.306,
        )
        .unwrap();
        assert_eq!(t.dimension(), Dimension::TEMPERATURE);
        assert_relative_eq!(t.value_in(KELVIN).unwrap(), 254.0, epsilon = 1.0);
    }

    #[test]
    fn irradiance_checks_radius_dimension_first() {
        let err = stellar_irradiance(
            sun_luminosity(),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
            Quantity::new(-1.0, KILOGRAM),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));
        assert!(matches!(
            stellar_irradiance(
                sun_luminosity(),
                Quantity::new(1.0, ASTRONOMICAL_UNIT),
                Quantity::new(-1.0, KILOMETER),
            ),
            Err(PhysicsError::Domain { .. })
        ));
    }

    #[test]
    fn albedo_out_of_range() {
        let f = Quantity::new(1361.0, WATT_PER_SQUARE_METER);
        assert!(planetary_equilibrium_temperature(f, 1.5).is_err());
        assert!(planetary_equilibrium_temperature(f, -0.1).is_err());
        assert_eq!(planetary_equilibrium_temperature(f, 1.0).unwrap().si_value(), 0.0);
    }
}
