//! Newtonian gravity and two-body orbit formulas.

use std::f64::consts::TAU;

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::error::{PhysicsError, Result};
use crate::orbit_math;
use crate::quantity::{Dimension, Quantity};

pub(crate) fn check_eccentricity(operation: &'static str, eccentricity: f64) -> Result<f64> {
    if (0.0..1.0).contains(&eccentricity) {
        Ok(eccentricity)
    } else {
        Err(PhysicsError::domain(
            operation,
            "eccentricity",
            eccentricity,
            "closed orbits need 0 <= e < 1",
        ))
    }
}

/// Surface gravitational acceleration `G·m/r²`.
pub fn gravity(mass: Quantity, radius: Quantity) -> Result<Quantity> {
    const OP: &str = "gravity";
    let mass = mass.expect(Dimension::MASS, OP)?.non_negative(OP, "mass")?;
    let radius = radius.expect(Dimension::LENGTH, OP)?.positive(OP, "radius")?;
    Ok(GRAVITATIONAL_CONSTANT * mass / radius.powi(2))
}

/// Kepler's third law, `2π·sqrt(a³/(G·M))`.
pub fn orbital_period(parent_mass: Quantity, semi_major_axis: Quantity) -> Result<Quantity> {
    const OP: &str = "orbital_period";
    let parent_mass = parent_mass
        .expect(Dimension::MASS, OP)?
        .positive(OP, "parent mass")?;
    let a = semi_major_axis
        .expect(Dimension::LENGTH, OP)?
        .positive(OP, "semi-major axis")?;
    let mu = GRAVITATIONAL_CONSTANT * parent_mass;
    Ok((a.powi(3) / mu).sqrt()? * TAU)
}

/// Time-averaged orbital speed of a closed orbit with period `period`.
pub fn orbital_velocity(
    semi_major_axis: Quantity,
    period: Quantity,
    eccentricity: f64,
) -> Result<Quantity> {
    const OP: &str = "orbital_velocity";
    let a = semi_major_axis
        .expect(Dimension::LENGTH, OP)?
        .positive(OP, "semi-major axis")?;
    let period = period.expect(Dimension::TIME, OP)?.positive(OP, "period")?;
    let e = check_eccentricity(OP, eccentricity)?;
    Ok(a * TAU / period * orbit_math::mean_orbital_speed_factor(e))
}

/// `sqrt(2·G·m/r)`.
pub fn escape_velocity(mass: Quantity, radius: Quantity) -> Result<Quantity> {
    const OP: &str = "escape_velocity";
    let mass = mass.expect(Dimension::MASS, OP)?.non_negative(OP, "mass")?;
    let radius = radius.expect(Dimension::LENGTH, OP)?.positive(OP, "radius")?;
    (2.0 * GRAVITATIONAL_CONSTANT * mass / radius).sqrt()
}

/// Hill sphere radius at periapsis, `a·(1−e)·cbrt(m/(3M))`.
pub fn hill_sphere(
    parent_mass: Quantity,
    body_mass: Quantity,
    semi_major_axis: Quantity,
    eccentricity: f64,
) -> Result<Quantity> {
    const OP: &str = "hill_sphere";
    let parent_mass = parent_mass
        .expect(Dimension::MASS, OP)?
        .positive(OP, "parent mass")?;
    let body_mass = body_mass
        .expect(Dimension::MASS, OP)?
        .non_negative(OP, "body mass")?;
    let a = semi_major_axis
        .expect(Dimension::LENGTH, OP)?
        .positive(OP, "semi-major axis")?;
    let e = check_eccentricity(OP, eccentricity)?;
    let mass_ratio = (body_mass / (3.0 * parent_mass)).cbrt()?;
    Ok(a * (1.0 - e) * mass_ratio)
}

/// Newtonian kinetic energy `½·m·v²`.
pub fn kinetic_energy(mass: Quantity, velocity: Quantity) -> Result<Quantity> {
    const OP: &str = "kinetic_energy";
    let mass = mass.expect(Dimension::MASS, OP)?.non_negative(OP, "mass")?;
    let velocity = velocity.expect(Dimension::VELOCITY, OP)?;
    Ok(0.5 * mass * velocity.powi(2))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::*;

    fn earth_mass() -> Quantity {
        Quantity::new(5.972_168e24, KILOGRAM)
    }

    #[test]
    fn moon_surface_gravity() {
        let g = gravity(
            Quantity::new(7.342e22, KILOGRAM),
            Quantity::new(1737.4, KILOMETER),
        )
        .unwrap();
        assert_eq!(g.dimension(), Dimension::ACCELERATION);
        assert_relative_eq!(g.value_in(METER_PER_SECOND_SQUARED).unwrap(), 1.62, epsilon = 0.01);
    }

    #[test]
    fn earth_year_from_keplers_third_law() {
        let period = orbital_period(
            Quantity::new(1.0, SOLAR_MASS),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
        )
        .unwrap();
        assert_relative_eq!(period.value_in(DAY).unwrap(), 365.25, max_relative = 1e-3);
    }

    #[test]
    fn period_rejects_non_positive_inputs() {
        let a = Quantity::new(1.0, ASTRONOMICAL_UNIT);
        assert!(matches!(
            orbital_period(Quantity::new(0.0, KILOGRAM), a),
            Err(PhysicsError::Domain { .. })
        ));
        assert!(matches!(
            orbital_period(Quantity::new(1.0, SOLAR_MASS), -a),
            Err(PhysicsError::Domain { .. })
        ));
        assert!(matches!(
            orbital_period(a, a),
            Err(PhysicsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn circular_mean_speed_is_circumference_over_period() {
        let a = Quantity::new(1.0, ASTRONOMICAL_UNIT);
        let period = Quantity::new(1.0, YEAR);
        let v = orbital_velocity(a, period, 0.0).unwrap();
        assert_relative_eq!(
            v.value_in(METER_PER_SECOND).unwrap(),
            TAU * ASTRONOMICAL_UNIT.scale / YEAR.scale,
            max_relative = 1e-12
        );
        assert!(orbital_velocity(a, period, 0.5).unwrap() < v);
        assert!(orbital_velocity(a, period, 1.0).is_err());
        assert!(orbital_velocity(a, period, -0.1).is_err());
    }

    #[test]
    fn earth_escape_velocity() {
        let v = escape_velocity(earth_mass(), Quantity::new(6_378.137, KILOMETER)).unwrap();
        assert_relative_eq!(v.value_in(KILOMETER_PER_SECOND).unwrap(), 11.18, epsilon = 0.01);
    }

    #[test]
    fn earth_hill_sphere() {
        let r = hill_sphere(
            Quantity::new(1.0, SOLAR_MASS),
            earth_mass(),
            Quantity::new(1.0, ASTRONOMICAL_UNIT),
            0.0167,
        )
        .unwrap();
        assert_eq!(r.dimension(), Dimension::LENGTH);
        assert_relative_eq!(r.value_in(METER).unwrap(), 1.471e9, max_relative = 5e-3);
    }

    #[test]
    fn kinetic_energy_of_a_car() {
        let e = kinetic_energy(
            Quantity::new(1.5, TONNE),
            Quantity::new(20.0, METER_PER_SECOND),
        )
        .unwrap();
        assert_relative_eq!(e.value_in(JOULE).unwrap(), 300_000.0);
        assert!(kinetic_energy(Quantity::new(-1.0, KILOGRAM), Quantity::new(1.0, METER_PER_SECOND)).is_err());
    }
}
