//! Materials, celestial bodies, their orbits and rotation.

use std::borrow::Cow;
use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{PhysicsError, Result};
use crate::geometry::{sphere_volume, spherical_cap_solid_angle};
use crate::orbit_math;
use crate::orbits::{
    check_eccentricity, escape_velocity, gravity, hill_sphere, orbital_period, orbital_velocity,
};
use crate::quantity::{Dimension, Quantity};
use crate::stellar::planetary_equilibrium_temperature_from_star;

/// Bulk material constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub density: Quantity,
    pub yield_strength: Option<Quantity>,
}

impl Material {
    pub const fn new(density: Quantity, yield_strength: Option<Quantity>) -> Self {
        Self {
            density,
            yield_strength,
        }
    }

    pub fn mass_of(&self, volume: Quantity) -> Result<Quantity> {
        const OP: &str = "Material::mass_of";
        let volume = volume.expect(Dimension::VOLUME, OP)?.non_negative(OP, "volume")?;
        Ok(self.density * volume)
    }

    pub fn sphere_mass(&self, radius: Quantity) -> Result<Quantity> {
        self.mass_of(sphere_volume(radius)?)
    }

    /// Tallest column of this material that supports its own weight under
    /// `gravity`, `σ_y/(ρ·g)`. `None` without a yield strength.
    pub fn max_column_height(&self, gravity: Quantity) -> Result<Option<Quantity>> {
        const OP: &str = "Material::max_column_height";
        let gravity = gravity
            .expect(Dimension::ACCELERATION, OP)?
            .positive(OP, "gravity")?;
        Ok(self
            .yield_strength
            .map(|strength| strength / (self.density * gravity)))
    }
}

/// Spin state of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Normalised moment of inertia `C/(M·R²)`.
    pub moment_of_inertia: Option<f64>,
    /// Sidereal rotation period.
    pub rotation_period: Quantity,
    pub axial_tilt: Quantity,
}

/// Keplerian elements relative to `parent`.
#[derive(Clone)]
pub struct Orbit<'a> {
    pub parent: &'a CelestialBody<'a>,
    pub semi_major_axis: Quantity,
    pub eccentricity: f64,
    /// Mean anomaly at epoch; zero when absent.
    pub mean_anomaly: Option<Quantity>,
    pub inclination: Quantity,
    pub ascending_node: Option<Quantity>,
    /// Argument of periapsis.
    pub periapsis: Option<Quantity>,
}

impl fmt::Debug for Orbit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orbit")
            .field("parent", &self.parent.name)
            .field("semi_major_axis", &self.semi_major_axis)
            .field("eccentricity", &self.eccentricity)
            .field("mean_anomaly", &self.mean_anomaly)
            .field("inclination", &self.inclination)
            .field("ascending_node", &self.ascending_node)
            .field("periapsis", &self.periapsis)
            .finish()
    }
}

impl Orbit<'_> {
    /// Period around the parent, ignoring the orbiting body's own mass.
    pub fn period(&self) -> Result<Quantity> {
        orbital_period(self.parent.mass, self.semi_major_axis)
    }

    pub fn mean_orbital_speed(&self) -> Result<Quantity> {
        orbital_velocity(self.semi_major_axis, self.period()?, self.eccentricity)
    }

    pub fn periapsis_distance(&self) -> Result<Quantity> {
        let e = check_eccentricity("Orbit::periapsis_distance", self.eccentricity)?;
        Ok(self.semi_major_axis * (1.0 - e))
    }

    pub fn apoapsis_distance(&self) -> Result<Quantity> {
        let e = check_eccentricity("Orbit::apoapsis_distance", self.eccentricity)?;
        Ok(self.semi_major_axis * (1.0 + e))
    }

    /// Distance from the parent `time` after epoch, solving Kepler's equation.
    pub fn distance_at(&self, time: Quantity) -> Result<Quantity> {
        const OP: &str = "Orbit::distance_at";
        let time = time.expect(Dimension::TIME, OP)?;
        let e = check_eccentricity(OP, self.eccentricity)?;
        let initial = match self.mean_anomaly {
            Some(anomaly) => anomaly.expect(Dimension::ANGLE, OP)?.si_value(),
            None => 0.0,
        };
        let period = self.period()?.si_value();
        let mean_motion = orbit_math::calculate_mean_motion(period);
        let mean_anomaly = orbit_math::calculate_mean_anomaly(mean_motion, initial, time.si_value());
        let eccentric_anomaly = orbit_math::calculate_eccentric_anomaly(e, mean_anomaly);
        let true_anomaly = orbit_math::calculate_true_anomaly(e, eccentric_anomaly);
        Ok(self.semi_major_axis
            * orbit_math::calculate_heliocentric_distance(1.0, e, true_anomaly))
    }
}

/// A star, planet or moon.
#[derive(Clone, Debug)]
pub struct CelestialBody<'a> {
    pub name: Cow<'a, str>,
    pub mass: Quantity,
    pub equatorial_radius: Quantity,
    pub polar_radius: Quantity,
    pub bond_albedo: f64,
    pub orbit: Option<Orbit<'a>>,
    pub rotation: Option<Rotation>,
}

impl<'a> CelestialBody<'a> {
    fn missing(&self, element: &'static str) -> PhysicsError {
        PhysicsError::MissingElement {
            body: self.name.to_string(),
            element,
        }
    }

    pub fn orbit(&self) -> Result<&Orbit<'a>> {
        self.orbit.as_ref().ok_or_else(|| self.missing("orbit"))
    }

    pub fn rotation(&self) -> Result<&Rotation> {
        self.rotation.as_ref().ok_or_else(|| self.missing("rotation"))
    }

    /// Volumetric mean radius of the oblate spheroid, `(a²·c)^⅓`.
    pub fn mean_radius(&self) -> Result<Quantity> {
        (self.equatorial_radius.powi(2) * self.polar_radius).cbrt()
    }

    pub fn volume(&self) -> Result<Quantity> {
        (4.0 / 3.0 * PI * self.equatorial_radius.powi(2) * self.polar_radius)
            .expect(Dimension::VOLUME, "CelestialBody::volume")
    }

    pub fn density(&self) -> Result<Quantity> {
        Ok(self.mass / self.volume()?)
    }

    /// Gravity at the equator, neglecting rotation.
    pub fn surface_gravity(&self) -> Result<Quantity> {
        gravity(self.mass, self.equatorial_radius)
    }

    pub fn escape_velocity(&self) -> Result<Quantity> {
        escape_velocity(self.mass, self.equatorial_radius)
    }

    pub fn orbital_period(&self) -> Result<Quantity> {
        self.orbit()?.period()
    }

    pub fn hill_sphere(&self) -> Result<Quantity> {
        let orbit = self.orbit()?;
        hill_sphere(
            orbit.parent.mass,
            self.mass,
            orbit.semi_major_axis,
            orbit.eccentricity,
        )
    }

    /// Solid angle the parent subtends from this body's mean distance.
    pub fn parent_solid_angle(&self) -> Result<Quantity> {
        let orbit = self.orbit()?;
        const OP: &str = "parent_solid_angle";
        let ratio = (orbit.parent.mean_radius()? / orbit.semi_major_axis).ratio(OP)?;
        if ratio > 1.0 {
            return Err(PhysicsError::domain(
                OP,
                "semi-major axis",
                orbit.semi_major_axis.si_value(),
                "inside the parent's radius",
            ));
        }
        spherical_cap_solid_angle(Quantity::dimensionless(ratio.asin()))
    }

    /// Equilibrium temperature at the mean orbital distance, lit by a parent
    /// of `star_luminosity`.
    pub fn equilibrium_temperature(&self, star_luminosity: Quantity) -> Result<Quantity> {
        let orbit = self.orbit()?;
        planetary_equilibrium_temperature_from_star(
            star_luminosity,
            orbit.semi_major_axis,
            self.mean_radius()?,
            self.bond_albedo,
        )
    }

    pub fn equatorial_rotation_speed(&self) -> Result<Quantity> {
        let rotation = self.rotation()?;
        Ok(self.equatorial_radius * TAU / rotation.rotation_period)
    }

    /// Spin angular momentum `k·M·R²·2π/T`.
    pub fn spin_angular_momentum(&self) -> Result<Quantity> {
        let rotation = self.rotation()?;
        let k = rotation
            .moment_of_inertia
            .ok_or_else(|| self.missing("moment of inertia"))?;
        Ok(k * self.mass * self.mean_radius()?.powi(2) * TAU / rotation.rotation_period)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tables::{EARTH, GRANITE, JUPITER, MOON, SUN, WATER};
    use crate::units::*;

    #[test]
    fn earth_orbit_period_and_speed() {
        let orbit = EARTH.orbit().unwrap();
        assert_eq!(orbit.parent.name, "Sun");
        assert_relative_eq!(EARTH.orbital_period().unwrap().value_in(DAY).unwrap(), 365.256, max_relative = 1e-4);
        assert_relative_eq!(
            orbit.mean_orbital_speed().unwrap().value_in(KILOMETER_PER_SECOND).unwrap(),
            29.78,
            max_relative = 1e-3
        );
    }

    #[test]
    fn moon_orbits_earth() {
        let orbit = MOON.orbit().unwrap();
        assert_eq!(orbit.parent.name, "Earth");
        assert_relative_eq!(MOON.surface_gravity().unwrap().si_value(), 1.62, epsilon = 0.01);
        assert_relative_eq!(orbit.period().unwrap().value_in(DAY).unwrap(), 27.4, epsilon = 0.1);
    }

    #[test]
    fn sun_has_no_orbit() {
        assert_eq!(
            SUN.hill_sphere(),
            Err(PhysicsError::MissingElement {
                body: "Sun".to_string(),
                element: "orbit",
            })
        );
    }

    #[test]
    fn earth_bulk_properties() {
        assert_relative_eq!(EARTH.mean_radius().unwrap().value_in(KILOMETER).unwrap(), 6371.0, epsilon = 1.0);
        assert_relative_eq!(
            EARTH.density().unwrap().value_in(GRAM_PER_CUBIC_CENTIMETER).unwrap(),
            5.51,
            epsilon = 0.01
        );
        assert_relative_eq!(EARTH.escape_velocity().unwrap().value_in(KILOMETER_PER_SECOND).unwrap(), 11.18, epsilon = 0.01);
        assert_relative_eq!(
            EARTH.equatorial_rotation_speed().unwrap().value_in(METER_PER_SECOND).unwrap(),
            465.1,
            epsilon = 0.1
        );
        let l = EARTH.spin_angular_momentum().unwrap();
        assert_eq!(l.dimension(), Dimension::ANGULAR_MOMENTUM);
        assert_relative_eq!(l.si_value(), 5.86e33, max_relative = 1e-2);
    }

    #[test]
    fn earth_hill_sphere_and_temperature() {
        assert_relative_eq!(EARTH.hill_sphere().unwrap().si_value(), 1.471e9, max_relative = 5e-3);
        let t = EARTH
            .equilibrium_temperature(Quantity::new(1.0, SOLAR_LUMINOSITY))
            .unwrap();
        assert_relative_eq!(t.value_in(KELVIN).unwrap(), 254.0, epsilon = 1.0);
    }

    #[test]
    fn sun_seen_from_earth() {
        // About 6.8e-5 sr, half a degree across.
        let omega = EARTH.parent_solid_angle().unwrap();
        assert_relative_eq!(omega.value_in(STERADIAN).unwrap(), 6.8e-5, max_relative = 1e-2);
    }

    #[test]
    fn orbit_inside_parent_has_no_solid_angle() {
        let mut grazing = MOON.clone();
        if let Some(orbit) = grazing.orbit.as_mut() {
            orbit.semi_major_axis = Quantity::new(1000.0, KILOMETER);
        }
        assert!(matches!(
            grazing.parent_solid_angle(),
            Err(PhysicsError::Domain { .. })
        ));
    }

    #[test]
    fn eccentric_orbit_distance_over_time() {
        let orbit = JUPITER.orbit().unwrap();
        let period = orbit.period().unwrap();
        let periapsis = orbit.periapsis_distance().unwrap().si_value();
        let apoapsis = orbit.apoapsis_distance().unwrap().si_value();
        for step in 0..16_u32 {
            let t = period * (f64::from(step) / 16.0);
            let r = orbit.distance_at(t).unwrap().si_value();
            assert!(r >= periapsis * (1.0 - 1e-12) && r <= apoapsis * (1.0 + 1e-12));
        }
        let now = orbit.distance_at(Quantity::new(0.0, SECOND)).unwrap();
        let later = orbit.distance_at(period).unwrap();
        assert_relative_eq!(now.si_value(), later.si_value(), max_relative = 1e-9);
    }

    #[test]
    fn material_columns() {
        let g = EARTH.surface_gravity().unwrap();
        let height = GRANITE.max_column_height(g).unwrap().unwrap();
        assert!(height.value_in(KILOMETER).unwrap() > 5.0);
        assert_eq!(WATER.max_column_height(g).unwrap(), None);
        let mass = WATER.sphere_mass(Quantity::new(1.0, METER)).unwrap();
        assert_relative_eq!(mass.value_in(KILOGRAM).unwrap(), 4188.79, max_relative = 1e-5);
    }
}
