use approx::assert_relative_eq;
use proptest::prelude::*;

use spacecalc::electromagnetism::energy_density;
use spacecalc::extended::relativistic_kinetic_energy_extended;
use spacecalc::geometry::*;
use spacecalc::orbits::{gravity, kinetic_energy};
use spacecalc::relativity::*;
use spacecalc::units::*;
use spacecalc::{PhysicsError, Quantity, Unit};

const UNITS: [Unit; 15] = [
    METER,
    KILOMETER,
    ASTRONOMICAL_UNIT,
    LIGHT_YEAR,
    SECOND,
    HOUR,
    DAY,
    YEAR,
    KILOGRAM,
    TONNE,
    EARTH_MASS,
    SOLAR_MASS,
    JOULE,
    ELECTRONVOLT,
    MEGATON,
];

proptest! {
    #[test]
    fn prop_unit_roundtrip(v in -1e6..1e6f64, index in 0..UNITS.len()) {
        let unit = UNITS[index];
        let back = Quantity::new(v, unit).value_in(unit).unwrap();
        prop_assert!((back - v).abs() <= 1e-12 * v.abs().max(1.0));
    }

    #[test]
    fn prop_cross_unit_roundtrip(v in 1e-6..1e6f64, from in 0..UNITS.len(), to in 0..UNITS.len()) {
        let (from, to) = (UNITS[from], UNITS[to]);
        let quantity = Quantity::new(v, from);
        match quantity.value_in(to) {
            Ok(converted) => {
                let back = Quantity::new(converted, to).value_in(from).unwrap();
                prop_assert!((back - v).abs() / v < 1e-12);
            }
            Err(err) => {
                prop_assert!(from.dimension != to.dimension);
                prop_assert!(matches!(err, PhysicsError::DimensionMismatch { .. }), "{err}");
            }
        }
    }

    #[test]
    fn prop_sphere_roundtrip(r in 1e-3..1e9f64) {
        let radius = Quantity::new(r, METER);
        let back = sphere_radius(sphere_volume(radius).unwrap()).unwrap();
        prop_assert!((back.si_value() - r).abs() / r < 1e-12);
    }

    #[test]
    fn prop_cylinder_roundtrip(r in 1e-3..1e6f64, h in 1e-3..1e6f64) {
        let radius = Quantity::new(r, METER);
        let length = Quantity::new(h, METER);
        let back = cylinder_radius(cylinder_volume(radius, length).unwrap(), length).unwrap();
        prop_assert!((back.si_value() - r).abs() / r < 1e-12);
    }

    #[test]
    fn prop_lorentz_factor_at_least_one(beta in 0.0..0.999_999f64) {
        let gamma = lorentz_factor(Quantity::new(beta, LIGHT_SPEED)).unwrap();
        prop_assert!(gamma >= 1.0);
    }

    #[test]
    fn prop_kinetic_energy_newtonian_limit(m in 1e-3..1e6f64, v in 1.0..1e5f64) {
        let mass = Quantity::new(m, KILOGRAM);
        let velocity = Quantity::new(v, METER_PER_SECOND);
        let newtonian = kinetic_energy(mass, velocity).unwrap().si_value();
        let extended = relativistic_kinetic_energy_extended(mass, velocity).unwrap().si_value();
        prop_assert!((extended - newtonian).abs() / newtonian < 1e-6);
    }

    #[test]
    fn prop_relativistic_kinetic_energy_exceeds_newtonian(beta in 0.01..0.99f64) {
        let mass = Quantity::new(1.0, KILOGRAM);
        let velocity = Quantity::new(beta, LIGHT_SPEED);
        let relativistic = relativistic_kinetic_energy(mass, velocity).unwrap();
        let newtonian = kinetic_energy(mass, velocity).unwrap();
        prop_assert!(relativistic > newtonian);
    }
}

#[test]
fn lorentz_factor_of_rest_is_one() {
    assert_eq!(lorentz_factor(Quantity::new(0.0, METER_PER_SECOND)).unwrap(), 1.0);
}

#[test]
fn moon_surface_gravity() {
    let g = gravity(Quantity::new(7.342e22, KILOGRAM), Quantity::new(1737.4, KILOMETER)).unwrap();
    assert_relative_eq!(g.value_in(METER_PER_SECOND_SQUARED).unwrap(), 1.62, epsilon = 0.01);
}

#[test]
fn tesla_energy_density() {
    let u = energy_density(Quantity::new(1.0, TESLA)).unwrap();
    assert_relative_eq!(u.value_in(JOULE_PER_CUBIC_METER).unwrap(), 397_887.0, epsilon = 1.0);
}

#[test]
fn hemisphere_solid_angle() {
    let omega = spherical_cap_solid_angle(Quantity::new(90.0, DEGREE)).unwrap();
    assert_relative_eq!(omega.value_in(STERADIAN).unwrap(), std::f64::consts::TAU, max_relative = 1e-12);
}

#[test]
fn rocket_below_light_speed() {
    let dv = relativistic_delta_v(Quantity::new(3.0e7, METER_PER_SECOND), 10.0).unwrap();
    assert!(dv < Quantity::new(1.0, LIGHT_SPEED));
    assert!(dv.si_value() < 3.0e7 * 10.0_f64.ln());
}

#[test]
fn length_plus_mass_is_rejected() {
    let sum = Quantity::new(1.0, METER) + Quantity::new(1.0, KILOGRAM);
    assert!(matches!(sum, Err(PhysicsError::DimensionMismatch { .. })));
}
