//! Built-in bodies of the inner solar system plus Jupiter, and a handful of
//! structural materials.
//!
//! Orbital elements are J2000 means. Radii and masses follow the IAU/IERS
//! nominal values used by the unit table.

use std::borrow::Cow;

use crate::bodies::{CelestialBody, Material, Orbit, Rotation};
use crate::quantity::{Dimension, Quantity};

const fn kilograms(value: f64) -> Quantity {
    Quantity::from_si(value, Dimension::MASS)
}

const fn meters(value: f64) -> Quantity {
    Quantity::from_si(value, Dimension::LENGTH)
}

const fn seconds(value: f64) -> Quantity {
    Quantity::from_si(value, Dimension::TIME)
}

const fn radians(value: f64) -> Quantity {
    Quantity::radians(value)
}

const fn kg_per_cubic_meter(value: f64) -> Quantity {
    Quantity::from_si(value, Dimension::DENSITY)
}

const fn pascals(value: f64) -> Quantity {
    Quantity::from_si(value, Dimension::PRESSURE)
}

pub static SUN: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Sun"),
    mass: kilograms(1.988_47e30),
    equatorial_radius: meters(6.957e8),
    polar_radius: meters(6.957e8),
    bond_albedo: 0.0,
    orbit: None,
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.070),
        rotation_period: seconds(2_192_832.0),
        axial_tilt: radians(0.126_536_4),
    }),
};

pub static MERCURY: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Mercury"),
    mass: kilograms(3.3011e23),
    equatorial_radius: meters(2.4397e6),
    polar_radius: meters(2.4397e6),
    bond_albedo: 0.088,
    orbit: Some(Orbit {
        parent: &SUN,
        semi_major_axis: meters(5.790_905e10),
        eccentricity: 0.205_630,
        mean_anomaly: Some(radians(3.050_765_7)),
        inclination: radians(0.122_260_3),
        ascending_node: Some(radians(0.843_535_1)),
        periapsis: Some(radians(0.508_309_7)),
    }),
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.346),
        rotation_period: seconds(5_067_014.4),
        axial_tilt: radians(0.000_593_4),
    }),
};

pub static VENUS: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Venus"),
    mass: kilograms(4.8675e24),
    equatorial_radius: meters(6.0518e6),
    polar_radius: meters(6.0518e6),
    bond_albedo: 0.76,
    orbit: Some(Orbit {
        parent: &SUN,
        semi_major_axis: meters(1.082_08e11),
        eccentricity: 0.006_772,
        mean_anomaly: Some(radians(0.874_671_8)),
        inclination: radians(0.059_246_6),
        ascending_node: Some(radians(1.338_318_5)),
        periapsis: Some(radians(0.957_906_5)),
    }),
    // Retrograde spin is carried by the tilt past 90°.
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.337),
        rotation_period: seconds(20_997_152.64),
        axial_tilt: radians(3.095_516),
    }),
};

pub static EARTH: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Earth"),
    mass: kilograms(5.972_168e24),
    equatorial_radius: meters(6.378_137e6),
    polar_radius: meters(6.356_752e6),
    bond_albedo: 0.306,
    orbit: Some(Orbit {
        parent: &SUN,
        semi_major_axis: meters(1.495_982_61e11),
        eccentricity: 0.016_708_6,
        mean_anomaly: Some(radians(6.259_047_4)),
        inclination: radians(0.000_000_9),
        ascending_node: Some(radians(-0.196_535_2)),
        periapsis: Some(radians(1.993_302_7)),
    }),
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.3307),
        rotation_period: seconds(86_164.0905),
        axial_tilt: radians(0.409_092_6),
    }),
};

pub static MOON: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Moon"),
    mass: kilograms(7.342e22),
    equatorial_radius: meters(1.738_1e6),
    polar_radius: meters(1.736_0e6),
    bond_albedo: 0.11,
    orbit: Some(Orbit {
        parent: &EARTH,
        semi_major_axis: meters(3.844e8),
        eccentricity: 0.0549,
        mean_anomaly: None,
        inclination: radians(0.089_797_2),
        ascending_node: None,
        periapsis: None,
    }),
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.3929),
        rotation_period: seconds(2_360_591.5),
        axial_tilt: radians(0.116_710_2),
    }),
};

pub static MARS: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Mars"),
    mass: kilograms(6.4171e23),
    equatorial_radius: meters(3.396_2e6),
    polar_radius: meters(3.376_2e6),
    bond_albedo: 0.25,
    orbit: Some(Orbit {
        parent: &SUN,
        semi_major_axis: meters(2.279_39e11),
        eccentricity: 0.0934,
        mean_anomaly: Some(radians(0.338_803_3)),
        inclination: radians(0.032_288_6),
        ascending_node: Some(radians(0.864_950_3)),
        periapsis: Some(radians(5.000_403_2)),
    }),
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.3644),
        rotation_period: seconds(88_642.66),
        axial_tilt: radians(0.439_648_4),
    }),
};

pub static JUPITER: CelestialBody<'static> = CelestialBody {
    name: Cow::Borrowed("Jupiter"),
    mass: kilograms(1.8982e27),
    equatorial_radius: meters(7.1492e7),
    polar_radius: meters(6.6854e7),
    bond_albedo: 0.503,
    orbit: Some(Orbit {
        parent: &SUN,
        semi_major_axis: meters(7.785_7e11),
        eccentricity: 0.0489,
        mean_anomaly: Some(radians(0.349_414_9)),
        inclination: radians(0.022_741_6),
        ascending_node: Some(radians(1.753_427_6)),
        periapsis: Some(radians(4.779_880_9)),
    }),
    rotation: Some(Rotation {
        moment_of_inertia: Some(0.254),
        rotation_period: seconds(35_730.0),
        axial_tilt: radians(0.054_628_8),
    }),
};

/// Parents come before their satellites.
pub static BODIES: [&CelestialBody<'static>; 7] =
    [&SUN, &MERCURY, &VENUS, &EARTH, &MOON, &MARS, &JUPITER];

/// Case-insensitive lookup in [`BODIES`].
pub fn find_body(name: &str) -> Option<&'static CelestialBody<'static>> {
    BODIES
        .iter()
        .copied()
        .find(|body| body.name.eq_ignore_ascii_case(name))
}

pub const IRON: Material = Material::new(kg_per_cubic_meter(7_874.0), Some(pascals(50e6)));
/// Structural steel.
pub const STEEL: Material = Material::new(kg_per_cubic_meter(7_850.0), Some(pascals(250e6)));
/// 6061-T6 alloy.
pub const ALUMINIUM: Material = Material::new(kg_per_cubic_meter(2_700.0), Some(pascals(276e6)));
/// Ti-6Al-4V alloy.
pub const TITANIUM: Material = Material::new(kg_per_cubic_meter(4_430.0), Some(pascals(880e6)));
// Rock strengths are compressive.
pub const GRANITE: Material = Material::new(kg_per_cubic_meter(2_750.0), Some(pascals(200e6)));
pub const BASALT: Material = Material::new(kg_per_cubic_meter(3_000.0), Some(pascals(250e6)));
pub const WATER_ICE: Material = Material::new(kg_per_cubic_meter(917.0), Some(pascals(5e6)));
pub const WATER: Material = Material::new(kg_per_cubic_meter(1_000.0), None);

pub static MATERIALS: [(&str, Material); 8] = [
    ("iron", IRON),
    ("steel", STEEL),
    ("aluminium", ALUMINIUM),
    ("titanium", TITANIUM),
    ("granite", GRANITE),
    ("basalt", BASALT),
    ("water ice", WATER_ICE),
    ("water", WATER),
];

/// Case-insensitive lookup in [`MATERIALS`].
pub fn find_material(name: &str) -> Option<Material> {
    MATERIALS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, material)| *material)
}
