//! Named units and their scale to SI.
//!
//! Scales are literal SI multipliers. The astronomical unit and the light
//! speed unit are exact by definition; the light year uses the Julian year.

use crate::quantity::Dimension;

/// A named unit: `1 <symbol> = scale` SI units of `dimension`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub dimension: Dimension,
    pub scale: f64,
}

impl Unit {
    pub const fn new(symbol: &'static str, dimension: Dimension, scale: f64) -> Self {
        Self {
            symbol,
            dimension,
            scale,
        }
    }
}

pub const UNITLESS: Unit = Unit::new("", Dimension::NONE, 1.0);

// length
pub const METER: Unit = Unit::new("m", Dimension::LENGTH, 1.0);
pub const KILOMETER: Unit = Unit::new("km", Dimension::LENGTH, 1.0e3);
pub const ASTRONOMICAL_UNIT: Unit = Unit::new("au", Dimension::LENGTH, 149_597_870_700.0);
pub const LIGHT_YEAR: Unit = Unit::new("ly", Dimension::LENGTH, 9_460_730_472_580_800.0);

// mass
pub const KILOGRAM: Unit = Unit::new("kg", Dimension::MASS, 1.0);
pub const TONNE: Unit = Unit::new("t", Dimension::MASS, 1.0e3);
pub const EARTH_MASS: Unit = Unit::new("M⊕", Dimension::MASS, 5.972_168e24);
pub const SOLAR_MASS: Unit = Unit::new("M☉", Dimension::MASS, 1.988_47e30);

// time
pub const SECOND: Unit = Unit::new("s", Dimension::TIME, 1.0);
pub const HOUR: Unit = Unit::new("h", Dimension::TIME, 3_600.0);
pub const DAY: Unit = Unit::new("d", Dimension::TIME, 86_400.0);
/// Julian year, 365.25 days.
pub const YEAR: Unit = Unit::new("a", Dimension::TIME, 31_557_600.0);

pub const KELVIN: Unit = Unit::new("K", Dimension::TEMPERATURE, 1.0);

// angle
pub const RADIAN: Unit = Unit::new("rad", Dimension::ANGLE, 1.0);
pub const DEGREE: Unit = Unit::new("°", Dimension::ANGLE, 0.017_453_292_519_943_295);
pub const STERADIAN: Unit = Unit::new("sr", Dimension::SOLID_ANGLE, 1.0);

// area and volume
pub const SQUARE_METER: Unit = Unit::new("m²", Dimension::AREA, 1.0);
pub const CUBIC_METER: Unit = Unit::new("m³", Dimension::VOLUME, 1.0);
pub const CUBIC_KILOMETER: Unit = Unit::new("km³", Dimension::VOLUME, 1.0e9);

// motion
pub const METER_PER_SECOND: Unit = Unit::new("m/s", Dimension::VELOCITY, 1.0);
pub const KILOMETER_PER_SECOND: Unit = Unit::new("km/s", Dimension::VELOCITY, 1.0e3);
/// Velocity in multiples of the speed of light.
pub const LIGHT_SPEED: Unit = Unit::new("c", Dimension::VELOCITY, 299_792_458.0);
pub const METER_PER_SECOND_SQUARED: Unit = Unit::new("m/s²", Dimension::ACCELERATION, 1.0);
/// Standard gravity, 9.80665 m/s².
pub const STANDARD_GRAVITY: Unit = Unit::new("g₀", Dimension::ACCELERATION, 9.806_65);

// force, energy, power, pressure
pub const NEWTON: Unit = Unit::new("N", Dimension::FORCE, 1.0);
pub const JOULE: Unit = Unit::new("J", Dimension::ENERGY, 1.0);
pub const ELECTRONVOLT: Unit = Unit::new("eV", Dimension::ENERGY, 1.602_176_634e-19);
/// TNT equivalent.
pub const MEGATON: Unit = Unit::new("Mt", Dimension::ENERGY, 4.184e15);
pub const WATT: Unit = Unit::new("W", Dimension::POWER, 1.0);
pub const SOLAR_LUMINOSITY: Unit = Unit::new("L☉", Dimension::POWER, 3.828e26);
pub const PASCAL: Unit = Unit::new("Pa", Dimension::PRESSURE, 1.0);
pub const MEGAPASCAL: Unit = Unit::new("MPa", Dimension::PRESSURE, 1.0e6);
pub const JOULE_PER_CUBIC_METER: Unit = Unit::new("J/m³", Dimension::PRESSURE, 1.0);
pub const WATT_PER_SQUARE_METER: Unit = Unit::new("W/m²", Dimension::IRRADIANCE, 1.0);

// density
pub const KILOGRAM_PER_CUBIC_METER: Unit = Unit::new("kg/m³", Dimension::DENSITY, 1.0);
pub const GRAM_PER_CUBIC_CENTIMETER: Unit = Unit::new("g/cm³", Dimension::DENSITY, 1.0e3);

// magnetism
pub const TESLA: Unit = Unit::new("T", Dimension::MAGNETIC_FLUX_DENSITY, 1.0);
pub const GAUSS: Unit = Unit::new("G", Dimension::MAGNETIC_FLUX_DENSITY, 1.0e-4);
