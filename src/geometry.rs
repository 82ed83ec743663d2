//! Solid angles and the volumes of simple solids.

use std::f64::consts::{PI, TAU};

use crate::error::{PhysicsError, Result};
use crate::quantity::{Dimension, Quantity};
use crate::units::STERADIAN;

/// Solid angle of a spherical cap with half-angle `half_angle`,
/// `2π·(1 − cos θ)`.
pub fn spherical_cap_solid_angle(half_angle: Quantity) -> Result<Quantity> {
    const OP: &str = "spherical_cap_solid_angle";
    if !half_angle.dimension().is_angle_or_ratio() {
        return Err(PhysicsError::DimensionMismatch {
            operation: OP,
            expected: Dimension::ANGLE,
            found: half_angle.dimension(),
        });
    }
    let half_angle = Quantity::radians(half_angle.si_value());
    let cos = half_angle.cos()?.si_value();
    Ok(Quantity::new(TAU * (1.0 - cos), STERADIAN))
}

/// Solid angle of a cone with apex at the observer, from its height and
/// base radius.
pub fn cone_solid_angle(height: Quantity, radius: Quantity) -> Result<Quantity> {
    const OP: &str = "cone_solid_angle";
    let height = height.expect(Dimension::LENGTH, OP)?.positive(OP, "height")?;
    let radius = radius.expect(Dimension::LENGTH, OP)?.non_negative(OP, "radius")?;
    spherical_cap_solid_angle((radius / height).atan()?)
}

pub fn sphere_volume(radius: Quantity) -> Result<Quantity> {
    const OP: &str = "sphere_volume";
    let radius = radius.expect(Dimension::LENGTH, OP)?.non_negative(OP, "radius")?;
    Ok(4.0 / 3.0 * PI * radius.powi(3))
}

/// Radius of the sphere enclosing `volume`.
pub fn sphere_radius(volume: Quantity) -> Result<Quantity> {
    const OP: &str = "sphere_radius";
    let volume = volume.expect(Dimension::VOLUME, OP)?.non_negative(OP, "volume")?;
    (3.0 * volume / (4.0 * PI)).cbrt()
}

pub fn cylinder_volume(radius: Quantity, length: Quantity) -> Result<Quantity> {
    const OP: &str = "cylinder_volume";
    let radius = radius.expect(Dimension::LENGTH, OP)?.non_negative(OP, "radius")?;
    let length = length.expect(Dimension::LENGTH, OP)?.non_negative(OP, "length")?;
    Ok(PI * radius.powi(2) * length)
}

/// Radius of a cylinder of `length` enclosing `volume`.
pub fn cylinder_radius(volume: Quantity, length: Quantity) -> Result<Quantity> {
    const OP: &str = "cylinder_radius";
    let volume = volume.expect(Dimension::VOLUME, OP)?.non_negative(OP, "volume")?;
    let length = length.expect(Dimension::LENGTH, OP)?.positive(OP, "length")?;
    (volume / (PI * length)).sqrt()
}

/// Length of a cylinder of `radius` enclosing `volume`.
pub fn cylinder_length(volume: Quantity, radius: Quantity) -> Result<Quantity> {
    const OP: &str = "cylinder_length";
    let volume = volume.expect(Dimension::VOLUME, OP)?.non_negative(OP, "volume")?;
    let radius = radius.expect(Dimension::LENGTH, OP)?.positive(OP, "radius")?;
    Ok(volume / (PI * radius.powi(2)))
}
