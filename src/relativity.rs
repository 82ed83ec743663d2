//! Special relativity: Lorentz factors, relativistic energy, and constant
//! proper-acceleration travel.
//!
//! Travel-time helpers follow the usual hyperbolic-motion results: after
//! accelerating from rest at proper acceleration `a` to rapidity `φ`, the
//! stationary observer has seen `t = sinh(φ)·c/a` pass, the ship `τ = φ·c/a`,
//! and the ship has covered `(cosh(φ) − 1)·c²/a`.

use crate::constants::SPEED_OF_LIGHT;
use crate::error::{PhysicsError, Result};
use crate::quantity::{Dimension, Quantity};

/// `v/c`, rejecting `|v| >= c`.
pub(crate) fn beta(operation: &'static str, velocity: Quantity) -> Result<f64> {
    let velocity = velocity.expect(Dimension::VELOCITY, operation)?;
    let beta = (velocity / SPEED_OF_LIGHT).ratio(operation)?;
    if beta.abs() < 1.0 {
        Ok(beta)
    } else {
        Err(PhysicsError::domain(
            operation,
            "velocity",
            velocity.si_value(),
            "must be below the speed of light",
        ))
    }
}

fn proper_acceleration(operation: &'static str, acceleration: Quantity) -> Result<Quantity> {
    acceleration
        .expect(Dimension::ACCELERATION, operation)?
        .positive(operation, "acceleration")
}

/// `1/sqrt(1 − (v/c)²)`. Diverges as `v → c`; `|v| >= c` is rejected.
pub fn lorentz_factor(velocity: Quantity) -> Result<f64> {
    let beta = beta("lorentz_factor", velocity)?;
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Lorentz factor after accelerating from rest for coordinate time `time`.
pub fn lorentz_factor_after_time(time: Quantity, acceleration: Quantity) -> Result<f64> {
    const OP: &str = "lorentz_factor_after_time";
    let time = time.expect(Dimension::TIME, OP)?.non_negative(OP, "time")?;
    let acceleration = proper_acceleration(OP, acceleration)?;
    let x = (acceleration * time / SPEED_OF_LIGHT).ratio(OP)?;
    Ok(x.hypot(1.0))
}

/// Lorentz factor after accelerating from rest over `distance`.
pub fn lorentz_factor_after_distance(distance: Quantity, acceleration: Quantity) -> Result<f64> {
    const OP: &str = "lorentz_factor_after_distance";
    let distance = distance
        .expect(Dimension::LENGTH, OP)?
        .non_negative(OP, "distance")?;
    let acceleration = proper_acceleration(OP, acceleration)?;
    Ok(1.0 + (acceleration * distance / SPEED_OF_LIGHT.powi(2)).ratio(OP)?)
}

/// `m·c²·(γ − 1)`. Loses precision well below `c`; see
/// [`crate::extended::relativistic_kinetic_energy_extended`].
pub fn relativistic_kinetic_energy(mass: Quantity, velocity: Quantity) -> Result<Quantity> {
    const OP: &str = "relativistic_kinetic_energy";
    let mass = mass.expect(Dimension::MASS, OP)?.non_negative(OP, "mass")?;
    Ok(mass * SPEED_OF_LIGHT.powi(2) * (lorentz_factor(velocity)? - 1.0))
}

/// Speed at which `mass` carries `kinetic_energy`; inverse of
/// [`relativistic_kinetic_energy`].
pub fn relativistic_velocity(mass: Quantity, kinetic_energy: Quantity) -> Result<Quantity> {
    const OP: &str = "relativistic_velocity";
    let mass = mass.expect(Dimension::MASS, OP)?.positive(OP, "mass")?;
    let kinetic_energy = kinetic_energy
        .expect(Dimension::ENERGY, OP)?
        .non_negative(OP, "kinetic energy")?;
    let g = (kinetic_energy / (mass * SPEED_OF_LIGHT.powi(2))).ratio(OP)?;
    // β = sqrt(g(g + 2))/(g + 1), factored so neither small nor huge g
    // cancels or overflows.
    let beta = g.sqrt() * (g + 2.0).sqrt() / (g + 1.0);
    Ok(SPEED_OF_LIGHT * beta.min(1.0))
}

/// `a·d/(2c²)` for a trip that accelerates over the first half of `distance`.
fn half_distance_parameter(
    operation: &'static str,
    distance: Quantity,
    acceleration: Quantity,
) -> Result<(f64, Quantity)> {
    let distance = distance
        .expect(Dimension::LENGTH, operation)?
        .non_negative(operation, "distance")?;
    let acceleration = proper_acceleration(operation, acceleration)?;
    let x = (acceleration * distance / (2.0 * SPEED_OF_LIGHT.powi(2))).ratio(operation)?;
    Ok((x, SPEED_OF_LIGHT / acceleration))
}

/// Stationary-frame time to cover `distance`, accelerating at `acceleration`
/// for the first half and decelerating for the second.
pub fn relativistic_brachistochrone_transit_time(
    distance: Quantity,
    acceleration: Quantity,
) -> Result<Quantity> {
    let (x, c_over_a) = half_distance_parameter(
        "relativistic_brachistochrone_transit_time",
        distance,
        acceleration,
    )?;
    Ok(c_over_a * (2.0 * (x * (2.0 + x)).sqrt()))
}

/// Ship-frame time for the same two-leg trip.
pub fn relativistic_brachistochrone_proper_time(
    distance: Quantity,
    acceleration: Quantity,
) -> Result<Quantity> {
    let (x, c_over_a) = half_distance_parameter(
        "relativistic_brachistochrone_proper_time",
        distance,
        acceleration,
    )?;
    let rapidity = Quantity::dimensionless(1.0 + x).acosh()?;
    Ok(c_over_a * (2.0 * rapidity.si_value()))
}

/// Relativistic rocket equation, `c·tanh((vₑ/c)·ln(m₀/m₁))`.
pub fn relativistic_delta_v(exhaust_velocity: Quantity, mass_ratio: f64) -> Result<Quantity> {
    const OP: &str = "relativistic_delta_v";
    let beta = beta(OP, exhaust_velocity)?;
    if !(mass_ratio > 0.0) {
        return Err(PhysicsError::domain(OP, "mass ratio", mass_ratio, "must be positive"));
    }
    let exponent = Quantity::dimensionless(beta) * Quantity::dimensionless(mass_ratio).ln()?;
    Ok(SPEED_OF_LIGHT * exponent.tanh()?.si_value())
}

/// `atanh(v/c)`.
pub fn rapidity(velocity: Quantity) -> Result<f64> {
    let beta = beta("rapidity", velocity)?;
    Ok(Quantity::dimensionless(beta).atanh()?.si_value())
}

fn acceleration_phase(
    operation: &'static str,
    velocity: Quantity,
    acceleration: Quantity,
) -> Result<(f64, Quantity)> {
    let velocity = velocity
        .expect(Dimension::VELOCITY, operation)?
        .non_negative(operation, "velocity")?;
    let acceleration = proper_acceleration(operation, acceleration)?;
    Ok((rapidity(velocity)?, SPEED_OF_LIGHT / acceleration))
}

/// Stationary-frame time to reach `velocity` from rest.
pub fn coordinate_time_to_velocity(velocity: Quantity, acceleration: Quantity) -> Result<Quantity> {
    let (phi, c_over_a) = acceleration_phase("coordinate_time_to_velocity", velocity, acceleration)?;
    Ok(c_over_a * phi.sinh())
}

/// Ship-frame time to reach `velocity` from rest.
pub fn proper_time_to_velocity(velocity: Quantity, acceleration: Quantity) -> Result<Quantity> {
    let (phi, c_over_a) = acceleration_phase("proper_time_to_velocity", velocity, acceleration)?;
    Ok(c_over_a * phi)
}

/// Stationary-frame distance covered while reaching `velocity` from rest.
pub fn distance_to_velocity(velocity: Quantity, acceleration: Quantity) -> Result<Quantity> {
    let (phi, c_over_a) = acceleration_phase("distance_to_velocity", velocity, acceleration)?;
    Ok(c_over_a * SPEED_OF_LIGHT * (phi.cosh() - 1.0))
}

struct CoastPlan {
    coast_time: Quantity,
    gamma: f64,
}

fn plan_coast(
    operation: &'static str,
    distance: Quantity,
    max_velocity: Quantity,
    acceleration: Quantity,
) -> Result<CoastPlan> {
    let distance = distance
        .expect(Dimension::LENGTH, operation)?
        .non_negative(operation, "distance")?;
    let max_velocity = max_velocity
        .expect(Dimension::VELOCITY, operation)?
        .positive(operation, "max velocity")?;
    let burn_distance = distance_to_velocity(max_velocity, acceleration)? * 2.0;
    let coast_distance = (distance - burn_distance)?;
    if coast_distance.si_value() < 0.0 {
        return Err(PhysicsError::domain(
            operation,
            "distance",
            distance.si_value(),
            "shorter than the acceleration and deceleration burns",
        ));
    }
    Ok(CoastPlan {
        coast_time: coast_distance / max_velocity,
        gamma: lorentz_factor(max_velocity)?,
    })
}

/// Stationary-frame time for a trip that accelerates to `max_velocity`,
/// coasts, then decelerates to rest at `distance`.
pub fn relativistic_coast_transit_time(
    distance: Quantity,
    max_velocity: Quantity,
    acceleration: Quantity,
) -> Result<Quantity> {
    let plan = plan_coast(
        "relativistic_coast_transit_time",
        distance,
        max_velocity,
        acceleration,
    )?;
    let burn_time = coordinate_time_to_velocity(max_velocity, acceleration)? * 2.0;
    burn_time + plan.coast_time
}

/// Ship-frame time for the same accelerate-coast-decelerate trip.
pub fn relativistic_coast_proper_time(
    distance: Quantity,
    max_velocity: Quantity,
    acceleration: Quantity,
) -> Result<Quantity> {
    let plan = plan_coast(
        "relativistic_coast_proper_time",
        distance,
        max_velocity,
        acceleration,
    )?;
    let burn_time = proper_time_to_velocity(max_velocity, acceleration)? * 2.0;
    burn_time + plan.coast_time / plan.gamma
}
