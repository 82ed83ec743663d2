//! Magnetic field energy.

use crate::constants::VACUUM_PERMEABILITY;
use crate::error::Result;
use crate::quantity::{Dimension, Quantity};

/// Energy density `B²/(2μ₀)` stored in a magnetic field in vacuum.
pub fn energy_density(flux_density: Quantity) -> Result<Quantity> {
    let b = flux_density.expect(Dimension::MAGNETIC_FLUX_DENSITY, "energy_density")?;
    Ok(b.powi(2) / (2.0 * VACUUM_PERMEABILITY))
}
