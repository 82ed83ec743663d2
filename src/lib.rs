//! Dimension-checked physical quantities and the orbital, relativistic,
//! stellar and geometric formulas built on them.
//!
//! ```
//! use spacecalc::units::{KILOMETER_PER_SECOND, METER};
//! use spacecalc::{tables::EARTH, Quantity};
//!
//! let v = EARTH.escape_velocity().unwrap();
//! assert!((v.value_in(KILOMETER_PER_SECOND).unwrap() - 11.18).abs() < 0.01);
//! assert!((v + Quantity::new(1.0, METER)).is_err());
//! ```

pub mod bodies;
pub mod catalog;
pub mod constants;
pub mod electromagnetism;
pub mod error;
pub mod extended;
pub mod geometry;
pub mod orbit_math;
pub mod orbits;
pub mod quantity;
pub mod relativity;
pub mod stellar;
pub mod tables;
pub mod units;

pub use bodies::{CelestialBody, Material, Orbit, Rotation};
pub use catalog::Catalog;
pub use error::{CatalogError, PhysicsError, Result};
pub use quantity::{Dimension, Quantity};
pub use units::Unit;
