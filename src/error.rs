//! Error types shared by the quantity layer and the formulas.

use thiserror::Error;

use crate::quantity::Dimension;

/// Result alias used throughout the crate.
pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;

/// Failure of a dimension check or of a formula's mathematical domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Two quantities of incompatible dimensions were combined, or a formula
    /// received an argument of the wrong dimension.
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Operation or formula that rejected the argument.
        operation: &'static str,
        /// Dimension the operation required.
        expected: Dimension,
        /// Dimension it received.
        found: Dimension,
    },
    /// An argument lies outside the domain of the formula.
    #[error("{operation}: {quantity} = {value:e} is out of domain ({reason})")]
    Domain {
        /// Operation or formula that rejected the argument.
        operation: &'static str,
        /// Name of the offending argument.
        quantity: &'static str,
        /// Offending value, in SI.
        value: f64,
        /// Constraint the value violates.
        reason: &'static str,
    },
    /// A body lacks an optional element the calculation needs.
    #[error("{body} has no {element}")]
    MissingElement {
        /// Body name.
        body: String,
        /// Missing element, e.g. "orbit".
        element: &'static str,
    },
}

impl PhysicsError {
    pub(crate) fn domain(
        operation: &'static str,
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        log::debug!("{operation}: rejecting {quantity} = {value:e} ({reason})");
        Self::Domain {
            operation,
            quantity,
            value,
            reason,
        }
    }
}

/// Failure to load a body catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{body} orbits unknown body {parent}")]
    UnknownParent { body: String, parent: String },
    #[error("{body} is its own ancestor")]
    ParentCycle { body: String },
    #[error("invalid entry for {name}: {source}")]
    Invalid {
        name: String,
        #[source]
        source: PhysicsError,
    },
}
