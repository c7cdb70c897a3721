//! Error type for the dynamic edges of the unit tables.
//!
//! Every unit enum is closed, so ordinary conversions cannot fail. The only
//! fallible path is turning a textual symbol back into a unit.

use thiserror::Error;

/// Errors raised when a unit cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The symbol does not name any unit of the quantity.
    #[error("unrecognized {quantity} unit '{symbol}'")]
    UnknownUnit {
        /// Quantity whose unit table was searched (e.g. `"length"`).
        quantity: &'static str,
        /// The symbol that failed to resolve.
        symbol: String,
    },
}

/// Result alias used by fallible unit lookups.
pub type Result<T> = std::result::Result<T, UnitError>;
