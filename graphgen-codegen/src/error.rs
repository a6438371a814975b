use thiserror::Error;

use crate::entity::Role;

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while binding model elements to roles.
///
/// Both variants indicate a wiring defect or an unusable model rather than
/// a recoverable condition; generation stops at the first one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("role '{role}' cannot be derived from {element}")]
    RoleMismatch { role: Role, element: String },

    #[error("two types are both named '{name}' ({first} and {second})")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },
}
