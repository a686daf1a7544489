//! Error types for the select control.

use thiserror::Error;

/// Errors surfaced by the control's typed and dynamic APIs.
///
/// Unknown option values, stray clicks and missing options are never
/// errors; they are ignored. A missing required value is reported through
/// validity instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A property received a value of the wrong type.
    #[error("property '{property}' expects a {expected}, got {found}")]
    TypeMismatch {
        /// Property name.
        property: &'static str,
        /// Accepted type.
        expected: &'static str,
        /// Type that was supplied.
        found: &'static str,
    },

    /// The property bridge does not know this name.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// The style variable is not declared.
    #[error("unknown style variable '{0}'")]
    UnknownVariable(String),

    /// The tag is not a valid custom element name.
    #[error("'{0}' is not a valid custom element name")]
    InvalidName(String),

    /// No element definition exists for the tag.
    #[error("no element definition for '{0}'")]
    NotDefined(String),
}

pub type Result<T> = std::result::Result<T, SelectError>;
