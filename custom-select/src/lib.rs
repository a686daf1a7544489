//! A form-associated dropdown select control over a headless element tree.
//!
//! [`SelectControl`] reads its options from host markup once, keeps its
//! value in the host `value` attribute, emits `change` events, takes part in
//! a [`Form`] and reports validity. A [`Page`] connects controls and routes
//! clicks so that at most one control is open at a time.

pub mod control;
pub mod coordinator;
pub mod error;
pub mod form;
pub mod internals;
pub mod option;
pub mod page;
mod presentation;
pub mod registry;
pub mod style;

pub use control::{
    ClickAction, ControlId, PropertyValue, SelectControl, TAG, VALUE_MISSING_MESSAGE,
};
pub use coordinator::Coordinator;
pub use error::{Result, SelectError};
pub use form::{Form, FormData, Submission};
pub use internals::{ElementInternals, ValidityFlags, ValidityReport};
pub use option::SelectOption;
pub use page::{ClickOutcome, Page};
pub use registry::{ElementDefinition, Registry};
pub use style::{Part, StyleVars};
