//! Path-based resolution and mutation over a submodel element tree.
//!
//! Given a [`Submodel`] and an idShort path such as `"C2.L1[1][0]"`, this
//! crate walks the tree token by token — name tokens against name-addressed
//! containers, index tokens against position-addressed ones — and either
//! returns the addressed element or edits the parent's child sequence in
//! place. Each operation is a single synchronous walk; the engine holds no
//! state between calls and the caller owns the tree outright.
//!
//! # Example
//!
//! ```
//! use submodel_model::{Entity, Property, Submodel, SubmodelElement};
//! use submodel_resolve::{create, delete, resolve, ResolveError};
//!
//! let mut submodel = Submodel::with_elements(
//!     "urn:example:sm",
//!     vec![SubmodelElement::Entity(Entity::with_statements(
//!         "E1",
//!         vec![SubmodelElement::Property(Property::with_value("P1", "1"))],
//!     ))],
//! );
//!
//! assert_eq!(resolve(&submodel, "E1.P1").unwrap().id_short(), "P1");
//!
//! create(
//!     &mut submodel,
//!     "E1.P2",
//!     SubmodelElement::Property(Property::with_value("P2", "2")),
//! )
//! .unwrap();
//! assert_eq!(resolve(&submodel, "E1.P2").unwrap().id_short(), "P2");
//!
//! delete(&mut submodel, "E1.P1").unwrap();
//! assert!(matches!(
//!     resolve(&submodel, "E1.P1"),
//!     Err(ResolveError::NotFound(_))
//! ));
//! ```

use thiserror::Error;

use submodel_model::CollidingIdShortError;
use submodel_path::MalformedPathError;

pub mod mutate;
pub mod resolve;

pub use mutate::{create, delete, update};
pub use resolve::{resolve, resolve_mut, resolve_tokens, resolve_tokens_mut};

/// Failure of a path operation against a submodel element tree.
///
/// A single not-found class covers every way an address can miss: unknown
/// name, index out of range, token kind not matching the container kind, or
/// a leaf reached with tokens remaining. Callers rely on that collapse; the
/// engine does not report "wrong kind of address" separately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path string itself cannot be tokenized.
    #[error(transparent)]
    Malformed(#[from] MalformedPathError),
    /// A token could not be resolved; carries the unresolved segment.
    #[error("element does not exist: {0}")]
    NotFound(String),
    /// A create or update would give two named siblings the same `idShort`.
    #[error("colliding idShort: {0}")]
    CollidingIdShort(String),
}

impl From<CollidingIdShortError> for ResolveError {
    fn from(err: CollidingIdShortError) -> Self {
        ResolveError::CollidingIdShort(err.0)
    }
}
