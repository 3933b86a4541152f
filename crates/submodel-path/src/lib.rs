//! idShort path utilities.
//!
//! Submodel elements are addressed by flat path strings mixing dot-separated
//! names and bracketed indices, e.g. `"C2.L1[1][0]"` or `"E1.P1"`. This
//! crate turns such strings into typed token sequences and answers the
//! parent question mutations need: which container holds the addressed
//! element, and how does that container address its children?
//!
//! # Example
//!
//! ```
//! use submodel_path::{locate_parent, parse_id_short_path, ParentKind, PathToken};
//!
//! let tokens = parse_id_short_path("C2.L1[1]").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         PathToken::IdShort("C2".to_string()),
//!         PathToken::IdShort("L1".to_string()),
//!         PathToken::Index(1),
//!     ]
//! );
//!
//! let parent = locate_parent("C2.L1[1]").unwrap();
//! assert_eq!(parent.path, "C2.L1");
//! assert_eq!(parent.kind, ParentKind::Indexed);
//! ```

pub mod parent;
pub mod token;
pub mod validate;

pub use parent::{is_nested, join, locate_parent, parent_path, Parent, ParentKind};
pub use token::{parse_id_short_path, MalformedPathError, PathToken};
pub use validate::{
    validate_path_string, validate_tokens, PathLimitError, MAX_PATH_DEPTH, MAX_PATH_LENGTH,
};
