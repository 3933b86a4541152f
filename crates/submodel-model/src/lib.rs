//! Typed element tree for Asset Administration Shell submodels.
//!
//! The tree is heterogeneous: scalar leaves (Property, Range, Blob, ...),
//! name-addressed containers (SubmodelElementCollection, Entity statements)
//! and position-addressed containers (SubmodelElementList), rooted in a
//! [`Submodel`]. Path-based resolution and mutation over this tree live in
//! the `submodel-resolve` crate; this crate only defines the data model and
//! the container semantics the resolver dispatches on.
//!
//! # Example
//!
//! ```
//! use submodel_model::{
//!     ContainerKind, Property, Submodel, SubmodelElement, SubmodelElementList,
//! };
//!
//! let list = SubmodelElement::SubmodelElementList(SubmodelElementList::with_children(
//!     "L1",
//!     vec![SubmodelElement::Property(Property::with_value("P0", "zero"))],
//! ));
//! assert_eq!(list.kind(), ContainerKind::Indexed);
//! assert_eq!(list.children().unwrap().len(), 1);
//!
//! let submodel = Submodel::with_elements("urn:example:sm", vec![list]);
//! assert_eq!(submodel.element_by_id_short("L1").unwrap().id_short(), "L1");
//! ```

pub mod element;
pub mod submodel;

pub use element::{
    insert_unique, Blob, CollidingIdShortError, ContainerKind, Entity, EntityType, File, Key,
    LangString, MultiLanguageProperty, Property, Range, Reference, ReferenceElement,
    SubmodelElement, SubmodelElementCollection, SubmodelElementList,
};
pub use submodel::Submodel;
