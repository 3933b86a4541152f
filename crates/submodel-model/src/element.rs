//! The polymorphic submodel element tree.
//!
//! `SubmodelElement` is a tagged union over every element kind that can occur
//! inside a submodel. Resolution and mutation code dispatches on the variant
//! tag; there is no trait object anywhere in the tree.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an element addresses its children, if it has any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// No children (Property, Range, Blob, File, ...).
    Leaf,
    /// Ordered children addressed by their unique `idShort`
    /// (SubmodelElementCollection, Entity statements).
    Named,
    /// Ordered children addressed by 0-based position (SubmodelElementList).
    Indexed,
}

/// A language-tagged string, as used by [`MultiLanguageProperty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    pub language: String,
    pub text: String,
}

/// One key of a model [`Reference`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// A chain of keys pointing at a model element, possibly in another shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default)]
    pub keys: Vec<Key>,
}

/// A typed scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Property {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value_type: None,
            value: None,
        }
    }

    pub fn with_value(id_short: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value_type: Some("xs:string".to_string()),
            value: Some(value.into()),
        }
    }
}

/// A value given in several languages at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLanguageProperty {
    pub id_short: String,
    #[serde(default)]
    pub value: Vec<LangString>,
}

impl MultiLanguageProperty {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value: Vec::new(),
        }
    }
}

/// A min/max pair over a shared value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl Range {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value_type: None,
            min: None,
            max: None,
        }
    }
}

/// Inline binary content. The byte content crosses the JSON boundary
/// base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "base64_bytes"
    )]
    pub value: Option<Vec<u8>>,
}

impl Blob {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            content_type: None,
            value: None,
        }
    }
}

/// A reference to an external file by path or URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl File {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            content_type: None,
            value: None,
        }
    }
}

/// A leaf holding a model [`Reference`] as its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceElement {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Reference>,
}

impl ReferenceElement {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value: None,
        }
    }
}

/// An ordered set of children, each with a unique `idShort` among its
/// siblings. Children are looked up by name, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElementCollection {
    pub id_short: String,
    #[serde(default)]
    pub value: Vec<SubmodelElement>,
}

impl SubmodelElementCollection {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value: Vec::new(),
        }
    }

    pub fn with_children(
        id_short: impl Into<String>,
        value: Vec<SubmodelElement>,
    ) -> Self {
        Self {
            id_short: id_short.into(),
            value,
        }
    }
}

/// An ordered sequence of children addressed purely by 0-based position.
/// Children need not carry a meaningful `idShort`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElementList {
    pub id_short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_value_list_element: Option<String>,
    #[serde(default)]
    pub value: Vec<SubmodelElement>,
}

impl SubmodelElementList {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            type_value_list_element: None,
            value: Vec::new(),
        }
    }

    pub fn with_children(
        id_short: impl Into<String>,
        value: Vec<SubmodelElement>,
    ) -> Self {
        Self {
            id_short: id_short.into(),
            type_value_list_element: None,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    CoManagedEntity,
    #[default]
    SelfManagedEntity,
}

/// An entity with its own ordered child statements. Statements follow
/// collection addressing (unique names), and are additionally reachable by
/// position when a bracket token lands on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id_short: String,
    #[serde(default)]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
    #[serde(default)]
    pub statements: Vec<SubmodelElement>,
}

impl Entity {
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            entity_type: EntityType::default(),
            global_asset_id: None,
            statements: Vec::new(),
        }
    }

    pub fn with_statements(
        id_short: impl Into<String>,
        statements: Vec<SubmodelElement>,
    ) -> Self {
        Self {
            id_short: id_short.into(),
            entity_type: EntityType::default(),
            global_asset_id: None,
            statements,
        }
    }
}

/// Any element that can occur in a submodel's element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum SubmodelElement {
    Property(Property),
    MultiLanguageProperty(MultiLanguageProperty),
    Range(Range),
    Blob(Blob),
    File(File),
    ReferenceElement(ReferenceElement),
    SubmodelElementCollection(SubmodelElementCollection),
    SubmodelElementList(SubmodelElementList),
    Entity(Entity),
}

impl SubmodelElement {
    /// The element's local name, unique among named siblings.
    pub fn id_short(&self) -> &str {
        match self {
            SubmodelElement::Property(e) => &e.id_short,
            SubmodelElement::MultiLanguageProperty(e) => &e.id_short,
            SubmodelElement::Range(e) => &e.id_short,
            SubmodelElement::Blob(e) => &e.id_short,
            SubmodelElement::File(e) => &e.id_short,
            SubmodelElement::ReferenceElement(e) => &e.id_short,
            SubmodelElement::SubmodelElementCollection(e) => &e.id_short,
            SubmodelElement::SubmodelElementList(e) => &e.id_short,
            SubmodelElement::Entity(e) => &e.id_short,
        }
    }

    /// How this element addresses children. Entity statements are
    /// name-addressed, so `Entity` reports [`ContainerKind::Named`].
    pub fn kind(&self) -> ContainerKind {
        match self {
            SubmodelElement::SubmodelElementCollection(_) | SubmodelElement::Entity(_) => {
                ContainerKind::Named
            }
            SubmodelElement::SubmodelElementList(_) => ContainerKind::Indexed,
            _ => ContainerKind::Leaf,
        }
    }

    /// The ordered child sequence, or `None` for leaf elements.
    pub fn children(&self) -> Option<&[SubmodelElement]> {
        match self {
            SubmodelElement::SubmodelElementCollection(c) => Some(&c.value),
            SubmodelElement::SubmodelElementList(l) => Some(&l.value),
            SubmodelElement::Entity(e) => Some(&e.statements),
            _ => None,
        }
    }

    /// Mutable access to the ordered child sequence.
    pub fn children_mut(&mut self) -> Option<&mut Vec<SubmodelElement>> {
        match self {
            SubmodelElement::SubmodelElementCollection(c) => Some(&mut c.value),
            SubmodelElement::SubmodelElementList(l) => Some(&mut l.value),
            SubmodelElement::Entity(e) => Some(&mut e.statements),
            _ => None,
        }
    }

    /// First child carrying the given `idShort`, in sibling order.
    pub fn child_by_id_short(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.children()?
            .iter()
            .find(|child| child.id_short() == id_short)
    }
}

/// A new sibling would reuse an `idShort` that is already taken.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("colliding idShort: {0}")]
pub struct CollidingIdShortError(pub String);

/// Append `element` to a name-addressed child sequence, enforcing sibling
/// `idShort` uniqueness. Position-addressed sequences take plain `push`
/// instead; they accept duplicate names.
pub fn insert_unique(
    children: &mut Vec<SubmodelElement>,
    element: SubmodelElement,
) -> Result<(), CollidingIdShortError> {
    if children
        .iter()
        .any(|sibling| sibling.id_short() == element.id_short())
    {
        return Err(CollidingIdShortError(element.id_short().to_string()));
    }
    children.push(element);
    Ok(())
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_discriminates_containers_from_leaves() {
        let leaf = SubmodelElement::Property(Property::new("P1"));
        let collection =
            SubmodelElement::SubmodelElementCollection(SubmodelElementCollection::new("C1"));
        let list = SubmodelElement::SubmodelElementList(SubmodelElementList::new("L1"));
        let entity = SubmodelElement::Entity(Entity::new("E1"));

        assert_eq!(leaf.kind(), ContainerKind::Leaf);
        assert_eq!(collection.kind(), ContainerKind::Named);
        assert_eq!(list.kind(), ContainerKind::Indexed);
        assert_eq!(entity.kind(), ContainerKind::Named);
    }

    #[test]
    fn leaves_have_no_children() {
        let mut leaf = SubmodelElement::Range(Range::new("R1"));
        assert!(leaf.children().is_none());
        assert!(leaf.children_mut().is_none());
        assert!(leaf.child_by_id_short("anything").is_none());
    }

    #[test]
    fn child_lookup_scans_in_sibling_order() {
        let collection = SubmodelElement::SubmodelElementCollection(
            SubmodelElementCollection::with_children(
                "C1",
                vec![
                    SubmodelElement::Property(Property::with_value("A", "first")),
                    SubmodelElement::Property(Property::with_value("B", "second")),
                ],
            ),
        );

        let found = collection.child_by_id_short("B").unwrap();
        assert_eq!(found.id_short(), "B");
        assert!(collection.child_by_id_short("missing").is_none());
    }

    #[test]
    fn entity_statements_are_its_children() {
        let entity = SubmodelElement::Entity(Entity::with_statements(
            "E1",
            vec![SubmodelElement::Property(Property::new("P1"))],
        ));
        assert_eq!(entity.children().unwrap().len(), 1);
        assert_eq!(entity.child_by_id_short("P1").unwrap().id_short(), "P1");
    }

    #[test]
    fn insert_unique_rejects_duplicate_names() {
        let mut children = vec![SubmodelElement::Property(Property::new("P1"))];

        let err = insert_unique(
            &mut children,
            SubmodelElement::Property(Property::new("P1")),
        )
        .unwrap_err();
        assert_eq!(err, CollidingIdShortError("P1".to_string()));
        assert_eq!(children.len(), 1);

        insert_unique(
            &mut children,
            SubmodelElement::Property(Property::new("P2")),
        )
        .unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn element_json_is_tagged_by_model_type() {
        let element = SubmodelElement::Property(Property::with_value("P1", "42"));
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["modelType"], "Property");
        assert_eq!(json["idShort"], "P1");
        assert_eq!(json["value"], "42");

        let back: SubmodelElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn blob_bytes_round_trip_as_base64() {
        let mut blob = Blob::new("B1");
        blob.content_type = Some("application/octet-stream".to_string());
        blob.value = Some(vec![0xde, 0xad, 0xbe, 0xef]);
        let element = SubmodelElement::Blob(blob);

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["value"], "3q2+7w==");

        let back: SubmodelElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }
}
