//! Shared tree fixtures for the integration suites.
#![allow(dead_code)]

use submodel_model::{
    Entity, Property, Submodel, SubmodelElement, SubmodelElementCollection, SubmodelElementList,
};

pub fn property(id_short: &str) -> SubmodelElement {
    SubmodelElement::Property(Property::new(id_short))
}

pub fn property_with(id_short: &str, value: &str) -> SubmodelElement {
    SubmodelElement::Property(Property::with_value(id_short, value))
}

pub fn collection(id_short: &str, children: Vec<SubmodelElement>) -> SubmodelElement {
    SubmodelElement::SubmodelElementCollection(SubmodelElementCollection::with_children(
        id_short, children,
    ))
}

pub fn list(id_short: &str, children: Vec<SubmodelElement>) -> SubmodelElement {
    SubmodelElement::SubmodelElementList(SubmodelElementList::with_children(id_short, children))
}

pub fn entity(id_short: &str, statements: Vec<SubmodelElement>) -> SubmodelElement {
    SubmodelElement::Entity(Entity::with_statements(id_short, statements))
}

/// The tree every suite works against:
///
/// ```text
/// urn:fixture:sm
/// ├── test            (property)
/// ├── C2              (collection)
/// │   └── L1          (list)
/// │       ├── [0]     (list "inner": [property "zero", property "one"])
/// │       └── [1]     (entity "ENT": [property "S0", property "S1"])
/// └── E1              (entity)
///     └── P1          (property)
/// ```
pub fn demo_submodel() -> Submodel {
    Submodel::with_elements(
        "urn:fixture:sm",
        vec![
            property_with("test", "42"),
            collection(
                "C2",
                vec![list(
                    "L1",
                    vec![
                        list("inner", vec![property_with("zero", "0"), property_with("one", "1")]),
                        entity("ENT", vec![property_with("S0", "s0"), property_with("S1", "s1")]),
                    ],
                )],
            ),
            entity("E1", vec![property_with("P1", "p1")]),
        ],
    )
}
