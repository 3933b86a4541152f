//! The submodel root aggregate.

use serde::{Deserialize, Serialize};

use crate::element::SubmodelElement;

/// A submodel: the root of an element tree.
///
/// Toward path resolution the submodel behaves as a name-addressed container
/// over its top-level elements; it is not itself a [`SubmodelElement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submodel {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    #[serde(default)]
    pub submodel_elements: Vec<SubmodelElement>,
}

impl Submodel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            submodel_elements: Vec::new(),
        }
    }

    pub fn with_elements(
        id: impl Into<String>,
        submodel_elements: Vec<SubmodelElement>,
    ) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            submodel_elements,
        }
    }

    /// The ordered top-level elements.
    pub fn elements(&self) -> &[SubmodelElement] {
        &self.submodel_elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<SubmodelElement> {
        &mut self.submodel_elements
    }

    /// First top-level element carrying the given `idShort`.
    pub fn element_by_id_short(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.submodel_elements
            .iter()
            .find(|element| element.id_short() == id_short)
    }
}
