//! Read-only and mutable walks from a submodel root to an addressed element.

use submodel_model::{Submodel, SubmodelElement};
use submodel_path::{parse_id_short_path, PathToken};

use crate::ResolveError;

/// Resolve the element addressed by `path`.
///
/// The walk starts at the submodel's top-level elements with name-addressed
/// semantics and applies one token per step. Resolution never mutates the
/// tree.
///
/// # Errors
///
/// [`ResolveError::Malformed`] if the path cannot be tokenized,
/// [`ResolveError::NotFound`] naming the first token that fails to resolve.
/// The empty path addresses the submodel itself, which is not an element,
/// and reports not-found.
pub fn resolve<'a>(root: &'a Submodel, path: &str) -> Result<&'a SubmodelElement, ResolveError> {
    let tokens = parse_id_short_path(path)?;
    resolve_tokens(root, &tokens)
}

/// Resolve the element addressed by `path`, mutably.
pub fn resolve_mut<'a>(
    root: &'a mut Submodel,
    path: &str,
) -> Result<&'a mut SubmodelElement, ResolveError> {
    let tokens = parse_id_short_path(path)?;
    resolve_tokens_mut(root, &tokens)
}

/// Resolve a pre-tokenized path.
pub fn resolve_tokens<'a>(
    root: &'a Submodel,
    tokens: &[PathToken],
) -> Result<&'a SubmodelElement, ResolveError> {
    let (first, rest) = tokens
        .split_first()
        .ok_or_else(|| ResolveError::NotFound(String::new()))?;
    let mut current = top_level(root, first)?;
    for token in rest {
        current = step(current, token)?;
    }
    Ok(current)
}

/// Resolve a pre-tokenized path, mutably.
pub fn resolve_tokens_mut<'a>(
    root: &'a mut Submodel,
    tokens: &[PathToken],
) -> Result<&'a mut SubmodelElement, ResolveError> {
    let (first, rest) = tokens
        .split_first()
        .ok_or_else(|| ResolveError::NotFound(String::new()))?;
    let name = match first {
        PathToken::IdShort(name) => name,
        PathToken::Index(_) => return Err(ResolveError::NotFound(first.segment())),
    };
    let mut current = root
        .submodel_elements
        .iter_mut()
        .find(|element| element.id_short() == name)
        .ok_or_else(|| ResolveError::NotFound(name.clone()))?;
    for token in rest {
        current = step_mut(current, token)?;
    }
    Ok(current)
}

/// First step: the submodel root is name-addressed, so only a name token can
/// enter the tree.
fn top_level<'a>(
    root: &'a Submodel,
    token: &PathToken,
) -> Result<&'a SubmodelElement, ResolveError> {
    match token {
        PathToken::IdShort(name) => root
            .element_by_id_short(name)
            .ok_or_else(|| ResolveError::NotFound(name.clone())),
        PathToken::Index(_) => Err(ResolveError::NotFound(token.segment())),
    }
}

/// Apply one token against the current node.
///
/// Collections and entity statements resolve name tokens by an ordered
/// first-match scan. Lists resolve index tokens positionally, and so do
/// entity statements when a bracket token lands on the entity. Every other
/// combination is not-found: a name against a list, an index against a
/// collection, any token against a leaf.
pub(crate) fn step<'a>(
    current: &'a SubmodelElement,
    token: &PathToken,
) -> Result<&'a SubmodelElement, ResolveError> {
    let next = match (current, token) {
        (SubmodelElement::SubmodelElementCollection(collection), PathToken::IdShort(name)) => {
            find_named(&collection.value, name)
        }
        (SubmodelElement::Entity(entity), PathToken::IdShort(name)) => {
            find_named(&entity.statements, name)
        }
        (SubmodelElement::SubmodelElementList(list), PathToken::Index(index)) => {
            list.value.get(*index)
        }
        (SubmodelElement::Entity(entity), PathToken::Index(index)) => {
            entity.statements.get(*index)
        }
        _ => None,
    };
    next.ok_or_else(|| ResolveError::NotFound(token.segment()))
}

pub(crate) fn step_mut<'a>(
    current: &'a mut SubmodelElement,
    token: &PathToken,
) -> Result<&'a mut SubmodelElement, ResolveError> {
    let next = match (current, token) {
        (SubmodelElement::SubmodelElementCollection(collection), PathToken::IdShort(name)) => {
            find_named_mut(&mut collection.value, name)
        }
        (SubmodelElement::Entity(entity), PathToken::IdShort(name)) => {
            find_named_mut(&mut entity.statements, name)
        }
        (SubmodelElement::SubmodelElementList(list), PathToken::Index(index)) => {
            list.value.get_mut(*index)
        }
        (SubmodelElement::Entity(entity), PathToken::Index(index)) => {
            entity.statements.get_mut(*index)
        }
        _ => None,
    };
    next.ok_or_else(|| ResolveError::NotFound(token.segment()))
}

fn find_named<'a>(children: &'a [SubmodelElement], name: &str) -> Option<&'a SubmodelElement> {
    children.iter().find(|child| child.id_short() == name)
}

fn find_named_mut<'a>(
    children: &'a mut [SubmodelElement],
    name: &str,
) -> Option<&'a mut SubmodelElement> {
    children.iter_mut().find(|child| child.id_short() == name)
}
