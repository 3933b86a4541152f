//! Creating, updating, and deleting elements at a path.
//!
//! Every mutation edits the child sequence of the addressed element's parent
//! container: the submodel root for simple paths, the container located by
//! the last-separator rule for nested ones. Either the single edit happens
//! or the tree is left untouched.

use submodel_model::{insert_unique, Submodel, SubmodelElement};
use submodel_path::{locate_parent, parse_id_short_path, PathToken};

use crate::resolve::resolve_tokens_mut;
use crate::ResolveError;

/// Create `element` at `path`.
///
/// The path names the would-be child; the element is appended at the end of
/// the parent's child sequence (the root's for simple paths). Appending is
/// the only insertion mode — a trailing index in the path never positions
/// the new element, so the child's actual path follows from the parent and
/// the insertion order. Name-addressed parents reject an `idShort` already
/// taken by a sibling; lists accept duplicates.
///
/// # Errors
///
/// [`ResolveError::Malformed`] for untokenizable paths,
/// [`ResolveError::NotFound`] if the parent does not resolve or cannot hold
/// children, [`ResolveError::CollidingIdShort`] on a name collision.
pub fn create(
    root: &mut Submodel,
    path: &str,
    element: SubmodelElement,
) -> Result<(), ResolveError> {
    parse_id_short_path(path)?;
    match locate_parent(path) {
        None => Ok(insert_unique(root.elements_mut(), element)?),
        Some(parent) => {
            let parent_tokens = parse_id_short_path(parent.path)?;
            let node = resolve_tokens_mut(root, &parent_tokens)?;
            append_child(node, parent.path, element)
        }
    }
}

/// Delete the element at `path`.
///
/// The final token is applied against the parent container: a name removes
/// the first sibling carrying it, an index removes that position (from a
/// list, or from an entity's statements). Later siblings shift down one
/// index. Deleting a path that does not resolve is an error, never a no-op.
pub fn delete(root: &mut Submodel, path: &str) -> Result<(), ResolveError> {
    let tokens = parse_id_short_path(path)?;
    let Some((last, _)) = tokens.split_last() else {
        return Err(ResolveError::NotFound(String::new()));
    };
    match locate_parent(path) {
        None => {
            if remove_named(root.elements_mut(), path) {
                Ok(())
            } else {
                Err(ResolveError::NotFound(path.to_string()))
            }
        }
        Some(parent) => {
            let parent_tokens = parse_id_short_path(parent.path)?;
            let node = resolve_tokens_mut(root, &parent_tokens)?;
            remove_child(node, last)
        }
    }
}

/// Replace the element at `path` with `element`.
///
/// Deletes the existing element, then appends `element` into the same
/// parent, re-checking name uniqueness. Two consequences of the
/// delete-then-append shape are kept deliberately: a positional child moves
/// to the end of its container, and a rename that collides with a sibling
/// fails after the delete has already happened.
pub fn update(
    root: &mut Submodel,
    path: &str,
    element: SubmodelElement,
) -> Result<(), ResolveError> {
    delete(root, path)?;
    match locate_parent(path) {
        None => Ok(insert_unique(root.elements_mut(), element)?),
        Some(parent) => {
            let parent_tokens = parse_id_short_path(parent.path)?;
            let node = resolve_tokens_mut(root, &parent_tokens)?;
            append_child(node, parent.path, element)
        }
    }
}

fn append_child(
    parent: &mut SubmodelElement,
    parent_path: &str,
    element: SubmodelElement,
) -> Result<(), ResolveError> {
    match parent {
        SubmodelElement::SubmodelElementList(list) => {
            list.value.push(element);
            Ok(())
        }
        SubmodelElement::SubmodelElementCollection(collection) => {
            Ok(insert_unique(&mut collection.value, element)?)
        }
        SubmodelElement::Entity(entity) => Ok(insert_unique(&mut entity.statements, element)?),
        _ => Err(ResolveError::NotFound(parent_path.to_string())),
    }
}

fn remove_child(parent: &mut SubmodelElement, token: &PathToken) -> Result<(), ResolveError> {
    let removed = match (parent, token) {
        (SubmodelElement::SubmodelElementCollection(collection), PathToken::IdShort(name)) => {
            remove_named(&mut collection.value, name)
        }
        (SubmodelElement::Entity(entity), PathToken::IdShort(name)) => {
            remove_named(&mut entity.statements, name)
        }
        (SubmodelElement::SubmodelElementList(list), PathToken::Index(index)) => {
            remove_at(&mut list.value, *index)
        }
        (SubmodelElement::Entity(entity), PathToken::Index(index)) => {
            remove_at(&mut entity.statements, *index)
        }
        _ => false,
    };
    if removed {
        Ok(())
    } else {
        Err(ResolveError::NotFound(token.segment()))
    }
}

fn remove_named(children: &mut Vec<SubmodelElement>, name: &str) -> bool {
    match children.iter().position(|child| child.id_short() == name) {
        Some(at) => {
            children.remove(at);
            true
        }
        None => false,
    }
}

fn remove_at(children: &mut Vec<SubmodelElement>, index: usize) -> bool {
    if index < children.len() {
        children.remove(index);
        true
    } else {
        false
    }
}
