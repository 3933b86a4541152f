//! Locating the immediate parent container of a path.
//!
//! Create and delete mutate the parent's child sequence, so they need the
//! parent's path and addressing mode without walking the tree. Both fall out
//! of a single comparison of the last `.` and the last `[` in the raw string.

/// Addressing mode of the immediate parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    /// Children addressed by `idShort` (collection, entity, the root).
    Named,
    /// Children addressed by position (list).
    Indexed,
}

/// The immediate parent of a nested path: its own path and addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent<'a> {
    pub path: &'a str,
    pub kind: ParentKind,
}

/// Whether the path addresses anything deeper than a direct child of the
/// root. Simple paths need no parent resolution.
pub fn is_nested(path: &str) -> bool {
    path.contains('.') || path.contains('[')
}

/// Locate the immediate parent of a nested path, or `None` for simple paths.
///
/// The last `[` occurring after the last `.` means the final addressing step
/// is positional and the parent is the container before that bracket;
/// otherwise the final step is the trailing name and the parent is the
/// prefix before the last dot. This is what dispatches mixed paths
/// correctly: the parent of `"C2.L1[1][0]"` is the position-addressed
/// `"C2.L1[1]"`, while the parent of `"E1.P1"` is the name-addressed `"E1"`.
///
/// # Example
///
/// ```
/// use submodel_path::{locate_parent, ParentKind};
///
/// let parent = locate_parent("C2.L1[1][0]").unwrap();
/// assert_eq!(parent.path, "C2.L1[1]");
/// assert_eq!(parent.kind, ParentKind::Indexed);
///
/// let parent = locate_parent("E1.P1").unwrap();
/// assert_eq!(parent.path, "E1");
/// assert_eq!(parent.kind, ParentKind::Named);
///
/// assert!(locate_parent("test").is_none());
/// ```
pub fn locate_parent(path: &str) -> Option<Parent<'_>> {
    let last_dot = path.rfind('.');
    let last_bracket = path.rfind('[');
    match (last_dot, last_bracket) {
        (None, None) => None,
        (None, Some(bracket)) => Some(Parent {
            path: &path[..bracket],
            kind: ParentKind::Indexed,
        }),
        (Some(dot), Some(bracket)) if bracket > dot => Some(Parent {
            path: &path[..bracket],
            kind: ParentKind::Indexed,
        }),
        (Some(dot), _) => Some(Parent {
            path: &path[..dot],
            kind: ParentKind::Named,
        }),
    }
}

/// The immediate parent's path, or `None` for simple paths.
pub fn parent_path(path: &str) -> Option<&str> {
    locate_parent(path).map(|parent| parent.path)
}

/// The path a named child of `parent` would have.
///
/// An empty `parent` stands for the root, so the child's path is its own
/// name.
pub fn join(parent: &str, id_short: &str) -> String {
    if parent.is_empty() {
        id_short.to_string()
    } else {
        format!("{parent}.{id_short}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_paths_are_not_nested() {
        assert!(!is_nested("test"));
        assert!(is_nested("E1.P1"));
        assert!(is_nested("L1[0]"));
    }

    #[test]
    fn simple_path_has_no_parent() {
        assert!(locate_parent("test").is_none());
        assert!(parent_path("test").is_none());
    }

    #[test]
    fn trailing_name_means_named_parent() {
        let parent = locate_parent("E1.P1").unwrap();
        assert_eq!(parent.path, "E1");
        assert_eq!(parent.kind, ParentKind::Named);
    }

    #[test]
    fn trailing_index_means_indexed_parent() {
        let parent = locate_parent("L1[0]").unwrap();
        assert_eq!(parent.path, "L1");
        assert_eq!(parent.kind, ParentKind::Indexed);
    }

    #[test]
    fn consecutive_indices_peel_one_bracket() {
        let parent = locate_parent("C2.L1[1][0]").unwrap();
        assert_eq!(parent.path, "C2.L1[1]");
        assert_eq!(parent.kind, ParentKind::Indexed);

        let grandparent = locate_parent(parent.path).unwrap();
        assert_eq!(grandparent.path, "C2.L1");
        assert_eq!(grandparent.kind, ParentKind::Indexed);
    }

    #[test]
    fn name_after_index_means_named_parent() {
        let parent = locate_parent("C2.L1[1][0].P77").unwrap();
        assert_eq!(parent.path, "C2.L1[1][0]");
        assert_eq!(parent.kind, ParentKind::Named);
    }

    #[test]
    fn bracket_only_path_has_empty_parent() {
        let parent = locate_parent("[0]").unwrap();
        assert_eq!(parent.path, "");
        assert_eq!(parent.kind, ParentKind::Indexed);
    }

    #[test]
    fn join_builds_child_paths() {
        assert_eq!(join("", "P77"), "P77");
        assert_eq!(join("C2.L1[1][0]", "P77"), "C2.L1[1][0].P77");
    }
}
