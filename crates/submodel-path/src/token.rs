//! Tokenizing idShort paths.

use std::fmt;

use thiserror::Error;

/// One parsed unit of an idShort path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    /// Resolves a child by name inside a name-addressed container.
    IdShort(String),
    /// Resolves the n-th child inside a position-addressed container.
    Index(usize),
}

impl PathToken {
    /// The token as it appeared in the path string (`"C2"`, `"[1]"`).
    pub fn segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::IdShort(name) => f.write_str(name),
            PathToken::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// The path string itself cannot be tokenized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedPathError {
    #[error("unterminated index bracket in segment '{0}'")]
    UnterminatedBracket(String),
    #[error("unexpected character after index bracket in segment '{0}'")]
    TrailingAfterBracket(String),
    #[error("opening bracket inside index brackets in segment '{0}'")]
    NestedBracket(String),
    #[error("index is not a non-negative integer: '{0}'")]
    InvalidIndex(String),
    #[error("unmatched closing bracket in segment '{0}'")]
    UnmatchedClosingBracket(String),
}

/// Tokenize an idShort path into its ordered name and index tokens.
///
/// Segments are separated by `.`; each segment is a name part followed by
/// zero or more `[<index>]` groups, so `"L1[1][0]"` yields the name token
/// `L1` and the index tokens `1` and `0` in textual order. The empty path
/// yields the empty token sequence.
///
/// There is no escaping for `.` or `[`/`]` inside names; names containing
/// separator characters are outside the grammar.
///
/// # Errors
///
/// [`MalformedPathError`] if a bracket group is unterminated or nested, an
/// index is not a base-10 non-negative integer, a `]` appears without its
/// `[`, or anything other than `[` follows a closed bracket group.
///
/// # Example
///
/// ```
/// use submodel_path::{parse_id_short_path, PathToken};
///
/// let tokens = parse_id_short_path("C2.L1[1][0]").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         PathToken::IdShort("C2".to_string()),
///         PathToken::IdShort("L1".to_string()),
///         PathToken::Index(1),
///         PathToken::Index(0),
///     ]
/// );
///
/// assert!(parse_id_short_path("L1[abc]").is_err());
/// assert!(parse_id_short_path("L1[1").is_err());
/// ```
pub fn parse_id_short_path(path: &str) -> Result<Vec<PathToken>, MalformedPathError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let mut tokens = Vec::new();
    for segment in path.split('.') {
        let name_end = segment.find('[').unwrap_or(segment.len());
        let name = &segment[..name_end];
        if name.contains(']') {
            return Err(MalformedPathError::UnmatchedClosingBracket(
                segment.to_string(),
            ));
        }
        tokens.push(PathToken::IdShort(name.to_string()));

        let mut rest = &segment[name_end..];
        while let Some(group) = rest.strip_prefix('[') {
            let close = group
                .find(']')
                .ok_or_else(|| MalformedPathError::UnterminatedBracket(segment.to_string()))?;
            let index_str = &group[..close];
            if index_str.contains('[') {
                return Err(MalformedPathError::NestedBracket(segment.to_string()));
            }
            let index: usize = index_str
                .parse()
                .map_err(|_| MalformedPathError::InvalidIndex(index_str.to_string()))?;
            tokens.push(PathToken::Index(index));

            rest = &group[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return Err(MalformedPathError::TrailingAfterBracket(
                    segment.to_string(),
                ));
            }
        }
    }
    Ok(tokens)
}
