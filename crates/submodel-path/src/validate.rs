//! Opt-in size limits for paths.
//!
//! The tokenizer and the resolver accept paths of any size; services that
//! take paths from the network can bound them with these checks before
//! handing them on.

use thiserror::Error;

use crate::token::PathToken;

/// Maximum accepted path string length.
pub const MAX_PATH_LENGTH: usize = 1024;

/// Maximum accepted token depth.
pub const MAX_PATH_DEPTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathLimitError {
    #[error("path exceeds {MAX_PATH_LENGTH} characters")]
    PathTooLong,
    #[error("path exceeds {MAX_PATH_DEPTH} tokens")]
    PathTooDeep,
}

/// Bound the raw path string length.
pub fn validate_path_string(path: &str) -> Result<(), PathLimitError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathLimitError::PathTooLong);
    }
    Ok(())
}

/// Bound the depth of a tokenized path.
pub fn validate_tokens(tokens: &[PathToken]) -> Result<(), PathLimitError> {
    if tokens.len() > MAX_PATH_DEPTH {
        return Err(PathLimitError::PathTooDeep);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_paths_pass() {
        assert!(validate_path_string("C2.L1[1][0]").is_ok());
    }

    #[test]
    fn overlong_string_is_rejected() {
        let long = "a".repeat(MAX_PATH_LENGTH + 1);
        assert_eq!(
            validate_path_string(&long).unwrap_err(),
            PathLimitError::PathTooLong
        );
    }

    #[test]
    fn deep_token_sequences_are_rejected() {
        let tokens: Vec<PathToken> = (0..MAX_PATH_DEPTH + 1).map(PathToken::Index).collect();
        assert_eq!(
            validate_tokens(&tokens).unwrap_err(),
            PathLimitError::PathTooDeep
        );
        assert!(validate_tokens(&tokens[..MAX_PATH_DEPTH]).is_ok());
    }
}
