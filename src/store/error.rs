//! Error types for store operations

use std::path::PathBuf;

use thiserror::Error;

/// Coarse error category shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DuplicateName,
    Validation,
    Parse,
    Schema,
    Io,
}

impl ErrorKind {
    /// Short title for dialogs and status lines
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not found",
            ErrorKind::DuplicateName => "Duplicate name",
            ErrorKind::Validation => "Validation",
            ErrorKind::Parse => "Malformed JSON",
            ErrorKind::Schema => "Unexpected data",
            ErrorKind::Io => "File error",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("coordinate '{coordinate}' not found in profile '{profile}'")]
    CoordinateNotFound { profile: String, coordinate: String },

    #[error("no coordinate at position {index} in profile '{profile}'")]
    CoordinateIndexOutOfRange { profile: String, index: usize },

    #[error("file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("profile '{0}' already exists")]
    DuplicateName(String),

    #[error("{field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a mapping of profile names to {{seed, coords}}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::ProfileNotFound(_)
            | StoreError::CoordinateNotFound { .. }
            | StoreError::CoordinateIndexOutOfRange { .. }
            | StoreError::FileNotFound(_) => ErrorKind::NotFound,
            StoreError::DuplicateName(_) => ErrorKind::DuplicateName,
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::Parse { .. } => ErrorKind::Parse,
            StoreError::Schema { .. } => ErrorKind::Schema,
            StoreError::Io { .. } | StoreError::Serialize(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Sort a serde_json failure into syntax vs shape problems
    pub(crate) fn from_json(path: PathBuf, source: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match source.classify() {
            Category::Syntax | Category::Eof => StoreError::Parse { path, source },
            Category::Data => StoreError::Schema { path, source },
            Category::Io => StoreError::Io {
                path,
                source: source.into(),
            },
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error(text: &str) -> serde_json::Error {
        serde_json::from_str::<std::collections::HashMap<String, u8>>(text).unwrap_err()
    }

    #[test]
    fn test_syntax_error_is_parse() {
        let err = StoreError::from_json(PathBuf::from("a.json"), json_error("{\"x\": "));
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = StoreError::from_json(PathBuf::from("a.json"), json_error("{not json}"));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_wrong_shape_is_schema() {
        let err = StoreError::from_json(PathBuf::from("a.json"), json_error("[1, 2, 3]"));
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().starts_with("a.json is not a mapping"));
    }

    #[test]
    fn test_not_found_variants_share_kind() {
        assert_eq!(StoreError::ProfileNotFound("A".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            StoreError::CoordinateNotFound {
                profile: "A".into(),
                coordinate: "Spawn".into(),
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            StoreError::FileNotFound(PathBuf::from("missing.json")).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            StoreError::DuplicateName("My SMP".into()).to_string(),
            "profile 'My SMP' already exists"
        );
        assert_eq!(
            StoreError::validation("x", "must be a number").to_string(),
            "x: must be a number"
        );
    }
}
