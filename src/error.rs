use std::path::PathBuf;

use thiserror::Error;

/// A structural rule of the report schema that the document violated.
///
/// Each variant carries enough detail to tell the user which rule failed
/// and where, since the whole parse aborts on the first violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("There must be exactly one `{tag}` tag, found {count}.")]
    TagCardinality { tag: String, count: usize },

    #[error("Missing `{attribute}` attribute on `{tag}`.")]
    MissingAttribute { tag: String, attribute: String },

    #[error("Invalid version `{value}`. Expected a `major.minor.patch` triple.")]
    InvalidVersion { value: String },

    #[error("Unsupported SpotBugs version `{version}`. Supported versions: 4.0.0 <= v < 5.0.0.")]
    UnsupportedVersion { version: String },

    #[error("XML document should contain at least a single `SrcDir` node inside `Project`.")]
    NoSourceDirectories,

    #[error("At least one `SourceLine` must have `primary` attribute.")]
    NoPrimaryLocation,

    #[error("Source path `{path}` not included in source paths.")]
    UnresolvedSourcePath { path: String },

    #[error("Error when parsing integer: invalid value `{value}` for `{attribute}`.")]
    InvalidInteger { attribute: String, value: String },
}

/// Failure of a whole parse invocation.
///
/// `Syntax` covers everything below the schema level: malformed markup,
/// encoding errors, and read failures, all reduced to the underlying
/// message. `Schema` wraps the specific violated rule.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Syntax error in XML: {details}")]
    Syntax { details: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ParseError {
    pub fn syntax(details: impl ToString) -> Self {
        ParseError::Syntax {
            details: details.to_string(),
        }
    }
}

/// Raised by the caller-facing layer when the report path does not exist.
///
/// Kept apart from [`ParseError`] so a missing input file can be reported
/// differently from a file that exists but fails to parse.
#[derive(Error, Debug)]
#[error("No such file: {}", .path.display())]
pub struct FileNotFound {
    pub path: PathBuf,
}

/// Result type alias for parse and extraction operations.
pub type Result<T> = std::result::Result<T, ParseError>;
