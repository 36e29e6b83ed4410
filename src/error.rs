//! Error types for workload loading.
//!
//! Only the loader can fail. Two kinds exist:
//! - resource errors: the input cannot be opened or read
//! - configuration errors: the input was read but is not a valid workload
//!
//! The first error aborts loading; nothing is collected.

use std::io;
use std::path::PathBuf;

use crate::dispatching::UnknownAlgorithm;

/// Loader result.
pub type LoadResult<T> = Result<T, LoadError>;

/// A fatal error while loading a workload file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read input file '{}': {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but does not describe a valid workload.
    #[error("invalid input file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

impl LoadError {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Resource { path, .. } | LoadError::Config { path, .. } => path,
        }
    }

    /// The configuration error, if this is one.
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            LoadError::Config { source, .. } => Some(source),
            LoadError::Resource { .. } => None,
        }
    }
}

/// An invalid workload description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", line_prefix(.line), .kind)]
pub struct ConfigError {
    /// 1-based line of the offending directive. `None` for whole-file checks.
    pub line: Option<usize>,
    /// What went wrong.
    pub kind: ConfigErrorKind,
}

impl ConfigError {
    /// An error at a specific line.
    pub fn at_line(line: usize, kind: ConfigErrorKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    /// An error about the workload as a whole.
    pub fn global(kind: ConfigErrorKind) -> Self {
        Self { line: None, kind }
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|n| format!("line {n}: ")).unwrap_or_default()
}

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigErrorKind {
    /// A required token is missing.
    #[error("'{directive}' is missing its '{argument}' argument")]
    MissingArgument {
        directive: &'static str,
        argument: &'static str,
    },

    /// A token could not be parsed as the required integer.
    #[error("invalid integer for '{field}': '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    /// `use` named an algorithm that does not exist.
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnknownAlgorithm),

    /// The first word of a line is not a known directive.
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    /// A `process` directive has an unexpected key.
    #[error("unknown process attribute '{key}'")]
    UnknownKey { key: String },

    /// A `process` directive repeats a key.
    #[error("duplicate process attribute '{key}'")]
    DuplicateKey { key: String },

    /// A directive has more tokens than it accepts.
    #[error("unexpected token '{token}' after '{directive}'")]
    TrailingToken {
        directive: &'static str,
        token: String,
    },

    /// A required directive never appeared.
    #[error("missing required directive '{0}'")]
    MissingDirective(&'static str),

    /// A process has a zero burst.
    #[error("process '{name}' has a burst of 0; bursts must be positive")]
    ZeroBurst { name: String },

    /// Two processes share a name.
    #[error("duplicate process name '{name}'")]
    DuplicateName { name: String },
}
