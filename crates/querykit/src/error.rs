//! Error types for querykit

use std::fmt;

use thiserror::Error;

use crate::builder::StatementKind;
use crate::sanitize::IdentContext;

/// Result type alias for querykit operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors reported by the fallible entry points (`validate`, `try_build`,
/// config loading, identifier parsing).
///
/// Declaration methods never fail; see [`Issue`] for what validation finds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The statement record has structural problems
    #[error("Invalid statement: {}", IssueList(.issues))]
    Invalid { issues: Vec<Issue> },

    /// Identifier does not match the identifier grammar
    #[error("Identifier error: {0}")]
    Identifier(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl BuildError {
    /// Create an identifier error
    pub fn identifier(message: impl Into<String>) -> Self {
        Self::Identifier(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Issues carried by an `Invalid` error (empty for other variants).
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Invalid { issues } => issues,
            _ => &[],
        }
    }

    /// Check if this is a structural validation error
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// One structural problem found in a statement record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    /// No table was declared (or it is blank).
    #[error("no table declared")]
    MissingTable,

    /// Insert column and value lists differ in length.
    #[error("{kind} declares {columns} column(s) but {values} value(s)")]
    ColumnValueMismatch {
        kind: StatementKind,
        columns: usize,
        values: usize,
    },

    /// UPDATE without any assignment.
    #[error("update has no set assignments")]
    EmptySet,

    /// A declared clause is not rendered for this statement kind.
    #[error("{clause} is ignored for {kind}")]
    ClauseIgnored {
        kind: StatementKind,
        clause: &'static str,
    },

    /// The safety filter rewrote an input before rendering.
    #[error("{context} '{original}' was rewritten to '{rendered}'")]
    SanitizedIdentifier {
        context: IdentContext,
        original: String,
        rendered: String,
    },

    /// A name-only position does not match the identifier grammar.
    #[error("{context} '{name}' is not a valid identifier: {reason}")]
    InvalidIdentifier {
        context: IdentContext,
        name: String,
        reason: String,
    },
}

struct IssueList<'a>(&'a [Issue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
