use std::fmt;
use thiserror::Error;

/// What is wrong with a rejected path string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDefect {
    Empty,
    LeadingDelimiter,
    TrailingDelimiter,
    /// 1-based index of the first empty segment
    EmptySegment { position: usize },
    /// Segment made only of whitespace
    BlankSegment { position: usize },
    /// Segment containing a newline, tab or other control character
    ControlCharacter { position: usize },
}

impl fmt::Display for PathDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathDefect::Empty => write!(f, "path is empty"),
            PathDefect::LeadingDelimiter => write!(f, "path starts with '/'"),
            PathDefect::TrailingDelimiter => write!(f, "path ends with '/'"),
            PathDefect::EmptySegment { position } => {
                write!(f, "segment {} is empty", position)
            }
            PathDefect::BlankSegment { position } => {
                write!(f, "segment {} is blank", position)
            }
            PathDefect::ControlCharacter { position } => {
                write!(f, "segment {} contains a control character", position)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: PathDefect },

    #[error("Mindmap title must not be empty")]
    EmptyTitle,

    #[error("Failed to parse mindmap document: {source}")]
    Document {
        #[from]
        source: serde_json::Error,
    },
}

impl OutlineError {
    pub(crate) fn invalid_path(path: &str, reason: PathDefect) -> Self {
        OutlineError::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutlineError>;
