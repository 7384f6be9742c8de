//! Error types for graft-core

use thiserror::Error;

use graft_source_map::EditError;

#[derive(Error, Debug)]
pub enum GraftError {
    /// An include or exclude pattern failed to compile.
    #[error("invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// An edit routine returned something other than replacement text, an
    /// edit buffer, or nothing. This is a caller programming error and is
    /// fatal for the file being transformed.
    #[error(
        "edit routine must return replacement text, an edit buffer, or nothing, but received: {received}"
    )]
    InvalidReturnShape { received: String },

    /// An edit-buffer operation was misused.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// An edit routine failed with its own error, relayed unmodified.
    #[error(transparent)]
    Routine(#[from] anyhow::Error),
}

impl GraftError {
    /// Wrap an arbitrary edit-routine failure.
    pub fn routine(err: impl Into<anyhow::Error>) -> Self {
        Self::Routine(err.into())
    }
}

pub type Result<T> = std::result::Result<T, GraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_return_shape_names_the_value() {
        let err = GraftError::InvalidReturnShape {
            received: "0".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("received: 0"));
    }

    #[test]
    fn test_edit_error_passes_through_transparently() {
        let err = GraftError::from(EditError::InvertedRange { start: 5, end: 2 });
        assert_eq!(err.to_string(), "edit range 5..2 is inverted");
    }

    #[test]
    fn test_routine_error_keeps_its_message() {
        let err = GraftError::routine(anyhow::anyhow!("engine unavailable"));
        assert_eq!(err.to_string(), "engine unavailable");
    }
}
