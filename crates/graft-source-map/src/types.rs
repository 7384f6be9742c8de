//! Core position types

use serde::{Deserialize, Serialize};

/// A location in a text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Byte offset from the start of the text
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in bytes from the line start)
    pub column: usize,
}

/// A half-open span of text: start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Span {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(offset: usize, row: usize, column: usize) -> Location {
        Location {
            offset,
            row,
            column,
        }
    }

    #[test]
    fn test_location_ordering_follows_offset() {
        assert!(loc(0, 0, 0) < loc(3, 0, 3));
        assert!(loc(3, 0, 3) < loc(7, 1, 0));
    }

    #[test]
    fn test_span_len() {
        let span = Span {
            start: loc(4, 0, 4),
            end: loc(9, 1, 2),
        };
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_empty_span() {
        let span = Span {
            start: loc(4, 0, 4),
            end: loc(4, 0, 4),
        };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_serialization() {
        let span = Span {
            start: loc(0, 0, 0),
            end: loc(11, 1, 5),
        };
        let json = serde_json::to_string(&span).unwrap();
        let deserialized: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(span, deserialized);
    }
}
