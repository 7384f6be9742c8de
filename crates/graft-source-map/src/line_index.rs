//! Offset-to-location lookups

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// Index of line-break positions in a text.
///
/// Built with a single scan of the text; afterwards byte offsets convert to
/// (row, column) positions in O(log n) via binary search over the recorded
/// newlines, without keeping the text itself around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIndex {
    /// Byte offsets of each `\n` in the indexed text
    line_breaks: Vec<usize>,
    /// Total length of the indexed text in bytes
    total_length: usize,
}

impl LineIndex {
    /// Index `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use graft_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("hello\nworld");
    /// let loc = index.location(6);
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 0);
    /// ```
    pub fn new(text: &str) -> Self {
        let line_breaks: Vec<usize> = text
            .char_indices()
            .filter_map(|(idx, ch)| if ch == '\n' { Some(idx) } else { None })
            .collect();

        LineIndex {
            line_breaks,
            total_length: text.len(),
        }
    }

    /// Convert a byte offset to a [`Location`].
    ///
    /// A newline belongs to the line it terminates, not the next line.
    /// Offsets past the end of the indexed text clamp to the final location,
    /// so callers working with offsets derived from the text itself never
    /// have to handle a missing result.
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.total_length);

        // line_breaks[i] is the position of the i-th newline, so line 0
        // covers [0, line_breaks[0]] and line i+1 starts at line_breaks[i]+1.
        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };

        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks[row - 1] + 1
        };

        Location {
            offset,
            row,
            column: offset - line_start,
        }
    }

    /// Length of the indexed text in bytes.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        // n newlines terminate n lines and open one more
        self.line_breaks.len() + 1
    }
}
