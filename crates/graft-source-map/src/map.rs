//! Position maps for transformed text

use serde::{Deserialize, Serialize};

use crate::types::Span;

/// A segment correlating a span of transformed output with the span of the
/// original text it was copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Span in the transformed output
    pub generated: Span,
    /// Span in the original text
    pub original: Span,
}

/// A position map for one transformed text.
///
/// Correlates the unmodified spans of the output back to their positions in
/// the original. Inserted or replacement text has no original position and
/// does not appear in the map. Segments are listed in output order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceMap {
    /// Name of the source the buffer was created from, when known
    pub file: Option<String>,
    /// Mapping segments in output order
    pub segments: Vec<Segment>,
}

impl SourceMap {
    /// Map a byte offset in the transformed output back to the byte offset
    /// of the original text it was copied from.
    ///
    /// Returns `None` for offsets that fall inside inserted or replacement
    /// text.
    pub fn map_offset(&self, offset: usize) -> Option<usize> {
        for segment in &self.segments {
            let start = segment.generated.start.offset;
            let end = segment.generated.end.offset;
            if offset >= start && offset < end {
                return Some(segment.original.start.offset + (offset - start));
            }
        }
        None
    }
}
