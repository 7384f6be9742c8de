//! Mutable edit buffers over an original text

use std::fmt;

use thiserror::Error;

use crate::line_index::LineIndex;
use crate::map::{Segment, SourceMap};
use crate::types::Span;

/// Errors raised by edit-buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The range start is past its end.
    #[error("edit range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },

    /// The range extends past the end of the original text.
    #[error("edit range {start}..{end} is out of bounds for a {len}-byte original")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// An offset does not fall on a UTF-8 character boundary.
    #[error("offset {offset} is not a character boundary")]
    NotCharBoundary { offset: usize },

    /// The range intersects a span already replaced by an earlier edit.
    #[error("edit range {start}..{end} overlaps an earlier edit")]
    OverlappingEdit { start: usize, end: usize },
}

/// One span of the original text: retained verbatim, or replaced.
///
/// A zero-length chunk with replacement text is an insertion at that offset.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chunk {
    start: usize,
    end: usize,
    replacement: Option<String>,
}

impl Chunk {
    fn retained(start: usize, end: usize) -> Self {
        Chunk {
            start,
            end,
            replacement: None,
        }
    }

    fn output_len(&self) -> usize {
        match &self.replacement {
            Some(text) => text.len(),
            None => self.end - self.start,
        }
    }
}

/// A mutable, position-preserving editing handle over an original text.
///
/// The original text is kept as an ordered partition of [`Chunk`]s, each
/// either retained or replaced; prepended and appended text accumulate
/// outside the partition. Serializing the buffer (via [`fmt::Display`])
/// stitches the pieces together, and [`EditBuffer::source_map`] reports
/// where each retained chunk landed in the output.
///
/// A buffer belongs to one transform invocation: its serialized text is a
/// function solely of the original text and the edits applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    original: String,
    name: Option<String>,
    intro: String,
    outro: String,
    chunks: Vec<Chunk>,
}

impl EditBuffer {
    /// Create a buffer over `original`.
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let len = original.len();
        EditBuffer {
            original,
            name: None,
            intro: String::new(),
            outro: String::new(),
            chunks: vec![Chunk::retained(0, len)],
        }
    }

    /// Create a buffer over `original` that remembers its source name, so
    /// generated maps can report which file they describe.
    pub fn with_name(original: impl Into<String>, name: impl Into<String>) -> Self {
        let mut buffer = EditBuffer::new(original);
        buffer.name = Some(name.into());
        buffer
    }

    /// The text this buffer was created from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The source name, when one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append `text` after everything else in the buffer.
    ///
    /// Successive appends accumulate in call order.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.outro.push_str(text);
        self
    }

    /// Prepend `text` before everything else in the buffer.
    ///
    /// Successive prepends stack outward: the latest call ends up first in
    /// the output.
    pub fn prepend(&mut self, text: &str) -> &mut Self {
        self.intro.insert_str(0, text);
        self
    }

    /// Replace `start..end` of the original text with `text`.
    ///
    /// Offsets are byte positions into the original text and are unaffected
    /// by edits already applied. A zero-length range inserts `text` at that
    /// offset. A range may not intersect a span already replaced by an
    /// earlier call.
    ///
    /// # Errors
    ///
    /// [`EditError::InvertedRange`] when `start > end`,
    /// [`EditError::OutOfBounds`] when the range leaves the original,
    /// [`EditError::NotCharBoundary`] when an offset splits a UTF-8
    /// sequence, and [`EditError::OverlappingEdit`] when the range
    /// intersects an earlier edit.
    pub fn overwrite(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
    ) -> Result<&mut Self, EditError> {
        if start > end {
            return Err(EditError::InvertedRange { start, end });
        }
        if end > self.original.len() {
            return Err(EditError::OutOfBounds {
                start,
                end,
                len: self.original.len(),
            });
        }
        for offset in [start, end] {
            if !self.original.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        if self.intersects_edit(start, end) {
            return Err(EditError::OverlappingEdit { start, end });
        }

        let replacement = Chunk {
            start,
            end,
            replacement: Some(text.to_string()),
        };

        if start == end {
            let at = self.split_at(start);
            self.chunks.insert(at, replacement);
            return Ok(self);
        }

        let mut first = self.split_at(start);
        // Skip insertions sitting exactly at `start`; they stay in place
        // ahead of the replacement text.
        while first < self.chunks.len() && self.chunks[first].end <= start {
            first += 1;
        }
        let last = self.split_at(end);
        self.chunks.splice(first..last, [replacement]);
        Ok(self)
    }

    /// Generate a position map from the buffer's current state.
    ///
    /// The map carries one segment per retained chunk of the original,
    /// giving its span in the serialized output and its span in the
    /// original text. Prepended, appended, and replacement text have no
    /// original position and appear in no segment.
    pub fn source_map(&self) -> SourceMap {
        let output = self.to_string();
        let output_index = LineIndex::new(&output);
        let original_index = LineIndex::new(&self.original);

        let mut segments = Vec::new();
        let mut cursor = self.intro.len();
        for chunk in &self.chunks {
            let len = chunk.output_len();
            if chunk.replacement.is_none() && len > 0 {
                segments.push(Segment {
                    generated: Span {
                        start: output_index.location(cursor),
                        end: output_index.location(cursor + len),
                    },
                    original: Span {
                        start: original_index.location(chunk.start),
                        end: original_index.location(chunk.end),
                    },
                });
            }
            cursor += len;
        }

        SourceMap {
            file: self.name.clone(),
            segments,
        }
    }

    /// Whether `start..end` intersects a span replaced by an earlier edit.
    ///
    /// A zero-length probe conflicts only when it falls strictly inside a
    /// replaced span; a non-empty range also conflicts when it crosses an
    /// earlier insertion point.
    fn intersects_edit(&self, start: usize, end: usize) -> bool {
        self.chunks
            .iter()
            .filter(|chunk| chunk.replacement.is_some())
            .any(|chunk| start < chunk.end && chunk.start < end)
    }

    /// Index of the first chunk starting at or after `offset`, splitting
    /// the retained chunk that strictly contains it when necessary.
    ///
    /// Offsets strictly inside a replaced span are rejected by
    /// [`EditBuffer::intersects_edit`] before this runs, so only retained
    /// chunks ever split.
    fn split_at(&mut self, offset: usize) -> usize {
        let mut inside = self.chunks.len();
        for (index, chunk) in self.chunks.iter().enumerate() {
            if chunk.start >= offset {
                return index;
            }
            if chunk.end > offset {
                inside = index;
                break;
            }
        }
        if inside == self.chunks.len() {
            return inside;
        }

        let tail = Chunk::retained(offset, self.chunks[inside].end);
        self.chunks[inside].end = offset;
        self.chunks.insert(inside + 1, tail);
        inside + 1
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.intro)?;
        for chunk in &self.chunks {
            match &chunk.replacement {
                Some(text) => f.write_str(text)?,
                None => f.write_str(&self.original[chunk.start..chunk.end])?,
            }
        }
        f.write_str(&self.outro)
    }
}
