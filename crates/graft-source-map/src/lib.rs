//! Edit buffers and position maps for graft
//!
//! This crate provides the text-editing handle used by graft transform
//! stages: a mutable buffer over an original text that supports
//! position-preserving edits (append, prepend, overwrite a range) and can
//! report, after editing, where each untouched span of the original landed
//! in the output.
//!
//! # Overview
//!
//! The core types are:
//! - [`EditBuffer`]: the mutable editing handle
//! - [`SourceMap`]: the position map generated from a buffer
//! - [`Location`] / [`Span`]: byte-offset positions with row/column info
//!
//! # Example
//!
//! ```rust
//! use graft_source_map::EditBuffer;
//!
//! let mut buffer = EditBuffer::new("const x = 1");
//! buffer.prepend("// generated\n").append("\nexport default x");
//!
//! assert_eq!(
//!     buffer.to_string(),
//!     "// generated\nconst x = 1\nexport default x",
//! );
//!
//! // The original text is untouched, so the map has a single segment
//! // covering it, shifted past the prepended line in the output.
//! let map = buffer.source_map();
//! assert_eq!(map.segments.len(), 1);
//! assert_eq!(map.segments[0].original.start.offset, 0);
//! assert_eq!(map.segments[0].generated.start.row, 1);
//! ```

pub mod buffer;
pub mod line_index;
pub mod map;
pub mod types;

// Re-export main types
pub use buffer::{EditBuffer, EditError};
pub use line_index::LineIndex;
pub use map::{Segment, SourceMap};
pub use types::{Location, Span};
