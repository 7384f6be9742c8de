//! Source-insertion transforms for module-bundler pipelines
//!
//! This crate lets a host build pipeline append, prepend, or wrap text
//! around a module's source during a build, with position maps correlating
//! the transformed output back to the original source so downstream tools
//! can still point at original lines.
//!
//! # Architecture
//!
//! The crate is organized around these key types:
//!
//! - [`TransformStage`] - the per-file invocation contract a host drives
//! - [`InsertTransform`] - the adapter wrapping a caller-supplied
//!   [`EditRoutine`] with filtering and result normalization
//! - [`append`] / [`prepend`] / [`wrap`] - builders for the common shapes
//! - [`TransformPipeline`] - an in-order runner over a stage sequence
//!
//! # Example
//!
//! ```ignore
//! use graft_core::{append, wrap, InsertOptions, TransformPipeline};
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(wrap(
//!     "(function () {\n",
//!     "\n})()",
//!     InsertOptions::default(),
//! )?));
//! pipeline.push(Box::new(append(
//!     "\n//# sourceURL=bundle",
//!     InsertOptions { include: vec!["**/*.js".into()], ..Default::default() },
//! )?));
//!
//! // The host drives one call per candidate module:
//! let output = pipeline.run(code, "src/app/main.js").await?;
//! ```

pub mod error;
pub mod filter;
pub mod insert;
pub mod options;
pub mod pipeline;
pub mod transform;
pub mod value;

// Re-export commonly used types
pub use error::{GraftError, Result};
pub use filter::ModuleFilter;
pub use insert::{append, prepend, transform, wrap};
pub use options::InsertOptions;
pub use pipeline::TransformPipeline;
pub use transform::{EditRoutine, InsertTransform, TransformOutput, TransformStage};
pub use value::{EditValue, UnexpectedValue};

// The editing handle is part of the public contract; hosts and routines
// need it without naming the sibling crate.
pub use graft_source_map::{EditBuffer, EditError, SourceMap};
