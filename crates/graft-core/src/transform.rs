/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform-stage contract and the insertion adapter.
 */

//! Transform-stage infrastructure.
//!
//! This module provides the contract between a host build pipeline and a
//! source transform, plus the insertion adapter built on it:
//!
//! - [`TransformStage`] - the per-file invocation contract hosts drive
//! - [`EditRoutine`] - the injected edit strategy an adapter wraps
//! - [`InsertTransform`] - filter the file, run the routine, normalize its
//!   result into code plus an optional position map
//!
//! # Design Philosophy
//!
//! - **Stages are stateless across files**: a fresh [`EditBuffer`] is
//!   allocated per invocation, and nothing is shared between invocations
//!   except the pre-compiled filter, so hosts may drive files concurrently
//!   at their discretion.
//!
//! - **Stages are async**: an edit routine that defers work completes
//!   through the same await the host already performs. The adapter relays
//!   the deferred completion without buffering or reordering across files.

use async_trait::async_trait;
use serde::Serialize;

use graft_source_map::{EditBuffer, SourceMap};

use crate::error::{GraftError, Result};
use crate::filter::ModuleFilter;
use crate::options::InsertOptions;
use crate::value::EditValue;

/// Result of one per-file transformation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutput {
    /// The transformed module source.
    pub code: String,
    /// Position map for the transformation, when enabled.
    pub map: Option<SourceMap>,
}

/// A single source-transform stage driven by a host build pipeline.
///
/// `Ok(None)` means the stage declined the file and the host should pass
/// the module through unchanged.
#[async_trait]
pub trait TransformStage: Send + Sync {
    /// Stage name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Transform one module.
    ///
    /// # Errors
    ///
    /// A stage error is fatal for this file's transformation; the host
    /// surfaces it as a build failure. It is never retried here.
    async fn transform(&self, code: &str, id: &str) -> Result<Option<TransformOutput>>;
}

/// The injected edit strategy run by [`InsertTransform`].
///
/// Implemented for every plain closure
/// `Fn(&mut EditBuffer, &str, &str) -> Result<Option<EditValue>>`;
/// implement the trait directly when the routine has to await deferred work
/// before producing its result.
#[async_trait]
pub trait EditRoutine: Send + Sync {
    /// Edit one module, either by mutating `buffer` in place (and returning
    /// `Ok(None)`) or by returning a replacement value.
    async fn edit(
        &self,
        buffer: &mut EditBuffer,
        code: &str,
        id: &str,
    ) -> Result<Option<EditValue>>;
}

#[async_trait]
impl<F> EditRoutine for F
where
    F: Fn(&mut EditBuffer, &str, &str) -> Result<Option<EditValue>> + Send + Sync,
{
    async fn edit(
        &self,
        buffer: &mut EditBuffer,
        code: &str,
        id: &str,
    ) -> Result<Option<EditValue>> {
        self(buffer, code, id)
    }
}

/// Source-insertion transform adapter.
///
/// Wraps an [`EditRoutine`], applies the include/exclude filter, and
/// normalizes the routine's return value:
///
/// - replacement text overwrites the whole original span in the working
///   buffer
/// - a returned buffer replaces the working buffer outright, discarding any
///   mutations the routine made to the one it was handed
/// - no value means the working buffer is used as mutated in place
/// - anything else fails with [`GraftError::InvalidReturnShape`]
pub struct InsertTransform {
    routine: Box<dyn EditRoutine>,
    filter: ModuleFilter,
    source_map: bool,
}

impl std::fmt::Debug for InsertTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertTransform")
            .field("filter", &self.filter)
            .field("source_map", &self.source_map)
            .finish_non_exhaustive()
    }
}

impl InsertTransform {
    /// Wrap `routine` with `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Pattern`] when an include or exclude pattern
    /// fails to compile.
    pub fn new(routine: impl EditRoutine + 'static, options: InsertOptions) -> Result<Self> {
        Ok(InsertTransform {
            routine: Box::new(routine),
            filter: ModuleFilter::new(&options.include, &options.exclude)?,
            source_map: options.source_map,
        })
    }
}

#[async_trait]
impl TransformStage for InsertTransform {
    fn name(&self) -> &str {
        "insert"
    }

    async fn transform(&self, code: &str, id: &str) -> Result<Option<TransformOutput>> {
        if !self.filter.matches(id) {
            tracing::trace!(stage = self.name(), id, "identifier excluded by filter");
            return Ok(None);
        }

        let mut buffer = EditBuffer::with_name(code, id);
        match self.routine.edit(&mut buffer, code, id).await? {
            None => {}
            Some(EditValue::Text(text)) => {
                buffer.overwrite(0, code.len(), &text)?;
            }
            Some(EditValue::Buffer(replacement)) => buffer = replacement,
            Some(EditValue::Other(value)) => {
                return Err(GraftError::InvalidReturnShape {
                    received: value.render(),
                });
            }
        }

        let map = self.source_map.then(|| buffer.source_map());
        Ok(Some(TransformOutput {
            code: buffer.to_string(),
            map,
        }))
    }
}
