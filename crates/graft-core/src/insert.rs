/*
 * insert.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Builder functions for the common insertion shapes.
 */

//! Builders for the common insertion shapes.
//!
//! [`transform`] wraps an arbitrary edit routine; [`append`], [`prepend`],
//! and [`wrap`] cover the degenerate routines that only add text at the
//! ends of the buffer and never look at the module's content or identifier.

use graft_source_map::EditBuffer;

use crate::error::Result;
use crate::options::InsertOptions;
use crate::transform::{EditRoutine, InsertTransform};
use crate::value::EditValue;

/// Wrap an edit routine as a pipeline stage.
///
/// # Errors
///
/// Returns [`crate::GraftError::Pattern`] when an include or exclude
/// pattern fails to compile.
pub fn transform(
    routine: impl EditRoutine + 'static,
    options: InsertOptions,
) -> Result<InsertTransform> {
    InsertTransform::new(routine, options)
}

/// A stage that appends `suffix` to every matching module.
///
/// # Errors
///
/// Returns [`crate::GraftError::Pattern`] when an include or exclude
/// pattern fails to compile.
pub fn append(suffix: impl Into<String>, options: InsertOptions) -> Result<InsertTransform> {
    let suffix = suffix.into();
    InsertTransform::new(
        move |buffer: &mut EditBuffer, _code: &str, _id: &str| -> Result<Option<EditValue>> {
            buffer.append(&suffix);
            Ok(None)
        },
        options,
    )
}

/// A stage that prepends `prefix` to every matching module.
///
/// # Errors
///
/// Returns [`crate::GraftError::Pattern`] when an include or exclude
/// pattern fails to compile.
pub fn prepend(prefix: impl Into<String>, options: InsertOptions) -> Result<InsertTransform> {
    let prefix = prefix.into();
    InsertTransform::new(
        move |buffer: &mut EditBuffer, _code: &str, _id: &str| -> Result<Option<EditValue>> {
            buffer.prepend(&prefix);
            Ok(None)
        },
        options,
    )
}

/// A stage that wraps every matching module between `begin` and `end`.
///
/// # Errors
///
/// Returns [`crate::GraftError::Pattern`] when an include or exclude
/// pattern fails to compile.
pub fn wrap(
    begin: impl Into<String>,
    end: impl Into<String>,
    options: InsertOptions,
) -> Result<InsertTransform> {
    let begin = begin.into();
    let end = end.into();
    InsertTransform::new(
        move |buffer: &mut EditBuffer, _code: &str, _id: &str| -> Result<Option<EditValue>> {
            buffer.prepend(&begin).append(&end);
            Ok(None)
        },
        options,
    )
}
