//! Stage construction options

use serde::{Deserialize, Serialize};

/// Options recognized when constructing an insertion stage.
///
/// Deserializes from host build configuration with the conventional
/// camelCase keys (`include`, `exclude`, `sourceMap`); every field has a
/// default, so `{}` yields a stage that matches every module and produces
/// position maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertOptions {
    /// Glob patterns for identifiers eligible for transformation.
    /// Empty means every identifier is eligible.
    pub include: Vec<String>,
    /// Glob patterns for identifiers excluded from transformation.
    /// Exclusion wins over inclusion.
    pub exclude: Vec<String>,
    /// Whether transform output carries a position map.
    pub source_map: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        InsertOptions {
            include: Vec::new(),
            exclude: Vec::new(),
            source_map: true,
        }
    }
}
