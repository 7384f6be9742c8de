//! Include/exclude matching over module identifiers

use glob::Pattern;

use crate::error::{GraftError, Result};

/// A compiled include/exclude predicate over module identifiers.
///
/// Patterns use conventional glob syntax. Exclusion wins over inclusion,
/// and an empty include set matches every identifier not excluded, so a
/// default-constructed filter matches everything.
///
/// Patterns compile once at construction; per-file checks never re-parse.
#[derive(Debug, Clone, Default)]
pub struct ModuleFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl ModuleFilter {
    /// Compile include and exclude pattern sets.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Pattern`] for the first pattern that fails to
    /// compile.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(ModuleFilter {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Decide whether `id` is eligible for transformation.
    pub fn matches(&self, id: &str) -> bool {
        if self.exclude.iter().any(|pattern| pattern.matches(id)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|pattern| pattern.matches(id))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| GraftError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ModuleFilter::new(&[], &[]).unwrap();
        assert!(filter.matches("src/main.js"));
        assert!(filter.matches("anything at all"));
    }

    #[test]
    fn test_include_restricts() {
        let filter = ModuleFilter::new(&patterns(&["*.html"]), &[]).unwrap();
        assert!(filter.matches("template.html"));
        assert!(!filter.matches("template.js"));
    }

    #[test]
    fn test_recursive_include() {
        let filter = ModuleFilter::new(&patterns(&["src/**/*.js"]), &[]).unwrap();
        assert!(filter.matches("src/app/main.js"));
        assert!(!filter.matches("vendor/lib.js"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter =
            ModuleFilter::new(&patterns(&["src/**/*.js"]), &patterns(&["src/**/*.test.js"]))
                .unwrap();
        assert!(filter.matches("src/app/main.js"));
        assert!(!filter.matches("src/app/main.test.js"));
    }

    #[test]
    fn test_exclude_alone() {
        let filter = ModuleFilter::new(&[], &patterns(&["node_modules/**"])).unwrap();
        assert!(filter.matches("src/main.js"));
        assert!(!filter.matches("node_modules/pkg/index.js"));
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let err = ModuleFilter::new(&patterns(&["a["]), &[]).unwrap_err();
        assert!(matches!(err, GraftError::Pattern { .. }));
        assert!(err.to_string().contains("a["));
    }
}
