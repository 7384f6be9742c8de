/*
 * pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * In-order runner for a sequence of transform stages.
 */

//! Transform pipeline runner.
//!
//! Stages run in a flat, ordered sequence (insertion order). Each stage
//! that transforms a module feeds its output code to the next stage; stages
//! that decline a file leave the running code untouched.
//!
//! Position maps are not composed across stages: the map returned by
//! [`TransformPipeline::run`] is the last transforming stage's and
//! describes that stage's input. Hosts that need end-to-end maps chain
//! them themselves.

use crate::error::Result;
use crate::transform::{TransformOutput, TransformStage};

/// An ordered sequence of transform stages.
pub struct TransformPipeline {
    stages: Vec<Box<dyn TransformStage>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline.
    ///
    /// Stages run in the order they are added.
    pub fn push(&mut self, stage: Box<dyn TransformStage>) {
        self.stages.push(stage);
    }

    /// Add multiple stages to the pipeline.
    pub fn extend(&mut self, stages: impl IntoIterator<Item = Box<dyn TransformStage>>) {
        self.stages.extend(stages);
    }

    /// Get the number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// List the names of all stages in execution order.
    ///
    /// Useful for debugging and logging.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage over one module.
    ///
    /// Returns `Ok(None)` when every stage declined the file.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops there.
    pub async fn run(&self, code: &str, id: &str) -> Result<Option<TransformOutput>> {
        let mut current: Option<TransformOutput> = None;
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), id, "running transform stage");
            let input = current.as_ref().map_or(code, |output| output.code.as_str());
            if let Some(output) = stage.transform(input, id).await? {
                current = Some(output);
            }
        }

        Ok(current)
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraftError;
    use crate::insert::{append, prepend};
    use crate::options::InsertOptions;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// A stage that records its execution order.
    struct RecordingStage {
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl TransformStage for RecordingStage {
        fn name(&self) -> &str {
            self.name
        }

        async fn transform(&self, code: &str, _id: &str) -> Result<Option<TransformOutput>> {
            self.order.lock().unwrap().push(self.name);
            Ok(Some(TransformOutput {
                code: format!("{code}+{name}", name = self.name),
                map: None,
            }))
        }
    }

    /// A stage that always fails.
    struct FailingStage;

    #[async_trait]
    impl TransformStage for FailingStage {
        fn name(&self) -> &str {
            "failing"
        }

        async fn transform(&self, _code: &str, _id: &str) -> Result<Option<TransformOutput>> {
            Err(GraftError::routine(anyhow::anyhow!(
                "stage failed intentionally"
            )))
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = TransformPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_pipeline_declines() {
        let pipeline = TransformPipeline::new();
        let result = pipeline.run("code", "a.js").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_stages_run_in_insertion_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = TransformPipeline::new();
        pipeline.push(Box::new(RecordingStage {
            name: "first",
            order: order.clone(),
        }));
        pipeline.push(Box::new(RecordingStage {
            name: "second",
            order: order.clone(),
        }));

        let output = pipeline.run("x", "a.js").await.unwrap().unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(output.code, "x+first+second");
    }

    #[tokio::test]
    async fn test_error_stops_execution() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = TransformPipeline::new();
        pipeline.push(Box::new(RecordingStage {
            name: "before-fail",
            order: order.clone(),
        }));
        pipeline.push(Box::new(FailingStage));
        pipeline.push(Box::new(RecordingStage {
            name: "after-fail",
            order: order.clone(),
        }));

        let result = pipeline.run("x", "a.js").await;
        assert!(result.is_err());
        assert_eq!(*order.lock().unwrap(), vec!["before-fail"]);
    }

    #[tokio::test]
    async fn test_declining_stage_leaves_code_for_the_next() {
        let mut pipeline = TransformPipeline::new();
        pipeline.push(Box::new(
            prepend(
                "never\n",
                InsertOptions {
                    include: vec!["*.html".to_string()],
                    ..InsertOptions::default()
                },
            )
            .unwrap(),
        ));
        pipeline.push(Box::new(append("\nalways", InsertOptions::default()).unwrap()));

        let output = pipeline.run("base", "a.js").await.unwrap().unwrap();
        assert_eq!(output.code, "base\nalways");
    }

    #[tokio::test]
    async fn test_stage_names() {
        let mut pipeline = TransformPipeline::new();
        pipeline.push(Box::new(append("a", InsertOptions::default()).unwrap()));
        pipeline.push(Box::new(prepend("b", InsertOptions::default()).unwrap()));
        assert_eq!(pipeline.stage_names(), vec!["insert", "insert"]);
    }
}
