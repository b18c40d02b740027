use std::sync::Arc;

use crate::{
    class::SentimentClass,
    pipeline::{PipelineError, SentimentPipeline},
};

/// Averages per-sentence predictions of a shared pipeline into one label.
///
/// The scorer owns no state of its own; cloning it only bumps the pipeline
/// reference count.
#[derive(Debug)]
pub struct SentimentScorer<P> {
    pipeline: Arc<P>,
}

impl<P> Clone for SentimentScorer<P> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

impl<P: SentimentPipeline> SentimentScorer<P> {
    /// Wraps an already constructed pipeline.
    #[must_use]
    pub fn new(pipeline: P) -> Self {
        Self::shared(Arc::new(pipeline))
    }

    /// Uses a pipeline that is also held elsewhere in the process.
    #[must_use]
    pub fn shared(pipeline: Arc<P>) -> Self {
        Self { pipeline }
    }

    /// Returns the underlying pipeline handle.
    #[must_use]
    pub fn pipeline(&self) -> &Arc<P> {
        &self.pipeline
    }

    /// Classifies `text` as the rounded mean of its sentence sentiments.
    ///
    /// Missing, empty, or whitespace-only input is [`SentimentClass::Neutral`]
    /// and never reaches the pipeline. Pipeline failures are returned as is.
    pub fn classify(&self, text: Option<&str>) -> Result<SentimentClass, PipelineError> {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Ok(SentimentClass::Neutral);
        };
        let sentences: Vec<SentimentClass> = self
            .pipeline
            .segment_and_classify(text)?
            .into_iter()
            .map(SentimentClass::from_predicted_class)
            .collect();
        Ok(mean_sentiment(&sentences))
    }
}

/// Rounded arithmetic mean of `classes`, halves rounding away from zero.
///
/// An empty slice averages to [`SentimentClass::Neutral`].
///
/// # Panics
///
/// Never for valid labels: the mean of values in `[-2, 2]` stays in range.
#[must_use]
pub fn mean_sentiment(classes: &[SentimentClass]) -> SentimentClass {
    if classes.is_empty() {
        return SentimentClass::Neutral;
    }
    let sum: i64 = classes.iter().map(|c| i64::from(c.value())).sum();
    let count = i64::try_from(classes.len()).unwrap_or(i64::MAX);
    let rounded = round_half_away(sum, count);
    i32::try_from(rounded)
        .ok()
        .and_then(SentimentClass::from_value)
        .unwrap_or_else(|| {
            unreachable!("mean sentiment {rounded} of {count} sentences outside [-2, 2]")
        })
}

fn round_half_away(sum: i64, count: i64) -> i64 {
    // Integer division truncates toward zero, so bias by half a step away from it.
    let bias = if sum < 0 { -count } else { count };
    (2 * sum + bias) / (2 * count)
}
