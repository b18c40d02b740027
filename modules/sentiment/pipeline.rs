use std::sync::Arc;

use thiserror::Error;

/// Failures raised by an NLP pipeline. Surfaced to callers unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The model or its resources could not be loaded.
    #[error("model load failed: {0}")]
    ModelLoad(String),
    /// The input could not be tokenized or segmented.
    #[error("tokenization failed: {0}")]
    Tokenization(String),
    /// Classification of a sentence failed.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// External NLP collaborator: sentence segmentation plus five-class sentiment.
///
/// Implementations are built once, then shared read-only across callers.
pub trait SentimentPipeline: Send + Sync {
    /// Splits `text` into sentences and returns one raw class index per
    /// sentence, `0` (very negative) through `4` (very positive).
    fn segment_and_classify(&self, text: &str) -> Result<Vec<usize>, PipelineError>;
}

impl<P: SentimentPipeline + ?Sized> SentimentPipeline for Arc<P> {
    fn segment_and_classify(&self, text: &str) -> Result<Vec<usize>, PipelineError> {
        (**self).segment_and_classify(text)
    }
}

impl<P: SentimentPipeline + ?Sized> SentimentPipeline for Box<P> {
    fn segment_and_classify(&self, text: &str) -> Result<Vec<usize>, PipelineError> {
        (**self).segment_and_classify(text)
    }
}
