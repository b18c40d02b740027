use serde::Serialize;
use serde_json::json;
use shared_logging::LogLevel;

use crate::{
    class::SentimentClass,
    pipeline::{PipelineError, SentimentPipeline},
    scorer::SentimentScorer,
    telemetry::SentimentTelemetry,
};

/// Registration metadata a query engine needs to expose the function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UdfDescriptor {
    /// Function name used in queries.
    pub name: &'static str,
    /// Human-readable summary.
    pub description: &'static str,
    /// Single parameter name.
    pub parameter: &'static str,
    /// Parameter type.
    pub parameter_type: &'static str,
    /// Return type.
    pub return_type: &'static str,
}

/// The `sentiment(string)` user-defined function.
///
/// Wraps a shared [`SentimentScorer`] and reports each invocation to telemetry.
#[derive(Debug)]
pub struct SentimentUdf<P> {
    scorer: SentimentScorer<P>,
    telemetry: Option<SentimentTelemetry>,
}

impl<P> Clone for SentimentUdf<P> {
    fn clone(&self) -> Self {
        Self {
            scorer: self.scorer.clone(),
            telemetry: self.telemetry.clone(),
        }
    }
}

impl<P: SentimentPipeline> SentimentUdf<P> {
    /// Function name.
    pub const NAME: &'static str = "sentiment";
    /// Function description.
    pub const DESCRIPTION: &'static str = "Determine sentiment as an Integer [-2,2]";
    /// Parameter name.
    pub const PARAMETER: &'static str = "string";

    /// Creates the UDF.
    #[must_use]
    pub fn new(scorer: SentimentScorer<P>, telemetry: Option<SentimentTelemetry>) -> Self {
        Self { scorer, telemetry }
    }

    /// Describes the function signature.
    #[must_use]
    pub fn descriptor() -> UdfDescriptor {
        UdfDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            parameter: Self::PARAMETER,
            parameter_type: "STRING",
            return_type: "INTEGER",
        }
    }

    /// The scorer backing this function.
    #[must_use]
    pub fn scorer(&self) -> &SentimentScorer<P> {
        &self.scorer
    }

    /// Evaluates the function for one value, returning an integer in `[-2, 2]`.
    pub fn sentiment(&self, string: Option<&str>) -> Result<i32, PipelineError> {
        self.classify(string).map(SentimentClass::value)
    }

    /// Same evaluation as [`Self::sentiment`], keeping the label.
    pub fn classify(&self, string: Option<&str>) -> Result<SentimentClass, PipelineError> {
        match self.scorer.classify(string) {
            Ok(class) => {
                self.log(
                    LogLevel::Debug,
                    "sentiment.classified",
                    &json!({
                        "chars": string.map_or(0, |s| s.chars().count()),
                        "label": class.label(),
                        "value": class.value(),
                    }),
                );
                Ok(class)
            }
            Err(err) => {
                self.log(
                    LogLevel::Error,
                    "sentiment.failed",
                    &json!({ "error": err.to_string() }),
                );
                Err(err)
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, metadata: &serde_json::Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(level, message, metadata);
        }
    }
}
