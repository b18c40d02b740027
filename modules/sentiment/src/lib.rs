#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! Sentence-averaged sentiment scoring exposed as a streaming-SQL UDF.

/// Five-way sentiment labels and their integer values.
#[path = "../class.rs"]
pub mod class;

/// Collaborator interface for sentence segmentation and classification.
#[path = "../pipeline.rs"]
pub mod pipeline;

/// Built-in word-list pipeline.
#[path = "../lexicon/main.rs"]
pub mod lexicon;

/// Averaging of per-sentence predictions.
#[path = "../scorer.rs"]
pub mod scorer;

/// Telemetry builder for sentiment components.
#[path = "../telemetry.rs"]
pub mod telemetry;

/// TOML configuration.
#[path = "../config.rs"]
pub mod config;

/// Query-engine facing function.
#[path = "../udf.rs"]
pub mod udf;

pub use class::{SentimentClass, UnknownLabel};
pub use config::{LoggingConfig, SentimentConfig};
pub use lexicon::{LexiconPipeline, LexiconPipelineBuilder};
pub use pipeline::{PipelineError, SentimentPipeline};
pub use scorer::{mean_sentiment, SentimentScorer};
pub use telemetry::{SentimentTelemetry, SentimentTelemetryBuilder};
pub use udf::{SentimentUdf, UdfDescriptor};
