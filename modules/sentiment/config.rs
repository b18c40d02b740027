use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use shared_logging::LogLevel;

use crate::{
    lexicon::{LexiconPipeline, DEFAULT_NEGATION_WINDOW},
    telemetry::SentimentTelemetry,
};

/// Runtime settings for the sentiment UDF, read from TOML.
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Optional lexicon file merged over the built-in vocabulary.
    pub lexicon_path: Option<PathBuf>,
    /// Tokens a negator reaches forward.
    pub negation_window: usize,
    /// Structured log settings.
    pub logging: LoggingConfig,
}

/// `[logging]` table.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// JSON-lines log file. Logging is off when unset.
    pub path: Option<PathBuf>,
    /// Least severe level written.
    pub level: LogLevel,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SentimentConfigSerde {
    #[serde(default)]
    lexicon_path: Option<PathBuf>,
    #[serde(default = "default_negation_window")]
    negation_window: usize,
    #[serde(default)]
    logging: LoggingConfigSerde,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingConfigSerde {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    level: Option<String>,
}

const fn default_negation_window() -> usize {
    DEFAULT_NEGATION_WINDOW
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            negation_window: DEFAULT_NEGATION_WINDOW,
            logging: LoggingConfig::default(),
        }
    }
}

impl SentimentConfig {
    /// Loads configuration from a TOML file; relative paths resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading sentiment config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&raw, base).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parses TOML text, resolving relative paths against `base`.
    pub fn parse(raw: &str, base: &Path) -> Result<Self> {
        let document: SentimentConfigSerde = toml::from_str(raw)?;
        if document.negation_window == 0 {
            bail!("negation_window must be at least 1");
        }
        let level = match document.logging.level.as_deref() {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        };
        let resolve = |candidate: PathBuf| {
            if candidate.is_absolute() {
                candidate
            } else {
                base.join(candidate)
            }
        };
        Ok(Self {
            lexicon_path: document.lexicon_path.map(resolve),
            negation_window: document.negation_window,
            logging: LoggingConfig {
                path: document.logging.path.map(resolve),
                level,
            },
        })
    }

    /// Builds the lexicon pipeline described by this config.
    pub fn build_pipeline(&self) -> Result<LexiconPipeline> {
        let mut builder = LexiconPipeline::builder().negation_window(self.negation_window);
        if let Some(path) = &self.lexicon_path {
            builder = builder.lexicon_file(path);
        }
        Ok(builder.build()?)
    }

    /// Builds telemetry for `module`; disabled when no log path is set.
    pub fn build_telemetry(&self, module: &str) -> Result<SentimentTelemetry> {
        match &self.logging.path {
            Some(path) => SentimentTelemetry::builder(module)
                .log_path(path)
                .min_level(self.logging.level)
                .build(),
            None => Ok(SentimentTelemetry::disabled(module)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = SentimentConfig::parse("", Path::new("/etc/ksent")).unwrap();
        assert_eq!(cfg.negation_window, DEFAULT_NEGATION_WINDOW);
        assert!(cfg.lexicon_path.is_none());
        assert!(cfg.logging.path.is_none());
        assert_eq!(cfg.logging.level, LogLevel::Info);
        assert_eq!(
            SentimentConfig::default().negation_window,
            cfg.negation_window
        );
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ksent.toml");
        fs::write(
            &path,
            "lexicon_path = \"lexicon.toml\"\nnegation_window = 2\n\n[logging]\npath = \"logs/udf.log\"\nlevel = \"debug\"\n",
        )
        .unwrap();
        let cfg = SentimentConfig::load(&path).unwrap();
        assert_eq!(cfg.lexicon_path, Some(dir.path().join("lexicon.toml")));
        assert_eq!(cfg.logging.path, Some(dir.path().join("logs/udf.log")));
        assert_eq!(cfg.logging.level, LogLevel::Debug);
        assert_eq!(cfg.negation_window, 2);
    }

    #[test]
    fn rejects_invalid_values() {
        let base = Path::new(".");
        assert!(SentimentConfig::parse("negation_window = 0", base).is_err());
        assert!(SentimentConfig::parse("[logging]\nlevel = \"chatty\"", base).is_err());
        assert!(SentimentConfig::parse("unknown = 1", base).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = SentimentConfig::load("/nonexistent/ksent.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/ksent.toml"));
    }

    #[test]
    fn builds_pipeline_and_telemetry() {
        let dir = tempdir().unwrap();
        let lexicon = dir.path().join("lexicon.toml");
        fs::write(&lexicon, "[words]\nparty = 3\n").unwrap();
        let cfg = SentimentConfig {
            lexicon_path: Some(lexicon),
            logging: LoggingConfig {
                path: Some(dir.path().join("udf.log")),
                level: LogLevel::Warn,
            },
            ..SentimentConfig::default()
        };
        let pipeline = cfg.build_pipeline().unwrap();
        assert_eq!(pipeline.valence("party"), Some(3));
        let telemetry = cfg.build_telemetry("sentiment").unwrap();
        telemetry
            .log(LogLevel::Info, "dropped", &serde_json::json!({}))
            .unwrap();
        telemetry
            .log(LogLevel::Error, "kept", &serde_json::json!({}))
            .unwrap();
        let content = fs::read_to_string(dir.path().join("udf.log")).unwrap();
        assert!(!content.contains("dropped"));
        assert!(content.contains("kept"));
    }
}
