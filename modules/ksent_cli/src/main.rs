use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ksent_sentiment::{LexiconPipeline, SentimentConfig, SentimentScorer, SentimentUdf};
use serde_json::json;
use shared_logging::LogLevel;

mod stream;

use stream::{run_stream, StreamFormat};

#[derive(Parser, Debug)]
#[command(name = "ksent", version, about = "Sentiment UDF host")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scores a single text and prints the integer result.
    Score {
        #[command(flatten)]
        runtime: RuntimeArgs,
        /// Text to score; words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Scores each stdin line, writing one result per line.
    Stream {
        #[command(flatten)]
        runtime: RuntimeArgs,
        /// Read `{"id":..,"text":..}` records and write JSON results.
        #[arg(long)]
        json: bool,
    },
    /// Prints the function registration metadata.
    Describe,
}

#[derive(Args, Debug)]
struct RuntimeArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON-lines log file, overriding the configured one.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl RuntimeArgs {
    fn build_udf(&self) -> Result<SentimentUdf<LexiconPipeline>> {
        let mut config = match &self.config {
            Some(path) => SentimentConfig::load(path)?,
            None => SentimentConfig::default(),
        };
        if let Some(path) = &self.log_file {
            config.logging.path = Some(path.clone());
        }
        let telemetry = config.build_telemetry("ksent")?;
        let pipeline = config.build_pipeline()?;
        let _ = telemetry.log(
            LogLevel::Info,
            "ksent.pipeline.ready",
            &json!({
                "vocabulary": pipeline.vocabulary_len(),
                "negation_window": config.negation_window,
            }),
        );
        Ok(SentimentUdf::new(
            SentimentScorer::new(pipeline),
            Some(telemetry),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Score { runtime, text } => {
            let udf = runtime.build_udf()?;
            let text = text.join(" ");
            println!("{}", udf.sentiment(Some(text.as_str()))?);
            Ok(())
        }
        Commands::Stream { runtime, json } => {
            let udf = runtime.build_udf()?;
            let format = if json {
                StreamFormat::Json
            } else {
                StreamFormat::Plain
            };
            let reader = tokio::io::BufReader::new(tokio::io::stdin());
            let mut writer = tokio::io::stdout();
            run_stream(&udf, reader, &mut writer, format).await?;
            Ok(())
        }
        Commands::Describe => {
            let descriptor = SentimentUdf::<LexiconPipeline>::descriptor();
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::parse_from(["ksent", "score", "--config", "k.toml", "so", "good"]);
        match cli.command {
            Commands::Score { runtime, text } => {
                assert_eq!(runtime.config, Some(PathBuf::from("k.toml")));
                assert_eq!(text, vec!["so", "good"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let cli = Cli::parse_from(["ksent", "stream", "--json"]);
        assert!(matches!(cli.command, Commands::Stream { json: true, .. }));
    }

    #[test]
    fn build_udf_honours_config_and_log_override() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("ksent.toml");
        std::fs::write(&config, "[logging]\nlevel = \"debug\"\n").unwrap();
        let log = dir.path().join("out.log");
        let runtime = RuntimeArgs {
            config: Some(config),
            log_file: Some(log.clone()),
        };
        let udf = runtime.build_udf().unwrap();
        assert_eq!(udf.sentiment(Some("This party is good.")).unwrap(), 1);
        let content = std::fs::read_to_string(log).unwrap();
        assert!(content.contains("ksent.pipeline.ready"));
        assert!(content.contains("sentiment.classified"));
    }
}
