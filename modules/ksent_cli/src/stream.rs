//! Per-record invocation of the UDF over a line-oriented stream.

use anyhow::{Context, Result};
use ksent_sentiment::{SentimentPipeline, SentimentUdf};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Input row in JSON mode.
#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    text: Option<String>,
}

/// Output row in JSON mode.
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    id: &'a Value,
    sentiment: i32,
    label: &'static str,
}

/// How input lines are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// Each line is the text itself; output is the bare integer.
    Plain,
    /// Each line is `{"id": .., "text": ..}`; output echoes the id.
    Json,
}

/// Applies the UDF to every non-blank line, returning the number of rows written.
pub async fn run_stream<P, R, W>(
    udf: &SentimentUdf<P>,
    reader: R,
    writer: &mut W,
    format: StreamFormat,
) -> Result<usize>
where
    P: SentimentPipeline,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut rows = 0usize;
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut out = match format {
            StreamFormat::Plain => udf
                .sentiment(Some(line.as_str()))
                .with_context(|| format!("line {line_no}"))?
                .to_string(),
            StreamFormat::Json => {
                let record: InputRecord = serde_json::from_str(&line)
                    .with_context(|| format!("invalid record JSON on line {line_no}"))?;
                let class = udf
                    .classify(record.text.as_deref())
                    .with_context(|| format!("line {line_no}"))?;
                serde_json::to_string(&OutputRecord {
                    id: &record.id,
                    sentiment: class.value(),
                    label: class.label(),
                })?
            }
        };
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        rows += 1;
    }
    writer.flush().await?;
    Ok(rows)
}
