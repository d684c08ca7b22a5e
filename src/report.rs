//! Structured reporting for batch runs: line-delimited JSON with one
//! `outcome` record per attempted input and a final `summary` record, each
//! stamped with a UTC timestamp. Complements the human-readable progress
//! lines, which stay on the console.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::api::{BatchReport, ConversionOutcome};
use crate::error::Result;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    record: &'static str,
    time: String,
    input: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

#[derive(Serialize)]
struct SummaryRecord {
    record: &'static str,
    time: String,
    succeeded: usize,
    failed: usize,
    output_dir: String,
}

/// Line-delimited JSON report writer
pub struct ReportWriter<W: Write> {
    out: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) a report file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Append one outcome record.
    pub fn outcome(&mut self, outcome: &ConversionOutcome) -> Result<()> {
        let record = OutcomeRecord {
            record: "outcome",
            time: timestamp(),
            input: outcome.input.display().to_string(),
            success: outcome.success,
            detail: outcome.detail.as_deref(),
        };
        self.write_line(&record)
    }

    /// Append the closing summary record.
    pub fn summary(&mut self, report: &BatchReport, output_dir: &Path) -> Result<()> {
        let record = SummaryRecord {
            record: "summary",
            time: timestamp(),
            succeeded: report.succeeded,
            failed: report.failed,
            output_dir: output_dir.display().to_string(),
        };
        self.write_line(&record)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
