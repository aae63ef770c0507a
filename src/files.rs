//! Reading source text, writing encoded text, and the whole-file run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::encoder::Encoder;
use crate::error::{EncoderError, Result};

/// Summary of one encode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines_read: usize,
    pub records_written: usize,
    pub skipped_characters: usize,
}

/// Read a whole text file into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| EncoderError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Write records to `path`, each terminated by a newline.
///
/// A failure part-way leaves whatever was already written.
pub fn write_records(path: &Path, records: &[String]) -> Result<()> {
    let size = records.iter().map(|r| r.len() + 1).sum();
    let mut content = String::with_capacity(size);
    for record in records {
        content.push_str(record);
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| EncoderError::DestinationWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Forwards diagnostics while counting them.
struct CountingSink<'a> {
    inner: &'a mut dyn DiagnosticSink,
    count: usize,
}

impl DiagnosticSink for CountingSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        self.inner.report(diagnostic);
    }
}

/// Encode `input` into `output`.
///
/// An unreadable input aborts this file before anything is written.
pub fn encode_file(
    encoder: &Encoder,
    input: &Path,
    output: &Path,
    sink: &mut dyn DiagnosticSink,
    parallel: bool,
) -> Result<EncodeReport> {
    let lines = read_lines(input)?;
    tracing::debug!("Read {} lines from {}", lines.len(), input.display());

    let mut counting = CountingSink {
        inner: sink,
        count: 0,
    };
    let records: Vec<String> = if parallel {
        encoder.encode_lines_parallel(&lines, &mut counting)
    } else {
        encoder.encode_lines(&lines, &mut counting).collect()
    };

    write_records(output, &records)?;
    tracing::info!(
        "Encoded {} lines from {} into {}",
        lines.len(),
        input.display(),
        output.display()
    );

    Ok(EncodeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        lines_read: lines.len(),
        records_written: records.len(),
        skipped_characters: counting.count,
    })
}
