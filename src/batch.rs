//! Directory batch driver: read every corpus file in an input directory,
//! normalize it, write the result under the same name in the output
//! directory, and report what happened.
//!
//! Individual file failures are recorded and skipped; only a missing
//! input directory or an unwritable output directory aborts the run.

use crate::normalizer::{NormalizeStats, Normalizer};
use encoding_rs::{Encoding, ISO_8859_6, WINDOWS_1252, WINDOWS_1256};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extensions treated as corpus text files. Everything else in the
/// input directory is ignored.
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "csv"];

/// Legacy encodings tried, in order, when a file is not valid UTF-8.
/// Windows-1256 first: it is by far the most common legacy encoding for
/// Arabic corpus files.
const FALLBACK_ENCODINGS: &[&'static Encoding] = &[WINDOWS_1256, ISO_8859_6, WINDOWS_1252];

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("input directory not found: {0}")]
    MissingInputDir(PathBuf),
    #[error("could not decode {path} with any supported encoding")]
    Decode { path: PathBuf },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Aggregate result of one batch run. Serializes to JSON for the
/// `--stats-out` report.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub files_found: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_original_chars: usize,
    pub total_normalized_chars: usize,
    pub total_original_words: usize,
    pub total_normalized_words: usize,
    pub elapsed_secs: f64,
    /// One `(path, message)` entry per failed file.
    pub errors: Vec<(PathBuf, String)>,
}

impl RunReport {
    /// Fraction of chars removed across the whole run; `0.0` when
    /// nothing was processed.
    pub fn compression_ratio(&self) -> f64 {
        if self.total_original_chars == 0 {
            0.0
        } else {
            1.0 - self.total_normalized_chars as f64 / self.total_original_chars as f64
        }
    }

    fn record(&mut self, stats: &NormalizeStats) {
        self.files_processed += 1;
        self.total_original_chars += stats.original_chars;
        self.total_normalized_chars += stats.normalized_chars;
        self.total_original_words += stats.original_words;
        self.total_normalized_words += stats.normalized_words;
    }

    fn record_failure(&mut self, path: &Path, err: &BatchError) {
        self.files_failed += 1;
        self.errors.push((path.to_path_buf(), err.to_string()));
    }
}

pub struct BatchProcessor {
    normalizer: Normalizer,
}

impl BatchProcessor {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Lists the corpus files directly inside `input_dir`, sorted by
    /// path so runs are deterministic. Subdirectories are not descended
    /// into.
    pub fn collect_files(&self, input_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
        if !input_dir.is_dir() {
            return Err(BatchError::MissingInputDir(input_dir.to_path_buf()));
        }
        let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        TEXT_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t))
                    })
            })
            .collect();
        files.sort();
        Ok(files)
    }

    /// Normalizes one file into `output_dir` under its original file
    /// name. Output is always UTF-8 regardless of the input encoding.
    pub fn process_file(
        &self,
        path: &Path,
        output_dir: &Path,
    ) -> Result<NormalizeStats, BatchError> {
        let text = read_text(path)?;
        let normalized = self.normalizer.normalize(&text);
        let stats = NormalizeStats::measure(&text, &normalized);

        let file_name = path.file_name().ok_or_else(|| BatchError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
        })?;
        let out_path = output_dir.join(file_name);
        fs::write(&out_path, normalized.as_bytes()).map_err(|source| BatchError::Io {
            path: out_path.clone(),
            source,
        })?;
        debug!(path = %path.display(), out = %out_path.display(), "file written");
        Ok(stats)
    }

    /// Runs the whole batch. `progress` is called once per file after it
    /// is attempted, processed or not.
    pub fn run<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        mut progress: F,
    ) -> Result<RunReport, BatchError>
    where
        F: FnMut(&Path),
    {
        let files = self.collect_files(input_dir)?;
        fs::create_dir_all(output_dir).map_err(|source| BatchError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let started = Instant::now();
        let mut report = RunReport {
            files_found: files.len(),
            ..RunReport::default()
        };

        for path in &files {
            match self.process_file(path, output_dir) {
                Ok(stats) => report.record(&stats),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "file skipped");
                    report.record_failure(path, &err);
                }
            }
            progress(path);
        }

        report.elapsed_secs = started.elapsed().as_secs_f64();
        Ok(report)
    }
}

/// Reads a corpus file as text. UTF-8 (with or without BOM) is tried
/// first; legacy encodings after that. Decoders run in strict mode, so
/// mojibake from a wrong guess is rejected rather than written out.
fn read_text(path: &Path) -> Result<String, BatchError> {
    let bytes = fs::read(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let without_bom = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        return Ok(text.to_string());
    }

    for encoding in FALLBACK_ENCODINGS {
        let (decoded, _, had_errors) = encoding.decode(&bytes);
        if !had_errors {
            debug!(path = %path.display(), encoding = encoding.name(), "legacy encoding used");
            return Ok(decoded.into_owned());
        }
    }

    Err(BatchError::Decode {
        path: path.to_path_buf(),
    })
}
