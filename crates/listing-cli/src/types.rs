use std::path::PathBuf;

use serde::Serialize;

use listing_transform::TransformStats;

/// Outcome of one `convert` run.
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Records read from the input, header included.
    pub rows_read: usize,
    pub transform: TransformStats,
    pub written: Option<WrittenFile>,
    pub dry_run: bool,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug, Serialize)]
pub struct WrittenFile {
    pub rows: usize,
    pub bytes: usize,
    pub replaced_chars: usize,
}
