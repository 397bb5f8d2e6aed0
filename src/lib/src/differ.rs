//! Line-level diff engine for the configured file pair.
//!
//! [`FileDiffer`] reads both files, aligns their lines with an LCS-based
//! diff and produces an ordered sequence of [`DiffRow`]s: row order
//! follows document order, is monotonic in both line-number columns, and
//! every input line appears exactly once. Modified rows carry a secondary
//! character-level diff as intraline highlight spans.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use similar::{ChangeTag, DiffOp, TextDiff};

use crate::error::DifferError;
use crate::model::{ChangeType, DiffResult, DiffRow, DiffSide, FileInfo, IntralineSpan};
use crate::util;

const MODIFIED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compares two files on disk. Owns no state beyond the two canonical
/// paths; reconfiguring means constructing a new instance.
#[derive(Debug, Clone)]
pub struct FileDiffer {
    pub file1_path: PathBuf,
    pub file2_path: PathBuf,
}

impl FileDiffer {
    /// Validates and resolves both paths. The existence and readability
    /// checks here are a fast path only; the files can still disappear or
    /// become unreadable before a later [`compute_diff`](Self::compute_diff),
    /// which reports such failures at the point of use.
    pub fn new(file1: impl AsRef<Path>, file2: impl AsRef<Path>) -> Result<FileDiffer, DifferError> {
        let file1 = file1.as_ref();
        let file2 = file2.as_ref();
        if file1.as_os_str().is_empty() || file2.as_os_str().is_empty() {
            return Err(DifferError::configuration(
                "Both file paths must be provided",
            ));
        }

        let file1_path = util::fs::canonicalize(file1)?;
        let file2_path = util::fs::canonicalize(file2)?;

        for path in [&file1_path, &file2_path] {
            if !util::fs::is_readable(path) {
                return Err(DifferError::permission_denied(path));
            }
        }

        Ok(FileDiffer {
            file1_path,
            file2_path,
        })
    }

    /// Stat one of the files. Fails if the file vanished since
    /// construction.
    pub fn get_file_info(&self, path: impl AsRef<Path>) -> Result<FileInfo, DifferError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        let modified: DateTime<Local> = metadata.modified()?.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(FileInfo {
            path: path.to_path_buf(),
            name,
            modified_time: modified.format(MODIFIED_TIME_FORMAT).to_string(),
            size: metadata.len(),
        })
    }

    /// Read a file as UTF-8 lines, terminators preserved. An empty file
    /// yields no lines.
    pub fn read_lines(&self, path: impl AsRef<Path>) -> Result<Vec<String>, DifferError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(util::fs::split_lines(&contents))
    }

    /// Compare the current contents of the pair. All-or-nothing: any
    /// failure along the way comes back as [`DifferError::Diff`] wrapping
    /// the cause, and no partial result is ever visible.
    pub fn compute_diff(&self) -> Result<DiffResult, DifferError> {
        log::debug!(
            "compute_diff {:?} vs {:?}",
            self.file1_path,
            self.file2_path
        );
        self.compute_diff_inner().map_err(DifferError::diff)
    }

    fn compute_diff_inner(&self) -> Result<DiffResult, DifferError> {
        let file1_info = self.get_file_info(&self.file1_path)?;
        let file2_info = self.get_file_info(&self.file2_path)?;

        let left_lines = self.read_lines(&self.file1_path)?;
        let right_lines = self.read_lines(&self.file2_path)?;

        let rows = align_lines(&left_lines, &right_lines);

        Ok(DiffResult {
            file1_info,
            file2_info,
            rows,
        })
    }
}

/// Align the two line sequences into diff rows, preserving document
/// order.
fn align_lines(left: &[String], right: &[String]) -> Vec<DiffRow> {
    let left_refs: Vec<&str> = left.iter().map(String::as_str).collect();
    let right_refs: Vec<&str> = right.iter().map(String::as_str).collect();
    let diff = TextDiff::from_slices(&left_refs, &right_refs);
    let mut rows: Vec<DiffRow> = Vec::new();

    for op in diff.ops() {
        match *op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for i in 0..len {
                    rows.push(DiffRow::unchanged(
                        old_index + i + 1,
                        new_index + i + 1,
                        left[old_index + i].clone(),
                    ));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for i in 0..old_len {
                    rows.push(DiffRow::removed(
                        old_index + i + 1,
                        left[old_index + i].clone(),
                    ));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for i in 0..new_len {
                    rows.push(DiffRow::added(
                        new_index + i + 1,
                        right[new_index + i].clone(),
                    ));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                // Pair replaced lines positionally; the leftover tail on
                // the longer side falls through as pure removes or adds.
                let paired = old_len.min(new_len);
                for i in 0..paired {
                    let left_text = &left[old_index + i];
                    let right_text = &right[new_index + i];
                    let spans = intraline_spans(left_text, right_text);
                    rows.push(DiffRow::modified(
                        old_index + i + 1,
                        left_text.clone(),
                        new_index + i + 1,
                        right_text.clone(),
                        spans,
                    ));
                }
                for i in paired..old_len {
                    rows.push(DiffRow::removed(
                        old_index + i + 1,
                        left[old_index + i].clone(),
                    ));
                }
                for i in paired..new_len {
                    rows.push(DiffRow::added(
                        new_index + i + 1,
                        right[new_index + i].clone(),
                    ));
                }
            }
        }
    }

    rows
}

/// Character-level diff of one replaced line pair. Offsets are byte
/// positions into the respective line; adjacent changes of the same kind
/// merge into a single span.
fn intraline_spans(left: &str, right: &str) -> Vec<IntralineSpan> {
    let diff = TextDiff::from_chars(left, right);
    let mut spans: Vec<IntralineSpan> = Vec::new();
    let mut left_pos = 0;
    let mut right_pos = 0;

    for change in diff.iter_all_changes() {
        let len = change.value().len();
        match change.tag() {
            ChangeTag::Equal => {
                left_pos += len;
                right_pos += len;
            }
            ChangeTag::Delete => {
                push_span(&mut spans, DiffSide::Left, left_pos, len, ChangeType::Removed);
                left_pos += len;
            }
            ChangeTag::Insert => {
                push_span(&mut spans, DiffSide::Right, right_pos, len, ChangeType::Added);
                right_pos += len;
            }
        }
    }

    spans
}

fn push_span(
    spans: &mut Vec<IntralineSpan>,
    side: DiffSide,
    start: usize,
    len: usize,
    kind: ChangeType,
) {
    if let Some(last) = spans.last_mut() {
        if last.side == side && last.kind == kind && last.end == start {
            last.end += len;
            return;
        }
    }
    spans.push(IntralineSpan {
        side,
        start,
        end: start + len,
        kind,
    });
}
