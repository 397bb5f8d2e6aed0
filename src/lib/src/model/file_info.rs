use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata for one side of a comparison. Recomputed on every diff
/// request, never persisted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Canonical absolute path.
    pub path: PathBuf,
    /// Base filename.
    pub name: String,
    /// Last modification time formatted at second resolution
    /// (`%Y-%m-%d %H:%M:%S`).
    pub modified_time: String,
    /// Size in bytes.
    pub size: u64,
}
