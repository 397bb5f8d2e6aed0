use serde::{Deserialize, Serialize};

use crate::model::add_remove_modify_counts::AddRemoveModifyCounts;
use crate::model::diff_row::DiffRow;
use crate::model::file_info::FileInfo;

/// One point-in-time comparison of the configured file pair. Immutable
/// once constructed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub file1_info: FileInfo,
    pub file2_info: FileInfo,
    pub rows: Vec<DiffRow>,
}

impl DiffResult {
    pub fn counts(&self) -> AddRemoveModifyCounts {
        AddRemoveModifyCounts::from_rows(&self.rows)
    }
}
