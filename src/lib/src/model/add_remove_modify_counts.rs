use serde::{Deserialize, Serialize};

use crate::model::change_type::ChangeType;
use crate::model::diff_row::DiffRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddRemoveModifyCounts {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl AddRemoveModifyCounts {
    pub fn from_rows(rows: &[DiffRow]) -> AddRemoveModifyCounts {
        let added = rows
            .iter()
            .filter(|row| row.modification == ChangeType::Added)
            .count();

        let removed = rows
            .iter()
            .filter(|row| row.modification == ChangeType::Removed)
            .count();

        let modified = rows
            .iter()
            .filter(|row| row.modification == ChangeType::Modified)
            .count();

        AddRemoveModifyCounts {
            added,
            removed,
            modified,
        }
    }
}
