use serde::{Deserialize, Serialize};

use crate::model::change_type::ChangeType;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiffSide {
    Left,
    Right,
}

/// A changed sub-range within one side of a modified row. `start..end` are
/// byte offsets into that side's line text, so renderers can slice the
/// line directly.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IntralineSpan {
    pub side: DiffSide,
    pub start: usize,
    pub end: usize,
    pub kind: ChangeType,
}

/// One aligned unit of comparison between the two files.
///
/// Line numbers are 1-based. An `Added` row carries only right-side
/// fields, a `Removed` row only left-side fields, and an `Unchanged` row
/// carries identical text on both sides. Intraline spans are only present
/// on `Modified` rows.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub left_number: Option<usize>,
    pub left_text: Option<String>,
    pub right_number: Option<usize>,
    pub right_text: Option<String>,
    pub modification: ChangeType,
    pub spans: Vec<IntralineSpan>,
}

impl DiffRow {
    pub fn unchanged(left_number: usize, right_number: usize, text: impl Into<String>) -> DiffRow {
        let text = text.into();
        DiffRow {
            left_number: Some(left_number),
            left_text: Some(text.clone()),
            right_number: Some(right_number),
            right_text: Some(text),
            modification: ChangeType::Unchanged,
            spans: vec![],
        }
    }

    pub fn added(right_number: usize, text: impl Into<String>) -> DiffRow {
        DiffRow {
            left_number: None,
            left_text: None,
            right_number: Some(right_number),
            right_text: Some(text.into()),
            modification: ChangeType::Added,
            spans: vec![],
        }
    }

    pub fn removed(left_number: usize, text: impl Into<String>) -> DiffRow {
        DiffRow {
            left_number: Some(left_number),
            left_text: Some(text.into()),
            right_number: None,
            right_text: None,
            modification: ChangeType::Removed,
            spans: vec![],
        }
    }

    pub fn modified(
        left_number: usize,
        left_text: impl Into<String>,
        right_number: usize,
        right_text: impl Into<String>,
        spans: Vec<IntralineSpan>,
    ) -> DiffRow {
        DiffRow {
            left_number: Some(left_number),
            left_text: Some(left_text.into()),
            right_number: Some(right_number),
            right_text: Some(right_text.into()),
            modification: ChangeType::Modified,
            spans,
        }
    }
}
