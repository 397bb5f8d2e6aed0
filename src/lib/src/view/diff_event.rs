use serde::{Deserialize, Serialize};

use crate::model::DiffResult;
use crate::view;
use crate::view::status_message::{StatusMessage, StatusMessageDescription};

/// Response envelope for a synchronously requested diff.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResponse {
    pub status: StatusMessage,
    pub diff: DiffResult,
}

impl DiffResponse {
    pub fn from_diff(diff: DiffResult) -> DiffResponse {
        DiffResponse {
            status: StatusMessage::resource_found(),
            diff,
        }
    }
}

/// Payload pushed to subscribers whenever a watched file changes. A
/// failed recomputation is a distinguishable event, so viewers can show a
/// stale-diff state instead of silently stopping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiffEvent {
    Updated {
        status: StatusMessage,
        diff: DiffResult,
    },
    Failed {
        status: StatusMessageDescription,
    },
}

impl DiffEvent {
    pub fn updated(diff: DiffResult) -> DiffEvent {
        DiffEvent::Updated {
            status: StatusMessage::success(view::http::MSG_DIFF_UPDATED),
            diff,
        }
    }

    pub fn failed(description: impl AsRef<str>) -> DiffEvent {
        DiffEvent::Failed {
            status: StatusMessageDescription::diff_failed(description),
        }
    }
}
