use serde::{Deserialize, Serialize};

use crate::view;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
    pub status_message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusMessageDescription {
    pub status: String,
    pub status_message: String,
    pub status_description: String,
}

impl StatusMessage {
    pub fn success(msg: &str) -> StatusMessage {
        StatusMessage {
            status: String::from(view::http::STATUS_SUCCESS),
            status_message: String::from(msg),
        }
    }

    pub fn error(msg: impl AsRef<str>) -> StatusMessage {
        StatusMessage {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(msg.as_ref()),
        }
    }

    pub fn resource_found() -> StatusMessage {
        StatusMessage::success(view::http::MSG_RESOURCE_FOUND)
    }

    pub fn resource_not_found() -> StatusMessage {
        StatusMessage::error(view::http::MSG_RESOURCE_NOT_FOUND)
    }

    pub fn bad_request() -> StatusMessage {
        StatusMessage::error(view::http::MSG_BAD_REQUEST)
    }

    pub fn internal_server_error() -> StatusMessage {
        StatusMessage::error(view::http::MSG_INTERNAL_SERVER_ERROR)
    }
}

impl StatusMessageDescription {
    pub fn not_found(description: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(view::http::MSG_RESOURCE_NOT_FOUND),
            status_description: String::from(description.as_ref()),
        }
    }

    pub fn bad_request(description: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(view::http::MSG_BAD_REQUEST),
            status_description: String::from(description.as_ref()),
        }
    }

    pub fn internal_server_error(description: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(view::http::MSG_INTERNAL_SERVER_ERROR),
            status_description: String::from(description.as_ref()),
        }
    }

    pub fn diff_failed(description: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(view::http::MSG_DIFF_FAILED),
            status_description: String::from(description.as_ref()),
        }
    }
}
