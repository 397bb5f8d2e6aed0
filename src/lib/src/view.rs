pub mod diff_event;
pub mod http;
pub mod status_message;

pub use crate::view::diff_event::{DiffEvent, DiffResponse};
pub use crate::view::status_message::{StatusMessage, StatusMessageDescription};
