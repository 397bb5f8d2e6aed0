use std::sync::Arc;

use actix_web::HttpRequest;

use libdiffer::differ::FileDiffer;
use libdiffer::notifier::Broadcaster;

use crate::errors::DifferHttpError;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct DifferAppData {
    pub differ: Arc<FileDiffer>,
    pub broadcaster: Broadcaster,
}

impl DifferAppData {
    pub fn new(differ: Arc<FileDiffer>, broadcaster: Broadcaster) -> DifferAppData {
        DifferAppData {
            differ,
            broadcaster,
        }
    }
}

pub fn app_data(req: &HttpRequest) -> Result<&DifferAppData, DifferHttpError> {
    req.app_data::<DifferAppData>()
        .ok_or(DifferHttpError::AppDataDoesNotExist)
}
