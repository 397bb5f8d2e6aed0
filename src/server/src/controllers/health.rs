use actix_web::{HttpRequest, HttpResponse};

use libdiffer::view::StatusMessage;

use crate::app_data::app_data;
use crate::errors::DifferHttpError;

pub async fn index(req: HttpRequest) -> Result<HttpResponse, DifferHttpError> {
    let _app_data = app_data(&req)?;
    Ok(HttpResponse::Ok().json(StatusMessage::resource_found()))
}
