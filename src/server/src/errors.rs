use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};

use libdiffer::error::DifferError;
use libdiffer::view::{StatusMessage, StatusMessageDescription};

#[derive(Debug, Display, Error)]
pub enum DifferHttpError {
    InternalServerError,
    AppDataDoesNotExist,
    NotFound,

    // Translate DifferError to DifferHttpError
    InternalDifferError(DifferError),
}

impl From<DifferError> for DifferHttpError {
    fn from(error: DifferError) -> Self {
        DifferHttpError::InternalDifferError(error)
    }
}

impl error::ResponseError for DifferHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            DifferHttpError::InternalServerError => {
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
            DifferHttpError::AppDataDoesNotExist => {
                log::error!("AppData does not exist");
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
            DifferHttpError::NotFound => {
                HttpResponse::NotFound().json(StatusMessage::resource_not_found())
            }
            DifferHttpError::InternalDifferError(error) => match error {
                DifferError::NotFound(_) => HttpResponse::NotFound()
                    .json(StatusMessageDescription::not_found(error.to_string())),
                DifferError::Configuration(_)
                | DifferError::PermissionDenied(_)
                | DifferError::Encoding(_) => HttpResponse::BadRequest()
                    .json(StatusMessageDescription::bad_request(error.to_string())),
                _ => {
                    log::error!("Internal differ error: {error}");
                    HttpResponse::InternalServerError().json(
                        StatusMessageDescription::internal_server_error(error.to_string()),
                    )
                }
            },
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DifferHttpError::NotFound => StatusCode::NOT_FOUND,
            DifferHttpError::InternalDifferError(DifferError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            DifferHttpError::InternalDifferError(
                DifferError::Configuration(_)
                | DifferError::PermissionDenied(_)
                | DifferError::Encoding(_),
            ) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
