use actix_web::HttpResponse;

use libdiffer::view::StatusMessage;

pub async fn index() -> HttpResponse {
    HttpResponse::NotFound().json(StatusMessage::resource_not_found())
}
