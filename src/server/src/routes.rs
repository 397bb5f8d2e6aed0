use actix_web::web;

use super::controllers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::pages::index))
        .route("/events", web::get().to(controllers::events::stream))
        .route("/api/diff", web::get().to(controllers::diff::show))
        .route("/api/health", web::get().to(controllers::health::index));
}
