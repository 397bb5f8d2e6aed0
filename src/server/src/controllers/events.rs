use actix_web::{HttpRequest, HttpResponse};
use bytes::Bytes;
use futures_util::StreamExt;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

use crate::app_data::app_data;
use crate::errors::DifferHttpError;

/// Server-sent event stream of diff updates. Each payload is one
/// `DiffEvent` serialized as a `data:` line. A lagged viewer skips the
/// missed messages and keeps receiving; the next update carries the full
/// diff anyway.
pub async fn stream(req: HttpRequest) -> Result<HttpResponse, DifferHttpError> {
    let app_data = app_data(&req)?;
    let rx = app_data.broadcaster.subscribe();
    log::debug!(
        "viewer connected, {} now subscribed",
        app_data.broadcaster.receiver_count()
    );

    let stream = BroadcastStream::new(rx).filter_map(|msg| async move {
        match msg {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(json) => Some(Ok::<Bytes, actix_web::Error>(Bytes::from(format!(
                    "data: {json}\n\n"
                )))),
                Err(err) => {
                    log::error!("Failed to serialize diff event: {err}");
                    None
                }
            },
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                log::warn!("Viewer lagged, skipped {skipped} diff events");
                None
            }
        }
    });

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream))
}
