use actix_web::{HttpRequest, HttpResponse};

use crate::app_data::app_data;
use crate::errors::DifferHttpError;
use crate::html;

/// Initial page load: compute the diff synchronously and render the full
/// view. Failures render a descriptive error page rather than a bare
/// status code.
pub async fn index(req: HttpRequest) -> Result<HttpResponse, DifferHttpError> {
    let app_data = app_data(&req)?;
    match app_data.differ.compute_diff() {
        Ok(diff) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html::render_index(&diff))),
        Err(err) => {
            log::error!("Error in index route: {err}");
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(html::render_error(&err.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http;

    use libdiffer::error::DifferError;

    use crate::controllers;
    use crate::test;

    #[actix_web::test]
    async fn test_controllers_pages_index() -> Result<(), DifferError> {
        let (data, _dir) = test::fixture("Line 1\nLine 2\n", "Line 1\nLine 2 changed\n")?;
        let req = test::differ_request(&data, "/");

        let resp = controllers::pages::index(req).await.unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("file1.txt"));
        assert!(text.contains("file2.txt"));
        // the changed suffix renders inside an intraline span
        assert!(text.contains("Line 2<span class=\"intraline-added\"> changed</span>"));
        assert!(text.contains("row-modified"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_controllers_pages_index_escapes_content() -> Result<(), DifferError> {
        let (data, _dir) = test::fixture("<script>alert(1)</script>\n", "")?;
        let req = test::differ_request(&data, "/");

        let resp = controllers::pages::index(req).await.unwrap();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        // removed rows carry no intraline spans, so the line renders whole
        assert!(text.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(text.contains("row-removed"));
        assert!(!text.contains("<script>alert(1)"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_controllers_pages_index_error_page() -> Result<(), DifferError> {
        let (data, _dir) = test::fixture("a\n", "b\n")?;
        std::fs::remove_file(&data.differ.file2_path)?;
        let req = test::differ_request(&data, "/");

        let resp = controllers::pages::index(req).await.unwrap();
        assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("Failed to generate diff"));
        Ok(())
    }
}
