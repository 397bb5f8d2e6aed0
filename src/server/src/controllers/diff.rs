use actix_web::{HttpRequest, HttpResponse};

use libdiffer::view::DiffResponse;

use crate::app_data::app_data;
use crate::errors::DifferHttpError;

pub async fn show(req: HttpRequest) -> Result<HttpResponse, DifferHttpError> {
    let app_data = app_data(&req)?;
    let diff = app_data.differ.compute_diff()?;
    Ok(HttpResponse::Ok().json(DiffResponse::from_diff(diff)))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http;

    use libdiffer::error::DifferError;
    use libdiffer::model::ChangeType;
    use libdiffer::view::http::STATUS_SUCCESS;
    use libdiffer::view::DiffResponse;

    use crate::controllers;
    use crate::test;

    #[actix_web::test]
    async fn test_controllers_diff_show() -> Result<(), DifferError> {
        let (data, _dir) = test::fixture("a\nb\n", "a\nc\n")?;
        let req = test::differ_request(&data, "/api/diff");

        let resp = controllers::diff::show(req).await.unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        let response: DiffResponse = serde_json::from_str(text).unwrap();

        assert_eq!(response.status.status, STATUS_SUCCESS);
        assert_eq!(response.diff.rows.len(), 2);
        assert_eq!(response.diff.file1_info.name, "file1.txt");
        assert_eq!(
            response
                .diff
                .rows
                .iter()
                .filter(|row| row.modification == ChangeType::Modified)
                .count(),
            1
        );
        Ok(())
    }

    #[actix_web::test]
    async fn test_controllers_diff_show_missing_file() -> Result<(), DifferError> {
        let (data, _dir) = test::fixture("a\n", "b\n")?;
        std::fs::remove_file(&data.differ.file1_path)?;
        let req = test::differ_request(&data, "/api/diff");

        let err = controllers::diff::show(req).await.unwrap_err();
        let resp = actix_web::error::ResponseError::error_response(&err);
        assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        Ok(())
    }
}
