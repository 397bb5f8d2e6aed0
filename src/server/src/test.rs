//! Helpers for controller tests.

use std::sync::Arc;

use actix_web::HttpRequest;

use libdiffer::differ::FileDiffer;
use libdiffer::error::DifferError;
use libdiffer::notifier::Broadcaster;

use crate::app_data::DifferAppData;

/// Write a `file1.txt`/`file2.txt` pair into a fresh temp dir and wrap
/// them in app data. The temp dir guard must outlive the request.
pub fn fixture(
    contents1: &str,
    contents2: &str,
) -> Result<(DifferAppData, tempfile::TempDir), DifferError> {
    let dir = tempfile::tempdir()?;
    let file1 = dir.path().join("file1.txt");
    let file2 = dir.path().join("file2.txt");
    std::fs::write(&file1, contents1)?;
    std::fs::write(&file2, contents2)?;

    let differ = Arc::new(FileDiffer::new(&file1, &file2)?);
    let data = DifferAppData::new(differ, Broadcaster::new());
    Ok((data, dir))
}

pub fn differ_request(data: &DifferAppData, uri: &str) -> HttpRequest {
    actix_web::test::TestRequest::with_uri(uri)
        .app_data(data.clone())
        .to_http_request()
}
