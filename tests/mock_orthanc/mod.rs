//! A stand-in for Orthanc's REST API, and helpers for running the worklist against it.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pacs_worklist::{OrthancClient, OrthancSettings, WorklistSettings, router};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::format_description;

/// `Basic` credentials of the default `orthanc:orthanc` account.
const EXPECTED_AUTHORIZATION: &str = "Basic b3J0aGFuYzpvcnRoYW5j";

pub const ARCHIVE_BYTES: &[u8] = b"PK\x03\x04fake zip contents";

#[derive(Clone)]
pub struct MockOrthanc {
    pub study_count: usize,
    pub index_status: StatusCode,
    pub broken_studies: HashSet<String>,
    /// Studies whose `StudyDate` is today instead of 2024-06-01.
    pub studies_today: HashSet<String>,
    pub archive_status: StatusCode,
    pub archive_delay: Duration,
}

impl Default for MockOrthanc {
    fn default() -> Self {
        Self {
            study_count: 3,
            index_status: StatusCode::OK,
            broken_studies: HashSet::new(),
            studies_today: HashSet::new(),
            archive_status: StatusCode::OK,
            archive_delay: Duration::ZERO,
        }
    }
}

pub fn study_id(i: usize) -> String {
    format!("study-{i:04}")
}

impl MockOrthanc {
    /// Serve on an ephemeral port, returning its base URL.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/studies", get(studies))
            .route("/studies/:id", get(study))
            .route("/studies/:id/archive", get(archive))
            .with_state(Arc::new(self));
        serve(app).await
    }
}

async fn studies(State(mock): State<Arc<MockOrthanc>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if mock.index_status != StatusCode::OK {
        return mock.index_status.into_response();
    }
    let ids: Vec<_> = (0..mock.study_count).map(study_id).collect();
    Json(ids).into_response()
}

async fn study(
    State(mock): State<Arc<MockOrthanc>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if mock.broken_studies.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let study_date = if mock.studies_today.contains(&id) {
        today_dicom()
    } else {
        "20240601".to_string()
    };
    Json(serde_json::json!({
        "ID": id,
        "Type": "Study",
        "MainDicomTags": {
            "AccessionNumber": format!("ACC-{id}"),
            "StudyDate": study_date,
            "StudyDescription": "TORAX PA Y LAT",
            "StudyInstanceUID": "2.25.1"
        },
        "PatientMainDicomTags": {
            "PatientBirthDate": "19900315",
            "PatientID": format!("P-{id}"),
            "PatientName": "PEREZ^JUAN"
        }
    }))
    .into_response()
}

async fn archive(
    State(mock): State<Arc<MockOrthanc>>,
    Path(_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    tokio::time::sleep(mock.archive_delay).await;
    if mock.archive_status != StatusCode::OK {
        return mock.archive_status.into_response();
    }
    ([(header::CONTENT_TYPE, "application/zip")], ARCHIVE_BYTES).into_response()
}

/// Today's date as a DICOM DA value, using the same clock as the worklist.
fn today_dicom() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
        .format(format_description!("[year][month][day]"))
        .unwrap()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .map(|v| v == EXPECTED_AUTHORIZATION)
        .unwrap_or(false)
}

/// Run the worklist against the Orthanc at `orthanc_url`, returning the worklist's base URL.
pub async fn spawn_worklist(orthanc_url: String, archive_timeout: Duration) -> String {
    let settings = WorklistSettings {
        orthanc: OrthancSettings {
            url: orthanc_url,
            ..Default::default()
        },
        archive_timeout,
        ..Default::default()
    };
    let client = OrthancClient::new(settings.orthanc.clone()).unwrap();
    serve(router(client, settings)).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{address}")
}
