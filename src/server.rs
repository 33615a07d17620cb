use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::archive::download_study_archive;
use crate::error::ApiError;
use crate::filter::{first_value, QueryPairs, StudyFilter};
use crate::orthanc_client::OrthancClient;
use crate::record::PatientStudyRecord;
use crate::settings::WorklistSettings;
use crate::studies::list_studies;
use crate::study_date::display_date;
use crate::types::OrthancStudyId;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// State shared by every request handler.
#[derive(Clone)]
struct AppState {
    client: Arc<OrthancClient>,
    settings: Arc<WorklistSettings>,
}

/// Create the HTTP application: the dashboard page and the JSON/ZIP API behind it.
pub fn router(client: OrthancClient, settings: WorklistSettings) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/hoy", get(index))
        .route("/health", get(health))
        .route("/api/studies", get(studies))
        .route("/api/download", get(download))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            client: Arc::new(client),
            settings: Arc::new(settings),
        })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn studies(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Vec<PatientStudyRecord>>, ApiError> {
    let filter = StudyFilter::from_query(&pairs);
    let today = today();
    let records = list_studies(&state.client, state.settings.study_limit, today)
        .await
        .map_err(ApiError::study_index)?;
    Ok(Json(filter.apply(records, &display_date(today))))
}

async fn download(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, ApiError> {
    let non_empty = |key: &str| first_value(&pairs, key).filter(|v| !v.is_empty());
    let (study_id, patient_id) = match (non_empty("studyId"), non_empty("patientId")) {
        (Some(s), Some(p)) => (OrthancStudyId::from(s), p.to_string()),
        _ => return Err(ApiError::MissingIds),
    };
    let archive = download_study_archive(
        &state.client,
        &study_id,
        &patient_id,
        state.settings.archive_timeout,
    )
    .await
    .map_err(ApiError::archive)?;
    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (header::CONTENT_DISPOSITION, archive.content_disposition()),
        (header::CONTENT_LENGTH, archive.data.len().to_string()),
    ];
    Ok((headers, archive.data))
}

/// The server's local date, falling back to UTC when the local offset cannot be determined.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
