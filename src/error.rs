use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::error::Error as _;

/// Failure talking to the Orthanc REST API.
#[derive(thiserror::Error, Debug)]
pub enum OrthancError {
    #[error("({status:?} {reason:?}) from {url}")]
    Status {
        status: reqwest::StatusCode,
        reason: &'static str,
        url: reqwest::Url,
    },

    #[error("\"{0}\" cannot be used as the Orthanc base URL")]
    BaseUrl(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl OrthancError {
    /// Whether Orthanc was reached and answered with a non-success status.
    pub fn is_rejection(&self) -> bool {
        matches!(self, OrthancError::Status { .. })
    }
}

pub(crate) fn check(res: reqwest::Response) -> Result<reqwest::Response, OrthancError> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(OrthancError::Status {
            status,
            reason: status.canonical_reason().unwrap_or("unknown reason"),
            url: res.url().clone(),
        })
    }
}

/// An error returned to the browser as `{"error": "..."}`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Se requieren ambos IDs: estudio y paciente")]
    MissingIds,

    #[error("No se pudo obtener la lista de estudios")]
    StudyIndexRejected(#[source] OrthancError),

    #[error("Error en el servidor al conectar con Orthanc")]
    OrthancUnreachable(#[source] OrthancError),

    #[error("No se pudo descargar el estudio")]
    ArchiveRejected(#[source] OrthancError),

    #[error("{0}")]
    ArchiveFailed(#[source] OrthancError),
}

impl ApiError {
    pub(crate) fn study_index(e: OrthancError) -> Self {
        if e.is_rejection() {
            Self::StudyIndexRejected(e)
        } else {
            Self::OrthancUnreachable(e)
        }
    }

    pub(crate) fn archive(e: OrthancError) -> Self {
        if e.is_rejection() {
            Self::ArchiveRejected(e)
        } else {
            Self::ArchiveFailed(e)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingIds => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.source() {
            Some(source) => tracing::error!(error = %self, source = %source),
            None => tracing::warn!(error = %self),
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
