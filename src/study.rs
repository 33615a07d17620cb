#![allow(non_snake_case)]

use serde::Deserialize;

use crate::types::OrthancStudyId;

/// The subset of Orthanc's `GET /studies/{id}` response we display.
#[derive(Debug, Clone, Deserialize)]
pub struct OrthancStudy {
    pub ID: OrthancStudyId,
    #[serde(default)]
    pub PatientMainDicomTags: PatientTags,
    #[serde(default)]
    pub MainDicomTags: StudyTags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientTags {
    pub PatientID: Option<String>,
    pub PatientName: Option<String>,
    pub PatientBirthDate: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyTags {
    pub StudyDescription: Option<String>,
    pub StudyDate: Option<String>,
    pub AccessionNumber: Option<String>,
}

/// Trimmed value of a tag, or `None` if it is absent or blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
