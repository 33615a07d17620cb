use serde::{Deserialize, Serialize};
use time::Date;

use crate::patient_age::age_from_birth_date;
use crate::study::{non_blank, OrthancStudy};
use crate::study_date::format_study_date;
use crate::types::OrthancStudyId;

const NAME_PLACEHOLDER: &str = "Nombre no disponible";
const STUDY_PLACEHOLDER: &str = "Estudio no especificado";
const SITE_PLACEHOLDER: &str = "No especificada";

/// One row of the worklist table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientStudyRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub study: String,
    /// `DD/MM/YYYY`, or a placeholder.
    pub study_date: String,
    /// Accession number, shown in the "site" column.
    pub site: String,
    pub orthanc_study_id: OrthancStudyId,
}

impl PatientStudyRecord {
    /// Map an Orthanc study to its display form. `today` is used to compute the patient's age.
    pub fn new(study: OrthancStudy, today: Date) -> Self {
        let patient = &study.PatientMainDicomTags;
        let tags = &study.MainDicomTags;
        Self {
            id: non_blank(&patient.PatientID)
                .unwrap_or(study.ID.as_str())
                .to_string(),
            name: non_blank(&patient.PatientName)
                .unwrap_or(NAME_PLACEHOLDER)
                .to_string(),
            age: age_from_birth_date(non_blank(&patient.PatientBirthDate).unwrap_or(""), today),
            study: non_blank(&tags.StudyDescription)
                .unwrap_or(STUDY_PLACEHOLDER)
                .to_string(),
            study_date: format_study_date(tags.StudyDate.as_deref().unwrap_or("")),
            site: non_blank(&tags.AccessionNumber)
                .unwrap_or(SITE_PLACEHOLDER)
                .to_string(),
            orthanc_study_id: study.ID,
        }
    }
}
