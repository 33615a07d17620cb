use bytes::Bytes;
use std::time::Duration;

use crate::error::OrthancError;
use crate::orthanc_client::OrthancClient;
use crate::sanitize::sanitize_filename_part;
use crate::types::OrthancStudyId;

/// A study's ZIP archive, ready to be sent to the browser as an attachment.
#[derive(Debug)]
pub struct StudyArchive {
    pub filename: String,
    pub data: Bytes,
}

impl StudyArchive {
    /// Value of the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Name of the file a patient's study archive is saved as.
pub fn archive_filename(patient_id: &str) -> String {
    format!("paciente-{}-estudio.zip", sanitize_filename_part(patient_id))
}

/// Fetch a study's archive from Orthanc, naming it after the patient.
pub async fn download_study_archive(
    client: &OrthancClient,
    study_id: &OrthancStudyId,
    patient_id: &str,
    timeout: Duration,
) -> Result<StudyArchive, OrthancError> {
    let data = client.download_archive(study_id, timeout).await?;
    tracing::info!(
        task = "download",
        study_id = study_id.as_str(),
        bytes = data.len()
    );
    Ok(StudyArchive {
        filename: archive_filename(patient_id),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("AB#12 34", "paciente-AB_12_34-estudio.zip")]
    #[case("12345678", "paciente-12345678-estudio.zip")]
    #[case("\"; x=y", "paciente-___x_y-estudio.zip")]
    fn test_archive_filename(#[case] patient_id: &str, #[case] expected: &str) {
        assert_eq!(archive_filename(patient_id), expected)
    }

    #[test]
    fn test_content_disposition() {
        let archive = StudyArchive {
            filename: archive_filename("AB#12 34"),
            data: Bytes::new(),
        };
        assert_eq!(
            archive.content_disposition(),
            r#"attachment; filename="paciente-AB_12_34-estudio.zip""#
        )
    }
}
