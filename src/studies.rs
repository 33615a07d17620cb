use futures::StreamExt;
use time::Date;

use crate::error::OrthancError;
use crate::orthanc_client::OrthancClient;
use crate::record::PatientStudyRecord;

/// Build the worklist from the first `limit` studies known to Orthanc.
///
/// Studies are fetched one after another, in index order. A study which cannot be
/// fetched is left out of the list, only a failure of the index itself is an error.
pub async fn list_studies(
    client: &OrthancClient,
    limit: usize,
    today: Date,
) -> Result<Vec<PatientStudyRecord>, OrthancError> {
    let ids = client.list_study_ids().await?;
    let total = ids.len();
    let records: Vec<_> = futures::stream::iter(ids.into_iter().take(limit))
        .filter_map(|id| async move {
            match client.get_study(&id).await {
                Ok(study) => Some(PatientStudyRecord::new(study, today)),
                Err(e) => {
                    tracing::warn!(study_id = id.as_str(), error = %e, "skipping study");
                    None
                }
            }
        })
        .collect()
        .await;
    tracing::info!(task = "list_studies", total, count = records.len());
    Ok(records)
}
