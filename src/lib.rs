mod archive;
mod config;
mod error;
mod filter;
mod orthanc_client;
mod patient_age;
mod record;
mod run_from_env;
mod sanitize;
mod server;
mod settings;
mod studies;
mod study;
mod study_date;
mod types;

pub use archive::{archive_filename, download_study_archive, StudyArchive};
pub use config::get_config;
pub use error::{ApiError, OrthancError};
pub use filter::StudyFilter;
pub use orthanc_client::OrthancClient;
pub use record::PatientStudyRecord;
pub use run_from_env::{run_server, run_server_from_env};
pub use server::router;
pub use settings::{OrthancSettings, WorklistSettings};
pub use studies::list_studies;
pub use study::{OrthancStudy, PatientTags, StudyTags};
pub use types::{OrthancStudyId, OrthancStudyIdRef};
