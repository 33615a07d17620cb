//! Worklist settings, which are configurable using environment variables.
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorklistSettings {
    pub orthanc: OrthancSettings,
    #[serde(default = "default_listener_port")]
    pub listener_port: u16,
    /// Maximum time allowed for Orthanc to produce a study archive.
    #[serde(with = "humantime_serde", default = "default_archive_timeout")]
    pub archive_timeout: Duration,
    /// Maximum number of studies included in the worklist.
    #[serde(default = "default_study_limit")]
    pub study_limit: usize,
}

/// Location and credentials of the Orthanc server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrthancSettings {
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for WorklistSettings {
    fn default() -> Self {
        Self {
            orthanc: OrthancSettings::default(),
            listener_port: default_listener_port(),
            archive_timeout: default_archive_timeout(),
            study_limit: default_study_limit(),
        }
    }
}

impl Default for OrthancSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8042".to_string(),
            username: "orthanc".to_string(),
            password: "orthanc".to_string(),
        }
    }
}

fn default_listener_port() -> u16 {
    3000
}

fn default_archive_timeout() -> Duration {
    Duration::from_secs(300)
}

fn default_study_limit() -> usize {
    20
}
