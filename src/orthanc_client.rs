use bytes::Bytes;
use reqwest::Url;
use std::time::Duration;

use crate::error::{check, OrthancError};
use crate::settings::OrthancSettings;
use crate::study::OrthancStudy;
use crate::types::OrthancStudyId;

/// Read-only client of the Orthanc REST API.
pub struct OrthancClient {
    client: reqwest::Client,
    url: Url,
    username: String,
    password: String,
}

impl OrthancClient {
    pub fn new(
        OrthancSettings {
            url,
            username,
            password,
        }: OrthancSettings,
    ) -> Result<Self, OrthancError> {
        let trimmed = url.trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|_| OrthancError::BaseUrl(url.clone()))?;
        if parsed.cannot_be_a_base() {
            return Err(OrthancError::BaseUrl(url));
        }
        let client = reqwest::ClientBuilder::new().use_rustls_tls().build()?;
        Ok(Self {
            client,
            url: parsed,
            username,
            password,
        })
    }

    /// `GET /studies`
    pub async fn list_study_ids(&self) -> Result<Vec<OrthancStudyId>, OrthancError> {
        let url = self.endpoint(&["studies"])?;
        let res = self.get(url, "application/json").send().await?;
        let ids = check(res)?.json().await?;
        Ok(ids)
    }

    /// `GET /studies/{id}`
    pub async fn get_study(&self, id: &OrthancStudyId) -> Result<OrthancStudy, OrthancError> {
        let url = self.endpoint(&["studies", id.as_str()])?;
        let res = self.get(url, "application/json").send().await?;
        let study = check(res)?.json().await?;
        Ok(study)
    }

    /// `GET /studies/{id}/archive`, aborted if the whole exchange takes longer than `timeout`.
    pub async fn download_archive(
        &self,
        id: &OrthancStudyId,
        timeout: Duration,
    ) -> Result<Bytes, OrthancError> {
        let url = self.endpoint(&["studies", id.as_str(), "archive"])?;
        let res = self
            .get(url, "application/zip")
            .timeout(timeout)
            .send()
            .await?;
        let data = check(res)?.bytes().await?;
        Ok(data)
    }

    fn get(&self, url: Url, accept: &'static str) -> reqwest::RequestBuilder {
        let req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept);
        if self.username.is_empty() || self.password.is_empty() {
            req
        } else {
            req.basic_auth(&self.username, Some(&self.password))
        }
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, OrthancError> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| OrthancError::BaseUrl(self.url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
