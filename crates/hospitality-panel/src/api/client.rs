use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value as Json;
use tracing::{debug, info};

use super::envelope::{self, BEDS_KEY, HOSTELS_KEY, INSIDE_CAMPUS_KEY, LIVE_BEDS_KEY, LOGS_KEY, REGISTRANTS_KEY};
use crate::config::Config;
use crate::error::{PanelError, Result};
use crate::models::{
    Credentials, GateLog, Hostel, HostelLog, InsideCampusSummary, LiveBedsSummary,
    PendingAllotment, Registrant, User,
};
use crate::source::{RecordSource, SessionProvider};

/// Async client for the accommodation panel API.
///
/// The session cookie is attached verbatim to every request when present.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cookie: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cookie: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    pub fn with_cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_raw(&self, method: Method, path: &str, body: Option<Json>) -> Result<Response> {
        let url = self.url(path);
        debug!(%method, %url, "api request");
        let mut request = self.http.request(method, &url);
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        debug!(status = response.status().as_u16(), %url, "api response");
        Ok(response)
    }

    async fn status_error(method: &Method, response: Response) -> PanelError {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        PanelError::Status {
            method: method.to_string(),
            url,
            status,
            body,
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<Json>) -> Result<Response> {
        let response = self.send_raw(method.clone(), path, body).await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PanelError::Unauthenticated);
        }
        if !status.is_success() {
            return Err(Self::status_error(&method, response).await);
        }
        Ok(response)
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        Ok(self.send(Method::GET, path, None).await?.text().await?)
    }

    /// Logs in and returns the session cookie to persist.
    ///
    /// Rejected credentials are a status error, not `Unauthenticated`.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<String> {
        let body = serde_json::to_value(credentials)?;
        let response = self.send_raw(Method::POST, super::LOGIN, Some(body)).await?;
        if !response.status().is_success() {
            return Err(Self::status_error(&Method::POST, response).await);
        }

        let cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        if cookie.is_empty() {
            return Err(PanelError::Envelope {
                endpoint: super::LOGIN.to_string(),
                message: "no session cookie in response".to_string(),
            });
        }
        info!(email = %credentials.email, "logged in");
        self.cookie = Some(cookie.clone());
        Ok(cookie)
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.send(Method::POST, super::LOGOUT, None).await?;
        self.cookie = None;
        info!("logged out");
        Ok(())
    }

    /// Returns the current user, or `None` when the session is missing or
    /// expired.
    pub async fn session(&self) -> Result<Option<User>> {
        if self.cookie.is_none() {
            return Ok(None);
        }
        match self.get_text(super::SESSION).await {
            Ok(body) => envelope::parse(super::SESSION, &body).map(Some),
            Err(PanelError::Unauthenticated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn registrants(&self) -> Result<Vec<Registrant>> {
        let body = self.get_text(super::REGISTRANTS).await?;
        envelope::unwrap_list(super::REGISTRANTS, REGISTRANTS_KEY, &body)
    }

    pub async fn gate_logs(&self) -> Result<Vec<GateLog>> {
        let body = self.get_text(super::GATE_LOGS).await?;
        envelope::unwrap_list(super::GATE_LOGS, LOGS_KEY, &body)
    }

    pub async fn hostel_logs(&self) -> Result<Vec<HostelLog>> {
        let body = self.get_text(super::HOSTEL_LOGS).await?;
        envelope::unwrap_list(super::HOSTEL_LOGS, LOGS_KEY, &body)
    }

    pub async fn unclaimed_beds(&self) -> Result<Vec<PendingAllotment>> {
        let body = self.get_text(super::UNCLAIMED_BEDS).await?;
        envelope::unwrap_list(super::UNCLAIMED_BEDS, BEDS_KEY, &body)
    }

    pub async fn hostels(&self) -> Result<Vec<Hostel>> {
        let body = self.get_text(super::HOSTELS).await?;
        envelope::unwrap_list(super::HOSTELS, HOSTELS_KEY, &body)
    }

    pub async fn create_hostel(&self, hostel: &Hostel) -> Result<()> {
        let body = serde_json::to_value(hostel)?;
        self.send(Method::POST, super::HOSTELS, Some(body)).await?;
        info!(name = %hostel.hostel_name, "hostel created");
        Ok(())
    }

    pub async fn update_hostel(&self, hostel: &Hostel) -> Result<()> {
        let body = serde_json::to_value(hostel)?;
        self.send(Method::PUT, super::HOSTELS, Some(body)).await?;
        info!(name = %hostel.hostel_name, "hostel updated");
        Ok(())
    }

    pub async fn delete_hostel(&self, hostel_id: &str) -> Result<()> {
        self.send(Method::DELETE, &super::hostel(hostel_id), None)
            .await?;
        info!(%hostel_id, "hostel deleted");
        Ok(())
    }

    pub async fn remove_unclaimed_bed(&self, bed_id: &str) -> Result<()> {
        self.send(Method::DELETE, &super::unclaimed_bed(bed_id), None)
            .await?;
        info!(%bed_id, "unclaimed bed removed");
        Ok(())
    }

    /// Daily gate counters in ascending date order.
    pub async fn inside_campus(&self) -> Result<Vec<InsideCampusSummary>> {
        let body = self.get_text(super::INSIDE_CAMPUS).await?;
        envelope::unwrap_list(super::INSIDE_CAMPUS, INSIDE_CAMPUS_KEY, &body)
    }

    pub async fn live_beds(&self) -> Result<LiveBedsSummary> {
        let body = self.get_text(super::LIVE_BEDS).await?;
        envelope::unwrap_object(super::LIVE_BEDS, LIVE_BEDS_KEY, &body)
    }
}

#[async_trait]
impl SessionProvider for ApiClient {
    async fn current_user(&self) -> Result<Option<User>> {
        self.session().await
    }
}

#[async_trait]
impl RecordSource<Registrant> for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<Registrant>> {
        self.registrants().await
    }
}

#[async_trait]
impl RecordSource<GateLog> for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<GateLog>> {
        self.gate_logs().await
    }
}

#[async_trait]
impl RecordSource<HostelLog> for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<HostelLog>> {
        self.hostel_logs().await
    }
}

#[async_trait]
impl RecordSource<PendingAllotment> for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<PendingAllotment>> {
        self.unclaimed_beds().await
    }
}

#[async_trait]
impl RecordSource<Hostel> for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<Hostel>> {
        self.hostels().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_cleanly() {
        let client = ApiClient::new("http://localhost:3000/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(
            client.url("/accommodation/panel"),
            "http://localhost:3000/api/v1/accommodation/panel"
        );
        assert_eq!(
            client.url(&crate::api::hostel("h7")),
            "http://localhost:3000/api/v1/accommodation/panel/hostel/h7"
        );
    }

    #[tokio::test]
    async fn no_cookie_means_no_session() {
        // No request is made without a cookie, so the unroutable address is fine.
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(50)).unwrap();
        assert_eq!(client.session().await.unwrap(), None);
    }
}
