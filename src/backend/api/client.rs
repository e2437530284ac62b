//! HTTP client for the listing API.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::backend::models::PreferencePreset;
use crate::backend::utils::config::ApiConfig;

const USER_AGENT: &str = concat!("timnha/", env!("CARGO_PKG_VERSION"));

pub const PRESETS_PATH: &str = "preference-presets";
pub const LOGIN_PATH: &str = "auth/login";

/// Sign-in form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub phone: String,
    pub password: String,
}

impl Credentials {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Local checks run before anything is sent.
    pub fn validate(&self) -> Result<(), &'static str> {
        let digits = self.phone.chars().filter(|c| !c.is_whitespace()).count();
        let numeric = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| c.is_ascii_digit());

        if !numeric || !(9..=11).contains(&digits) {
            return Err("Phone number must be 9 to 11 digits");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }

    fn normalized(&self) -> Self {
        Self {
            phone: self.phone.chars().filter(|c| !c.is_whitespace()).collect(),
            password: self.password.clone(),
        }
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(alias = "access_token", alias = "accessToken")]
    token: String,
}

// The presets endpoint answers with a bare list or a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum PresetsPayload {
    Bare(Vec<PreferencePreset>),
    Wrapped { data: Vec<PreferencePreset> },
}

impl From<PresetsPayload> for Vec<PreferencePreset> {
    fn from(payload: PresetsPayload) -> Self {
        match payload {
            PresetsPayload::Bare(presets) | PresetsPayload::Wrapped { data: presets } => presets,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("base URL is empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Returns a client that sends `token` as a bearer credential.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the user's saved search presets.
    pub async fn fetch_preference_presets(&self) -> Result<Vec<PreferencePreset>, ApiError> {
        let payload: PresetsPayload = self.get_json(PRESETS_PATH).await?;
        let presets: Vec<PreferencePreset> = payload.into();
        log::info!("Fetched {} preference presets", presets.len());
        Ok(presets)
    }

    /// Exchanges credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response: LoginResponse = self
            .post_json(LOGIN_PATH, &credentials.normalized())
            .await?;

        if response.token.is_empty() {
            return Err(ApiError::Decode(serde::de::Error::custom(
                "login response carried an empty token",
            )));
        }
        Ok(response.token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let request = self.authorize(self.http.get(&url).header(ACCEPT, "application/json"));
        Self::decode(request.send().await?).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {url}");
        let request = self.authorize(
            self.http
                .post(&url)
                .header(ACCEPT, "application/json")
                .json(body),
        );
        Self::decode(request.send().await?).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("Request failed with HTTP {}", status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::warn!("Could not decode response body: {e}");
            ApiError::Decode(e)
        })
    }
}
