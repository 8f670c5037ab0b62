//! Uber HTTP client for API interactions

use log::debug;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::credentials::{token_from_env, Credential, OAuth2Token};

/// API version prefix of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Current API (`v1.2`)
    #[default]
    V1_2,
    /// Legacy API (`v1`), still used by deliveries listing and driver endpoints
    V1,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1_2 => api::DEFAULT_VERSION,
            ApiVersion::V1 => api::LEGACY_VERSION,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable part of the client, guarded by a reader/writer lock
#[derive(Debug)]
struct ClientState {
    credential: Option<Credential>,
    http: Client,
    sandbox: bool,
}

#[derive(Debug)]
struct ClientInner {
    state: RwLock<ClientState>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

/// Uber API client
///
/// Cloning is cheap; clones share credential, transport and sandbox state.
/// Requests copy what they need under the read lock and release it before
/// any network I/O, so setters never wait on an in-flight request.
#[derive(Debug, Clone)]
pub struct UberClient {
    inner: Arc<ClientInner>,
}

/// Snapshot of the state one request needs
pub(crate) struct RequestParts {
    pub(crate) http: Client,
    pub(crate) authorization: Option<String>,
}

fn default_http_client() -> Client {
    Client::builder()
        // Connection pool settings - reuse connections
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        // TCP keepalive to maintain connections
        .tcp_keepalive(Duration::from_secs(60))
        // Timeouts
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl UberClient {
    /// Create a new client with optimized connection settings
    pub fn new(credential: Option<Credential>) -> Self {
        Self::build(credential, default_http_client(), None)
    }

    /// Create a client authenticating with a static bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Some(Credential::Bearer(token.into())))
    }

    /// Create a client from the `UBER_TOKEN_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let token = token_from_env().ok_or_else(|| {
            UberError::TokenNotFound(format!(
                "{} is unset or blank",
                crate::config::credentials::TOKEN_ENV_VAR
            ))
        })?;
        Ok(Self::with_token(token))
    }

    /// Create a client from an OAuth2 token file
    pub fn from_oauth2_file(path: &Path) -> Result<Self> {
        let token = OAuth2Token::from_file(path)?;
        Ok(Self::new(Some(Credential::OAuth2(token))))
    }

    /// Create a client with custom base URL (for testing with mock servers)
    pub fn with_base_url(credential: Option<Credential>, base_url: impl Into<String>) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self::build(credential, client, Some(base_url))
    }

    fn build(credential: Option<Credential>, http: Client, base_url_override: Option<String>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                state: RwLock::new(ClientState {
                    credential,
                    http,
                    sandbox: false,
                }),
                base_url_override,
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ClientState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ClientState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the credential with a static bearer token
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        self.write_state().credential = Some(Credential::Bearer(token.into()));
    }

    /// Replace the credential with an OAuth2 token
    pub fn set_oauth2_token(&self, token: OAuth2Token) {
        self.write_state().credential = Some(Credential::OAuth2(token));
    }

    /// Drop the credential; later requests go out unauthenticated
    pub fn clear_credential(&self) {
        self.write_state().credential = None;
    }

    /// Swap the HTTP transport
    pub fn set_http_client(&self, http: Client) {
        self.write_state().http = http;
    }

    /// Route later requests to the sandbox (or back to production)
    pub fn set_sandbox_mode(&self, sandbox: bool) {
        debug!("Sandbox mode: {}", sandbox);
        self.write_state().sandbox = sandbox;
    }

    pub fn is_sandbox(&self) -> bool {
        self.read_state().sandbox
    }

    /// `Authorization` header value for the active credential
    pub fn auth_header(&self) -> Option<String> {
        self.read_state()
            .credential
            .as_ref()
            .map(Credential::authorization)
    }

    /// Like [`auth_header`](Self::auth_header), failing when no credential is set
    pub fn require_auth_header(&self) -> Result<String> {
        self.auth_header().ok_or_else(|| {
            UberError::TokenNotFound(
                "token not configured; set one with --token or UBER_TOKEN_KEY".to_string(),
            )
        })
    }

    /// Base URL for an API version, honoring the sandbox flag
    pub fn base_url(&self, version: ApiVersion) -> String {
        if let Some(ref url) = self.inner.base_url_override {
            return format!("{}/{}", url, version);
        }
        let host = if self.is_sandbox() {
            api::SANDBOX_HOST
        } else {
            api::PRODUCTION_HOST
        };
        format!("https://{}/{}", host, version)
    }

    /// Build an endpoint URL with query parameters
    pub(crate) fn url(
        &self,
        version: ApiVersion,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url(version), path.trim_start_matches('/'));
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        parsed.map_err(|e| UberError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Copy transport and credential under the read lock
    pub(crate) fn request_parts(&self) -> RequestParts {
        let state = self.read_state();
        RequestParts {
            http: state.http.clone(),
            authorization: state.credential.as_ref().map(Credential::authorization),
        }
    }

    fn with_headers(builder: RequestBuilder, authorization: Option<String>) -> RequestBuilder {
        let builder = builder.header("Accept-Language", "en_US");
        match authorization {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }

    /// Create a GET request builder, authenticated when a credential is set
    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        let parts = self.request_parts();
        Self::with_headers(parts.http.get(url), parts.authorization)
    }

    /// Create a POST request builder, authenticated when a credential is set
    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        let parts = self.request_parts();
        Self::with_headers(parts.http.post(url), parts.authorization)
    }

    /// Create a POST request builder that refuses to go out unauthenticated
    pub(crate) fn post_authenticated(&self, url: Url) -> Result<RequestBuilder> {
        let authorization = self.require_auth_header()?;
        let http = self.read_state().http.clone();
        Ok(Self::with_headers(http.post(url), Some(authorization)))
    }

    pub(crate) fn put(&self, url: Url) -> RequestBuilder {
        let parts = self.request_parts();
        Self::with_headers(parts.http.put(url), parts.authorization)
    }

    pub(crate) fn patch(&self, url: Url) -> RequestBuilder {
        let parts = self.request_parts();
        Self::with_headers(parts.http.patch(url), parts.authorization)
    }

    /// Send a request and decode the JSON body, mapping non-2xx to [`UberError`]
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = send_checked(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose success carries no useful body
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        send_checked(builder).await.map(|_| ())
    }
}

/// Send a request and return its body, decoding non-2xx responses into errors
pub(crate) async fn send_checked(builder: RequestBuilder) -> Result<Vec<u8>> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        debug!("Request failed with status {} ({} byte body)", status, body.len());
        return Err(UberError::from_response(status, &body));
    }
    Ok(body.to_vec())
}

/// Percent-encode a single path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
