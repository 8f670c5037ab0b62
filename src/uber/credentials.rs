//! Credential types and token resolution from multiple sources

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, UberError};

/// OAuth2 token as persisted by the authorization flow
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OAuth2Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

impl OAuth2Token {
    /// Authorization scheme, normalized the way OAuth2 transports do it
    pub fn scheme(&self) -> &str {
        match self.token_type.as_deref() {
            None | Some("") => "Bearer",
            Some(t) if t.eq_ignore_ascii_case("bearer") => "Bearer",
            Some(t) if t.eq_ignore_ascii_case("mac") => "MAC",
            Some(t) if t.eq_ignore_ascii_case("basic") => "Basic",
            Some(t) => t,
        }
    }

    /// Whether the token's expiry has passed
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= Utc::now())
    }

    /// Read a token from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            UberError::Credentials(format!(
                "Could not read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            UberError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// The active authenticator of a client
#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    /// Static bearer token
    Bearer(String),
    /// Token obtained through the OAuth2 authorization flow
    OAuth2(OAuth2Token),
}

impl Credential {
    /// Value for the `Authorization` header
    pub fn authorization(&self) -> String {
        match self {
            Credential::Bearer(token) => format!("Bearer {}", token),
            Credential::OAuth2(token) => format!("{} {}", token.scheme(), token.access_token),
        }
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    credentials_path: Option<PathBuf>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver that reads `~/.uber/credentials.json` as last resort
    pub fn new() -> Self {
        Self {
            credentials_path: Self::get_credentials_path(),
        }
    }

    /// Create a resolver reading a specific credentials file
    pub fn with_credentials_path(path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: Some(path.into()),
        }
    }

    /// Resolve a credential from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (UBER_TOKEN_KEY)
    /// 3. OAuth2 credentials file (~/.uber/credentials.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<Credential> {
        if let Some(token) = cli_token.map(str::trim).filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(Credential::Bearer(token.to_string()));
        }

        if let Some(token) = token_from_env() {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(Credential::Bearer(token));
        }

        debug!(
            "No token in CLI or {}, trying credentials file",
            credentials::TOKEN_ENV_VAR
        );
        self.read_from_credentials_file()
    }

    fn read_from_credentials_file(&self) -> Result<Credential> {
        let path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| UberError::TokenNotFound(self.token_not_found_message()))?;

        debug!("Looking for credentials file at: {}", path.display());

        if !path.exists() {
            return Err(UberError::TokenNotFound(self.token_not_found_message()));
        }

        let token = OAuth2Token::from_file(path)?;
        if token.is_expired() {
            log::warn!(
                "OAuth2 token in {} has expired; requests will likely be rejected",
                path.display()
            );
        }
        debug!("Using OAuth2 token from {}", path.display());
        Ok(Credential::OAuth2(token))
    }

    /// Generate helpful error message when no credential is found
    fn token_not_found_message(&self) -> String {
        let creds_info = self
            .credentials_path
            .as_ref()
            .map(|p| format!(", credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      uberctl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. OAuth2 token file: ~/{}\n\
             \n\
             Checked: CLI argument, env var {}{}",
            credentials::TOKEN_ENV_VAR,
            credentials::FILE_PATH,
            credentials::TOKEN_ENV_VAR,
            creds_info
        )
    }

    fn get_credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}

/// Token from the environment, ignoring blank values
pub(crate) fn token_from_env() -> Option<String> {
    std::env::var(credentials::TOKEN_ENV_VAR)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn token(token_type: Option<&str>) -> OAuth2Token {
        OAuth2Token {
            access_token: "access-123".to_string(),
            token_type: token_type.map(str::to_string),
            refresh_token: None,
            expiry: None,
        }
    }

    #[test]
    fn test_bearer_authorization() {
        let cred = Credential::Bearer("tok".to_string());
        assert_eq!(cred.authorization(), "Bearer tok");
    }

    #[test]
    fn test_oauth2_scheme_normalization() {
        assert_eq!(token(None).scheme(), "Bearer");
        assert_eq!(token(Some("")).scheme(), "Bearer");
        assert_eq!(token(Some("bearer")).scheme(), "Bearer");
        assert_eq!(token(Some("mac")).scheme(), "MAC");
        assert_eq!(token(Some("Custom")).scheme(), "Custom");
        assert_eq!(
            Credential::OAuth2(token(Some("bearer"))).authorization(),
            "Bearer access-123"
        );
    }

    #[test]
    fn test_token_expiry() {
        let mut t = token(None);
        assert!(!t.is_expired());
        t.expiry = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(t.is_expired());
        t.expiry = Some(Utc::now() + chrono::Duration::hours(1));
        assert!(!t.is_expired());
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::with_credentials_path("/nonexistent/credentials.json");
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), Credential::Bearer("cli-token-123".to_string()));
    }

    #[test]
    fn test_resolver_reads_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"access_token":"file-token","token_type":"Bearer","refresh_token":"r-1","expiry":"2099-01-01T00:00:00Z"}}"#
        )
        .unwrap();

        let resolver = TokenResolver::with_credentials_path(file.path());
        let cred = resolver.read_from_credentials_file().unwrap();
        match cred {
            Credential::OAuth2(t) => {
                assert_eq!(t.access_token, "file-token");
                assert_eq!(t.refresh_token.as_deref(), Some("r-1"));
            }
            other => panic!("Expected OAuth2 credential, got {:?}", other),
        }
    }

    #[test]
    fn test_resolver_missing_file_is_token_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = TokenResolver::with_credentials_path(dir.path().join("missing.json"));
        match resolver.read_from_credentials_file() {
            Err(UberError::TokenNotFound(msg)) => {
                assert!(msg.contains("uberctl --token"));
                assert!(msg.contains("UBER_TOKEN_KEY"));
                assert!(msg.contains("missing.json"));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolver_corrupt_file_is_credentials_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let resolver = TokenResolver::with_credentials_path(file.path());
        assert!(matches!(
            resolver.read_from_credentials_file(),
            Err(UberError::Credentials(_))
        ));
    }

    #[test]
    fn test_oauth2_token_roundtrips_through_json() {
        let t = token(Some("Bearer"));
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("refresh_token"));
        let back: OAuth2Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
