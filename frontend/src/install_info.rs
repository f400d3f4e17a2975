use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use crate::config;

/// Body of `GET /api/github-app-info`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InstallationInfo {
    pub installation_url: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstallInfoError {
    #[error("request to backend failed: {0}")]
    Network(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("could not decode github app info: {0}")]
    Decode(String),
    #[error("installation url is not an absolute http(s) link: {0:?}")]
    InvalidUrl(String),
}

impl InstallationInfo {
    pub fn from_body(body: &str) -> Result<Self, InstallInfoError> {
        let info: InstallationInfo =
            serde_json::from_str(body).map_err(|e| InstallInfoError::Decode(e.to_string()))?;
        info.validated()
    }

    fn validated(self) -> Result<Self, InstallInfoError> {
        let trimmed = self.installation_url.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| InstallInfoError::InvalidUrl(format!("{}: {}", self.installation_url, e)))?;

        let has_host = url.host_str().map_or(false, |host| !host.is_empty());
        if !matches!(url.scheme(), "http" | "https") || !has_host {
            return Err(InstallInfoError::InvalidUrl(self.installation_url));
        }

        Ok(Self {
            installation_url: trimmed.to_string(),
        })
    }
}

/// Anything that can tell the page where the GitHub App gets installed.
#[allow(async_fn_in_trait)]
pub trait InstallInfoSource {
    async fn fetch(&self) -> Result<InstallationInfo, InstallInfoError>;
}

/// Asks the backend over HTTP.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpInstallInfoSource {
    endpoint: String,
}

impl HttpInstallInfoSource {
    pub fn new(backend_url: &str) -> Self {
        Self {
            endpoint: config::github_app_info_url(backend_url),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_backend_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InstallInfoSource for HttpInstallInfoSource {
    async fn fetch(&self) -> Result<InstallationInfo, InstallInfoError> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| InstallInfoError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(InstallInfoError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| InstallInfoError::Decode(e.to_string()))?;
        InstallationInfo::from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_installation_url() {
        let info = InstallationInfo::from_body(r#"{"installation_url": "https://example.com/install"}"#)
            .expect("valid body");
        assert_eq!(info.installation_url, "https://example.com/install");
    }

    #[test]
    fn ignores_extra_fields_and_trims() {
        let body = r#"{"app_id": 42, "installation_url": "  https://github.com/apps/brainlybot/installations/new  "}"#;
        let info = InstallationInfo::from_body(body).expect("valid body");
        assert_eq!(info.installation_url, "https://github.com/apps/brainlybot/installations/new");
    }

    #[test]
    fn rejects_non_json() {
        let err = InstallationInfo::from_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, InstallInfoError::Decode(_)));
    }

    #[test]
    fn rejects_missing_field() {
        let err = InstallationInfo::from_body(r#"{"url": "https://example.com"}"#).unwrap_err();
        assert!(matches!(err, InstallInfoError::Decode(_)));
    }

    #[test]
    fn rejects_unusable_urls() {
        for body in [
            r#"{"installation_url": ""}"#,
            r#"{"installation_url": "   "}"#,
            r#"{"installation_url": "javascript:alert(1)"}"#,
            r#"{"installation_url": "/relative/install"}"#,
            r#"{"installation_url": "https://"}"#,
            r#"{"installation_url": "https://#"}"#,
            r#"{"installation_url": "https://?x"}"#,
            r#"{"installation_url": "https://exa mple.com/install"}"#,
            r#"{"installation_url": "https://:::"}"#,
            r#"{"installation_url": "ftp://example.com/install"}"#,
        ] {
            let err = InstallationInfo::from_body(body).unwrap_err();
            assert!(matches!(err, InstallInfoError::InvalidUrl(_)), "{body}");
        }
    }

    #[test]
    fn accepts_upper_case_schemes() {
        for url in [
            "HTTPS://github.com/apps/x/installations/new",
            "Https://github.com/apps/x",
        ] {
            let body = format!(r#"{{"installation_url": "{url}"}}"#);
            let info = InstallationInfo::from_body(&body).expect("valid body");
            assert_eq!(info.installation_url, url);
        }
    }

    #[test]
    fn http_source_targets_app_info_endpoint() {
        let source = HttpInstallInfoSource::new("http://localhost:8000");
        assert_eq!(source.endpoint(), "http://localhost:8000/api/github-app-info");
    }
}
