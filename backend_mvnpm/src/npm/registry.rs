// backend_mvnpm/src/npm/registry.rs
use log::debug;
use thiserror::Error;

use super::model::Package;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("package not found: {0}")]
    NotFound(String),
    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected registry payload for {package}: {source}")]
    Payload {
        package: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin client for the npm registry's package-version endpoint.
pub struct RegistryClient {
    base_url: String,
    http: reqwest::Client,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        RegistryClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the package-version document, `latest` when no version is given.
    pub async fn package(&self, name: &str, version: Option<&str>) -> Result<Package, RegistryError> {
        let version = version.unwrap_or("latest");
        let url = format!("{}/{}/{}", self.base_url, encode_name(name), version);
        debug!("📦 fetching {url}");

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(name.to_string()));
        }
        let body = response.error_for_status()?.text().await?;

        serde_json::from_str(&body).map_err(|source| RegistryError::Payload {
            package: name.to_string(),
            source,
        })
    }
}

// The registry wants the slash of a scoped name encoded ("@scope%2Fpkg")
fn encode_name(name: &str) -> String {
    name.replace('/', "%2F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_names_keep_their_slash_encoded() {
        assert_eq!(encode_name("@lit/reactive-element"), "@lit%2Freactive-element");
        assert_eq!(encode_name("lit"), "lit");
    }

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let client = RegistryClient::new("https://registry.npmjs.org/");
        assert_eq!(client.base_url, "https://registry.npmjs.org");
    }
}
