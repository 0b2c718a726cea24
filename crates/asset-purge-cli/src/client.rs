//! HTTP directory client, credential headers, and CLI error types.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use asset_purge_config::ApiSettings;
use asset_purge_core::{Asset, AssetDirectory, AssetId, DirectoryError, DirectoryResult};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const HEADER_TOKEN: &str = "token";
pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

const OP_LOOKUP: &str = "assets.lookup";
const OP_DELETE: &str = "assets.delete";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Asset directory reached over the REST API.
#[derive(Clone)]
pub(crate) struct DirectoryClient {
    client: Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Build a client whose default headers carry the credentials and the
    /// run identifier. Credentials are encoded here once per run.
    pub(crate) fn new(api: &ApiSettings, request_id: &str) -> CliResult<Self> {
        let base_url = api
            .base_url()
            .map_err(|err| CliError::validation(err.detail()))?;
        let headers = default_headers(api, request_id)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, operation: &'static str, segments: &[&str]) -> DirectoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DirectoryError::Transport {
                operation,
                detail: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn default_headers(api: &ApiSettings, request_id: &str) -> CliResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let encoded = general_purpose::STANDARD.encode(format!("{}:{}", api.username, api.password));
    let mut authorization = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|_| CliError::validation("credentials produce an invalid header"))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    if let Some(token) = api.token.as_deref() {
        let mut value = HeaderValue::from_str(token.trim())
            .map_err(|_| CliError::validation("api token contains invalid characters"))?;
        value.set_sensitive(true);
        headers.insert(HEADER_TOKEN, value);
    }

    let request_id = HeaderValue::from_str(request_id).map_err(|_| {
        CliError::failure(anyhow!("request identifier contains invalid characters"))
    })?;
    headers.insert(HEADER_REQUEST_ID, request_id);
    Ok(headers)
}

#[derive(Debug, Deserialize)]
struct AssetPage {
    #[serde(default)]
    resources: Vec<AssetResource>,
}

#[derive(Debug, Deserialize)]
struct AssetResource {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "hostName", default)]
    host_name: Option<String>,
}

impl AssetResource {
    fn has_host_name(&self, name: &str) -> bool {
        self.host_name.as_deref() == Some(name)
    }

    fn into_asset(self, host_name: &str) -> DirectoryResult<Asset> {
        let id = match self.id {
            Some(Value::String(text)) => text,
            Some(Value::Number(number)) => number.to_string(),
            other => {
                return Err(DirectoryError::Decode {
                    operation: OP_LOOKUP,
                    detail: format!(
                        "unsupported asset id {} for {host_name}",
                        other.unwrap_or(Value::Null)
                    ),
                });
            }
        };
        Ok(Asset {
            id: AssetId::new(id),
            host_name: host_name.to_string(),
        })
    }
}

fn transport(operation: &'static str, err: &reqwest::Error) -> DirectoryError {
    DirectoryError::Transport {
        operation,
        detail: err.to_string(),
    }
}

#[async_trait]
impl AssetDirectory for DirectoryClient {
    async fn find_by_name(&self, name: &str) -> DirectoryResult<Option<Asset>> {
        let url = self.endpoint(OP_LOOKUP, &["assets"])?;
        let response = self
            .client
            .get(url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|err| transport(OP_LOOKUP, &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| transport(OP_LOOKUP, &err))?;
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus {
                operation: OP_LOOKUP,
                status: status.as_u16(),
                body,
            });
        }

        let page: AssetPage =
            serde_json::from_str(&body).map_err(|err| DirectoryError::Decode {
                operation: OP_LOOKUP,
                detail: err.to_string(),
            })?;

        // The directory filters by substring; only the exact host name counts,
        // and only its id has to be usable.
        page.resources
            .into_iter()
            .find(|resource| resource.has_host_name(name))
            .map(|resource| resource.into_asset(name))
            .transpose()
    }

    async fn delete_by_id(&self, id: &AssetId) -> DirectoryResult<()> {
        let url = self.endpoint(OP_DELETE, &["assets", id.as_str()])?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| transport(OP_DELETE, &err))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(DirectoryError::UnexpectedStatus {
            operation: OP_DELETE,
            status: status.as_u16(),
            body,
        })
    }
}
