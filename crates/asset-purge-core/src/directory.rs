//! Seam between the orchestrator and the remote asset directory.
//!
//! # Design
//! - Each operation maps to exactly one remote call; no retries happen here.
//! - Failures are returned as values so a single record never aborts a run.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Asset, AssetId};

/// Result alias for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures raised while talking to the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The request could not be built or never produced a response.
    #[error("directory transport failure")]
    Transport {
        /// Operation identifier.
        operation: &'static str,
        /// Transport error message.
        detail: String,
    },
    /// The directory answered with a status the operation does not accept.
    #[error("directory returned unexpected status")]
    UnexpectedStatus {
        /// Operation identifier.
        operation: &'static str,
        /// HTTP status code returned.
        status: u16,
        /// Response body, when one was readable.
        body: String,
    },
    /// The response body could not be decoded.
    #[error("directory response could not be decoded")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// Decoder error message.
        detail: String,
    },
}

impl DirectoryError {
    /// Human-readable reason including the captured context.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Transport { operation, detail } | Self::Decode { operation, detail } => {
                format!("{operation}: {self}: {detail}")
            }
            Self::UnexpectedStatus {
                operation,
                status,
                body,
            } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("{operation}: {self} {status}")
                } else {
                    format!("{operation}: {self} {status}: {body}")
                }
            }
        }
    }
}

/// Remote directory able to locate and delete assets by host name.
#[async_trait]
pub trait AssetDirectory: Send + Sync {
    /// Look up the asset whose host name equals `name` exactly.
    ///
    /// Returns `Ok(None)` when the directory has no exact match.
    async fn find_by_name(&self, name: &str) -> DirectoryResult<Option<Asset>>;

    /// Delete the asset with the given identifier.
    async fn delete_by_id(&self, id: &AssetId) -> DirectoryResult<()>;
}

/// Pick the candidate whose host name matches `name` exactly.
///
/// Remote searches may match on substrings, so the first candidate is never
/// trusted on its own.
#[must_use]
pub fn select_exact_match<I>(name: &str, candidates: I) -> Option<Asset>
where
    I: IntoIterator<Item = Asset>,
{
    candidates
        .into_iter()
        .find(|candidate| candidate.host_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, host: &str) -> Asset {
        Asset {
            id: AssetId::new(id),
            host_name: host.to_string(),
        }
    }

    #[test]
    fn exact_match_skips_earlier_partial_hits() {
        let selected = select_exact_match(
            "alpha",
            vec![asset("1", "alpha-2"), asset("2", "alpha")],
        );
        assert_eq!(selected, Some(asset("2", "alpha")));
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        assert!(select_exact_match("alpha", vec![asset("1", "ALPHA")]).is_none());
        assert!(select_exact_match("alpha", Vec::new()).is_none());
    }

    #[test]
    fn reason_includes_status_and_body() {
        let err = DirectoryError::UnexpectedStatus {
            operation: "assets.delete",
            status: 500,
            body: " boom ".to_string(),
        };
        assert_eq!(
            err.reason(),
            "assets.delete: directory returned unexpected status 500: boom"
        );

        let empty = DirectoryError::UnexpectedStatus {
            operation: "assets.delete",
            status: 404,
            body: String::new(),
        };
        assert_eq!(
            empty.reason(),
            "assets.delete: directory returned unexpected status 404"
        );
    }

    #[test]
    fn reason_includes_transport_detail() {
        let err = DirectoryError::Transport {
            operation: "assets.find",
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            err.reason(),
            "assets.find: directory transport failure: connection refused"
        );
    }
}
