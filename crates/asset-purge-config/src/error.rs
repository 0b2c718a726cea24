//! Error types for configuration operations.

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered sources could not be merged or extracted.
    #[error("failed to load configuration")]
    Load {
        /// Underlying figment error.
        #[source]
        source: Box<figment::Error>,
    },
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        section: &'static str,
        field: &'static str,
        value: Option<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            section,
            field,
            value,
            reason,
        }
    }

    /// Message suitable for operators, including field context.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Load { source } => format!("{self}: {source}"),
            Self::InvalidField {
                section,
                field,
                value: Some(value),
                reason,
            } => format!("{self} '{section}.{field}' ({value}): {reason}"),
            Self::InvalidField {
                section,
                field,
                value: None,
                reason,
            } => format!("{self} '{section}.{field}': {reason}"),
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_names_the_field() {
        let err = ConfigError::invalid("api", "url", Some("ftp://x".into()), "unsupported scheme");
        assert_eq!(err.to_string(), "invalid configuration field");
        assert_eq!(
            err.detail(),
            "invalid configuration field 'api.url' (ftp://x): unsupported scheme"
        );

        let err = ConfigError::invalid("api", "username", None, "must not be empty");
        assert_eq!(
            err.detail(),
            "invalid configuration field 'api.username': must not be empty"
        );
    }
}
