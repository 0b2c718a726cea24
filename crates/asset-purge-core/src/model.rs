//! Records read from the input list and the remote assets they resolve to.

use std::fmt::{self, Display, Formatter};

/// A single raw identifier read from the input snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord(String);

impl AssetRecord {
    /// Wrap a raw identifier exactly as it was read.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRecord {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for AssetRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Opaque identifier assigned to an asset by the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Wrap the textual form of a remote identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Read-only view of a remote asset returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Remote identifier used for deletion.
    pub id: AssetId,
    /// Host name reported by the directory.
    pub host_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_raw_text() {
        let record = AssetRecord::from(" web 01 ");
        assert_eq!(record.as_str(), " web 01 ");
        assert_eq!(record.to_string(), " web 01 ");
    }

    #[test]
    fn asset_id_displays_raw_text() {
        let id = AssetId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }
}
