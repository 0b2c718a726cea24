//! Append-only record of successful deletions.

use std::io;

/// Destination for identifiers whose remote asset was deleted.
pub trait AuditTrail: Send {
    /// Append one entry for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry could not be persisted. Callers treat
    /// this as non-fatal; the deletion has already happened.
    fn record_deletion(&mut self, identifier: &str) -> io::Result<()>;
}

impl<T: AuditTrail + ?Sized> AuditTrail for &mut T {
    fn record_deletion(&mut self, identifier: &str) -> io::Result<()> {
        (**self).record_deletion(identifier)
    }
}
