//! Run-level span carrying the identifier shared by every log line of a run.

use tracing::Span;
use uuid::Uuid;

/// Identity of one invocation, recorded on its top-level span.
#[derive(Debug, Clone)]
pub struct RunContext {
    run_id: Uuid,
    span: Span,
}

impl RunContext {
    /// Start a context with a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Start a context with a known identifier.
    #[must_use]
    pub fn with_id(run_id: Uuid) -> Self {
        let span = tracing::info_span!("purge_run", run_id = %run_id);
        Self { run_id, span }
    }

    /// Identifier of this run.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Span to instrument the run with.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span.clone()
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexts_get_distinct_ids() {
        let first = RunContext::new();
        let second = RunContext::default();
        assert_ne!(first.run_id(), second.run_id());
    }

    #[test]
    fn known_id_is_preserved() {
        let id = Uuid::new_v4();
        let context = RunContext::with_id(id);
        assert_eq!(context.run_id(), id);
        let _span = context.span();
    }
}
