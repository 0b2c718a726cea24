//! End-of-run summary rendering.

use std::fmt::Write as _;

use asset_purge_core::RunOutcome;
use tracing::info;

/// Log the summary and print it to stdout.
pub(crate) fn report_summary(outcome: &RunOutcome) {
    info!(
        success_count = outcome.success_count,
        failure_count = outcome.failure_count,
        failed = ?outcome.failed_identifiers,
        "run summary"
    );
    print!("{}", format_summary(outcome));
}

pub(crate) fn format_summary(outcome: &RunOutcome) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Summary:");
    let _ = writeln!(text, "  successful deletions: {}", outcome.success_count);
    let _ = writeln!(text, "  failed deletions: {}", outcome.failure_count);
    if !outcome.failed_identifiers.is_empty() {
        let _ = writeln!(text, "  failed computers:");
        for identifier in &outcome.failed_identifiers {
            let _ = writeln!(text, "    - {identifier}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_run_omits_failed_section() {
        let outcome = RunOutcome {
            success_count: 2,
            failure_count: 0,
            failed_identifiers: Vec::new(),
        };
        assert_eq!(
            format_summary(&outcome),
            "Summary:\n  successful deletions: 2\n  failed deletions: 0\n"
        );
    }

    #[test]
    fn failures_are_listed_in_order() {
        let outcome = RunOutcome {
            success_count: 1,
            failure_count: 2,
            failed_identifiers: vec!["web-02".to_string(), "db-01".to_string()],
        };
        let text = format_summary(&outcome);
        assert!(text.contains("  failed deletions: 2\n"));
        assert!(text.ends_with("  failed computers:\n    - web-02\n    - db-01\n"));
    }
}
