use crate::types::{CompilerError, CompilerResult};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Overall classification of one batch of compile results.
///
/// Recomputed on every aggregation pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregateStatus {
    Success,
    Warning,
    Error,
}

impl AggregateStatus {
    /// Short human-readable status line for a presentation sink
    pub fn status_line(self) -> &'static str {
        match self {
            Self::Success => "Compiled successfully",
            Self::Warning => "Compiled with warnings",
            Self::Error => "Error compiling. See error list for details",
        }
    }
}

/// Deduplicated errors plus the overall status for one batch
#[derive(Debug, Serialize)]
pub struct Aggregation {
    pub errors: Vec<CompilerError>,
    pub status: AggregateStatus,
}

/// Combine per-file compile results into one error collection and status.
///
/// Errors are collected from every result that reports errors, in result
/// order then per-result error order; exact repeats keep their first
/// occurrence. Classification: no errored result is a success, only
/// warnings is a warning, anything else is an error. Total over any batch;
/// an empty batch is a success with no errors.
pub fn aggregate(results: &[CompilerResult]) -> Aggregation {
    let mut errors = Vec::new();
    let mut seen = FxHashSet::default();
    let mut any_errored = false;
    let mut any_hard_error = false;

    for result in results.iter().filter(|result| result.has_errors) {
        any_errored = true;
        for error in &result.errors {
            if !error.is_warning {
                any_hard_error = true;
            }
            if seen.insert(error.clone()) {
                errors.push(error.clone());
            }
        }
    }

    let status = if !any_errored {
        AggregateStatus::Success
    } else if any_hard_error {
        AggregateStatus::Error
    } else {
        AggregateStatus::Warning
    };

    Aggregation { errors, status }
}

/// Presentation sink the aggregator publishes to.
///
/// Implementations own a single shared error table. The sink is passed by
/// exclusive reference so clear-then-report lands as one non-interleaved
/// update; a reader can never observe a cleared-but-unpopulated table
/// between two publishers.
pub trait ErrorSink {
    /// Drop every error from the previous batch
    fn clear_all(&mut self);

    /// Add the new batch's errors to the now-empty table
    fn report(&mut self, errors: &[CompilerError]);

    /// Ask the host to surface the error table
    fn bring_to_front(&mut self);

    /// Set the short status line
    fn set_status(&mut self, text: &str);
}

/// Aggregate a batch and publish it to the sink with replace semantics.
///
/// The sink is cleared before the new batch is reported, so stale errors
/// from a prior run never coexist with the new results. The table is
/// brought to front only when the batch contains a hard error.
pub fn publish(results: &[CompilerResult], sink: &mut dyn ErrorSink) -> AggregateStatus {
    let aggregation = aggregate(results);

    sink.clear_all();
    if !aggregation.errors.is_empty() {
        sink.report(&aggregation.errors);
    }
    sink.set_status(aggregation.status.status_line());
    if aggregation.status == AggregateStatus::Error {
        sink.bring_to_front();
    }

    aggregation.status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str, is_warning: bool) -> CompilerError {
        CompilerError {
            message: message.to_string(),
            file_name: "site.scss".to_string(),
            line_number: 1,
            column_number: 1,
            is_warning,
        }
    }

    fn result(errors: Vec<CompilerError>) -> CompilerResult {
        CompilerResult {
            file_name: "site.scss".to_string(),
            has_errors: !errors.is_empty(),
            errors,
        }
    }

    /// Sink that records every call for assertion
    #[derive(Default)]
    struct RecordingSink {
        table: Vec<CompilerError>,
        status: String,
        cleared: usize,
        brought_to_front: usize,
    }

    impl ErrorSink for RecordingSink {
        fn clear_all(&mut self) {
            self.table.clear();
            self.cleared += 1;
        }

        fn report(&mut self, errors: &[CompilerError]) {
            self.table.extend_from_slice(errors);
        }

        fn bring_to_front(&mut self) {
            self.brought_to_front += 1;
        }

        fn set_status(&mut self, text: &str) {
            self.status = text.to_string();
        }
    }

    #[test]
    fn test_empty_batch_is_success() {
        let aggregation = aggregate(&[]);
        assert_eq!(aggregation.status, AggregateStatus::Success);
        assert!(aggregation.errors.is_empty());
    }

    #[test]
    fn test_clean_results_are_success() {
        let aggregation = aggregate(&[result(vec![]), result(vec![])]);
        assert_eq!(aggregation.status, AggregateStatus::Success);
        assert!(aggregation.errors.is_empty());
    }

    #[test]
    fn test_only_warnings_classify_as_warning() {
        let e1 = error("deprecated division", true);
        let aggregation = aggregate(&[result(vec![e1.clone()]), result(vec![])]);

        assert_eq!(aggregation.status, AggregateStatus::Warning);
        assert_eq!(aggregation.errors, vec![e1]);
    }

    #[test]
    fn test_any_hard_error_classifies_as_error() {
        let e1 = error("deprecated division", true);
        let e2 = error("undefined variable", false);
        let aggregation = aggregate(&[result(vec![e1.clone()]), result(vec![e2.clone()])]);

        assert_eq!(aggregation.status, AggregateStatus::Error);
        assert_eq!(aggregation.errors, vec![e1, e2]);
    }

    #[test]
    fn test_order_is_result_then_error_order() {
        let e1 = error("first", false);
        let e2 = error("second", false);
        let e3 = error("third", true);
        let aggregation = aggregate(&[result(vec![e1.clone(), e2.clone()]), result(vec![e3.clone()])]);

        assert_eq!(aggregation.errors, vec![e1, e2, e3]);
    }

    #[test]
    fn test_exact_repeats_keep_first_occurrence() {
        let e1 = error("undefined variable", false);
        let e2 = error("bad import", true);
        let aggregation =
            aggregate(&[result(vec![e1.clone(), e2.clone()]), result(vec![e1.clone()])]);

        assert_eq!(aggregation.errors, vec![e1, e2]);
    }

    #[test]
    fn test_errored_result_without_diagnostics_is_warning() {
        let flagged = CompilerResult {
            file_name: "site.less".to_string(),
            has_errors: true,
            errors: vec![],
        };
        let aggregation = aggregate(&[flagged]);

        assert_eq!(aggregation.status, AggregateStatus::Warning);
        assert!(aggregation.errors.is_empty());
    }

    #[test]
    fn test_publish_success_sets_status_only() {
        let mut sink = RecordingSink::default();
        let status = publish(&[result(vec![])], &mut sink);

        assert_eq!(status, AggregateStatus::Success);
        assert_eq!(sink.cleared, 1);
        assert!(sink.table.is_empty());
        assert_eq!(sink.status, "Compiled successfully");
        assert_eq!(sink.brought_to_front, 0);
    }

    #[test]
    fn test_publish_error_brings_table_to_front() {
        let mut sink = RecordingSink::default();
        let status = publish(&[result(vec![error("boom", false)])], &mut sink);

        assert_eq!(status, AggregateStatus::Error);
        assert_eq!(sink.table.len(), 1);
        assert_eq!(sink.status, "Error compiling. See error list for details");
        assert_eq!(sink.brought_to_front, 1);
    }

    #[test]
    fn test_publish_warning_does_not_bring_to_front() {
        let mut sink = RecordingSink::default();
        let status = publish(&[result(vec![error("careful", true)])], &mut sink);

        assert_eq!(status, AggregateStatus::Warning);
        assert_eq!(sink.status, "Compiled with warnings");
        assert_eq!(sink.brought_to_front, 0);
    }

    #[test]
    fn test_publish_replaces_previous_batch() {
        let mut sink = RecordingSink::default();

        publish(&[result(vec![error("stale", false)])], &mut sink);
        assert_eq!(sink.table.len(), 1);

        let fresh = error("fresh", true);
        publish(&[result(vec![fresh.clone()])], &mut sink);

        assert_eq!(sink.table, vec![fresh]);
        assert_eq!(sink.cleared, 2);
        assert_eq!(sink.status, "Compiled with warnings");
    }

    #[test]
    fn test_publish_empty_batch_clears_sink() {
        let mut sink = RecordingSink::default();

        publish(&[result(vec![error("stale", false)])], &mut sink);
        publish(&[], &mut sink);

        assert!(sink.table.is_empty());
        assert_eq!(sink.status, "Compiled successfully");
    }
}
