use crate::diagnostics::collector::DiagnosticCollector;
use crate::diagnostics::record::{Diagnostic, Origin};

#[test]
fn starts_empty_and_non_fatal() {
    let collector = DiagnosticCollector::new();

    assert!(collector.is_empty());
    assert_eq!(collector.len(), 0);
    assert!(!collector.has_fatal_error());
}

#[test]
fn report_preserves_insertion_order() {
    let mut collector = DiagnosticCollector::new();
    collector.report(Diagnostic::syntax_error("first", 1, 1, Origin::Lexer));
    collector.report(Diagnostic::syntax_error("second", 2, 5, Origin::Parser));
    collector.report(Diagnostic::general_error("third", Origin::Compiler));

    let messages: Vec<&str> = collector
        .diagnostics()
        .iter()
        .map(|d| d.message())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(collector.len(), 3);
}

#[test]
fn duplicate_reports_are_kept() {
    let mut collector = DiagnosticCollector::new();
    let diag = Diagnostic::syntax_error("again", 4, 2, Origin::Lexer);
    collector.report(diag.clone());
    collector.report(diag);

    assert_eq!(collector.len(), 2);
    assert_eq!(collector.diagnostics()[0], collector.diagnostics()[1]);
}

#[test]
fn fatal_latch_is_one_way() {
    let mut collector = DiagnosticCollector::new();
    assert!(!collector.has_fatal_error());

    collector.mark_fatal();
    assert!(collector.has_fatal_error());

    // Latching again changes nothing; there is no reset.
    collector.mark_fatal();
    assert!(collector.has_fatal_error());
}

#[test]
fn reporting_never_latches_fatal() {
    let mut collector = DiagnosticCollector::new();
    collector.report(Diagnostic::general_error("disk full", Origin::FileIo));

    assert!(!collector.has_fatal_error());
}

#[test]
fn latch_survives_later_reports() {
    let mut collector = DiagnosticCollector::new();
    collector.mark_fatal();
    collector.report(Diagnostic::syntax_error("late", 9, 1, Origin::Parser));

    assert!(collector.has_fatal_error());
    assert_eq!(collector.len(), 1);
}
