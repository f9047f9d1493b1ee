use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
    insta::assert_snapshot!(format!("{}", Severity::Info), @"info");
}

#[test]
fn default_severities() {
    assert_eq!(
        DiagnosticKind::DanglingOperator.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        DiagnosticKind::UnclosedGroup.default_severity(),
        Severity::Warning
    );
    assert_eq!(DiagnosticKind::InvalidBoost.default_severity(), Severity::Info);
    assert_eq!(DiagnosticKind::UnknownField.default_severity(), Severity::Info);
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingField, range(0, 6))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_warnings());
    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"info at 0..6: field prefix has nothing to apply to"
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingOperator, range(1, 6))
        .message("AND")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(0, 1))
        .message("contents merged into the enclosing group")
        .emit();

    assert_eq!(diagnostics.warning_count(), 2);
    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    warning at 1..6: `AND` has no operand
    warning at 0..1: missing closing `)`; contents merged into the enclosing group
    ");
}

#[test]
fn printer_with_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(0, 1))
        .emit();

    let result = diagnostics.render("(a AND b");
    insta::assert_snapshot!(result, @r"
    warning: missing closing `)`
      |
    1 | (a AND b
      | ^
    ");
}

#[test]
fn printer_states_message_once() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingOperator, range(2, 5))
        .message("AND")
        .emit();

    let result = diagnostics.render("a AND");
    assert_eq!(result.matches("has no operand").count(), 1);
    let carets = result.lines().find(|line| line.contains('^')).unwrap();
    assert_eq!(carets.trim_end(), "  |   ^^^");
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidBoost, range(5, 7))
        .message("^.")
        .emit();

    let result = diagnostics
        .printer()
        .source("hello^.")
        .path("query.txt")
        .render();
    insta::assert_snapshot!(result, @r"
    info: `^.` is not a valid boost
     --> query.txt:1:6
      |
    1 | hello^.
      |      ^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedCloseBracket, TextRange::empty(1.into()))
        .emit();

    let result = diagnostics.render("a)");
    insta::assert_snapshot!(result, @r"
    warning: unmatched `)`
      |
    1 | a)
      |  ^
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownField, range(0, 4))
        .message("nope")
        .emit();

    let result = diagnostics.render_colored("nope:x", true);
    assert!(result.contains("nope"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.render("source").is_empty());
    assert!(diagnostics.printer().render().is_empty());
}

#[test]
fn extend_keeps_order() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::InvalidBoost, range(0, 1)).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::DanglingField, range(2, 3)).emit();

    first.extend(second);
    assert_eq!(
        first.kinds(),
        [DiagnosticKind::InvalidBoost, DiagnosticKind::DanglingField]
    );
}

fn mixed() -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingOperator, range(1, 6))
        .message("AND")
        .emit();
    diagnostics
        .report(DiagnosticKind::InvalidBoost, range(7, 9))
        .message("^x")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnmatchedCloseBracket, range(9, 10))
        .emit();
    diagnostics
}

#[test]
fn min_severity_hides_info() {
    insta::assert_snapshot!(mixed().printer().min_severity(Severity::Warning).render(), @r"
    warning at 1..6: `AND` has no operand
    warning at 9..10: unmatched `)`
    ");
}

#[test]
fn summary_counts_shown_messages() {
    insta::assert_snapshot!(mixed().printer().summary(true).render(), @r"
    warning at 1..6: `AND` has no operand
    info at 7..9: `^x` is not a valid boost
    warning at 9..10: unmatched `)`
    2 warnings, 1 info
    ");

    let warnings_only = mixed()
        .printer()
        .min_severity(Severity::Warning)
        .summary(true)
        .render();
    assert!(warnings_only.ends_with("\n2 warnings"));
}

#[test]
fn summary_omitted_without_messages() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.printer().summary(true).render().is_empty());
}

#[test]
fn queries_by_kind_and_range() {
    let diagnostics = mixed();

    assert_eq!(diagnostics.of_kind(DiagnosticKind::InvalidBoost).count(), 1);
    assert_eq!(diagnostics.count(Severity::Warning), 2);
    assert_eq!(diagnostics.count(Severity::Info), 1);
    assert!(!diagnostics.is_clean());

    let near_end: Vec<_> = diagnostics.touching(range(8, 10)).map(|d| d.kind()).collect();
    assert_eq!(
        near_end,
        [DiagnosticKind::InvalidBoost, DiagnosticKind::UnmatchedCloseBracket]
    );
}
