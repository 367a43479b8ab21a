//! Diagnostic and error reporting for Vesper.
//!
//! The core interpreter reports failures as plain error values; this crate
//! turns those into human-readable reports (via ariadne) for front ends
//! that own the source text.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, diagnostic.span.start.0 as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let _ = build_report(filename, diagnostic).eprint((filename, Source::from(source)));
}

/// Render a diagnostic into a string, for tests and non-terminal front ends.
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> String {
    let mut buf = Vec::new();
    let _ = build_report(filename, diagnostic).write((filename, Source::from(source)), &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
