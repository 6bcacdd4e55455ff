//! Error rendering using ariadne
//!
//! Turns an [`Error`] into a report with the error code, the message and a
//! label pointing into the offending source.

use std::io::Write;
use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::Error;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use mical::{Engine, render_error};
///
/// let source = "1 + (2";
/// if let Err(e) = Engine::default().evaluate(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let message = error.to_string();
    let span = label_span(source, error);

    let (label, color) = match error {
        Error::Parse(_) => ("parsing stopped here", Color::Red),
        Error::Security(_) => ("deny-listed here", Color::Yellow),
        Error::Eval(_) => ("while evaluating this", Color::Magenta),
    };

    Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(error.code())
        .with_message(&message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(ariadne::IndexType::Byte),
        )
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(label)
                .with_color(color),
        )
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

/// Byte range the report points at.
fn label_span(source: &str, error: &Error) -> Range<usize> {
    let whole = 0..source.len();
    let span = match error {
        Error::Security(violation) => source
            .find(violation.pattern.as_str())
            .map(|start| start..start + violation.pattern.len()),
        _ => error.span().map(|span| span.0.clone()),
    };
    match span {
        Some(range) if range.end <= source.len() => range,
        _ => whole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Engine;

    fn render(source: &str) -> String {
        let err = Engine::default()
            .evaluate(source)
            .expect_err("expected an error");
        render_error_to_string_no_color(source, &err)
    }

    #[test]
    fn test_render_parse_error() {
        let output = render("1 + + 2");

        assert!(output.contains("Error"), "{}", output);
        assert!(output.contains("P001"), "{}", output);
        assert!(output.contains("1 + + 2"), "{}", output);
        assert!(output.contains("parsing stopped here"), "{}", output);
    }

    #[test]
    fn test_render_security_violation() {
        let output = render("1 + eval(2)");

        assert!(output.contains("S001"), "{}", output);
        assert!(output.contains("contains a call to 'eval'"), "{}", output);
        assert!(output.contains("deny-listed here"), "{}", output);
    }

    #[test]
    fn test_render_eval_error() {
        let output = render("9223372036854775807 * 2");

        assert!(output.contains("E002"), "{}", output);
        assert!(output.contains("integer overflow"), "{}", output);
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let output = render("(1 + 2");

        assert!(!output.is_empty());
        // ariadne adds a header, the snippet and the label
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_label_span() {
        let source = "1 + exec";
        let err = Engine::default().evaluate(source).unwrap_err();
        assert_eq!(label_span(source, &err), 4..8);

        let source = "99999999999999999999 + 1";
        let err = Engine::default().evaluate(source).unwrap_err();
        assert_eq!(label_span(source, &err), 0..20);
    }
}
