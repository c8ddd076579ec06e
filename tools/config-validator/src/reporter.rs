use crate::checks::{Report, Severity};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use std::io::{self, Write};

/// Print the sectioned text report. Returns true if no errors were recorded.
pub fn print_report<W: Write>(writer: &mut W, report: &Report) -> io::Result<bool> {
    writeln!(
        writer,
        "{}",
        "\u{1f50d} Validating Aalay project configuration..."
            .if_supports_color(Stdout, |s| s.bold())
    )?;
    writeln!(writer, "   {}", report.project_root.display())?;
    writeln!(writer)?;

    print_section(writer, "\u{2705} Configuration Status:", &report.infos(), Severity::Info)?;
    print_section(writer, "\u{26a0}\u{fe0f}  Warnings:", &report.warnings(), Severity::Warning)?;
    print_section(writer, "\u{274c} Errors:", &report.errors(), Severity::Error)?;

    let errors = report.count(Severity::Error);
    let warnings = report.count(Severity::Warning);
    writeln!(
        writer,
        "\u{1f4ca} Summary: {} passed, {} warnings, {} errors",
        report.count(Severity::Info),
        warnings,
        errors,
    )?;
    writeln!(writer, "\u{1f3af} Success rate: {:.1}%", report.success_rate())?;
    writeln!(writer)?;

    if errors > 0 {
        writeln!(
            writer,
            "{}",
            "\u{2757} Critical errors found. Please fix them before building."
                .if_supports_color(Stdout, |s| s.red())
        )?;
    } else if warnings > 0 {
        writeln!(
            writer,
            "{}",
            "\u{26a1} Warnings found. Consider addressing them for optimal setup."
                .if_supports_color(Stdout, |s| s.yellow())
        )?;
    } else {
        writeln!(
            writer,
            "{}",
            "\u{1f389} All checks passed! Your configuration looks good."
                .if_supports_color(Stdout, |s| s.green())
        )?;
    }

    Ok(report.passed())
}

fn print_section<W: Write>(
    writer: &mut W,
    header: &str,
    messages: &[&str],
    severity: Severity,
) -> io::Result<()> {
    if messages.is_empty() {
        return Ok(());
    }

    let header = match severity {
        Severity::Info => header.if_supports_color(Stdout, |s| s.green()).to_string(),
        Severity::Warning => header.if_supports_color(Stdout, |s| s.yellow()).to_string(),
        Severity::Error => header.if_supports_color(Stdout, |s| s.red()).to_string(),
    };
    writeln!(writer, "{header}")?;
    for message in messages {
        writeln!(writer, "   {message}")?;
    }
    writeln!(writer)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    info: usize,
    warnings: usize,
    errors: usize,
    success_rate: f64,
    passed: bool,
}

/// Machine-readable variant of [`print_report`].
pub fn print_json<W: Write>(writer: &mut W, report: &Report) -> io::Result<bool> {
    let document = JsonReport {
        report,
        summary: Summary {
            info: report.count(Severity::Info),
            warnings: report.count(Severity::Warning),
            errors: report.count(Severity::Error),
            success_rate: report.success_rate(),
            passed: report.passed(),
        },
    };
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(report.passed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckResult;
    use std::path::PathBuf;

    fn sample(errors: bool, warnings: bool) -> Report {
        let mut result = CheckResult::new("sample");
        result.info("\u{2713} build.gradle found");
        if warnings {
            result.warning("Security file missing: app/proguard-rules.pro");
        }
        if errors {
            result.error("Required build file missing: settings.gradle");
        }
        let mut report = Report::new(PathBuf::from("/work/app"));
        report.push(result);
        report
    }

    fn render(report: &Report) -> (String, bool) {
        let mut out = Vec::new();
        let passed = print_report(&mut out, report).unwrap();
        (String::from_utf8(out).unwrap(), passed)
    }

    #[test]
    fn sections_print_in_severity_order() {
        let (text, passed) = render(&sample(true, true));
        assert!(!passed);
        let status = text.find("Configuration Status:").unwrap();
        let warnings = text.find("Warnings:").unwrap();
        let errors = text.find("Errors:").unwrap();
        assert!(status < warnings && warnings < errors);
        assert!(text.contains("   Required build file missing: settings.gradle"));
        assert!(text.contains("Summary: 1 passed, 1 warnings, 1 errors"));
        assert!(text.contains("Success rate: 33.3%"));
        assert!(text.contains("Critical errors found."));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let (text, passed) = render(&sample(false, false));
        assert!(passed);
        assert!(!text.contains("Warnings:"));
        assert!(!text.contains("Errors:"));
        assert!(text.contains("Success rate: 100.0%"));
        assert!(text.contains("All checks passed!"));
    }

    #[test]
    fn warnings_only_still_pass() {
        let (text, passed) = render(&sample(false, true));
        assert!(passed);
        assert!(text.contains("Warnings found. Consider addressing them"));
    }

    #[test]
    fn json_report_carries_summary() {
        let mut out = Vec::new();
        let passed = print_json(&mut out, &sample(true, false)).unwrap();
        assert!(!passed);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["project_root"], "/work/app");
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["summary"]["passed"], false);
        assert_eq!(value["checks"][0]["findings"][1]["severity"], "error");
    }
}
