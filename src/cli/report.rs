//! Report formatting and printing utilities.
//!
//! Separate from command logic to allow xcmerge to be used as a library.
//! Every printer writes to a caller-supplied writer so output can be tested.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    ApplyAllSummary, ApplySummary, CommandResult, CommandSummary, ExtractSummary, InitSummary,
    StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::coverage::Coverage;
use crate::merge::{KeyOutcome, MergeCounts, MergeReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: summaries to stdout, warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Apply(summary) => print_apply(summary, verbose, out, err),
        CommandSummary::ApplyAll(summary) => print_apply_all(summary, verbose, out, err),
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Stats(summary) => print_stats(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

// ============================================================
// Merge output
// ============================================================

fn print_apply<O: Write, E: Write>(summary: &ApplySummary, verbose: bool, out: &mut O, err: &mut E) {
    let report = &summary.report;
    print_not_found(report, err);
    if verbose {
        print_outcomes(report, out);
    }

    let _ = writeln!(
        out,
        "Translation summary for {} (policy: {}):",
        report.language.bold(),
        summary.options.policy.as_str()
    );
    print_counts(&report.counts, out);
    print_merge_status(
        report.counts.changed(),
        &summary.catalog_path,
        summary.backup.as_deref(),
        summary.is_dry_run,
        out,
    );
}

fn print_apply_all<O: Write, E: Write>(
    summary: &ApplyAllSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for report in &summary.reports {
        print_not_found(report, err);
    }

    let width = column_width(summary.reports.iter().map(|r| r.language.as_str()));
    for report in &summary.reports {
        let counts = &report.counts;
        let _ = writeln!(
            out,
            "{}  added {}, updated {}, skipped {}, not found {}",
            pad(&report.language, width),
            counts.added,
            counts.updated,
            counts.skipped,
            counts.not_found
        );
        if verbose {
            print_outcomes(report, out);
        }
    }

    let _ = writeln!(
        out,
        "Translation summary for {} language(s) (policy: {}):",
        summary.reports.len(),
        summary.options.policy.as_str()
    );
    print_counts(&summary.total, out);
    print_merge_status(
        summary.total.changed(),
        &summary.catalog_path,
        summary.backup.as_deref(),
        summary.is_dry_run,
        out,
    );

    let _ = writeln!(out);
    print_coverage(&summary.coverage, None, out);
}

fn print_not_found<E: Write>(report: &MergeReport, err: &mut E) {
    for key in report.keys_with(KeyOutcome::NotFound) {
        let _ = writeln!(
            err,
            "{} key \"{}\" not found in catalog, skipping ({})",
            "warning:".bold().yellow(),
            key,
            report.language
        );
    }
}

fn print_outcomes<O: Write>(report: &MergeReport, out: &mut O) {
    for (key, outcome) in &report.outcomes {
        let mark = match outcome {
            KeyOutcome::Added => "+".green(),
            KeyOutcome::Updated => "~".yellow(),
            KeyOutcome::Skipped => "=".normal(),
            KeyOutcome::NotFound => "?".red(),
        };
        let _ = writeln!(out, "  {} {} ({})", mark, key, outcome.as_str());
    }
}

fn print_counts<O: Write>(counts: &MergeCounts, out: &mut O) {
    let _ = writeln!(out, "  - added: {}", counts.added);
    let _ = writeln!(out, "  - updated: {}", counts.updated);
    let _ = writeln!(out, "  - skipped: {}", counts.skipped);
    let _ = writeln!(out, "  - not found: {}", counts.not_found);
    let _ = writeln!(out, "  - total processed: {}", counts.total());
}

fn print_merge_status<O: Write>(
    changed: usize,
    catalog_path: &Path,
    backup: Option<&Path>,
    is_dry_run: bool,
    out: &mut O,
) {
    if is_dry_run {
        if changed > 0 {
            let _ = writeln!(
                out,
                "{} {} translation(s) to {}.",
                "Would write".yellow().bold(),
                changed,
                catalog_path.display()
            );
            let _ = writeln!(out, "Run without {} to apply these changes.", "--dry-run".cyan());
        } else {
            let _ = writeln!(out, "Nothing to write.");
        }
        return;
    }

    match backup {
        Some(backup) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} translation(s) to {}",
                    changed,
                    catalog_path.display()
                )
                .green()
            );
            let _ = writeln!(out, "Original file backed up at {}", backup.display());
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} is already up to date", catalog_path.display()).green()
            );
        }
    }
}

// ============================================================
// Coverage output
// ============================================================

fn print_stats<O: Write>(summary: &StatsSummary, out: &mut O) {
    let _ = writeln!(out, "Catalog: {}", summary.catalog_path.display());
    print_coverage(&summary.coverage, summary.min_coverage, out);

    let Some(threshold) = summary.min_coverage else {
        return;
    };
    let below = summary.coverage.below(threshold);
    if below.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All languages meet {:.1}% coverage", threshold).green()
        );
    } else {
        let names: Vec<&str> = below.iter().map(|l| l.language.as_str()).collect();
        let _ = writeln!(
            out,
            "{} {} language(s) below {:.1}% coverage: {}",
            FAILURE_MARK.red(),
            below.len(),
            threshold,
            names.join(", ")
        );
    }
}

/// Print a coverage table. Languages under `threshold` are highlighted.
pub fn print_coverage<O: Write>(coverage: &Coverage, threshold: Option<f64>, out: &mut O) {
    let _ = writeln!(
        out,
        "Translation coverage ({} keys, {} translatable):",
        coverage.total_keys, coverage.translatable
    );

    let width = column_width(coverage.languages.iter().map(|l| l.language.as_str()));
    let digits = coverage.translatable.to_string().len();

    for language in &coverage.languages {
        let name = pad(&language.language, width);
        if language.is_source {
            let _ = writeln!(out, "  {}  {}", name, "source".dimmed());
            continue;
        }

        let percent = format!("{:>5.1}%", language.percent());
        let percent = match threshold {
            Some(threshold) if language.percent() < threshold => percent.red(),
            _ if language.missing() == 0 => percent.green(),
            _ => percent.normal(),
        };
        let _ = writeln!(
            out,
            "  {}  {:>digits$}/{:<digits$}  {}",
            name,
            language.translated,
            language.total,
            percent,
            digits = digits
        );
    }
}

// ============================================================
// Other commands
// ============================================================

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let extraction = &summary.extraction;
    for key in &extraction.unreadable {
        let _ = writeln!(
            err,
            "{} no source text found for key \"{}\", skipping",
            "warning:".bold().yellow(),
            key
        );
    }

    let _ = writeln!(out, "Translation statistics for {}:", summary.language.bold());
    let _ = writeln!(out, "  - total strings: {}", extraction.total);
    let _ = writeln!(out, "  - with translation: {}", extraction.translated);
    let _ = writeln!(
        out,
        "  - missing translation: {} ({:.1}%)",
        extraction.missing.len(),
        extraction.missing_percent()
    );

    if verbose {
        for (key, _) in extraction.missing.iter() {
            let _ = writeln!(out, "  {} {}", "+".green(), key);
        }
    }

    let output = summary.output_path.display();
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Missing strings written to {}", output).green()
    );
    if !extraction.missing.is_empty() {
        let _ = writeln!(
            out,
            "Translate the values, then run: {}",
            format!("xcmerge apply {} {}", summary.language, output).cyan()
        );
    }
}

fn print_init<O: Write>(summary: &InitSummary, out: &mut O) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Helpers
// ============================================================

fn column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align `name` to `width` display columns.
fn pad(name: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(name));
    format!("{}{}", name, " ".repeat(fill))
}

// ============================================================
// Tests
// ============================================================
