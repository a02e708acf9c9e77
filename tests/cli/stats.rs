use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{"supportedLanguages": ["en", "fr", "de"]}"#;

fn with_config() -> Result<CliTest> {
    let test = CliTest::with_catalog()?;
    test.write_file(".xcmergerc.json", CONFIG)?;
    Ok(test)
}

#[test]
fn test_stats_coverage_table() -> Result<()> {
    let test = with_config()?;

    let output = test.stats_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let table: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(
        table,
        vec![
            "Translation coverage (3 keys, 2 translatable):",
            "  en  source",
            "  fr  1/2   50.0%",
            "  de  0/2    0.0%",
        ]
    );

    Ok(())
}

#[test]
fn test_stats_min_coverage_failure() -> Result<()> {
    let test = with_config()?;

    let output = test
        .stats_command()
        .args(["--min-coverage", "40"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output)
            .trim_end()
            .ends_with("✘ 1 language(s) below 40.0% coverage: de")
    );

    Ok(())
}

#[test]
fn test_stats_min_coverage_success() -> Result<()> {
    let test = with_config()?;
    test.write_file("de.json", r#"{"hello": "Hallo"}"#)?;
    test.apply_command().args(["de", "de.json"]).output()?;

    let output = test
        .stats_command()
        .args(["--min-coverage", "50"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(
        stdout(&output)
            .trim_end()
            .ends_with("✓ All languages meet 50.0% coverage")
    );

    Ok(())
}

#[test]
fn test_stats_rejects_out_of_range_threshold() -> Result<()> {
    let test = with_config()?;

    let output = test
        .stats_command()
        .args(["--min-coverage", "150"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_stats_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", "[]")?;

    let output = test.stats_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("root of the catalog must be an object"));

    Ok(())
}

#[test]
fn test_stats_uses_catalog_source_language_without_config() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.xcstrings",
        r#"{"sourceLanguage": "de", "strings": {"hallo": {"localizations": {"de": {"stringUnit": {"state": "translated", "value": "Hallo"}}}}}}"#,
    )?;

    let output = test.stats_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("  de       source\n"));
    assert!(out.contains("  en       0/1    0.0%\n"));

    Ok(())
}
