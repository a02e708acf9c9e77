use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_writes_missing_source_text() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.extract_command().arg("de").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // `brand` is not translatable and never extracted.
    let extracted = test.read_json("missing_de_translations.json")?;
    assert_eq!(extracted, json!({"hello": "Hello", "bye": "Goodbye"}));

    let out = stdout(&output);
    assert!(out.contains("  - total strings: 2\n"));
    assert!(out.contains("  - with translation: 0\n"));
    assert!(out.contains("  - missing translation: 2 (100.0%)\n"));
    assert!(out.contains("Translate the values, then run: xcmerge apply de missing_de_translations.json"));

    Ok(())
}

#[test]
fn test_extract_skips_translated_keys() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .extract_command()
        .args(["fr", "--output", "todo/fr.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_json("todo/fr.json")?, json!({"hello": "Hello"}));
    assert!(stdout(&output).contains("  - missing translation: 1 (50.0%)\n"));

    Ok(())
}

#[test]
fn test_extract_then_apply_completes_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    test.extract_command().arg("fr").output()?;
    test.write_file("missing_fr_translations.json", r#"{"hello": "Bonjour"}"#)?;
    test.apply_command()
        .args(["fr", "missing_fr_translations.json"])
        .output()?;

    let output = test.extract_command().arg("fr").output()?;
    assert!(output.status.success());
    assert_eq!(test.read_json("missing_fr_translations.json")?, json!({}));
    assert!(stdout(&output).contains("  - missing translation: 0 (0.0%)\n"));
    assert!(!stdout(&output).contains("Translate the values"));

    Ok(())
}

#[test]
fn test_extract_source_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.extract_command().arg("en").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"Error: 'en' is the source language; there is nothing to extract"
    );
    assert!(!test.exists("missing_en_translations.json"));

    Ok(())
}

#[test]
fn test_extract_unsupported_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.extract_command().arg("xx").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: language 'xx' is not supported."));

    Ok(())
}

#[test]
fn test_extract_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("fr").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: catalog file not found:"));
    assert!(stderr(&output).contains("Localizable.xcstrings"));

    Ok(())
}
