use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CATALOG, CliTest, SAMPLE_CATALOG, stderr, stdout};

fn with_translations() -> Result<CliTest> {
    let test = CliTest::with_catalog()?;
    test.write_file("translations/fr.json", r#"{"hello": "Bonjour", "bye": "Salut"}"#)?;
    test.write_file("translations/de.json", r#"{"hello": "Hallo", "bye": "Tschüss"}"#)?;
    test.write_file("translations/README.md", "Drop <lang>.json files here.")?;
    Ok(test)
}

#[test]
fn test_apply_all_merges_every_language() -> Result<()> {
    let test = with_translations()?;

    let output = test.apply_all_command().arg("translations").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with(
        "de  added 2, updated 0, skipped 0, not found 0\n\
         fr  added 1, updated 0, skipped 1, not found 0\n\
         Translation summary for 2 language(s) (policy: skip):\n"
    ));
    assert!(out.contains("  - added: 3\n"));
    assert!(out.contains("Translation coverage (3 keys, 2 translatable):"));

    assert_eq!(test.localized("hello", "de")?.as_deref(), Some("Hallo"));
    assert_eq!(test.localized("bye", "de")?.as_deref(), Some("Tschüss"));
    assert_eq!(test.localized("hello", "fr")?.as_deref(), Some("Bonjour"));
    assert_eq!(test.localized("bye", "fr")?.as_deref(), Some("Au revoir"));

    Ok(())
}

#[test]
fn test_apply_all_single_backup() -> Result<()> {
    let test = with_translations()?;

    let output = test.apply_all_command().arg("translations").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("Localizable.xcstrings.all.bak")?, SAMPLE_CATALOG);
    assert!(!test.exists("Localizable.xcstrings.fr.bak"));
    assert!(!test.exists("Localizable.xcstrings.de.bak"));

    Ok(())
}

#[test]
fn test_apply_all_unsupported_language_writes_nothing() -> Result<()> {
    let test = with_translations()?;
    test.write_file("translations/klingon.json", r#"{"hello": "nuqneH"}"#)?;

    let output = test.apply_all_command().arg("translations").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: language 'klingon' is not supported."));
    assert_eq!(test.read_file(CATALOG)?, SAMPLE_CATALOG);
    assert!(!test.exists("Localizable.xcstrings.all.bak"));

    Ok(())
}

#[test]
fn test_apply_all_malformed_batch_writes_nothing() -> Result<()> {
    let test = with_translations()?;
    test.write_file("translations/nl.json", "not json")?;

    let output = test.apply_all_command().arg("translations").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid translations file"));
    assert!(stderr(&output).contains("nl.json"));
    assert_eq!(test.read_file(CATALOG)?, SAMPLE_CATALOG);

    Ok(())
}

#[test]
fn test_apply_all_missing_directory() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.apply_all_command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"Error: translations file not found: missing"
    );

    Ok(())
}

#[test]
fn test_apply_all_empty_directory() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("translations/notes.txt", "")?;

    let output = test.apply_all_command().arg("translations").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"Error: no <lang>.json translation files found in translations"
    );

    Ok(())
}

#[test]
fn test_apply_all_dry_run() -> Result<()> {
    let test = with_translations()?;

    let output = test
        .apply_all_command()
        .args(["translations", "--dry-run"])
        .output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Would write 3 translation(s) to"));
    assert_eq!(test.read_file(CATALOG)?, SAMPLE_CATALOG);
    assert!(!test.exists("Localizable.xcstrings.all.bak"));

    Ok(())
}
