use anyhow::Result;
use assert_cmd::Command;
use predicates::str::contains;

fn kids_txt() -> Result<Command> {
    Ok(Command::cargo_bin("kids-txt")?)
}

#[test]
fn shorten_prints_marker_near_the_end() -> Result<()> {
    kids_txt()?
        .args(["shorten", "10", "bonjour tout le monde"])
        .assert()
        .success()
        .stdout("bonjour ..\n");
    Ok(())
}

#[test]
fn truncate_alias_accepts_index() -> Result<()> {
    kids_txt()?
        .args(["truncate", "10", "--index", "4", "bonjour tout le monde"])
        .assert()
        .success()
        .stdout("bonj..onde\n");
    Ok(())
}

#[test]
fn short_text_passes_through() -> Result<()> {
    kids_txt()?
        .args(["shorten", "10", "bonjour"])
        .assert()
        .success()
        .stdout("bonjour\n");
    Ok(())
}

#[test]
fn wrap_joins_paragraphs_without_blank_lines() -> Result<()> {
    kids_txt()?
        .args(["wrap", "--width", "10", "alpha beta gamma\n\ndelta"])
        .assert()
        .success()
        .stdout("alpha beta\ngamma\ndelta\n");
    Ok(())
}

#[test]
fn wrap_reports_invalid_separator() -> Result<()> {
    kids_txt()?
        .args(["wrap", "--separator", "(", "text"])
        .assert()
        .failure()
        .stderr(contains("invalid paragraph separator"));
    Ok(())
}

#[test]
fn ucfirst_rejects_empty_text() -> Result<()> {
    kids_txt()?
        .args(["ucfirst", ""])
        .assert()
        .failure()
        .stderr(contains("empty string"));
    kids_txt()?
        .args(["ucfirst", "--allow-empty", ""])
        .assert()
        .success()
        .stdout("\n");
    Ok(())
}
