use anyhow::Result;
use assert_cmd::Command;

fn kids_txt() -> Result<Command> {
    Ok(Command::cargo_bin("kids-txt")?)
}

#[test]
fn indent_reads_stdin_and_drops_pipe_newline() -> Result<()> {
    kids_txt()?
        .args(["indent", "--first", "- "])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("- a\n  b\n");
    Ok(())
}

#[test]
fn dash_forces_stdin() -> Result<()> {
    kids_txt()?
        .args(["dedent", "-"])
        .write_stdin("This is a doc\n\n   indented\n      more\n")
        .assert()
        .success()
        .stdout("This is a doc\n\nindented\n   more\n");
    Ok(())
}

#[test]
fn ucfirst_from_stdin() -> Result<()> {
    kids_txt()?
        .arg("ucfirst")
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("Hello world\n");
    Ok(())
}

#[test]
fn crlf_pipe_newline_is_dropped() -> Result<()> {
    kids_txt()?
        .arg("ucfirst")
        .write_stdin("hello world\r\n")
        .assert()
        .success()
        .stdout("Hello world\n");
    Ok(())
}
