use assert_cmd::Command;
use predicates::prelude::*;

fn ttim() -> Command {
    let mut cmd = Command::cargo_bin("ttim").unwrap();
    cmd.env_remove("TTIM_MODEL")
        .env_remove("TTIM_TABLE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_tables_exit_code() {
    let dir = tempfile::tempdir().unwrap();

    ttim()
        .arg("--table-dir")
        .arg(dir.path())
        .write_stdin("0\n45\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Cannot open iasp91.hed and iasp91.tbl",
        ))
        .stdout(predicate::str::contains("Source depth").not())
        .stderr(predicate::str::contains("iasp91.hed"));
}

#[test]
fn test_named_model_in_failure_message() {
    let dir = tempfile::tempdir().unwrap();

    ttim()
        .args(["--model", "ak135"])
        .env("TTIM_TABLE_DIR", dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot open ak135.hed and ak135.tbl"));
}

#[test]
fn test_invalid_model_name() {
    ttim()
        .args(["--model", "../iasp91"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Earth model name"));
}

#[test]
#[cfg(not(feature = "libtau"))]
fn test_tables_present_without_backend() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("iasp91.hed"), b"").unwrap();
    std::fs::write(dir.path().join("iasp91.tbl"), b"").unwrap();

    ttim()
        .arg("--table-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("libtau"));
}
