use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use mygit::artifacts::objects::object_id::ObjectId;
use rstest::fixture;
use std::path::Path;

/// Commit date pinned for every commit made through `mygit_commit` and `mygit_session`
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
/// Time nonce matching `COMMIT_DATE`
pub const COMMIT_NONCE: &str = "1672574400.000000000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "alpha".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "beta".to_string(),
    ));

    repository_dir
}

pub fn run_mygit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mygit").expect("Failed to find mygit binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("MYGIT_DIR");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn mygit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_mygit_command(dir, &["commit", "-m", message]);
    cmd.env("MYGIT_COMMIT_DATE", COMMIT_DATE);
    cmd
}

pub fn mygit_session(dir: &Path, script: &str) -> Command {
    let mut cmd = run_mygit_command(dir, &["session"]);
    cmd.env("MYGIT_COMMIT_DATE", COMMIT_DATE);
    cmd.write_stdin(script.to_string());
    cmd
}

/// Id of a commit made with `message` at `COMMIT_DATE`
pub fn expected_commit_id(message: &str) -> ObjectId {
    ObjectId::hash_bytes(format!("{message}{COMMIT_NONCE}"))
}
