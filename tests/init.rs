use assert_fs::TempDir;
use assert_fs::fixture::PathChild;
use common::command::{repository_dir, run_bit_command};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized git directory at"))
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(repository_dir.child(".git/objects").path().is_dir());
    assert!(repository_dir.child(".git/refs").path().is_dir());
    pretty_assertions::assert_eq!(
        std::fs::read_to_string(repository_dir.child(".git/HEAD").path())?,
        "ref: refs/heads/main\n"
    );

    Ok(())
}

#[rstest]
fn init_creates_missing_target_directory(repository_dir: TempDir) {
    run_bit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .child("nested/project/.git/objects")
            .path()
            .is_dir()
    );
}

#[rstest]
fn reinit_keeps_existing_head(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    std::fs::write(repository_dir.child(".git/HEAD").path(), "ref: refs/heads/dev\n")?;

    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        std::fs::read_to_string(repository_dir.child(".git/HEAD").path())?,
        "ref: refs/heads/dev\n"
    );

    Ok(())
}
