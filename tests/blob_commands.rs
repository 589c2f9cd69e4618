use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use common::command::{bit_stdout, repository_dir, run_bit_command};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::*;
use rstest::rstest;

mod common;

fn init(dir: &TempDir) {
    run_bit_command(dir.path(), &["init"]).assert().success();
}

#[rstest]
fn hash_object_prints_the_blob_digest(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    init(&repository_dir);
    repository_dir.child("greeting.txt").write_str("hello")?;

    run_bit_command(repository_dir.path(), &["hash-object", "greeting.txt"])
        .assert()
        .success()
        .stdout("b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0\n");

    // without -w nothing is stored
    assert!(!repository_dir.child(".git/objects/b6").exists());

    Ok(())
}

#[rstest]
fn write_blob_object_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    init(&repository_dir);

    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    repository_dir.child(&file_name).write_str(&file_content)?;

    let blob_oid = bit_stdout(repository_dir.path(), &["hash-object", "-w", &file_name]);
    let blob_oid = blob_oid.trim_end();

    assert!(predicate::str::is_match(r"^[0-9a-f]{40}$")?.eval(blob_oid));
    assert_eq!(
        blob_oid,
        common::sha1_hex(format!("blob {}\0{}", file_content.len(), file_content).as_bytes())
    );
    let (dir, file) = blob_oid.split_at(2);
    assert!(repository_dir.child(".git/objects").child(dir).child(file).exists());

    Ok(())
}

#[rstest]
fn read_blob_object_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    init(&repository_dir);

    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    repository_dir.child("notes.txt").write_str(&file_content)?;
    let blob_oid = bit_stdout(repository_dir.path(), &["hash-object", "-w", "notes.txt"]);

    run_bit_command(repository_dir.path(), &["cat-file", "-p", blob_oid.trim_end()])
        .assert()
        .success()
        .stdout(predicate::eq(file_content));

    Ok(())
}

#[rstest]
#[case::kind("-t", "blob\n")]
#[case::size("-s", "5\n")]
fn cat_file_reports_metadata(
    repository_dir: TempDir,
    #[case] flag: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    init(&repository_dir);
    repository_dir.child("greeting.txt").write_str("hello")?;
    bit_stdout(repository_dir.path(), &["hash-object", "-w", "greeting.txt"]);

    run_bit_command(
        repository_dir.path(),
        &["cat-file", flag, "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"],
    )
    .assert()
    .success()
    .stdout(expected.to_string());

    Ok(())
}

#[rstest]
fn cat_file_of_missing_object_fails(repository_dir: TempDir) {
    init(&repository_dir);

    run_bit_command(
        repository_dir.path(),
        &["cat-file", "-p", "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("object not found"));

    assert!(!repository_dir.child(".git/objects/b6").exists());
}

#[rstest]
#[case::short("b6fc4c6")]
#[case::not_hex("not-a-hash-not-a-hash-not-a-hash-not-a-")]
fn cat_file_rejects_malformed_digests(repository_dir: TempDir, #[case] sha: &str) {
    init(&repository_dir);

    run_bit_command(repository_dir.path(), &["cat-file", "-p", sha])
        .assert()
        .failure()
        .stderr(predicate::str::contains("40-character hexadecimal"));
}

#[rstest]
fn cat_file_requires_a_mode_flag(repository_dir: TempDir) {
    init(&repository_dir);

    run_bit_command(
        repository_dir.path(),
        &["cat-file", "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"],
    )
    .assert()
    .failure();
}

#[cfg(unix)]
#[rstest]
fn hash_object_of_symlink_hashes_its_target(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    init(&repository_dir);
    repository_dir.child("target.txt").write_str("content")?;
    std::os::unix::fs::symlink("target.txt", repository_dir.path().join("link"))?;

    run_bit_command(repository_dir.path(), &["hash-object", "link"])
        .assert()
        .success()
        .stdout(format!("{}\n", common::sha1_hex(b"blob 10\0target.txt")));

    Ok(())
}
