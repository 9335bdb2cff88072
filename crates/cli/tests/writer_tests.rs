//! Integration tests for all-or-nothing output commits.

use assert_matches::assert_matches;
use supportdump_cli::error::WriteError;
use supportdump_cli::writer::{commit_files, write_atomic};
use supportdump_core::ExtractFile;

fn files() -> Vec<ExtractFile> {
    vec![
        ExtractFile {
            file_name: "a.txt",
            contents: "first\n".into(),
        },
        ExtractFile {
            file_name: "b.txt",
            contents: "second\n".into(),
        },
    ]
}

fn leftover_tmp_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count()
}

#[tokio::test]
async fn commits_every_file_of_the_batch() {
    let dir = tempfile::tempdir().unwrap();

    let paths = commit_files(dir.path(), &files()).await.unwrap();

    assert_eq!(paths, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    assert_eq!(std::fs::read_to_string(&paths[0]).unwrap(), "first\n");
    assert_eq!(std::fs::read_to_string(&paths[1]).unwrap(), "second\n");
    assert_eq!(leftover_tmp_files(dir.path()), 0);
}

#[tokio::test]
async fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");

    commit_files(&out, &files()).await.unwrap();

    assert!(out.join("a.txt").exists());
}

#[tokio::test]
async fn rerun_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    commit_files(dir.path(), &files()).await.unwrap();

    let replacement = vec![ExtractFile {
        file_name: "a.txt",
        contents: String::new(),
    }];
    commit_files(dir.path(), &replacement).await.unwrap();

    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "");
}

#[tokio::test]
async fn output_dir_that_is_a_file_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = commit_files(&blocker, &files()).await.unwrap_err();

    assert_matches!(err, WriteError::Io { .. });
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[tokio::test]
async fn failed_write_discards_staged_files_and_keeps_targets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "old\n").unwrap();
    // Staging `b.txt` fails because its temp path is a directory.
    std::fs::create_dir(dir.path().join("b.txt.tmp")).unwrap();

    let err = commit_files(dir.path(), &files()).await.unwrap_err();

    assert_matches!(err, WriteError::Io { .. });
    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "old\n");
    assert!(!dir.path().join("a.txt.tmp").exists());
    assert!(!dir.path().join("b.txt").exists());
}

#[tokio::test]
async fn failed_rename_discards_remaining_staged_files() {
    let dir = tempfile::tempdir().unwrap();
    // Renaming onto a non-empty directory fails.
    let blocked = dir.path().join("b.txt");
    std::fs::create_dir(&blocked).unwrap();
    std::fs::write(blocked.join("keep"), "x").unwrap();

    let err = commit_files(dir.path(), &files()).await.unwrap_err();

    assert_matches!(err, WriteError::Io { ref path, .. } if *path == blocked);
    assert_eq!(leftover_tmp_files(dir.path()), 0);
    assert!(blocked.join("keep").exists());
}

#[tokio::test]
async fn write_atomic_leaves_only_final_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    write_atomic(&path, b"{}").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    assert_eq!(leftover_tmp_files(dir.path()), 0);
}
