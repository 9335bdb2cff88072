//! Integration tests for loading export directories.

mod common;

use assert_matches::assert_matches;
use supportdump_cli::error::LoadError;
use supportdump_cli::loader::{load_corpus, COMMENTS_FILE, SUSPENSIONS_FILE};

#[tokio::test]
async fn loads_and_joins_export_directory() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());

    let corpus = load_corpus(dir.path()).await.unwrap();

    assert_eq!(corpus.chains.len(), 2);
    assert_eq!(corpus.chains[0].root_ticket.username, "alice");
    assert_eq!(corpus.chains[0].ticket_comments.len(), 1);
    assert_eq!(corpus.chains[1].ticket_comments.len(), 1);
    assert!(corpus
        .chains
        .iter()
        .flat_map(|c| &c.ticket_comments)
        .all(|c| c.username != "ghost"));
    assert_eq!(corpus.suspensions.len(), 1);
    assert_eq!(corpus.suspensions[0].reason_private, "");
}

#[tokio::test]
async fn missing_file_is_input_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    std::fs::remove_file(dir.path().join(SUSPENSIONS_FILE)).unwrap();

    let err = load_corpus(dir.path()).await.unwrap_err();

    assert_matches!(err, LoadError::InputUnavailable { ref path, .. } if path.ends_with(SUSPENSIONS_FILE));
}

#[tokio::test]
async fn missing_directory_is_input_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_corpus(&dir.path().join("nope")).await.unwrap_err();
    assert_matches!(err, LoadError::InputUnavailable { .. });
}

#[tokio::test]
async fn malformed_line_is_reported_with_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    std::fs::write(
        dir.path().join(COMMENTS_FILE),
        "{\"ticketid\":1}\n{\"ticketid\":\"one\"}\n",
    )
    .unwrap();

    let err = load_corpus(dir.path()).await.unwrap_err();

    assert_matches!(err, LoadError::Malformed { ref path, line: 2, .. } if path.ends_with(COMMENTS_FILE));
}
