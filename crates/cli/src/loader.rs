//! Reads the line-delimited JSON exports into a [`Corpus`].

use std::path::Path;

use serde::de::DeserializeOwned;
use supportdump_core::{Corpus, Suspension, Ticket, TicketComment};

use crate::error::LoadError;

pub const TICKETS_FILE: &str = "tickets.jsons";
pub const COMMENTS_FILE: &str = "ticket_comments.jsons";
pub const SUSPENSIONS_FILE: &str = "suspensions.jsons";

/// The export files a source directory must contain.
pub const SOURCE_FILES: &[&str] = &[TICKETS_FILE, COMMENTS_FILE, SUSPENSIONS_FILE];

/// Parse one record per non-blank line.
pub fn parse_records<T: DeserializeOwned>(path: &Path, text: &str) -> Result<Vec<T>, LoadError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| LoadError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}

pub async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(path, &text)
}

/// Load all three exports from `dir` and join them.
pub async fn load_corpus(dir: &Path) -> Result<Corpus, LoadError> {
    let tickets: Vec<Ticket> = read_records(&dir.join(TICKETS_FILE)).await?;
    let comments: Vec<TicketComment> = read_records(&dir.join(COMMENTS_FILE)).await?;
    let suspensions: Vec<Suspension> = read_records(&dir.join(SUSPENSIONS_FILE)).await?;

    tracing::info!(
        tickets = tickets.len(),
        comments = comments.len(),
        suspensions = suspensions.len(),
        dir = %dir.display(),
        "Export records loaded",
    );

    Ok(Corpus::build(tickets, comments, suspensions))
}
