//! All-or-nothing output file commits.
//!
//! Every file is first written to a `.tmp` sibling and only renamed into
//! place once every file of the batch has been written successfully. A
//! failed write leaves every target untouched. A failed rename stops the
//! batch; files renamed before it stay committed, and no `.tmp` sibling is
//! left behind in either case.

use std::path::{Path, PathBuf};

use supportdump_core::ExtractFile;

use crate::error::WriteError;

const TMP_SUFFIX: &str = ".tmp";

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(TMP_SUFFIX);
    PathBuf::from(name)
}

/// Write `contents` to `path` via a temporary sibling and a rename.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);
    if let Err(e) = tokio::fs::write(&tmp, contents).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e);
    }
    tokio::fs::rename(&tmp, path).await
}

/// Commit a batch of rendered files into `out_dir`.
///
/// Returns the final paths in batch order.
pub async fn commit_files(out_dir: &Path, files: &[ExtractFile]) -> Result<Vec<PathBuf>, WriteError> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| WriteError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let targets: Vec<PathBuf> = files.iter().map(|f| out_dir.join(f.file_name)).collect();

    let mut staged = Vec::with_capacity(files.len());
    for (file, target) in files.iter().zip(&targets) {
        let tmp = tmp_path(target);
        if let Err(source) = tokio::fs::write(&tmp, file.contents.as_bytes()).await {
            discard(&staged).await;
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(WriteError::Io { path: tmp, source });
        }
        staged.push(tmp);
    }

    for (i, (tmp, target)) in staged.iter().zip(&targets).enumerate() {
        if let Err(source) = tokio::fs::rename(tmp, target).await {
            discard(&staged[i..]).await;
            return Err(WriteError::Io {
                path: target.clone(),
                source,
            });
        }
        tracing::debug!(path = %target.display(), "Output file committed");
    }

    Ok(targets)
}

async fn discard(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove staged file");
        }
    }
}
