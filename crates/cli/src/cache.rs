//! Corpus cache: skips re-reading and re-joining the exports on later runs.
//!
//! A cache entry is only valid for the source directory it was built from
//! and for the exact size and modification time of each export file. Any
//! change in either forces a rebuild.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use supportdump_core::Corpus;

use crate::error::CacheError;
use crate::loader::SOURCE_FILES;
use crate::writer::write_atomic;

/// Bumped whenever the cached layout changes.
pub const CACHE_VERSION: u32 = 1;

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    version: u32,
    source_dir: String,
    fingerprint: String,
    corpus: &'a Corpus,
}

#[derive(Deserialize)]
struct CacheEntry {
    version: u32,
    source_dir: String,
    fingerprint: String,
    corpus: Corpus,
}

/// Fingerprint a source directory from its canonical path and the size and
/// modification time of each export file.
pub async fn fingerprint(source_dir: &Path) -> std::io::Result<String> {
    let mut material = canonical_display(source_dir).await;
    for name in SOURCE_FILES {
        let meta = tokio::fs::metadata(source_dir.join(name)).await?;
        let modified = meta
            .modified()?
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        material.push_str(&format!("\n{name}:{}:{modified}", meta.len()));
    }
    Ok(format!("{:x}", Sha256::digest(material.as_bytes())))
}

async fn canonical_display(dir: &Path) -> String {
    tokio::fs::canonicalize(dir)
        .await
        .unwrap_or_else(|_| dir.to_path_buf())
        .display()
        .to_string()
}

/// A fresh cache hit and the directory it was built from.
#[derive(Debug)]
pub struct CachedCorpus {
    pub source_dir: PathBuf,
    pub corpus: Corpus,
}

pub struct CorpusCache {
    path: PathBuf,
}

impl CorpusCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Return the cached corpus if it is still fresh.
    ///
    /// With `source_dir` set, the entry must have been built from that
    /// directory. Without it, the directory recorded in the entry is used.
    ///
    /// `Ok(None)` means "no usable entry": missing file, other directory,
    /// older layout, or changed exports. When the exports themselves cannot
    /// be inspected, an entry for the same directory is still served.
    pub async fn load(&self, source_dir: Option<&Path>) -> Result<Option<CachedCorpus>, CacheError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let entry: CacheEntry = serde_json::from_slice(&bytes)?;

        if entry.version != CACHE_VERSION {
            tracing::info!(found = entry.version, expected = CACHE_VERSION, "Cache layout outdated");
            return Ok(None);
        }

        let source_dir = match source_dir {
            Some(dir) => {
                if entry.source_dir != canonical_display(dir).await {
                    tracing::info!(cached = %entry.source_dir, "Cache built from another directory");
                    return Ok(None);
                }
                dir.to_path_buf()
            }
            None => PathBuf::from(&entry.source_dir),
        };

        match fingerprint(&source_dir).await {
            Ok(current) if current == entry.fingerprint => Ok(Some(CachedCorpus {
                source_dir,
                corpus: entry.corpus,
            })),
            Ok(_) => {
                tracing::info!("Exports changed since cache was built");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Exports not readable, serving cache built from the same directory",
                );
                Ok(Some(CachedCorpus {
                    source_dir,
                    corpus: entry.corpus,
                }))
            }
        }
    }

    /// Persist `corpus` as the cache entry for `source_dir`.
    pub async fn store(&self, source_dir: &Path, corpus: &Corpus) -> Result<(), CacheError> {
        let fingerprint = fingerprint(source_dir).await.map_err(|e| self.io_error(e))?;
        let entry = CacheEntryRef {
            version: CACHE_VERSION,
            source_dir: canonical_display(source_dir).await,
            fingerprint,
            corpus,
        };
        let bytes = serde_json::to_vec(&entry)?;
        write_atomic(&self.path, &bytes)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::info!(path = %self.path.display(), "Corpus cache written");
        Ok(())
    }
}
