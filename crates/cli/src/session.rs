//! Interactive read-filter-write driver.
//!
//! A [`Session`] loads the corpus once, then repeats filter passes until
//! the user declines to continue or the input ends. Declining only stops
//! further passes; a pass that has started always runs to completion.

use std::path::PathBuf;

use supportdump_core::{Corpus, FilterCriteria};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::cache::{CachedCorpus, CorpusCache};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::loader;
use crate::writer;

pub const PROMPT_SOURCE_DIR: &str =
    "Insert path to directory containing 'tickets', 'ticket_comments' and 'suspensions' .jsons files.";
pub const PROMPT_CONTINUE: &str = "Continue? [y/n]";
pub const PROMPT_NAME: &str = "Insert name of user of interest, or leave blank for all users.";
pub const PROMPT_KEYWORD: &str = "Insert keyword of interest, or leave blank for all.";

/// Counts from a single filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub chains: usize,
    pub suspensions: usize,
    pub files: Vec<PathBuf>,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionReport {
    pub passes: Vec<PassSummary>,
    pub from_cache: bool,
}

pub struct Session<R, W> {
    config: AppConfig,
    input: Lines<R>,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        Self {
            config,
            input: input.lines(),
            output,
        }
    }

    async fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// Print `prompt` and read one line. `None` on end of input.
    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.say(prompt).await?;
        self.input.next_line().await
    }

    async fn wants_another_pass(&mut self) -> std::io::Result<bool> {
        Ok(matches!(
            self.ask(PROMPT_CONTINUE).await?,
            Some(answer) if answer.trim().eq_ignore_ascii_case("y")
        ))
    }

    /// Load the corpus from the cache when fresh, otherwise from the
    /// exports (refreshing the cache afterwards).
    pub async fn prepare_corpus(&mut self) -> Result<(Corpus, bool), AppError> {
        let cache = self.config.cache_path.clone().map(CorpusCache::new);

        if let Some(cache) = &cache {
            let cached = cache.load(self.config.data_dir.as_deref()).await;
            match cached {
                Ok(Some(CachedCorpus { source_dir, corpus })) => {
                    self.say(&format!(
                        "{} found, not precrunching again.",
                        cache.path().display()
                    ))
                    .await?;
                    tracing::info!(
                        source_dir = %source_dir.display(),
                        chains = corpus.chains.len(),
                        suspensions = corpus.suspensions.len(),
                        "Corpus loaded from cache",
                    );
                    return Ok((corpus, true));
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "Ignoring unreadable corpus cache"),
            }
        }

        let source_dir = match self.config.data_dir.clone() {
            Some(dir) => dir,
            None => {
                let answer = self.ask(PROMPT_SOURCE_DIR).await?.unwrap_or_default();
                PathBuf::from(answer.trim())
            }
        };

        self.say("Precrunching data...").await?;
        let corpus = match loader::load_corpus(&source_dir).await {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load exports");
                self.say(&format!("Input missing or invalid: {e}")).await?;
                return Err(e.into());
            }
        };

        if let Some(cache) = &cache {
            self.say("Precrunching done, generating cache for future lookups...")
                .await?;
            if let Err(e) = cache.store(&source_dir, &corpus).await {
                tracing::warn!(error = %e, "Corpus cache not written");
            }
        }
        self.say("Done.").await?;

        Ok((corpus, false))
    }

    /// Filter the corpus and commit the configured output files.
    pub async fn run_pass(
        &mut self,
        corpus: &Corpus,
        name: &str,
        keyword: &str,
    ) -> Result<PassSummary, AppError> {
        let criteria = FilterCriteria::new(name, keyword);
        let extract = corpus.extract(&criteria);
        let rendered = extract.encode(self.config.format)?;
        let files = writer::commit_files(&self.config.out_dir, &rendered).await?;

        if extract.is_empty() {
            tracing::info!(search_name = name, search_keyword = keyword, "Filter pass matched nothing");
        }
        tracing::info!(
            search_name = name,
            search_keyword = keyword,
            wildcard = criteria.is_wildcard(),
            chains = extract.chains.len(),
            suspensions = extract.suspensions.len(),
            format = %self.config.format,
            "Filter pass written",
        );

        Ok(PassSummary {
            chains: extract.chains.len(),
            suspensions: extract.suspensions.len(),
            files,
        })
    }

    /// Drive the whole session until the user stops asking for passes.
    pub async fn run(mut self) -> Result<SessionReport, AppError> {
        let (corpus, from_cache) = self.prepare_corpus().await?;
        let mut report = SessionReport {
            passes: Vec::new(),
            from_cache,
        };

        while self.wants_another_pass().await? {
            let Some(name) = self.ask(PROMPT_NAME).await? else {
                break;
            };
            let Some(keyword) = self.ask(PROMPT_KEYWORD).await? else {
                break;
            };

            self.say("Crunching...").await?;
            let summary = self.run_pass(&corpus, &name, &keyword).await?;
            self.say(&format!(
                "Done. {} ticket conversations and {} suspensions written.",
                summary.chains, summary.suspensions
            ))
            .await?;
            report.passes.push(summary);
        }

        self.say("Done.").await?;
        Ok(report)
    }
}
