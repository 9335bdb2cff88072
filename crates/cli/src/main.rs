//! `supportdump` -- filtered extracts from a support-desk export.
//!
//! Loads `tickets.jsons`, `ticket_comments.jsons` and `suspensions.jsons`,
//! then repeatedly asks for a user name and a keyword and writes the
//! matching ticket conversations and suspensions to the output directory.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                | Description                          |
//! |------------------------|----------|------------------------|--------------------------------------|
//! | `SUPPORTDUMP_DATA_DIR` | no       | prompted               | Directory holding the exports        |
//! | `SUPPORTDUMP_OUT_DIR`  | no       | `.`                    | Directory receiving the extracts     |
//! | `SUPPORTDUMP_CACHE`    | no       | `crunched_corpus.json` | Corpus cache path, empty to disable  |
//! | `SUPPORTDUMP_FORMAT`   | no       | `text`                 | `text`, `json` or `both`             |

use supportdump_cli::config::AppConfig;
use supportdump_cli::session::Session;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supportdump=info,supportdump_cli=info,supportdump_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        data_dir = ?config.data_dir,
        out_dir = %config.out_dir.display(),
        cache = ?config.cache_path,
        format = %config.format,
        "Starting supportdump",
    );

    let session = Session::new(config, BufReader::new(tokio::io::stdin()), tokio::io::stdout());

    match session.run().await {
        Ok(report) => {
            tracing::info!(passes = report.passes.len(), from_cache = report.from_cache, "Session finished");
        }
        Err(e) => {
            tracing::error!(error = %e, "Session aborted");
            std::process::exit(1);
        }
    }
}
