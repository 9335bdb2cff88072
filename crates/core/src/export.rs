//! Output strategies over a filtered [`Extract`].
//!
//! Both strategies consume the same extract and only differ in encoding:
//! `Text` renders transcript blocks, `Json` dumps the filtered records.

use crate::corpus::Extract;
use crate::error::CoreError;
use crate::render::{render_chain, render_suspension};

// ---------------------------------------------------------------------------
// File names
// ---------------------------------------------------------------------------

pub const CHAINS_TEXT_FILE: &str = "filtered_ticket_conversations.txt";
pub const SUSPENSIONS_TEXT_FILE: &str = "filtered_suspensions.txt";
pub const CHAINS_JSON_FILE: &str = "filtered_ticket_conversations.json";
pub const SUSPENSIONS_JSON_FILE: &str = "filtered_suspensions.json";

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

/// Which encodings a filter pass writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Both => "both",
        }
    }

    /// Parse a format name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => Err(CoreError::Validation(format!(
                "unknown output format '{other}', expected one of: {}",
                Self::ALL.join(", ")
            ))),
        }
    }

    pub const ALL: &'static [&'static str] = &["text", "json", "both"];

    fn includes_text(&self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    fn includes_json(&self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// One fully rendered output file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractFile {
    pub file_name: &'static str,
    pub contents: String,
}

impl Extract<'_> {
    /// Encode the extract as the files `format` asks for.
    ///
    /// Everything is rendered in memory first so a writer can commit all
    /// files or none.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<ExtractFile>, CoreError> {
        let mut files = Vec::new();

        if format.includes_text() {
            files.push(ExtractFile {
                file_name: CHAINS_TEXT_FILE,
                contents: text_lines(self.chains.iter().map(|c| render_chain(c))),
            });
            files.push(ExtractFile {
                file_name: SUSPENSIONS_TEXT_FILE,
                contents: text_lines(self.suspensions.iter().map(|s| render_suspension(s))),
            });
        }

        if format.includes_json() {
            files.push(ExtractFile {
                file_name: CHAINS_JSON_FILE,
                contents: serde_json::to_string_pretty(&self.chains)? + "\n",
            });
            files.push(ExtractFile {
                file_name: SUSPENSIONS_JSON_FILE,
                contents: serde_json::to_string_pretty(&self.suspensions)? + "\n",
            });
        }

        Ok(files)
    }
}

/// Each block on its own, followed by a line break.
fn text_lines(blocks: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&block);
        out.push('\n');
    }
    out
}
