//! `supportdump-core` -- pure logic for support-desk export extracts.
//!
//! Joins tickets with their comments, filters ticket chains and
//! suspensions by name and keyword, and renders them as text or JSON.
//! No I/O and no async; the CLI crate owns files and prompts.

pub mod chain;
pub mod corpus;
pub mod error;
pub mod export;
pub mod filter;
pub mod records;
pub mod render;
pub mod types;

pub use chain::{build_chains, TicketChain};
pub use corpus::{Corpus, Extract};
pub use error::CoreError;
pub use export::{ExtractFile, OutputFormat};
pub use filter::{filter_chains, filter_suspensions, FilterCriteria};
pub use records::{Suspension, Ticket, TicketComment};
pub use render::{render_chain, render_suspension};
