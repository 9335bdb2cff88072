//! The in-memory corpus and filtered extracts of it.

use serde::{Deserialize, Serialize};

use crate::chain::{build_chains, TicketChain};
use crate::filter::FilterCriteria;
use crate::records::{Suspension, Ticket, TicketComment};

/// Everything a filter pass can search: the joined ticket chains and the
/// suspensions. Built once per process and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub chains: Vec<TicketChain>,
    pub suspensions: Vec<Suspension>,
}

impl Corpus {
    /// Join raw export records into a corpus.
    pub fn build(
        tickets: Vec<Ticket>,
        comments: Vec<TicketComment>,
        suspensions: Vec<Suspension>,
    ) -> Self {
        Self {
            chains: build_chains(tickets, comments),
            suspensions,
        }
    }

    /// Borrowing view of the chains and suspensions matching `criteria`.
    pub fn extract(&self, criteria: &FilterCriteria) -> Extract<'_> {
        Extract {
            chains: self
                .chains
                .iter()
                .filter(|c| criteria.matches_chain(c))
                .collect(),
            suspensions: self
                .suspensions
                .iter()
                .filter(|s| criteria.matches_suspension(s))
                .collect(),
        }
    }
}

/// Result of one filter pass; order follows the corpus.
#[derive(Debug, Clone, Serialize)]
pub struct Extract<'a> {
    pub chains: Vec<&'a TicketChain>,
    pub suspensions: Vec<&'a Suspension>,
}

impl Extract<'_> {
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty() && self.suspensions.is_empty()
    }
}
