//! Ticket chains: a root ticket joined with its comments in
//! chronological order.
//!
//! Comments whose `ticketid` matches no ticket are dropped. That is a
//! deliberate policy, not a validation gap: exports routinely contain
//! comments for tickets that were purged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::records::{Ticket, TicketComment};
use crate::types::RowId;

/// A root ticket paired with its comments, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketChain {
    pub root_ticket: Ticket,
    pub ticket_comments: Vec<TicketComment>,
}

/// Join tickets with their comments.
///
/// - One chain per ticket, in input ticket order.
/// - Comments within a chain are sorted by `date`; equal dates keep their
///   input order.
/// - Comments referencing no ticket appear in no chain.
/// - Tickets sharing a `rowid` each receive the full comment group for it.
pub fn build_chains(tickets: Vec<Ticket>, comments: Vec<TicketComment>) -> Vec<TicketChain> {
    let mut groups: HashMap<RowId, Vec<TicketComment>> = HashMap::new();
    for comment in comments {
        groups.entry(comment.ticketid).or_default().push(comment);
    }

    // How many tickets still want each group; the last one takes it by move.
    let mut claims: HashMap<RowId, usize> = HashMap::new();
    for ticket in &tickets {
        *claims.entry(ticket.rowid).or_default() += 1;
    }

    let mut chains = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        let remaining = claims.entry(ticket.rowid).or_default();
        *remaining -= 1;

        let mut ticket_comments = if *remaining == 0 {
            groups.remove(&ticket.rowid).unwrap_or_default()
        } else {
            groups.get(&ticket.rowid).cloned().unwrap_or_default()
        };
        ticket_comments.sort_by_key(|c| c.date);

        chains.push(TicketChain {
            root_ticket: ticket,
            ticket_comments,
        });
    }

    let orphaned: usize = groups.values().map(Vec::len).sum();
    tracing::debug!(
        chains = chains.len(),
        orphaned_comments = orphaned,
        "Ticket chains built",
    );

    chains
}
