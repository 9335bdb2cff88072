//! Name + keyword filtering over ticket chains and suspensions.
//!
//! Each filter is a conjunction of two predicates. An empty string is a
//! wildcard for its predicate. Matching is case-insensitive substring
//! containment after per-character Unicode lowercasing; no regex, no collation.

use crate::chain::TicketChain;
use crate::records::Suspension;

/// The two search strings of one filter pass, pre-folded for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    name: String,
    keyword: String,
}

impl FilterCriteria {
    pub fn new(name: &str, keyword: &str) -> Self {
        Self {
            name: fold(name),
            keyword: fold(keyword),
        }
    }

    /// Both predicates are wildcards.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_empty() && self.keyword.is_empty()
    }

    /// Submitter, assigned admin, or any commenter contains the name, and
    /// the root message or any comment message contains the keyword.
    pub fn matches_chain(&self, chain: &TicketChain) -> bool {
        let root = &chain.root_ticket;
        let comments = &chain.ticket_comments;

        let name_hit = contains_folded(&root.username, &self.name)
            || contains_folded(&root.admin, &self.name)
            || comments
                .iter()
                .any(|c| contains_folded(&c.username, &self.name));

        name_hit
            && (contains_folded(&root.message, &self.keyword)
                || comments
                    .iter()
                    .any(|c| contains_folded(&c.message, &self.keyword)))
    }

    /// Enacting or suspended user contains the name, and any of the three
    /// reasons contains the keyword.
    pub fn matches_suspension(&self, suspension: &Suspension) -> bool {
        let name_hit = contains_folded(&suspension.enacted_username, &self.name)
            || contains_folded(&suspension.suspended_username, &self.name);

        name_hit
            && (contains_folded(&suspension.reason_admin, &self.keyword)
                || contains_folded(&suspension.reason_private, &self.keyword)
                || contains_folded(&suspension.reason_public, &self.keyword))
    }
}

/// Lowercase one character at a time. Unlike `str::to_lowercase`, the
/// result of a character does not depend on its neighbours (final sigma).
fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// `needle` must already be folded.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold(haystack).contains(needle)
}

/// Chains matching both `name` and `keyword`, in input order.
pub fn filter_chains<'a>(chains: &'a [TicketChain], name: &str, keyword: &str) -> Vec<&'a TicketChain> {
    let criteria = FilterCriteria::new(name, keyword);
    chains.iter().filter(|c| criteria.matches_chain(c)).collect()
}

/// Suspensions matching both `name` and `keyword`, in input order.
pub fn filter_suspensions<'a>(
    suspensions: &'a [Suspension],
    name: &str,
    keyword: &str,
) -> Vec<&'a Suspension> {
    let criteria = FilterCriteria::new(name, keyword);
    suspensions
        .iter()
        .filter(|s| criteria.matches_suspension(s))
        .collect()
}
