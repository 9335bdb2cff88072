//! Plain-text transcript rendering for ticket chains and suspensions.
//!
//! Output is a pure function of the record: timestamps are always rendered
//! in UTC with English day/month names, independent of the host locale.
//!
//! Lines carry no trailing whitespace apart from `Other notes: `. Older
//! extracts had a trailing space after each `>... - [user]:` header, after
//! the root message body and after the `>Public reason:` and
//! `>Private reason:` labels, so byte comparisons against them will differ
//! on those lines only.

use chrono::DateTime;

use crate::chain::TicketChain;
use crate::records::Suspension;
use crate::types::EpochSeconds;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Separator line framing block headers.
pub const BANNER: &str =
    "===================================================================================";

/// Indent applied to every line of an embedded message body.
pub const BODY_INDENT: &str = "    ";

/// `Tuesday, November 14, 2023 10:13:20 PM`
const TIMESTAMP_FORMAT: &str = "%A, %B %-d, %Y %-I:%M:%S %p";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render epoch seconds as a bracketed UTC calendar timestamp.
pub fn format_timestamp(secs: EpochSeconds) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => format!("[{}]", dt.format(TIMESTAMP_FORMAT)),
        None => format!("[invalid timestamp {secs}]"),
    }
}

/// Follow every line break in `body` with [`BODY_INDENT`].
///
/// The first line is not indented here; callers place it after an indent
/// of their own.
pub fn indent_body(body: &str) -> String {
    body.replace('\n', &format!("\n{BODY_INDENT}"))
}

fn staff_label(username: &str, is_staff: bool) -> String {
    if is_staff {
        format!("<*{username}*>")
    } else {
        format!("[{username}]")
    }
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Render a ticket chain: header banner, notes, root message, then each
/// comment in chain order.
pub fn render_chain(chain: &TicketChain) -> String {
    let root = &chain.root_ticket;
    let submitted = format_timestamp(root.ticketdate);
    let resolved = if root.is_resolved() { "Yes" } else { "No" };

    let mut out = format!(
        "\n{BANNER}\n\
         Ticket number: {} == Submission date: {submitted} == Resolved: {resolved}\n\
         {BANNER}\n\
         Other notes: {}\n\
         {BANNER}\n\
         \n\
         >{submitted} - [{}]:\n\
         {BODY_INDENT}{}\n",
        root.rowid,
        root.other,
        root.username,
        indent_body(&root.message),
    );

    for comment in &chain.ticket_comments {
        out.push_str(&format!(
            "\n>{} - {}:\n{BODY_INDENT}{}\n",
            format_timestamp(comment.date),
            staff_label(&comment.username, comment.is_staff()),
            indent_body(&comment.message),
        ));
    }

    out
}

/// Render a suspension: header banner with parties and timestamps, then
/// the public, private and admin reasons in that order.
pub fn render_suspension(suspension: &Suspension) -> String {
    format!(
        "\n{BANNER}\n\
         Suspension number: {} == Suspended user: {} == Enacted by: {}\n\
         Created: {} == Originally Lifted {} == Lifted {}\n\
         {BANNER}\n\
         >Public reason:\n\
         {BODY_INDENT}{}\n\
         >Private reason:\n\
         {BODY_INDENT}{}\n\
         >Admin reason:\n\
         {BODY_INDENT}{}\n",
        suspension.row_id,
        suspension.suspended_username,
        suspension.enacted_username,
        format_timestamp(suspension.created),
        format_timestamp(suspension.time_lifted_orig),
        format_timestamp(suspension.time_lifted),
        indent_body(&suspension.reason_public),
        indent_body(&suspension.reason_private),
        indent_body(&suspension.reason_admin),
    )
}
