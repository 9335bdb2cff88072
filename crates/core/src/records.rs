//! Record shapes for the three exported tables.
//!
//! Field names match the export column names exactly so each line of a
//! `.jsons` file deserializes straight into one of these structs. Any field
//! may be `null` or missing in the export; both become the type default
//! (empty string, `0`). Unknown columns are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{EpochSeconds, RowId};

/// Deserialize `null` as `T::default()`.
///
/// `#[serde(default)]` only covers absent keys; exports also contain
/// explicit nulls for empty text columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

/// A support ticket as opened by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rowid: RowId,
    /// Submitter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    /// Staff member associated with the ticket, often empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Creation time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticketdate: EpochSeconds,
    /// `1` when the ticket was resolved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved: i64,
    /// Free-form staff notes, rendered verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub replies: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuetype: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assigned_username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assigned_to_user_id: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub userid: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastlookedat: EpochSeconds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uk_username: String,
}

impl Ticket {
    pub fn is_resolved(&self) -> bool {
        self.resolved == 1
    }
}

// ---------------------------------------------------------------------------
// Ticket comment
// ---------------------------------------------------------------------------

/// A reply posted on a ticket, by the submitter or by staff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketComment {
    /// Parent ticket (`Ticket::rowid`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticketid: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub userid: RowId,
    /// `1` when posted by support personnel.
    #[serde(default, deserialize_with = "null_as_default")]
    pub isstaff: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: EpochSeconds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rowid: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uk_username: String,
}

impl TicketComment {
    pub fn is_staff(&self) -> bool {
        self.isstaff == 1
    }
}

// ---------------------------------------------------------------------------
// Suspension
// ---------------------------------------------------------------------------

/// An account suspension enacted by a staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspension {
    #[serde(default, deserialize_with = "null_as_default")]
    pub row_id: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suspended_username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enacted_username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason_public: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason_private: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason_admin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: EpochSeconds,
    /// Lift time as originally scheduled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_lifted_orig: EpochSeconds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_lifted: EpochSeconds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enacted_by: RowId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_suspended: RowId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_parses_export_line() {
        let line = r#"{"username":"alice","resolved":1,"admin":"root","assigned_to_user_id":3,
            "userid":7,"lastlookedat":1700000500,"assigned_username":"root","other":"vip",
            "rowid":12,"replies":2,"issuetype":4,"message":"server down",
            "uk_username":"alice","ticketdate":1700000000}"#;
        let ticket: Ticket = serde_json::from_str(line).unwrap();
        assert_eq!(ticket.rowid, 12);
        assert_eq!(ticket.username, "alice");
        assert_eq!(ticket.other, "vip");
        assert_eq!(ticket.ticketdate, 1_700_000_000);
        assert!(ticket.is_resolved());
    }

    #[test]
    fn null_and_missing_fields_become_defaults() {
        let line = r#"{"rowid":3,"username":null,"message":null,"resolved":null}"#;
        let ticket: Ticket = serde_json::from_str(line).unwrap();
        assert_eq!(ticket.rowid, 3);
        assert_eq!(ticket.username, "");
        assert_eq!(ticket.message, "");
        assert_eq!(ticket.admin, "");
        assert!(!ticket.is_resolved());
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let line = r#"{"ticketid":1,"username":"bob","isstaff":1,"extra_column":"x"}"#;
        let comment: TicketComment = serde_json::from_str(line).unwrap();
        assert_eq!(comment.ticketid, 1);
        assert!(comment.is_staff());
    }

    #[test]
    fn only_flag_value_one_counts_as_set() {
        let comment = TicketComment {
            isstaff: 2,
            ..Default::default()
        };
        assert!(!comment.is_staff());
    }

    #[test]
    fn suspension_parses_reasons() {
        let line = r#"{"reason_public":"spam","reason_admin":null,"enacted_by":9,
            "created":1,"time_lifted_orig":2,"enacted_username":"mod",
            "time_lifted":3,"suspended_username":"spammer","row_id":44,
            "user_suspended":8,"reason_private":"bot"}"#;
        let s: Suspension = serde_json::from_str(line).unwrap();
        assert_eq!(s.row_id, 44);
        assert_eq!(s.reason_public, "spam");
        assert_eq!(s.reason_admin, "");
        assert_eq!(s.reason_private, "bot");
        assert_eq!(s.time_lifted, 3);
    }
}
