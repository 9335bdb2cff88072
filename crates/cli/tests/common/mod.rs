//! Shared fixtures for the CLI integration tests.

#![allow(dead_code)]


use std::path::Path;

pub const TICKETS: &str = r#"{"rowid":1,"username":"alice","admin":"","message":"server down","ticketdate":1700000000,"resolved":0,"other":""}
{"rowid":2,"username":"carol","admin":"dave","message":"refund\nplease","ticketdate":1700001000,"resolved":1,"other":"vip"}
"#;

pub const COMMENTS: &str = r#"{"ticketid":1,"username":"bob","isstaff":1,"message":"looking into it","date":1700000100,"rowid":10}
{"ticketid":2,"username":"carol","isstaff":0,"message":"any news?","date":1700002000,"rowid":11}
{"ticketid":99,"username":"ghost","isstaff":0,"message":"orphan","date":1,"rowid":12}
"#;

pub const SUSPENSIONS: &str = r#"{"row_id":5,"suspended_username":"troll","enacted_username":"bob","reason_public":"spam","reason_private":null,"reason_admin":"","created":0,"time_lifted_orig":0,"time_lifted":0,"enacted_by":1,"user_suspended":2}
"#;

/// Write the three export files into `dir`.
pub fn write_exports(dir: &Path) {
    std::fs::write(dir.join("tickets.jsons"), TICKETS).unwrap();
    std::fs::write(dir.join("ticket_comments.jsons"), COMMENTS).unwrap();
    std::fs::write(dir.join("suspensions.jsons"), SUSPENSIONS).unwrap();
}
