/// Row identities in the exported tables are plain integers.
pub type RowId = i64;

/// All record timestamps are Unix epoch seconds (UTC).
pub type EpochSeconds = i64;
