// src/convert/keys.rs

use serde::Serialize;

use crate::parse::IndexClauses;

/// Row count at which distribution switches from replication to hashing.
pub const DISTSTYLE_KEY_MIN_ROWS: u64 = 3_000_000;

/// Redshift distribution style for the converted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistStyle {
    All,
    Key,
}

impl DistStyle {
    /// Small tables are replicated to every node, large ones are distributed
    /// by the DISTKEY hash.
    pub fn for_row_count(row_count: u64) -> Self {
        if row_count < DISTSTYLE_KEY_MIN_ROWS {
            DistStyle::All
        } else {
            DistStyle::Key
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistStyle::All => "ALL",
            DistStyle::Key => "KEY",
        }
    }
}

/// DISTKEY candidates are the primary index columns followed by the unique
/// primary index columns. The leftmost candidate wins, lowercased.
pub fn dist_key(clauses: &IndexClauses) -> Option<String> {
    clauses
        .primary
        .iter()
        .chain(&clauses.unique_primary)
        .next()
        .map(|col| col.to_lowercase())
}

/// SORTKEY candidates are the partition columns followed by the DISTKEY
/// candidates, in that order and without deduplication.
pub fn sort_keys(clauses: &IndexClauses) -> Vec<String> {
    clauses
        .partition
        .iter()
        .chain(&clauses.primary)
        .chain(&clauses.unique_primary)
        .map(|col| col.to_lowercase())
        .collect()
}
