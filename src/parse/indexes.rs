// src/parse/indexes.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument};

static PRIMARY_INDEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)PRIMARY INDEX\s*\(([^)]+)\)").expect("primary index pattern should be valid")
});

static UNIQUE_PRIMARY_INDEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)UNIQUE PRIMARY INDEX\s*\(([^)]+)\)")
        .expect("unique primary index pattern should be valid")
});

static PRIMARY_PARTITION_INDEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)PRIMARY PARTITION INDEX\s*\(([^)]+)\)")
        .expect("primary partition index pattern should be valid")
});

/// Column lists of the index clauses found in the statement, in input order
/// and with surrounding whitespace trimmed.
///
/// Each clause kind is scanned independently and only its first occurrence
/// counts. `PRIMARY INDEX` matches as a substring of `UNIQUE PRIMARY INDEX`,
/// so a unique primary index fills both `primary` and `unique_primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexClauses {
    pub primary: Vec<String>,
    pub unique_primary: Vec<String>,
    pub partition: Vec<String>,
}

/// Scan the whole statement for index clauses.
#[instrument(level = "debug", skip(ddl), fields(ddl_len = ddl.len()))]
pub fn parse_index_clauses(ddl: &str) -> IndexClauses {
    let clauses = IndexClauses {
        primary: index_columns(&PRIMARY_INDEX_RE, ddl),
        unique_primary: index_columns(&UNIQUE_PRIMARY_INDEX_RE, ddl),
        partition: index_columns(&PRIMARY_PARTITION_INDEX_RE, ddl),
    };
    debug!(
        primary = clauses.primary.len(),
        unique_primary = clauses.unique_primary.len(),
        partition = clauses.partition.len(),
        "parsed index clauses"
    );
    clauses
}

fn index_columns(re: &Regex, ddl: &str) -> Vec<String> {
    re.captures(ddl)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().split(',').map(|col| col.trim().to_owned()).collect())
        .unwrap_or_default()
}
