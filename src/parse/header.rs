// src/parse/header.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{ParseError, Result};

static TABLE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)CREATE (?:MULTISET |SET )?TABLE (\w+)\.(\w+)")
        .expect("table header pattern should be valid")
});

/// Schema-qualified table name lifted from the statement header.
///
/// Both parts are stored lowercased, ready for the emitted statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableName {
    pub schema: String,
    pub table: String,
}

/// Find the `CREATE [MULTISET|SET] TABLE schema.table` header.
///
/// Only the first header in the input counts. The name must be
/// schema-qualified with a single dot.
#[instrument(level = "debug", skip(ddl), fields(ddl_len = ddl.len()))]
pub fn parse_table_name(ddl: &str) -> Result<TableName> {
    let caps = TABLE_NAME_RE
        .captures(ddl)
        .ok_or(ParseError::TableNameNotFound)?;
    let name = TableName {
        schema: caps[1].to_lowercase(),
        table: caps[2].to_lowercase(),
    };
    debug!(schema = %name.schema, table = %name.table, "parsed table header");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_create_table() {
        let name = parse_table_name("CREATE TABLE dwh.orders (x INTEGER)").unwrap();
        assert_eq!(name.schema, "dwh");
        assert_eq!(name.table, "orders");
    }

    #[test]
    fn test_multiset_and_set_variants() {
        let multiset = parse_table_name("CREATE MULTISET TABLE stage.events ,NO FALLBACK").unwrap();
        assert_eq!(multiset.table, "events");

        let set = parse_table_name("CREATE SET TABLE stage.events ,NO FALLBACK").unwrap();
        assert_eq!(set.table, "events");
    }

    #[test]
    fn test_names_are_lowercased() {
        let name = parse_table_name("create table DWH.Order_Items (x INTEGER)").unwrap();
        assert_eq!(name.schema, "dwh");
        assert_eq!(name.table, "order_items");
    }

    #[test]
    fn test_unqualified_name_is_an_error() {
        let err = parse_table_name("CREATE TABLE orders (x INTEGER)").unwrap_err();
        assert_eq!(err, ParseError::TableNameNotFound);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let err = parse_table_name("SELECT * FROM dwh.orders").unwrap_err();
        assert_eq!(err, ParseError::TableNameNotFound);
        assert_eq!(err.to_string(), "table name not found in DDL");
    }
}
