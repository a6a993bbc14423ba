//! Error types for DDL conversion.

use thiserror::Error;

/// Errors that can occur while scanning a Teradata `CREATE TABLE` statement.
///
/// Both variants are fatal. Conversion stops at the first one and no output
/// statement is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `CREATE [MULTISET|SET] TABLE schema.table` header in the input
    #[error("table name not found in DDL")]
    TableNameNotFound,

    /// No parenthesised column list followed by an index or table option clause
    #[error("column definitions not found in DDL")]
    ColumnsNotFound,
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ParseError>;
