//! Teradata to Redshift `CREATE TABLE` conversion.
//!
//! The scanners in [`parse`] lift the table header, the column definition
//! section and the index clauses out of a single Teradata statement. The
//! [`convert`] module maps every column through a fixed rule table and the
//! general type rules, derives DISTKEY and SORTKEY from the index clauses,
//! and assembles the final `CREATE TABLE ... ENCODE AUTO;` statement along
//! with a report of the renames it applied.

pub mod convert;
pub mod error;
pub mod parse;

pub use convert::{convert_ddl, Conversion, ConversionReport};
pub use error::ParseError;
