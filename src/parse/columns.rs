// src/parse/columns.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{instrument, trace};

use crate::error::{ParseError, Result};

static COLUMN_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(\s*([\s\S]+?)\s*\)\s*(?:PRIMARY|UNIQUE|WITH|NO)")
        .expect("column section pattern should be valid")
});

static COLUMN_DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s*(\w+)\s+(\w+(?:\([^)]*\))?)\s*(CHARACTER SET \w+)?\s*(NOT CASESPECIFIC)?\s*(DEFAULT [^,]+)?\s*(COMPRESS)?\s*(NOT NULL)?",
    )
    .expect("column definition pattern should be valid")
});

/// One raw column definition as scanned from the column section.
///
/// Attribute fields hold the matched clause text verbatim, so casing follows
/// the input. `default` runs to the next comma, which means any COMPRESS or
/// NOT NULL on the same definition ends up inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub ty: String,
    pub character_set: Option<String>,
    pub not_casespecific: bool,
    pub default: Option<String>,
    pub compress: bool,
    pub not_null: Option<String>,
}

/// Extract the column definition section.
///
/// The section is the shortest parenthesised span whose closing parenthesis
/// is followed by PRIMARY, UNIQUE, WITH or NO. The keywords are matched as
/// bare prefixes, so a type's closing parenthesis followed by NOT NULL also
/// terminates the section. A statement that ends right after the column list
/// has no terminator at all and is rejected.
pub fn column_section(ddl: &str) -> Result<&str> {
    COLUMN_SECTION_RE
        .captures(ddl)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(ParseError::ColumnsNotFound)
}

/// Scan the column section for `name type [attributes]` definitions.
///
/// Fragments the pattern cannot read as a definition are passed over without
/// an error.
#[instrument(level = "debug", skip(section), fields(section_len = section.len()))]
pub fn parse_columns(section: &str) -> Vec<ColumnDef> {
    let mut columns = Vec::new();
    for caps in COLUMN_DEF_RE.captures_iter(section) {
        let def = ColumnDef {
            name: caps[1].to_owned(),
            ty: caps[2].to_owned(),
            character_set: caps.get(3).map(|m| m.as_str().to_owned()),
            not_casespecific: caps.get(4).is_some(),
            default: caps.get(5).map(|m| m.as_str().to_owned()),
            compress: caps.get(6).is_some(),
            not_null: caps.get(7).map(|m| m.as_str().to_owned()),
        };
        trace!(name = %def.name, ty = %def.ty, "parsed column definition");
        columns.push(def);
    }
    columns
}
