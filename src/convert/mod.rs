//! Teradata to Redshift statement conversion.
//!
//! `convert_ddl` drives the whole pipeline: scan the header, the column
//! section and the index clauses, map every column, then assemble the
//! Redshift statement and the change report.

pub mod keys;
pub mod mapper;
pub mod report;
pub mod rules;
pub mod types;

pub use keys::DistStyle;
pub use mapper::{convert_column, RedshiftColumn};
pub use report::ConversionReport;
pub use rules::{Advice, ColumnRule, COLUMN_RULES};
pub use types::map_type;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::parse::{self, TableName};

/// The converted statement plus the record of what the mapper changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub ddl: String,
    pub report: ConversionReport,
}

/// Convert one Teradata `CREATE TABLE` statement into its Redshift form.
///
/// `row_count` picks the distribution style: tables below three million rows
/// are replicated, the rest are distributed by the DISTKEY hash.
#[instrument(level = "debug", skip(ddl), fields(ddl_len = ddl.len()))]
pub fn convert_ddl(ddl: &str, row_count: u64) -> Result<Conversion> {
    let table = parse::parse_table_name(ddl)?;
    let section = parse::column_section(ddl)?;
    let columns = parse::parse_columns(section);

    let mut report = ConversionReport::default();
    let converted: Vec<RedshiftColumn> = columns
        .iter()
        .map(|def| convert_column(def, &mut report))
        .collect();

    let clauses = parse::parse_index_clauses(ddl);
    let dist = keys::dist_key(&clauses);
    let sort = keys::sort_keys(&clauses);
    let style = DistStyle::for_row_count(row_count);

    debug!(
        columns = converted.len(),
        changed = report.changed.len(),
        recommended = report.recommended.len(),
        prohibited = report.prohibited.len(),
        dist_key = ?dist,
        style = style.as_str(),
        "converted statement"
    );

    Ok(Conversion {
        ddl: emit(&table, &converted, dist.as_deref(), &sort, style),
        report,
    })
}

/// Assemble the output statement in fixed clause order: column list, DISTKEY,
/// SORTKEY, DISTSTYLE, ENCODE. There is no trailing newline.
fn emit(
    table: &TableName,
    columns: &[RedshiftColumn],
    dist_key: Option<&str>,
    sort_keys: &[String],
    style: DistStyle,
) -> String {
    let rendered: Vec<String> = columns.iter().map(|col| col.render()).collect();

    let mut ddl = format!("CREATE TABLE {}.{} (\n", table.schema, table.table);
    ddl.push_str(&rendered.join(",\n"));
    ddl.push_str("\n)\n");
    if let Some(key) = dist_key {
        ddl.push_str(&format!("DISTKEY({})\n", key));
    }
    if !sort_keys.is_empty() {
        if sort_keys.len() == 1 {
            ddl.push_str(&format!("SORTKEY({})\n", sort_keys[0]));
        } else {
            ddl.push_str(&format!("COMPOUND SORTKEY({})\n", sort_keys.join(", ")));
        }
    }
    ddl.push_str(&format!("DISTSTYLE {}\n", style.as_str()));
    ddl.push_str("ENCODE AUTO;");
    ddl
}
