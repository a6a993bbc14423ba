// src/convert/mapper.rs

use serde::Serialize;
use tracing::warn;

use super::report::ConversionReport;
use super::rules::{Advice, COLUMN_RULES};
use super::types::map_type;
use crate::parse::ColumnDef;

/// One converted column clause, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedshiftColumn {
    pub name: String,
    pub ty: String,
    pub not_null: Option<String>,
}

impl RedshiftColumn {
    /// Render the clause as it appears in the emitted statement.
    pub fn render(&self) -> String {
        match &self.not_null {
            Some(constraint) => format!("{} {} {}", self.name, self.ty, constraint),
            None => format!("{} {}", self.name, self.ty),
        }
    }
}

/// Convert one scanned column, recording fixed-rule hits in `report`.
///
/// Decision order: the fixed rule table, the `_UTC` integer rule, general
/// type mapping, the `_FLG` rename. The first applicable step wins. A NOT
/// NULL constraint survives the first two steps and is dropped by the
/// general ones.
pub fn convert_column(def: &ColumnDef, report: &mut ConversionReport) -> RedshiftColumn {
    let name = def.name.trim().to_uppercase();
    let ty = def.ty.trim().to_uppercase();

    if let Some(rule) = COLUMN_RULES.get(name.as_str()) {
        if rule.advice == Advice::Prohibited {
            warn!(column = %name, replacement = %rule.name, "prohibited column in input");
        }
        report.record(rule.advice, &name, rule.name);
        return RedshiftColumn {
            name: rule.name.to_owned(),
            ty: rule.ty.to_owned(),
            not_null: def.not_null.clone(),
        };
    }

    if name.ends_with("_UTC") && ty == "INTEGER" {
        return RedshiftColumn {
            name: name.to_lowercase(),
            ty: "BYTEINT".to_owned(),
            not_null: def.not_null.clone(),
        };
    }

    let mapped = map_type(&ty, def.character_set.as_deref());

    if let Some(stem) = name.strip_suffix("_FLG") {
        return RedshiftColumn {
            name: format!("{}_flag", stem.to_lowercase()),
            ty: "VARCHAR(1)".to_owned(),
            not_null: None,
        };
    }

    RedshiftColumn {
        name: name.to_lowercase(),
        ty: mapped,
        not_null: None,
    }
}
