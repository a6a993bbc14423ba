pub mod columns;
pub mod header;
pub mod indexes;

pub use columns::{column_section, parse_columns, ColumnDef};
pub use header::{parse_table_name, TableName};
pub use indexes::{parse_index_clauses, IndexClauses};
