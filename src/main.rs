use anyhow::{bail, Context, Result};
use std::{env, fs, path::Path};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use tdshift::convert_ddl;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tdshift=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) read arguments ───────────────────────────────────────────
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        bail!("usage: tdshift <INPUT_DDL> <OUTPUT_DDL> <ROW_COUNT>");
    }
    let row_count: u64 = args[2].parse().with_context(|| {
        format!("row count must be a non-negative integer, got `{}`", args[2])
    })?;

    run(Path::new(&args[0]), Path::new(&args[1]), row_count)
}

/// Convert one DDL file and print the change report.
fn run(input: &Path, output: &Path, row_count: u64) -> Result<()> {
    debug!(input = %input.display(), output = %output.display(), row_count, "starting conversion");

    let teradata_ddl = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let conversion = convert_ddl(&teradata_ddl, row_count)?;
    fs::write(output, &conversion.ddl)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let report = &conversion.report;
    println!("Number of changed columns: {}", report.changed.len());
    println!("Number of recommended changes: {}", report.recommended.len());
    println!("Number of prohibited columns: {}", report.prohibited.len());
    println!("Changes made: {:?}", report.changed);
    println!("Redshift DDL has been written to {}.", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ORDERS_DDL: &str = r#"CREATE MULTISET TABLE db1.orders ,NO FALLBACK
     (
      ORDER_ID VARCHAR(20) CHARACTER SET LATIN NOT CASESPECIFIC,
      STATUS_FLG CHAR(1),
      AMOUNT DECIMAL(10,2)
     )
PRIMARY INDEX ( ORDER_ID );"#;

    #[test]
    fn test_run_converts_a_file_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("orders.sql");
        let output = dir.path().join("orders_redshift.sql");
        fs::write(&input, ORDERS_DDL)?;

        run(&input, &output, 500)?;

        let ddl = fs::read_to_string(&output)?;
        assert!(ddl.starts_with("CREATE TABLE db1.orders (\n"));
        assert!(ddl.contains("order_id VARCHAR(50)"));
        assert!(ddl.contains("status_flag VARCHAR(1)"));
        assert!(ddl.contains("DISTKEY(order_id)"));
        assert!(ddl.contains("DISTSTYLE ALL"));
        assert!(ddl.ends_with("ENCODE AUTO;"));
        Ok(())
    }

    #[test]
    fn test_run_fails_on_a_missing_input_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.sql");
        let output = dir.path().join("out.sql");
        assert!(run(&input, &output, 0).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_rejects_unparseable_ddl() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("notes.sql");
        let output = dir.path().join("out.sql");
        fs::write(&input, "-- nothing resembling a table here")?;

        assert!(run(&input, &output, 0).is_err());
        assert!(!output.exists());
        Ok(())
    }
}
