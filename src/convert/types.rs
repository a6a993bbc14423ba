// src/convert/types.rs

use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_LENGTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("type length pattern should be valid"));

/// Map a Teradata column type onto its Redshift counterpart.
///
/// `character_set` is the verbatim `CHARACTER SET ...` clause when the column
/// carried one. The returned type is always uppercased.
///
/// Covers:
/// - BYTE(N), VARBYTE(N)       → VARCHAR(N*2)
/// - BYTEINT                   → SMALLINT
/// - SMALLINT, INTEGER, BIGINT → unchanged
/// - FLOAT                     → DOUBLE PRECISION
/// - DECIMAL*                  → unchanged
/// - TIMESTAMP                 → TIMESTAMP WITHOUT TIME ZONE
/// - DATE                      → unchanged
/// - CHAR(N), VARCHAR(N)       → VARCHAR(N*3) under CHARACTER SET UNICODE,
///                               unchanged otherwise
/// - fallback                  → VARCHAR(255)
pub fn map_type(ty: &str, character_set: Option<&str>) -> String {
    let upper = ty.to_ascii_uppercase();
    // BYTEINT is its own type, not a sized BYTE
    if (upper.starts_with("BYTE") || upper.starts_with("VARBYTE")) && upper != "BYTEINT" {
        match type_length(&upper) {
            Some(n) => format!("VARCHAR({})", n * 2),
            None => "VARCHAR(255)".to_string(),
        }
    } else if upper == "BYTEINT" {
        "SMALLINT".to_string()
    } else if upper == "SMALLINT" || upper == "INTEGER" || upper == "BIGINT" {
        upper
    } else if upper == "FLOAT" {
        "DOUBLE PRECISION".to_string()
    } else if upper.starts_with("DECIMAL") {
        upper
    } else if upper == "TIMESTAMP" {
        "TIMESTAMP WITHOUT TIME ZONE".to_string()
    } else if upper == "DATE" {
        "DATE".to_string()
    } else if upper.starts_with("VARCHAR") || upper.starts_with("CHAR") {
        let unicode = character_set.map_or(false, |cs| cs.contains("UNICODE"));
        match (unicode, type_length(&upper)) {
            (true, Some(n)) => format!("VARCHAR({})", n * 3),
            _ => upper,
        }
    } else {
        // Catch-all for types Redshift has no counterpart for
        // (PERIOD, INTERVAL, CLOB, etc.)
        "VARCHAR(255)".to_string()
    }
}

/// First run of digits in the type, read as the declared length.
fn type_length(ty: &str) -> Option<u64> {
    TYPE_LENGTH_RE
        .find(ty)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(u64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_types_double_their_length() {
        assert_eq!(map_type("BYTE(10)", None), "VARCHAR(20)");
        assert_eq!(map_type("VARBYTE(5)", None), "VARCHAR(10)");
    }

    #[test]
    fn test_byte_types_without_a_length_fall_back() {
        assert_eq!(map_type("BYTE", None), "VARCHAR(255)");
        assert_eq!(map_type("VARBYTE", None), "VARCHAR(255)");
    }

    #[test]
    fn test_byteint_is_not_a_sized_byte() {
        assert_eq!(map_type("BYTEINT", None), "SMALLINT");
    }

    #[test]
    fn test_integer_types_pass_through() {
        assert_eq!(map_type("SMALLINT", None), "SMALLINT");
        assert_eq!(map_type("INTEGER", None), "INTEGER");
        assert_eq!(map_type("BIGINT", None), "BIGINT");
    }

    #[test]
    fn test_float_widens_to_double_precision() {
        assert_eq!(map_type("FLOAT", None), "DOUBLE PRECISION");
    }

    #[test]
    fn test_decimal_keeps_precision_and_scale() {
        assert_eq!(map_type("DECIMAL(10,2)", None), "DECIMAL(10,2)");
        assert_eq!(map_type("DECIMAL(20, 0)", None), "DECIMAL(20, 0)");
    }

    #[test]
    fn test_timestamp_gains_a_zone_qualifier() {
        assert_eq!(map_type("TIMESTAMP", None), "TIMESTAMP WITHOUT TIME ZONE");
    }

    #[test]
    fn test_parameterised_timestamp_is_not_recognised() {
        assert_eq!(map_type("TIMESTAMP(0)", None), "VARCHAR(255)");
    }

    #[test]
    fn test_date_passes_through() {
        assert_eq!(map_type("DATE", None), "DATE");
    }

    #[test]
    fn test_unicode_char_types_triple_their_length() {
        assert_eq!(
            map_type("VARCHAR(10)", Some("CHARACTER SET UNICODE")),
            "VARCHAR(30)"
        );
        assert_eq!(
            map_type("CHAR(5)", Some("CHARACTER SET UNICODE")),
            "VARCHAR(15)"
        );
    }

    #[test]
    fn test_latin_char_types_pass_through() {
        assert_eq!(
            map_type("VARCHAR(10)", Some("CHARACTER SET LATIN")),
            "VARCHAR(10)"
        );
        assert_eq!(map_type("CHAR(1)", None), "CHAR(1)");
    }

    #[test]
    fn test_character_set_containment_is_case_sensitive() {
        assert_eq!(
            map_type("VARCHAR(10)", Some("character set unicode")),
            "VARCHAR(10)"
        );
    }

    #[test]
    fn test_unicode_char_without_a_length_passes_through() {
        assert_eq!(map_type("VARCHAR", Some("CHARACTER SET UNICODE")), "VARCHAR");
    }

    #[test]
    fn test_unknown_types_fall_back_to_varchar() {
        assert_eq!(map_type("PERIOD(DATE)", None), "VARCHAR(255)");
        assert_eq!(map_type("CLOB", None), "VARCHAR(255)");
    }

    #[test]
    fn test_output_is_uppercased() {
        assert_eq!(map_type("integer", None), "INTEGER");
        assert_eq!(map_type("varchar(8)", None), "VARCHAR(8)");
    }
}
