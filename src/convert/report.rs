// src/convert/report.rs

use serde::Serialize;

use super::rules::Advice;

/// Renames recorded while mapping columns, grouped by the advice tag on the
/// rule that fired. Each pair is `(uppercased source name, replacement name)`
/// and every rule hit lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub changed: Vec<(String, String)>,
    pub recommended: Vec<(String, String)>,
    pub prohibited: Vec<(String, String)>,
}

impl ConversionReport {
    pub fn record(&mut self, advice: Advice, from: &str, to: &str) {
        let pair = (from.to_owned(), to.to_owned());
        match advice {
            Advice::Changed => self.changed.push(pair),
            Advice::Recommended => self.recommended.push(pair),
            Advice::Prohibited => self.prohibited.push(pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_advice_feeds_its_own_list() {
        let mut report = ConversionReport::default();
        report.record(Advice::Changed, "ORDER_ID", "order_id");
        report.record(Advice::Recommended, "REPORT_DATE", "report_date");
        report.record(Advice::Prohibited, "LIST_ID", "list_id");
        report.record(Advice::Changed, "STORE_ID", "seller_id");

        assert_eq!(
            report.changed,
            [
                ("ORDER_ID".to_owned(), "order_id".to_owned()),
                ("STORE_ID".to_owned(), "seller_id".to_owned()),
            ]
        );
        assert_eq!(report.recommended.len(), 1);
        assert_eq!(report.prohibited.len(), 1);
    }
}
