//! Console summary printed after an extraction run

use std::fmt;

use crate::record::CountryRecord;
use crate::report::format::{format_decimal, group_thousands};

/// Number of countries listed by default after a run
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Lines listing the first `limit` records, plus a trailer when truncated
pub fn preview_lines(records: &[CountryRecord], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{:3}. Country: {:30} Capital: {}",
                i + 1,
                record.name,
                record.capital
            )
        })
        .collect();

    if records.len() > limit {
        lines.push(format!("... and {} more countries", records.len() - limit));
    }
    lines
}

/// Statistics shown by the extractor. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionSummary {
    pub count: usize,
    pub total_population: u64,
    /// Mean area in km², `0.0` for an empty run
    pub average_area: f64,
}

impl ExtractionSummary {
    pub fn from_records(records: &[CountryRecord]) -> Self {
        let count = records.len();
        let total_population = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.population));
        let average_area = if count > 0 {
            records.iter().map(|r| r.area).sum::<f64>() / count as f64
        } else {
            0.0
        };

        Self {
            count,
            total_population,
            average_area,
        }
    }
}

impl fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data statistics:")?;
        writeln!(f, "• Total countries: {}", self.count)?;
        writeln!(
            f,
            "• Total population: {}",
            group_thousands(self.total_population)
        )?;
        write!(
            f,
            "• Average country area: {} km²",
            format_decimal(self.average_area, 2)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<CountryRecord> {
        (0..n)
            .map(|i| CountryRecord::new(format!("Country {i}"), format!("Capital {i}"), 10, 2.0))
            .collect()
    }

    #[test]
    fn test_preview_truncates() {
        let lines = preview_lines(&records(12), DEFAULT_PREVIEW_LIMIT);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("  1. Country: Country 0"));
        assert!(lines[0].ends_with("Capital: Capital 0"));
        assert_eq!(lines[10], "... and 2 more countries");
    }

    #[test]
    fn test_preview_short_list() {
        let lines = preview_lines(&records(3), DEFAULT_PREVIEW_LIMIT);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_summary() {
        let list = vec![
            CountryRecord::new("A", "a", 1_000, 100.0),
            CountryRecord::new("B", "b", 2_500, 50.5),
        ];
        let summary = ExtractionSummary::from_records(&list);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_population, 3_500);
        assert_eq!(summary.average_area, 75.25);

        let text = summary.to_string();
        assert!(text.contains("Total population: 3,500"));
        assert!(text.contains("Average country area: 75.25 km²"));
    }

    #[test]
    fn test_summary_total_saturates() {
        let list = vec![
            CountryRecord::new("A", "a", u64::MAX, 1.0),
            CountryRecord::new("B", "b", 1, 1.0),
        ];
        assert_eq!(ExtractionSummary::from_records(&list).total_population, u64::MAX);
    }

    #[test]
    fn test_summary_empty() {
        let summary = ExtractionSummary::from_records(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_area, 0.0);
    }
}
