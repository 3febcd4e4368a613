//! Summary statistics shown in the report header

use crate::record::CountryRecord;

/// Aggregates over the loaded records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStats {
    /// Number of records
    pub count: usize,

    /// Sum of all populations, saturating at `u64::MAX`
    pub total_population: u64,

    /// `total_population / count`, rounded down; `0` when there are no records
    pub average_population: u64,
}

impl ReportStats {
    pub fn from_records(records: &[CountryRecord]) -> Self {
        let count = records.len();
        let total_population = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.population));
        let average_population = match count {
            0 => 0,
            n => total_population / n as u64,
        };

        Self {
            count,
            total_population,
            average_population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(
            ReportStats::from_records(&[]),
            ReportStats {
                count: 0,
                total_population: 0,
                average_population: 0,
            }
        );
    }

    #[test]
    fn test_sum_and_floor_average() {
        let records = vec![
            CountryRecord::new("A", "a", 10, 1.0),
            CountryRecord::new("B", "b", 0, 1.0),
            CountryRecord::new("C", "c", 5, 1.0),
        ];
        let stats = ReportStats::from_records(&records);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_population, 15);
        assert_eq!(stats.average_population, 5);

        let stats = ReportStats::from_records(&records[..2]);
        assert_eq!(stats.average_population, 5);

        let uneven = vec![
            CountryRecord::new("A", "a", 7, 1.0),
            CountryRecord::new("B", "b", 0, 1.0),
        ];
        assert_eq!(ReportStats::from_records(&uneven).average_population, 3);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let records = vec![
            CountryRecord::new("A", "a", u64::MAX, 1.0),
            CountryRecord::new("B", "b", 1, 1.0),
        ];
        let stats = ReportStats::from_records(&records);

        assert_eq!(stats.total_population, u64::MAX);
        assert_eq!(stats.average_population, u64::MAX / 2);
    }

    #[test]
    fn test_single_record() {
        let records = vec![CountryRecord::new("Andorra", "Andorra la Vella", 84000, 468.0)];
        let stats = ReportStats::from_records(&records);

        assert_eq!(stats.total_population, 84000);
        assert_eq!(stats.average_population, 84000);
    }
}
