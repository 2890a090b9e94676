//! Study configuration for stratified capture-history analysis
//!
//! This module defines the configuration describing a run: the reporting
//! periods with their eligibility windows, the observation sources, and the
//! age partition used for stratification.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{Result, StrataError};

/// A reporting period with its fixed eligibility birth-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// Calendar year of the period (e.g., 2017)
    pub year: i32,
    /// First birth date eligible for this period (inclusive)
    pub window_start: NaiveDate,
    /// Last birth date eligible for this period (inclusive)
    pub window_end: NaiveDate,
}

impl Period {
    /// Create a period with its eligibility window
    #[must_use]
    pub const fn new(year: i32, window_start: NaiveDate, window_end: NaiveDate) -> Self {
        Self {
            year,
            window_start,
            window_end,
        }
    }

    /// Check whether a birth date falls inside this period's eligibility window
    #[must_use]
    pub fn contains(&self, birth_date: &NaiveDate) -> bool {
        &self.window_start <= birth_date && birth_date <= &self.window_end
    }
}

/// Ordered partition of the age axis into arbitrary-width bands
///
/// The partition is described by ascending inclusive upper bounds; the final
/// band is open-ended. `bounds = [14]` yields the two bands `0-14` and `15+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgePartition {
    /// Ascending inclusive upper bounds of all bands but the last
    bounds: Vec<i32>,
}

impl AgePartition {
    /// Create a partition from ascending inclusive upper bounds
    #[must_use]
    pub fn new(bounds: Vec<i32>) -> Self {
        Self { bounds }
    }

    /// Number of bands in the partition
    #[must_use]
    pub fn band_count(&self) -> usize {
        self.bounds.len() + 1
    }

    /// Index of the band containing the given age
    #[must_use]
    pub fn band_of(&self, age: i32) -> usize {
        self.bounds
            .iter()
            .position(|upper| age <= *upper)
            .unwrap_or(self.bounds.len())
    }

    /// Human-readable label for a band index (e.g., "0-14", "15+")
    #[must_use]
    pub fn label(&self, band: usize) -> String {
        let lower = if band == 0 {
            0
        } else {
            self.bounds[band - 1] + 1
        };
        match self.bounds.get(band) {
            Some(upper) => format!("{lower}-{upper}"),
            None => format!("{lower}+"),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.bounds.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(StrataError::Config(
                "age partition bounds must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a stratified capture-history run
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Reporting periods in chronological order
    pub periods: Vec<Period>,
    /// Names of the observation sources, in flag-vector order
    pub sources: Vec<String>,
    /// Age partition used for stratification
    pub age_partition: AgePartition,
}

impl StudyConfig {
    /// Create a configuration from periods, source names, and an age partition
    #[must_use]
    pub fn new(periods: Vec<Period>, sources: Vec<String>, age_partition: AgePartition) -> Self {
        Self {
            periods,
            sources,
            age_partition,
        }
    }

    /// Replace the configured periods
    #[must_use]
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// Replace the configured sources
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Replace the configured age partition
    #[must_use]
    pub fn with_age_partition(mut self, age_partition: AgePartition) -> Self {
        self.age_partition = age_partition;
        self
    }

    /// Number of configured periods
    #[must_use]
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Number of configured sources
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Validate the structural requirements of the configuration
    ///
    /// Checks that at least one period and one source are configured, that
    /// period years are distinct, that every eligibility window is
    /// well-formed, that windows do not overlap, and that the age partition
    /// bounds ascend.
    pub fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            return Err(StrataError::Config(
                "at least one period must be configured".to_string(),
            ));
        }
        if self.sources.is_empty() {
            return Err(StrataError::Config(
                "at least one source must be configured".to_string(),
            ));
        }

        for period in &self.periods {
            if period.window_start > period.window_end {
                return Err(StrataError::Config(format!(
                    "period {} has an inverted eligibility window",
                    period.year
                )));
            }
        }

        for (i, a) in self.periods.iter().enumerate() {
            for b in &self.periods[i + 1..] {
                if a.year == b.year {
                    return Err(StrataError::Config(format!(
                        "period {} is configured twice",
                        a.year
                    )));
                }
                if a.window_start <= b.window_end && b.window_start <= a.window_end {
                    return Err(StrataError::Config(format!(
                        "eligibility windows of periods {} and {} overlap",
                        a.year, b.year
                    )));
                }
            }
        }

        self.age_partition.validate()
    }
}

impl fmt::Display for StudyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Study Configuration:")?;
        writeln!(f, "  Periods:")?;
        for period in &self.periods {
            writeln!(
                f,
                "    {}: births {} to {}",
                period.year, period.window_start, period.window_end
            )?;
        }
        writeln!(f, "  Sources: {}", self.sources.join(", "))?;
        writeln!(f, "  Age Bands:")?;
        for band in 0..self.age_partition.band_count() {
            writeln!(f, "    {}", self.age_partition.label(band))?;
        }
        Ok(())
    }
}

/// Age at a period for a given birth date, by calendar-year difference
#[must_use]
pub fn age_in_period(birth_date: &NaiveDate, period_year: i32) -> i32 {
    period_year - birth_date.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_window_containment() {
        let period = Period::new(2017, ymd(2003, 1, 1), ymd(2007, 12, 31));
        assert!(period.contains(&ymd(2003, 1, 1)));
        assert!(period.contains(&ymd(2007, 12, 31)));
        assert!(!period.contains(&ymd(2008, 1, 1)));
    }

    #[test]
    fn test_age_partition_bands() {
        let partition = AgePartition::new(vec![14]);
        assert_eq!(partition.band_count(), 2);
        assert_eq!(partition.band_of(0), 0);
        assert_eq!(partition.band_of(14), 0);
        assert_eq!(partition.band_of(15), 1);
        assert_eq!(partition.label(0), "0-14");
        assert_eq!(partition.label(1), "15+");
    }

    #[test]
    fn test_age_partition_arbitrary_widths() {
        let partition = AgePartition::new(vec![4, 12, 17]);
        assert_eq!(partition.band_count(), 4);
        assert_eq!(partition.band_of(4), 0);
        assert_eq!(partition.band_of(5), 1);
        assert_eq!(partition.band_of(13), 2);
        assert_eq!(partition.band_of(40), 3);
        assert_eq!(partition.label(2), "13-17");
        assert_eq!(partition.label(3), "18+");
    }

    #[test]
    fn test_overlapping_windows_rejected() {
        let config = StudyConfig::new(
            vec![
                Period::new(2017, ymd(2003, 1, 1), ymd(2007, 12, 31)),
                Period::new(2018, ymd(2007, 1, 1), ymd(2008, 12, 31)),
            ],
            vec!["a".to_string()],
            AgePartition::new(vec![14]),
        );
        assert!(config.validate().is_err());
    }
}
