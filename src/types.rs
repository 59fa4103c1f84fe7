use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FilingId(pub u64);

/// Reporting period at monthly granularity. Solvency data is filed against
/// a reference month; ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub year: u32,
    pub month: u32,
}

impl ReportingPeriod {
    pub fn new(year: u32, month: u32) -> Self {
        ReportingPeriod { year, month: month.clamp(1, 12) }
    }

    /// The period one month later, rolling over the year boundary.
    pub fn next(self) -> Self {
        if self.month >= 12 {
            ReportingPeriod { year: self.year + 1, month: 1 }
        } else {
            ReportingPeriod { year: self.year, month: self.month + 1 }
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_displays_year_dash_month() {
        assert_eq!(ReportingPeriod::new(2025, 3).to_string(), "2025-03");
    }

    #[test]
    fn period_month_is_clamped_to_calendar_range() {
        assert_eq!(ReportingPeriod::new(2025, 0).month, 1);
        assert_eq!(ReportingPeriod::new(2025, 13).month, 12);
    }

    #[test]
    fn period_ordering_is_chronological() {
        let dec = ReportingPeriod::new(2024, 12);
        let jan = ReportingPeriod::new(2025, 1);
        assert!(dec < jan);
    }

    #[test]
    fn next_rolls_over_december() {
        assert_eq!(ReportingPeriod::new(2024, 12).next(), ReportingPeriod::new(2025, 1));
        assert_eq!(ReportingPeriod::new(2025, 6).next(), ReportingPeriod::new(2025, 7));
    }
}
