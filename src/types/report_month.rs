use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The month a report covers.
///
/// Formats as `MM.YYYY`, which is how the report titles it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct ReportMonth(i32, u32);

impl ReportMonth {
    /// Builds a `ReportMonth`, or `None` when `month` is not a calendar
    /// month (1-12).
    pub fn new(month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self(year, month))
    }

    pub fn year(self) -> i32 {
        self.0
    }

    pub fn month(self) -> u32 {
        self.1
    }
}

impl Display for ReportMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:04}", self.1, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_calendar_months() {
        assert!(ReportMonth::new(1, 2024).is_some());
        assert!(ReportMonth::new(12, 1999).is_some());
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert_eq!(ReportMonth::new(0, 2024), None);
        assert_eq!(ReportMonth::new(13, 2024), None);
    }

    #[test]
    fn formats_zero_padded() {
        let month = ReportMonth::new(3, 2024).unwrap();
        assert_eq!(month.to_string(), "03.2024");
        assert_eq!(month.month(), 3);
        assert_eq!(month.year(), 2024);
    }
}
