use chrono::{DateTime, Datelike, FixedOffset};

use crate::calendar::Day;

pub const QIITA_API_BASE: &str = "https://qiita.com/api/v2";

/// Qiita's maximum page size; only the first page is ever requested.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// Hardcoded season. Not derived from the current date.
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MONTH: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub api_base: String,
    pub page_size: u32,
    pub window: CalendarWindow,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            api_base: QIITA_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            window: CalendarWindow::default(),
        }
    }
}

/// The month whose first 25 days make up the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl Default for CalendarWindow {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
        }
    }
}

impl CalendarWindow {
    /// Calendar slot for a timestamp, or `None` if it falls outside the
    /// window. The date is taken in the timestamp's own offset.
    pub fn day_of(&self, timestamp: &DateTime<FixedOffset>) -> Option<Day> {
        if timestamp.year() != self.year || timestamp.month() != self.month {
            return None;
        }
        u8::try_from(timestamp.day()).ok().and_then(Day::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).expect("valid timestamp")
    }

    #[test]
    fn test_default_config() {
        let config = CalendarConfig::default();
        assert_eq!(config.api_base, "https://qiita.com/api/v2");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.window.year, 2024);
        assert_eq!(config.window.month, 12);
    }

    #[test]
    fn test_day_of_inside_window() {
        let window = CalendarWindow::default();
        assert_eq!(window.day_of(&ts("2024-12-01T00:00:00Z")), Day::new(1));
        assert_eq!(window.day_of(&ts("2024-12-25T23:59:59Z")), Day::new(25));
    }

    #[test]
    fn test_day_of_outside_window() {
        let window = CalendarWindow::default();
        assert_eq!(window.day_of(&ts("2024-11-30T23:59:59Z")), None);
        assert_eq!(window.day_of(&ts("2024-12-26T00:00:00Z")), None);
        assert_eq!(window.day_of(&ts("2023-12-10T00:00:00Z")), None);
        assert_eq!(window.day_of(&ts("2025-12-10T00:00:00Z")), None);
    }

    #[test]
    fn test_custom_window() {
        let window = CalendarWindow {
            year: 2025,
            month: 12,
        };
        assert_eq!(window.day_of(&ts("2025-12-07T12:00:00+09:00")), Day::new(7));
        assert_eq!(window.day_of(&ts("2024-12-07T12:00:00+09:00")), None);
    }
}
