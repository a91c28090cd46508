use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reference windows the dashboard filters by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Last7Days,
    Last30Days,
    CurrentMonth,
    LastMonth,
}

impl TimeWindow {
    /// Accepts the short-hand window specifiers the screens send.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "7days" => Some(Self::Last7Days),
            "30days" => Some(Self::Last30Days),
            "month" | "current_month" => Some(Self::CurrentMonth),
            "last_month" => Some(Self::LastMonth),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::CurrentMonth => "Current Month",
            Self::LastMonth => "Last Month",
        }
    }

    /// Whether `date` falls inside the window anchored at `today`. Day-based
    /// windows include `today` and look strictly backwards.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Last7Days => within_days(date, today, 7),
            Self::Last30Days => within_days(date, today, 30),
            Self::CurrentMonth => MonthRef::containing(today).matches(date),
            Self::LastMonth => MonthRef::containing(today).previous().matches(date),
        }
    }

    /// Month bucket used for billing-period comparisons: the anchor month for
    /// day-based and current-month windows, the prior month for `LastMonth`.
    pub fn month_ref(self, today: NaiveDate) -> MonthRef {
        match self {
            Self::LastMonth => MonthRef::containing(today).previous(),
            _ => MonthRef::containing(today),
        }
    }
}

fn within_days(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date <= today && date > today - Duration::days(days)
}

/// A calendar month, wrapping the year boundary when stepping backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn matches(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Billing-period key in the `2026-07` convention.
    pub fn key(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
