//! Price window and return formula definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Date;

/// Which months are fetched for a ranking year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowConvention {
    /// January through December of the year.
    CalendarYear,
    /// December of the prior year through December, so that twelve
    /// consecutive closes can be compared.
    #[default]
    PriorDecember,
}

/// How a monthly return is derived from bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnFormula {
    /// Each month's adjusted close against the previous month's adjusted close.
    #[default]
    CloseToClose,
    /// Each month's close against the same month's open.
    OpenToClose,
}

impl fmt::Display for WindowConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalendarYear => write!(f, "calendar-year"),
            Self::PriorDecember => write!(f, "prior-december"),
        }
    }
}

impl fmt::Display for ReturnFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloseToClose => write!(f, "close-to-close"),
            Self::OpenToClose => write!(f, "open-to-close"),
        }
    }
}

/// Date range fetched for one ticker-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearWindow {
    /// Ranking year.
    pub year: i32,
    /// Window convention.
    pub convention: WindowConvention,
}

impl YearWindow {
    /// Create a new window.
    #[must_use]
    pub const fn new(year: i32, convention: WindowConvention) -> Self {
        Self { year, convention }
    }

    /// First day of the window, `None` outside the supported date range.
    #[must_use]
    pub fn start(&self) -> Option<Date> {
        match self.convention {
            WindowConvention::CalendarYear => Date::from_ymd_opt(self.year, 1, 1),
            WindowConvention::PriorDecember => Date::from_ymd_opt(self.year - 1, 12, 1),
        }
    }

    /// Last day of the window, `None` outside the supported date range.
    #[must_use]
    pub fn end(&self) -> Option<Date> {
        Date::from_ymd_opt(self.year, 12, 31)
    }

    /// Whether a bar dated `date` belongs to this window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}
