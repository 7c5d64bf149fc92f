use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time window for report filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Records dated today, comparing the date component only.
    Daily,
    /// Records between `start` and `end`, both inclusive.
    DateRange { start: NaiveDate, end: NaiveDate },
}

impl ReportPeriod {
    /// Whether `date` falls inside this period, with `today` as the
    /// reference date for [`ReportPeriod::Daily`].
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ReportPeriod::Daily => date == today,
            ReportPeriod::DateRange { start, end } => date >= *start && date <= *end,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReportPeriod::Daily => "Daily".into(),
            ReportPeriod::DateRange { start, end } => format!("{start} to {end}"),
        }
    }
}
