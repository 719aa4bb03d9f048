//! Due-date expression resolution.
//!
//! Reference data expresses task due dates as small expressions relative to
//! the event's as-of instant. The Workflow Engine never evaluates these
//! itself; this module resolves them against the working-day calendar into
//! literal timestamps before variables are handed over.

use super::WorkingDayCalendar;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use std::str::FromStr;

/// A parsed due-date expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateExpression {
    /// Due at the as-of instant
    AsOf,
    /// Due a fixed number of calendar days after the as-of instant
    CalendarDays(u32),
    /// Due after a number of working days, skipping weekends and holidays
    BusinessDays(u32),
}

impl FromStr for DueDateExpression {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::AsOf);
        }
        let body = trimmed
            .strip_prefix('+')
            .ok_or_else(|| format!("Invalid due-date expression: {trimmed}"))?;

        if let Some(days) = body.strip_suffix("BD") {
            let n = days
                .parse::<u32>()
                .map_err(|_| format!("Invalid business-day count: {trimmed}"))?;
            return Ok(Self::BusinessDays(n));
        }
        if let Some(days) = body.strip_suffix('D') {
            let n = days
                .parse::<u32>()
                .map_err(|_| format!("Invalid calendar-day count: {trimmed}"))?;
            return Ok(Self::CalendarDays(n));
        }
        Err(format!("Invalid due-date expression: {trimmed}"))
    }
}

impl DueDateExpression {
    /// Resolve this expression to a literal timestamp.
    ///
    /// Business days advance one calendar day at a time, counting only days
    /// the calendar confirms as working days. The time of day is carried
    /// over from the as-of instant unchanged.
    pub async fn resolve(
        &self,
        as_of: DateTime<Utc>,
        calendar: &dyn WorkingDayCalendar,
    ) -> Result<DateTime<Utc>> {
        match self {
            Self::AsOf => Ok(as_of),
            Self::CalendarDays(n) => Ok(as_of + Duration::days(i64::from(*n))),
            Self::BusinessDays(n) => {
                let mut due = as_of;
                let mut remaining = *n;
                while remaining > 0 {
                    due += Duration::days(1);
                    if calendar.is_working_day(due.date_naive()).await? {
                        remaining -= 1;
                    }
                }
                Ok(due)
            }
        }
    }
}
