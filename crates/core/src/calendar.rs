//! Calendar parsing and iteration for capacity queries.
//!
//! Query parameters arrive as strings (`YYYY-MM`, `YYYY-MM-DD`). Parsing is
//! strict: zero-padded fields only.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CoreError;

/// Maximum number of days a detailed range read may span (inclusive).
pub const MAX_RANGE_DAYS: i64 = 366;

/// Format used for every date key in requests and responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parse a single date parameter, reporting failures as `INVALID_DATE`.
pub fn require_date(raw: &str) -> Result<NaiveDate, CoreError> {
    parse_date(raw).ok_or_else(|| {
        CoreError::InvalidDate(format!("'{raw}' is not a valid YYYY-MM-DD date"))
    })
}

/// Day of week with Sunday = 0 through Saturday = 6.
pub fn day_of_week(date: NaiveDate) -> i16 {
    date.weekday().num_days_from_sunday() as i16
}

// ---------------------------------------------------------------------------
// Month
// ---------------------------------------------------------------------------

/// A calendar month, as requested by the coarse month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    /// Parse a strict `YYYY-MM` value.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidMonth(format!("'{raw}' is not a valid YYYY-MM month"));

        let trimmed = raw.trim();
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok(Self { first })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        let next = self
            .first
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        next.pred_opt().unwrap_or(self.first)
    }

    /// The month as an inclusive date range.
    pub fn range(&self) -> DateRange {
        DateRange {
            from: self.first_day(),
            to: self.last_day(),
        }
    }
}

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

/// An inclusive `[from, to]` window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Parse and validate a `from`/`to` pair.
    ///
    /// Both bounds are required, `from <= to`, and the window may not span
    /// more than [`MAX_RANGE_DAYS`] days. All failures are `INVALID_RANGE`.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, CoreError> {
        let (Some(from_raw), Some(to_raw)) = (from, to) else {
            return Err(CoreError::InvalidRange(
                "Both 'from' and 'to' (YYYY-MM-DD) are required".to_string(),
            ));
        };
        let from = parse_date(from_raw).ok_or_else(|| {
            CoreError::InvalidRange(format!("'from' value '{from_raw}' is not a YYYY-MM-DD date"))
        })?;
        let to = parse_date(to_raw).ok_or_else(|| {
            CoreError::InvalidRange(format!("'to' value '{to_raw}' is not a YYYY-MM-DD date"))
        })?;
        Self::new(from, to)
    }

    /// Build a validated range from already-parsed dates.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::InvalidRange(format!(
                "'from' ({from}) must not be after 'to' ({to})"
            )));
        }
        let range = Self { from, to };
        if range.len_days() > MAX_RANGE_DAYS {
            return Err(CoreError::InvalidRange(format!(
                "Range may span at most {MAX_RANGE_DAYS} days"
            )));
        }
        Ok(range)
    }

    /// A single-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// Number of days in the range, both ends included.
    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Iterate over every date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        std::iter::successors(Some(self.from), move |d| {
            d.checked_add_days(Days::new(1)).filter(|next| *next <= to)
        })
    }
}
