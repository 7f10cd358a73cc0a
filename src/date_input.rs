//! Date field with a calendar overlay.
//!
//! The text field and the overlay share one canonical representation,
//! `yyyy-MM-dd`. Typed text is passed through unchanged; picking a day
//! in the overlay always produces the canonical form. The overlay grid is
//! computed here so the page only has to draw it.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// Canonical date format shared by the text field and the calendar.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the field text for calendar highlighting. Anything that is not
/// a canonical date yields `None` and simply highlights nothing.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Overlay state of the date input. The date value itself belongs to
/// the page draft.
#[derive(Debug, Clone, Default)]
pub struct DateInput {
    open: bool,
    /// First day of the month shown after explicit navigation or a pick.
    shown_month: Option<NaiveDate>,
}

impl DateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open);
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        if !open {
            self.shown_month = None;
        }
        self.open = open;
        tracing::debug!(open, "Date overlay toggled");
    }

    /// Raw keystroke input, returned unchanged for the page to store. Once
    /// the text parses, the calendar jumps back to the typed month.
    pub fn on_type(&mut self, text: &str) -> String {
        if parse_date(text).is_some() {
            self.shown_month = None;
        }
        text.to_string()
    }

    /// A day picked in the overlay. The overlay stays open.
    pub fn select(&mut self, date: NaiveDate) -> String {
        self.shown_month = Some(first_of_month(date));
        format_date(date)
    }

    /// Moves the shown month by `delta` months (negative goes back).
    pub fn navigate_month(&mut self, value: &str, today: NaiveDate, delta: i32) {
        let current = self.focus_month(value, today);
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            current.checked_add_months(months)
        } else {
            current.checked_sub_months(months)
        };
        if let Some(month) = moved {
            self.shown_month = Some(month);
        }
    }

    fn focus_month(&self, value: &str, today: NaiveDate) -> NaiveDate {
        self.shown_month
            .or_else(|| parse_date(value).map(first_of_month))
            .unwrap_or_else(|| first_of_month(today))
    }

    /// Builds the overlay grid for the current field value.
    pub fn calendar(&self, value: &str, today: NaiveDate) -> CalendarMonth {
        let first = self.focus_month(value, today);
        let selected = parse_date(value);

        let offset = i64::from(first.weekday().num_days_from_sunday());
        let days_in_month = days_in_month(first);
        let cells = (offset + days_in_month + 6) / 7 * 7;
        let start = first - Duration::days(offset);

        let days = (0..cells)
            .map(|i| {
                let date = start + Duration::days(i);
                CalendarDay {
                    date: format_date(date),
                    day: date.day(),
                    in_month: date.month() == first.month() && date.year() == first.year(),
                    selected: selected == Some(date),
                    today: date == today,
                }
            })
            .collect();

        CalendarMonth {
            year: first.year(),
            month: first.month(),
            days,
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> i64 {
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days())
        .unwrap_or(31)
}

/// One month of the overlay, Sunday-first, padded to whole weeks.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    pub in_month: bool,
    pub selected: bool,
    pub today: bool,
}
