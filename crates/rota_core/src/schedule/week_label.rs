//! Display label for the current Monday-to-Sunday week.

use crate::schedule::rotation::week_monday;
use chrono::{Datelike, NaiveDate, TimeDelta};

/// Label like `"22 Jan - 28 Jan"` for the week containing `date`.
pub fn week_label(date: NaiveDate) -> String {
    // Weeks clipped by chrono's date range are labelled from what exists.
    let monday = week_monday(date).unwrap_or(date);
    let sunday = monday
        .checked_add_signed(TimeDelta::days(6))
        .unwrap_or(NaiveDate::MAX);
    format!("{} - {}", short_day(monday), short_day(sunday))
}

fn short_day(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}
