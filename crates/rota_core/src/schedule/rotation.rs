//! Round-robin selection anchored to a fixed Monday.
//!
//! Selection is positional: adding or removing a member shifts which member
//! owns every later week, and possibly the current one.

use crate::model::member::{Member, Roster};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

const DAYS_PER_WEEK: i64 = 7;

/// Monday of the Monday-to-Sunday week containing `date`.
///
/// Returns `None` only when that Monday precedes chrono's earliest date.
pub fn week_monday(date: NaiveDate) -> Option<NaiveDate> {
    let weekday_from_sunday = i64::from(date.weekday().num_days_from_sunday());
    let days_since_monday = (weekday_from_sunday + 6).rem_euclid(DAYS_PER_WEEK);
    date.checked_sub_signed(TimeDelta::days(days_since_monday))
}

/// Signed number of whole weeks from `anchor` to the week containing `date`.
///
/// Negative when `anchor` postdates `date`'s week. `None` when `date`'s week
/// has no representable Monday.
pub fn weeks_since(anchor: NaiveDate, date: NaiveDate) -> Option<i64> {
    let days = (week_monday(date)? - anchor).num_days();
    Some(days.div_euclid(DAYS_PER_WEEK))
}

/// Non-negative position for `weeks` in a roster of `len` members.
pub fn rotation_index(weeks: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|len| *len > 0)?;
    usize::try_from(weeks.rem_euclid(len)).ok()
}

/// Member on duty during the week containing `now`.
///
/// Returns `None` for an empty roster, or when `now` has no representable
/// week Monday.
pub fn select<'r>(
    now: NaiveDateTime,
    anchor: NaiveDate,
    roster: &'r Roster,
) -> Option<&'r Member> {
    let index = rotation_index(weeks_since(anchor, now.date())?, roster.len())?;
    roster.get(index)
}

/// Default anchor for `year`: January 1st when it is a Monday, otherwise the
/// next Monday after it.
///
/// Returns `None` only for years outside chrono's supported range.
pub fn first_monday_on_or_after_jan1(year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let days_to_add = match jan1.weekday().num_days_from_sunday() {
        0 => 1,
        1 => 0,
        dow => 8 - i64::from(dow),
    };
    jan1.checked_add_signed(TimeDelta::days(days_to_add))
}

#[cfg(test)]
mod tests {
    use super::{first_monday_on_or_after_jan1, rotation_index, select, week_monday, weeks_since};
    use crate::model::member::Roster;
    use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn roster(names: &[&str]) -> Roster {
        names
            .iter()
            .try_fold(Roster::new(), |roster, name| roster.with_member(name))
            .unwrap()
    }

    #[test]
    fn week_monday_maps_sunday_back_six_days() {
        assert_eq!(week_monday(date(2024, 1, 28)), Some(date(2024, 1, 22)));
        assert_eq!(week_monday(date(2024, 1, 22)), Some(date(2024, 1, 22)));
        assert_eq!(week_monday(date(2024, 1, 24)), Some(date(2024, 1, 22)));
    }

    #[test]
    fn week_monday_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(week_monday(date(2025, 1, 1)), Some(date(2024, 12, 30)));
    }

    #[test]
    fn week_monday_before_earliest_date_is_none() {
        // NaiveDate::MIN is a Thursday.
        assert_eq!(week_monday(NaiveDate::MIN), None);
        assert_eq!(weeks_since(date(2024, 1, 1), NaiveDate::MIN), None);
        let earliest = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
        assert!(select(earliest, date(2024, 1, 1), &roster(&["A"])).is_none());
    }

    #[test]
    fn weeks_since_is_negative_for_future_anchor() {
        assert_eq!(weeks_since(date(2024, 1, 29), date(2024, 1, 22)), Some(-1));
        assert_eq!(weeks_since(date(2024, 3, 4), date(2024, 1, 24)), Some(-6));
    }

    #[test]
    fn rotation_index_is_non_negative() {
        assert_eq!(rotation_index(-1, 3), Some(2));
        assert_eq!(rotation_index(-3, 3), Some(0));
        assert_eq!(rotation_index(4, 3), Some(1));
        assert_eq!(rotation_index(4, 0), None);
    }

    #[test]
    fn select_matches_worked_example() {
        let anchor = date(2024, 1, 1);
        let team = roster(&["Alice", "Bob", "Carol"]);

        let first = select(at(2024, 1, 22, 0, 0), anchor, &team).unwrap();
        assert_eq!((first.id, first.name.as_str()), (1, "Alice"));

        let second = select(at(2024, 1, 29, 9, 30), anchor, &team).unwrap();
        assert_eq!((second.id, second.name.as_str()), (2, "Bob"));
    }

    #[test]
    fn select_changes_only_at_monday_midnight() {
        let anchor = date(2024, 1, 1);
        let team = roster(&["Alice", "Bob"]);

        let sunday_late = select(at(2024, 1, 7, 23, 59), anchor, &team).unwrap();
        let monday_early = select(at(2024, 1, 8, 0, 0), anchor, &team).unwrap();
        assert_eq!(sunday_late.name, "Alice");
        assert_eq!(monday_early.name, "Bob");
    }

    #[test]
    fn select_on_empty_roster_is_none() {
        assert!(select(at(2024, 1, 22, 12, 0), date(2024, 1, 1), &Roster::new()).is_none());
    }

    #[test]
    fn select_wraps_for_future_anchor() {
        let team = roster(&["Alice", "Bob", "Carol"]);
        let picked = select(at(2024, 1, 22, 12, 0), date(2024, 1, 29), &team).unwrap();
        assert_eq!(picked.name, "Carol");
    }

    #[test]
    fn first_monday_handles_each_jan1_weekday() {
        // 2026-01-01 is a Thursday.
        assert_eq!(first_monday_on_or_after_jan1(2026), Some(date(2026, 1, 5)));
        // 2024-01-01 is a Monday.
        assert_eq!(first_monday_on_or_after_jan1(2024), Some(date(2024, 1, 1)));
        // 2023-01-01 is a Sunday.
        assert_eq!(first_monday_on_or_after_jan1(2023), Some(date(2023, 1, 2)));
        // 2022-01-01 is a Saturday.
        assert_eq!(first_monday_on_or_after_jan1(2022), Some(date(2022, 1, 3)));
        // 2019-01-01 is a Tuesday.
        assert_eq!(first_monday_on_or_after_jan1(2019), Some(date(2019, 1, 7)));
    }

    #[test]
    fn first_monday_is_always_a_monday_within_a_week() {
        for year in 1990..2100 {
            let anchor = first_monday_on_or_after_jan1(year).unwrap();
            assert_eq!(anchor.weekday(), Weekday::Mon, "year {year}");
            assert_eq!(anchor.year(), year);
            assert!(anchor.ordinal() <= 7, "year {year}");
        }
    }
}
