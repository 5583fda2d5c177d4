//! Anchor ("week zero" Monday) persistence under the `RotationStartDate` key.
//!
//! # Invariants
//! - The returned anchor is always a Monday.
//! - Once persisted, the anchor is reused unchanged; this module never
//!   overwrites a parseable value.
//! - The stored timestamp is local midnight expressed in UTC, so reading it
//!   back on the same host yields the same calendar date.

use crate::repo::RepoResult;
use crate::schedule::rotation::{first_monday_on_or_after_jan1, week_monday};
use crate::store::{KeyValueStore, ROTATION_START_DATE_KEY};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, SecondsFormat, Utc};
use log::{info, warn};

const PLAIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Write-once anchor date backed by a key-value store.
pub struct AnchorStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AnchorStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the persisted anchor, creating it from `today`'s year if absent,
    /// unparseable, or without a representable week Monday.
    pub fn get_or_create_anchor(&self, today: NaiveDate) -> RepoResult<NaiveDate> {
        if let Some(raw) = self.store.get(ROTATION_START_DATE_KEY)? {
            let decoded = decode_anchor(&raw)
                .and_then(|stored| week_monday(stored).map(|anchor| (stored, anchor)));
            if let Some((stored, anchor)) = decoded {
                if anchor != stored {
                    warn!(
                        "event=anchor_load module=anchor status=normalized stored={} anchor={}",
                        stored, anchor
                    );
                }
                return Ok(anchor);
            }
            warn!("event=anchor_load module=anchor status=recovered reason=unparseable fallback=recompute");
        }

        let anchor = default_anchor(today);
        self.store
            .set(ROTATION_START_DATE_KEY, &encode_anchor(anchor))?;
        info!("event=anchor_init module=anchor status=ok anchor={anchor}");
        Ok(anchor)
    }
}

fn default_anchor(today: NaiveDate) -> NaiveDate {
    first_monday_on_or_after_jan1(today.year())
        .or_else(|| week_monday(today))
        .unwrap_or(today)
}

/// Serializes `anchor` as an RFC 3339 UTC timestamp of its local midnight.
///
/// Falls back to a plain `YYYY-MM-DD` date when the host zone has no valid
/// early-morning instant on that day.
pub fn encode_anchor(anchor: NaiveDate) -> String {
    match local_start_of_day(anchor) {
        Some(instant) => instant
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        None => anchor.format(PLAIN_DATE_FORMAT).to_string(),
    }
}

/// Parses a stored anchor into its host-local calendar date.
pub fn decode_anchor(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    NaiveDate::parse_from_str(trimmed, PLAIN_DATE_FORMAT).ok()
}

fn local_start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    // Zones with a DST jump at midnight have no 00:00 on that day.
    [0, 1, 2]
        .into_iter()
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| date.and_time(time).and_local_timezone(Local).earliest())
}
