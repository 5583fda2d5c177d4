//! Derived rotation snapshot handed to presentation.

use crate::model::member::Member;
use chrono::NaiveDate;
use serde::Serialize;

/// Recomputed on every read; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationState {
    /// `None` when the roster is empty.
    pub current_member: Option<Member>,
    pub anchor: NaiveDate,
    /// Signed weeks between the anchor and the current week; `None` only at
    /// the edge of the representable date range.
    pub week_offset: Option<i64>,
    pub week_label: String,
}
