//! Weekly rotation scheduling.
//!
//! # Responsibility
//! - Map a local date/time onto a week offset from the anchor Monday.
//! - Select the duty-holder for that week by positional round-robin.
//! - Format the current week span for display.
//!
//! # Invariants
//! - Everything here is pure: no I/O, no clock reads, no failure modes other
//!   than `None` for an empty roster.
//! - Week boundaries are local midnight into Monday.

pub mod rotation;
pub mod week_label;
