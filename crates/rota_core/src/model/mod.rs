//! Domain model for the weekly duty rotation.
//!
//! # Responsibility
//! - Define the member/roster shapes persisted under the `Members` key.
//! - Own the roster mutation rules (id assignment, trimming, removal).
//!
//! # Invariants
//! - Member ids are unique within a roster.
//! - Roster order is insertion order and defines rotation positions.

pub mod member;
pub mod rotation_state;
