//! Core domain logic for the weekly duty rotation.
//! This crate is the single source of truth for rotation invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod store;

pub use config::RotaConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{Member, MemberId, MemberValidationError, Roster};
pub use model::rotation_state::RotationState;
pub use repo::anchor_repo::AnchorStore;
pub use repo::roster_repo::RosterStore;
pub use repo::{RepoError, RepoResult};
pub use schedule::rotation::{
    first_monday_on_or_after_jan1, rotation_index, select, week_monday, weeks_since,
};
pub use schedule::week_label::week_label;
pub use service::rota_service::RotaService;
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
