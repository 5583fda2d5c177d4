//! Roster persistence under the `Members` key.
//!
//! # Invariants
//! - Absent or unparseable `Members` loads as an empty roster.
//! - Whitespace-only names are rejected as a no-op with no write.
//! - Removing an unknown id is a no-op, not an error.

use crate::model::member::{MemberId, Roster};
use crate::repo::RepoResult;
use crate::store::{KeyValueStore, MEMBERS_KEY};
use log::{debug, info, warn};

/// Ordered roster backed by a key-value store.
pub struct RosterStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RosterStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the persisted roster, falling back to empty on malformed data.
    pub fn load(&self) -> RepoResult<Roster> {
        let Some(raw) = self.store.get(MEMBERS_KEY)? else {
            return Ok(Roster::new());
        };

        match parse_roster(&raw) {
            Ok(roster) => Ok(roster),
            Err(reason) => {
                warn!(
                    "event=roster_load module=roster status=recovered reason={} fallback=empty",
                    reason
                );
                Ok(Roster::new())
            }
        }
    }

    /// Appends a member named `name.trim()` under the next id and persists.
    ///
    /// Returns the unchanged snapshot when the trimmed name is empty.
    pub fn add(&self, name: &str) -> RepoResult<Roster> {
        let current = self.load()?;
        let next = match current.with_member(name) {
            Ok(next) => next,
            Err(err) => {
                debug!(
                    "event=roster_add module=roster status=rejected reason=\"{}\"",
                    err
                );
                return Ok(current);
            }
        };

        self.persist(&next)?;
        info!(
            "event=roster_add module=roster status=ok member_id={} size={}",
            next.members().last().map_or(0, |member| member.id),
            next.len()
        );
        Ok(next)
    }

    /// Removes member `id` and persists the resulting snapshot.
    pub fn remove(&self, id: MemberId) -> RepoResult<Roster> {
        let current = self.load()?;
        let found = current.contains(id);
        let next = current.without_member(id);

        self.persist(&next)?;
        info!(
            "event=roster_remove module=roster status={} member_id={} size={}",
            if found { "ok" } else { "not_found" },
            id,
            next.len()
        );
        Ok(next)
    }

    fn persist(&self, roster: &Roster) -> RepoResult<()> {
        let encoded = serde_json::to_string(roster)?;
        self.store.set(MEMBERS_KEY, &encoded)?;
        Ok(())
    }
}

fn parse_roster(raw: &str) -> Result<Roster, String> {
    let roster: Roster = serde_json::from_str(raw).map_err(|err| format!("\"{err}\""))?;
    roster.validate().map_err(|err| format!("\"{err}\""))?;
    Ok(roster)
}
