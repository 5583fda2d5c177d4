//! Rota use-case service.
//!
//! # Responsibility
//! - Expose the operations presentation needs: current duty-holder, week
//!   label, roster listing and mutation.
//! - Recompute rotation state from persisted inputs on every call.
//!
//! # Invariants
//! - Nothing is cached; every read reflects the store and the given instant.
//! - The anchor is created lazily on the first read that needs it.

use crate::model::member::{Member, MemberId, Roster};
use crate::model::rotation_state::RotationState;
use crate::repo::anchor_repo::AnchorStore;
use crate::repo::roster_repo::RosterStore;
use crate::repo::RepoResult;
use crate::schedule::rotation::{select, weeks_since};
use crate::schedule::week_label::week_label;
use crate::store::KeyValueStore;
use chrono::{Local, NaiveDateTime};

/// Use-case facade owning the key-value store.
pub struct RotaService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RotaService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn roster_store(&self) -> RosterStore<&S> {
        RosterStore::new(&self.store)
    }

    fn anchor_store(&self) -> AnchorStore<&S> {
        AnchorStore::new(&self.store)
    }

    /// Full rotation snapshot for the week containing `now`.
    pub fn rotation_state_at(&self, now: NaiveDateTime) -> RepoResult<RotationState> {
        let roster = self.roster_store().load()?;
        let anchor = self.anchor_store().get_or_create_anchor(now.date())?;

        Ok(RotationState {
            current_member: select(now, anchor, &roster).cloned(),
            anchor,
            week_offset: weeks_since(anchor, now.date()),
            week_label: week_label(now.date()),
        })
    }

    /// Member on duty during the week containing `now`, or `None` for an
    /// empty roster.
    pub fn current_scrum_master_at(&self, now: NaiveDateTime) -> RepoResult<Option<Member>> {
        let roster = self.roster_store().load()?;
        if roster.is_empty() {
            return Ok(None);
        }
        let anchor = self.anchor_store().get_or_create_anchor(now.date())?;
        Ok(select(now, anchor, &roster).cloned())
    }

    pub fn current_week_label_at(&self, now: NaiveDateTime) -> String {
        week_label(now.date())
    }

    pub fn rotation_state(&self) -> RepoResult<RotationState> {
        self.rotation_state_at(local_now())
    }

    pub fn current_scrum_master(&self) -> RepoResult<Option<Member>> {
        self.current_scrum_master_at(local_now())
    }

    pub fn current_week_label(&self) -> String {
        self.current_week_label_at(local_now())
    }

    /// Adds a member; whitespace-only names leave the roster unchanged.
    pub fn add_member(&self, name: &str) -> RepoResult<Roster> {
        self.roster_store().add(name)
    }

    /// Removes a member; unknown ids leave the roster unchanged.
    pub fn remove_member(&self, id: MemberId) -> RepoResult<Roster> {
        self.roster_store().remove(id)
    }

    pub fn list_members(&self) -> RepoResult<Roster> {
        self.roster_store().load()
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
