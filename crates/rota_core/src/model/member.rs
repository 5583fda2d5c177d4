//! Member and roster model.
//!
//! # Invariants
//! - `Member::name` is non-empty after trimming.
//! - Next id is `max(existing ids) + 1`, or `1` for an empty roster.
//! - A roster never holds two members with the same id.
//! - Members are never mutated in place; mutations produce a new snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer identifier of one roster member.
pub type MemberId = i64;

/// One eligible duty-holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

/// Validation errors for member and roster invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    DuplicateId(MemberId),
    IdSpaceExhausted,
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "member name cannot be empty"),
            Self::DuplicateId(id) => write!(f, "duplicate member id {id} in roster"),
            Self::IdSpaceExhausted => write!(f, "member id {} leaves no next id", MemberId::MAX),
        }
    }
}

impl Error for MemberValidationError {}

impl Member {
    /// Builds a member with a trimmed name.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    pub fn new(id: MemberId, name: &str) -> Result<Self, MemberValidationError> {
        let member = Self {
            id,
            name: name.trim().to_string(),
        };
        member.validate()?;
        Ok(member)
    }

    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Ordered collection of members.
///
/// Serialized as a bare JSON array so the persisted `Members` value stays a
/// plain list of `{id, name}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from already-ordered members, checking invariants.
    pub fn from_members(members: Vec<Member>) -> Result<Self, MemberValidationError> {
        let roster = Self { members };
        roster.validate()?;
        Ok(roster)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|member| member.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Id the next appended member receives.
    ///
    /// # Errors
    /// - `IdSpaceExhausted` when the largest id is `MemberId::MAX`.
    pub fn next_id(&self) -> Result<MemberId, MemberValidationError> {
        match self.members.iter().map(|member| member.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(MemberValidationError::IdSpaceExhausted),
        }
    }

    /// Returns a new snapshot with `name` appended under the next id.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to nothing; `self` is untouched.
    /// - `IdSpaceExhausted` when no next id exists.
    pub fn with_member(&self, name: &str) -> Result<Self, MemberValidationError> {
        let member = Member::new(self.next_id()?, name)?;
        let mut members = self.members.clone();
        members.push(member);
        Ok(Self { members })
    }

    /// Returns a new snapshot without the member `id`. Unknown ids yield an
    /// identical snapshot.
    pub fn without_member(&self, id: MemberId) -> Self {
        Self {
            members: self
                .members
                .iter()
                .filter(|member| member.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Checks non-empty names, id uniqueness, and that a next id exists.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            member.validate()?;
            if !seen.insert(member.id) {
                return Err(MemberValidationError::DuplicateId(member.id));
            }
        }
        self.next_id()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
