//! Roster and anchor persistence over the generic key-value store.
//!
//! # Responsibility
//! - Load/persist the `Members` and `RotationStartDate` entries.
//! - Recover from malformed persisted state without surfacing failures.
//!
//! # Invariants
//! - Every mutation is persisted before its snapshot is returned.
//! - Only store transport failures are returned as errors.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod anchor_repo;
pub mod roster_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for roster and anchor persistence.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode rota state: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
