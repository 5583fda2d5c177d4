//! Durable key-value store contracts and implementations.
//!
//! # Responsibility
//! - Define the minimal string key/value contract rota state is persisted through.
//! - Keep SQLite details out of roster/anchor stores.
//!
//! # Invariants
//! - `set` is durable once it returns `Ok`.
//! - `get` after `set` on the same store returns the written value verbatim.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

/// Key holding the serialized roster.
pub const MEMBERS_KEY: &str = "Members";
/// Key holding the serialized anchor timestamp.
pub const ROTATION_START_DATE_KEY: &str = "RotationStartDate";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure of a durable store.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "key-value store failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key/value persistence used for all rota state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
