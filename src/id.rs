// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::errors::IdError;

/// Substring marking an id as generated on the client for a record the server has not seen yet.
pub const TEMPORARY_ID_MARKER: &str = "@tmp";

/// Literal id some screens use for "new" records. Treated like a temporary id on submission.
pub const SENTINEL_ID: &str = "0";

/// Source for the unique suffix of temporary ids. Never reset, so ids are never reused within a
/// process, not even after the record holding one got removed.
static NEXT_TEMPORARY_SUFFIX: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier of a record, either assigned by the server or generated on the client.
///
/// Client-generated ids contain [`TEMPORARY_ID_MARKER`]. This is the only signal telling the
/// server whether a submitted record should be created or updated, which is why such ids never
/// leave the client, see [`EntityId::submission_id`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Returns an id from a string, failing when it is empty.
    pub fn new(value: &str) -> Result<Self, IdError> {
        if value.is_empty() {
            return Err(IdError::Empty);
        }

        Ok(Self(value.to_owned()))
    }

    /// Generates a fresh temporary id, unique for the lifetime of the process.
    pub fn temporary() -> Self {
        let suffix = NEXT_TEMPORARY_SUFFIX.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}{}", TEMPORARY_ID_MARKER, suffix))
    }

    /// Generates a temporary id with the given prefix in front of the marker, for example
    /// `prop@tmp<property type id>` for default properties derived from a property type.
    pub fn temporary_with_prefix(prefix: &str, suffix: &str) -> Self {
        Self(format!("{}{}{}", prefix, TEMPORARY_ID_MARKER, suffix))
    }

    /// Returns true if this id was generated on the client.
    pub fn is_temporary(&self) -> bool {
        self.0.contains(TEMPORARY_ID_MARKER)
    }

    /// Returns true if this id is the "new record" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.0 == SENTINEL_ID
    }

    /// Returns the id to send to the server, `None` if the record has to be created there.
    pub fn submission_id(&self) -> Option<String> {
        if self.is_temporary() || self.is_sentinel() {
            None
        } else {
            Some(self.0.clone())
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::convert::TryFrom<String> for EntityId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value).unwrap()
    }
}
