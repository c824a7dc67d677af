//! Types for web API requests and responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

// =============================================================================
// Catalog IDs
// =============================================================================

/// Catalog track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Catalog album identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(String);

impl AlbumId {
    /// Create a new album ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Library Types
// =============================================================================

/// Which saved-items collection a library call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    Tracks,
    Albums,
}

impl LibraryKind {
    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            LibraryKind::Tracks => "me/tracks",
            LibraryKind::Albums => "me/albums",
        }
    }

    /// Path of the membership check endpoint.
    pub fn contains_path(&self) -> &'static str {
        match self {
            LibraryKind::Tracks => "me/tracks/contains",
            LibraryKind::Albums => "me/albums/contains",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryKind::Tracks => "tracks",
            LibraryKind::Albums => "albums",
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership flags returned by a contains check.
///
/// One flag per requested ID, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainsResult(Vec<bool>);

impl ContainsResult {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, bool> {
        self.0.iter()
    }

    /// True if every requested ID is saved.
    pub fn all(&self) -> bool {
        self.0.iter().all(|&b| b)
    }

    /// Pair each flag with the ID it answers for.
    pub fn zip_ids<'a, I: AsRef<str>>(&'a self, ids: &'a [I]) -> Vec<(&'a str, bool)> {
        ids.iter()
            .map(|id| id.as_ref())
            .zip(self.0.iter().copied())
            .collect()
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl Index<usize> for ContainsResult {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl IntoIterator for ContainsResult {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContainsResult {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ContainsResult> for Vec<bool> {
    fn from(result: ContainsResult) -> Self {
        result.0
    }
}

/// Request body for save/remove endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct IdsRequest<'a> {
    pub ids: &'a [&'a str],
}

// =============================================================================
// Error Types
// =============================================================================

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}
