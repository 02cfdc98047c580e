//! User model for Firestore storage.

use serde::{Deserialize, Serialize};

/// User document stored in Firestore.
///
/// The document is externally owned and carries fields beyond these; updates
/// go through a field mask so nothing else is clobbered. Field names on the
/// wire are camelCase (`firstName`, `favoriteCourses`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Firestore document ID, injected by the client on reads.
    /// Never written back.
    #[serde(default, alias = "_firestore_id", skip_serializing)]
    pub doc_id: Option<String>,
    /// First name (exact-match lookup key)
    pub first_name: String,
    /// Last name (exact-match lookup key)
    pub last_name: String,
    /// Course IDs the user has marked as favorites.
    /// Missing or null in storage means "no favorites yet".
    #[serde(default)]
    pub favorite_courses: Option<Vec<i64>>,
    /// When this tool last touched the document (RFC3339)
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Current favorites, treating a missing or null field as empty.
    pub fn favorite_courses(&self) -> &[i64] {
        self.favorite_courses.as_deref().unwrap_or_default()
    }
}
