// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorite-course update service.
//!
//! Handles the core workflow:
//! 1. Query users by exact first/last name
//! 2. Take the first match (warn if there are several)
//! 3. Skip if the course is already a favorite
//! 4. Otherwise append it and write back with a fresh `updatedAt`

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::models::User;
use crate::time_utils::format_utc_rfc3339;

/// Outcome of one updater run. Every variant is a normal, reportable
/// result; failures surface as [`crate::error::AppError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Course appended and the document written back.
    Added {
        course_id: i64,
        total_favorites: usize,
    },
    /// Course was already a favorite; nothing written.
    AlreadyPresent { course_id: i64 },
    /// No document matched the name filter; nothing written.
    NotFound,
}

/// Append a course to one user's favorites, idempotently.
pub struct FavoritesService {
    db: FirestoreDb,
}

impl FavoritesService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Run the update for one user and one course.
    ///
    /// At most one write is issued, and only after the query has resolved.
    /// If several documents match the name filter, the first one returned
    /// is updated and the rest are left alone (logged as a warning —
    /// uniqueness of names is not guaranteed by the data model).
    pub async fn add_course(
        &self,
        first_name: &str,
        last_name: &str,
        course_id: i64,
    ) -> Result<AddOutcome> {
        let matches = self.db.find_users_by_name(first_name, last_name).await?;

        if matches.len() > 1 {
            tracing::warn!(
                first_name,
                last_name,
                match_count = matches.len(),
                "Multiple users match the name filter, updating the first"
            );
        }

        let Some(mut user) = matches.into_iter().next() else {
            return Ok(AddOutcome::NotFound);
        };

        let Some(new_favorites) = with_course_appended(user.favorite_courses(), course_id) else {
            return Ok(AddOutcome::AlreadyPresent { course_id });
        };

        let doc_id = user.doc_id.clone().ok_or_else(|| {
            crate::error::AppError::Database("Query result is missing a document ID".to_string())
        })?;

        let total_favorites = new_favorites.len();
        user.favorite_courses = Some(new_favorites);
        user.updated_at = Some(format_utc_rfc3339(chrono::Utc::now()));

        self.db.update_user_favorites(&doc_id, &user).await?;

        tracing::debug!(doc_id = %doc_id, course_id, "Wrote updated favorites");

        Ok(AddOutcome::Added {
            course_id,
            total_favorites,
        })
    }
}

/// Decide the write: `Some(new array)` with the course appended at the end,
/// or `None` when it is already present and no write should happen.
fn with_course_appended(current: &[i64], course_id: i64) -> Option<Vec<i64>> {
    if current.contains(&course_id) {
        return None;
    }
    let mut updated = current.to_vec();
    updated.push(course_id);
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_empty() {
        assert_eq!(with_course_appended(&[], 3928713), Some(vec![3928713]));
    }

    #[test]
    fn test_appends_at_end() {
        assert_eq!(
            with_course_appended(&[1, 2], 3928713),
            Some(vec![1, 2, 3928713])
        );
    }

    #[test]
    fn test_skips_when_present() {
        assert_eq!(with_course_appended(&[1, 3928713, 2], 3928713), None);
    }

    #[test]
    fn test_decision_is_idempotent() {
        let first = with_course_appended(&[], 7).unwrap();
        assert_eq!(with_course_appended(&first, 7), None);
    }
}
