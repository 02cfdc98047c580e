// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides the two operations the updater needs:
//! - Look up users by exact first/last name
//! - Field-masked update of one user's favorites and timestamp

use crate::db::collections;
use crate::error::AppError;
use crate::models::User;
use firestore::{path_camel_case, paths_camel_case};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// Credentials are resolved from GOOGLE_APPLICATION_CREDENTIALS (a
    /// service-account key file) by the underlying SDK. For local
    /// development with the emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Find users matching both name fields exactly (case-sensitive).
    ///
    /// Returns all matches; the document ID of each is captured in
    /// [`User::doc_id`]. Query ordering is whatever Firestore returns.
    pub async fn find_users_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        let first_name = first_name.to_string();
        let last_name = last_name.to_string();

        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| {
                q.for_all([
                    q.field(path_camel_case!(User::first_name))
                        .eq(first_name.clone()),
                    q.field(path_camel_case!(User::last_name))
                        .eq(last_name.clone()),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or replace a whole user document.
    ///
    /// The updater never calls this; it exists for seeding fixtures and for
    /// repairing a record by hand from a scratch binary.
    pub async fn upsert_user(&self, doc_id: &str, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(doc_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Write back a user's favorites and timestamp.
    ///
    /// Uses a field mask so only `favoriteCourses` and `updatedAt` are
    /// touched; every other field of the document is left as-is.
    pub async fn update_user_favorites(&self, doc_id: &str, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(paths_camel_case!(User::{favorite_courses, updated_at}))
            .in_col(collections::USERS)
            .document_id(doc_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
