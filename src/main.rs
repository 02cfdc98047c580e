// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Course-Favorites updater
//!
//! One-shot admin tool: finds a user by first/last name in Firestore and
//! appends a course ID to their `favoriteCourses` if it is not already
//! there. Runs once, reports a single outcome line, and exits.

use anyhow::Context;
use course_favorites::{
    config::Config,
    db::FirestoreDb,
    services::{AddOutcome, FavoritesService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(
        first_name = %config.target_first_name,
        last_name = %config.target_last_name,
        course_id = config.course_id,
        "Starting favorite-course update"
    );

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .context("Failed to connect to Firestore")?;

    let favorites = FavoritesService::new(db);

    match favorites
        .add_course(
            &config.target_first_name,
            &config.target_last_name,
            config.course_id,
        )
        .await
    {
        Ok(AddOutcome::Added {
            course_id,
            total_favorites,
        }) => {
            tracing::info!(course_id, total_favorites, "Added course to favorites");
        }
        Ok(AddOutcome::AlreadyPresent { course_id }) => {
            tracing::warn!(course_id, "Course already in favorites, nothing to do");
        }
        Ok(AddOutcome::NotFound) => {
            tracing::info!(
                first_name = %config.target_first_name,
                last_name = %config.target_last_name,
                "No user found"
            );
        }
        Err(e) => {
            // Terminal: no retry, the single document write is atomic so
            // there is no partial state to clean up.
            tracing::error!(error = %e, "Favorite-course update failed");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Initialize console logging with env-filter overrides.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("course_favorites=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
