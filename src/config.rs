//! Application configuration loaded from environment variables.
//!
//! Firestore credentials themselves are not read here: the client resolves
//! the service-account bundle from GOOGLE_APPLICATION_CREDENTIALS (or the
//! emulator, see [`crate::db::FirestoreDb`]).

use std::env;

/// Default target user and course for the one-off data fix.
const DEFAULT_FIRST_NAME: &str = "Tobias";
const DEFAULT_LAST_NAME: &str = "Hanner";
/// Stockholms Golfklubb
const DEFAULT_COURSE_ID: i64 = 3_928_713;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// First name of the user to update (exact, case-sensitive)
    pub target_first_name: String,
    /// Last name of the user to update (exact, case-sensitive)
    pub target_last_name: String,
    /// Course ID to append to the user's favorites
    pub course_id: i64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            target_first_name: DEFAULT_FIRST_NAME.to_string(),
            target_last_name: DEFAULT_LAST_NAME.to_string(),
            course_id: DEFAULT_COURSE_ID,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The target user and course are compiled-in defaults; the env
    /// overrides exist so the tool can be pointed at another record
    /// without a rebuild.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            target_first_name: env::var("TARGET_FIRST_NAME")
                .unwrap_or_else(|_| DEFAULT_FIRST_NAME.to_string()),
            target_last_name: env::var("TARGET_LAST_NAME")
                .unwrap_or_else(|_| DEFAULT_LAST_NAME.to_string()),
            course_id: match env::var("COURSE_ID") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("COURSE_ID"))?,
                Err(_) => DEFAULT_COURSE_ID,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: cargo runs tests in parallel and these share env vars.
    #[test]
    fn test_config_from_env() {
        env::remove_var("GCP_PROJECT_ID");
        env::remove_var("TARGET_FIRST_NAME");
        env::remove_var("TARGET_LAST_NAME");
        env::remove_var("COURSE_ID");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.gcp_project_id, "local-dev");
        assert_eq!(config.target_first_name, "Tobias");
        assert_eq!(config.target_last_name, "Hanner");
        assert_eq!(config.course_id, 3_928_713);

        env::set_var("TARGET_FIRST_NAME", "Ada");
        env::set_var("TARGET_LAST_NAME", "Lovelace");
        env::set_var("COURSE_ID", "42");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.target_first_name, "Ada");
        assert_eq!(config.target_last_name, "Lovelace");
        assert_eq!(config.course_id, 42);

        env::set_var("COURSE_ID", "not-a-number");
        let err = Config::from_env().expect_err("Config should fail");
        assert!(matches!(err, ConfigError::Invalid("COURSE_ID")));

        env::remove_var("TARGET_FIRST_NAME");
        env::remove_var("TARGET_LAST_NAME");
        env::remove_var("COURSE_ID");
    }
}
