//! Sample data for local development.

use common::{AppResult, StoreError};
use domain::NewUser;

use crate::repository::UserRepository;

/// The three demo users: two with a username, one without.
const SAMPLE_USERS: &[(&str, Option<&str>)] = &[
    ("john@example.com", Some("johndoe")),
    ("jane@example.com", None),
    ("bob@example.com", Some("bobsmith")),
];

/// Outcome of a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Rows that already existed (uniqueness breach on insert)
    pub skipped: usize,
}

/// Build the sample users.
pub fn sample_users() -> AppResult<Vec<NewUser>> {
    SAMPLE_USERS
        .iter()
        .map(|(email, username)| NewUser::new(*email, *username).map_err(Into::into))
        .collect()
}

/// Insert the sample users, skipping those already present.
///
/// Safe to run repeatedly.
pub async fn seed_sample_users(repo: &dyn UserRepository) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for user in sample_users()? {
        let email = user.email.clone();
        match repo.create(user).await {
            Ok(created) => {
                tracing::info!(id = created.id, email = %created.email, "Seeded user");
                report.inserted += 1;
            }
            Err(StoreError::ConstraintViolation(detail)) => {
                tracing::debug!(%email, %detail, "User already present, skipping");
                report.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}
