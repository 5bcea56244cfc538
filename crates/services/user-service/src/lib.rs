//! User Service Library
//!
//! This crate owns the user store: schema migrations, the repository over
//! the `users` table and the service the HTTP gateway calls into.
//! It runs embedded in the gateway process.

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::seed::SeedReport;
use crate::service::{UserManager, UserService};

/// Wire the repository and service over an open database.
pub fn build_user_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Insert the sample users (for CLI commands).
pub async fn run_seed(config: &UserServiceConfig) -> Result<SeedReport, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let repo = UserStore::new(db.get_connection());

    let report = seed::seed_sample_users(&repo).await?;
    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Sample users seeded"
    );

    Ok(report)
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
