//! Migration: Create the users table.
//!
//! `email` is unique and non-empty. `username` is unique only among non-null
//! values, enforced by a partial index so any number of users may have none.
//! Length limits are CHECK constraints as well, since SQLite ignores the
//! declared `varchar` size.

use domain::{MAX_EMAIL_LENGTH, MAX_USERNAME_LENGTH};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

const USERNAME_INDEX: &str = "idx_users_username";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH as u32)
                            .not_null()
                            .unique_key()
                            .check(Expr::col(Users::Email).ne("").and(Expr::cust(format!(
                                "length(email) <= {MAX_EMAIL_LENGTH}"
                            )))),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(MAX_USERNAME_LENGTH as u32)
                            .null()
                            .check(Expr::cust(format!(
                                "username IS NULL OR length(username) <= {MAX_USERNAME_LENGTH}"
                            ))),
                    )
                    .to_owned(),
            )
            .await?;

        // sea-query has no portable partial index builder; both PostgreSQL and
        // SQLite accept this statement as written.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {USERNAME_INDEX} \
                 ON users (username) WHERE username IS NOT NULL"
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP INDEX IF EXISTS {USERNAME_INDEX}"))
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Username,
}
