//! User list state for rendering.

use std::fmt;

use tracing::error;

use domain::{UserResponse, LOAD_USERS_ERROR_MESSAGE};

use crate::api::UserApi;

/// Where the list is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
    Error,
}

/// Users shown to the reader plus the current load error, if any.
#[derive(Debug, Clone, Default)]
pub struct UserList {
    users: Vec<UserResponse>,
    error_message: Option<String>,
    state: LoadState,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the list and replace whatever was shown before.
    ///
    /// On failure the list is emptied and a fixed message is set; the
    /// underlying error only goes to the log.
    pub async fn load_users(&mut self, api: &dyn UserApi) {
        match api.get_users().await {
            Ok(users) => {
                self.users = users;
                self.error_message = None;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                error!("Failed to load users: {}", e);
                self.users.clear();
                self.error_message = Some(LOAD_USERS_ERROR_MESSAGE.to_string());
                self.state = LoadState::Error;
            }
        }
    }

    pub fn users(&self) -> &[UserResponse] {
        &self.users
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}

/// Renders a username/email table, or the error message.
impl fmt::Display for UserList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.error_message {
            return writeln!(f, "{message}");
        }

        let width = self
            .users
            .iter()
            .filter_map(|u| u.username.as_deref())
            .map(str::len)
            .chain(std::iter::once("Username".len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{:<width$}  Email", "Username")?;
        for user in &self.users {
            writeln!(
                f,
                "{:<width$}  {}",
                user.username.as_deref().unwrap_or(""),
                user.email
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockUserApi;
    use crate::error::ClientError;

    fn user(id: i32, email: &str, username: Option<&str>) -> UserResponse {
        UserResponse {
            id,
            email: email.to_string(),
            username: username.map(str::to_string),
        }
    }

    fn api_returning(users: Vec<UserResponse>) -> MockUserApi {
        let mut api = MockUserApi::new();
        api.expect_get_users().returning(move || Ok(users.clone()));
        api
    }

    fn failing_api() -> MockUserApi {
        let mut api = MockUserApi::new();
        api.expect_get_users()
            .returning(|| Err(ClientError::Status(500)));
        api
    }

    #[test]
    fn new_list_is_unloaded() {
        let list = UserList::new();
        assert_eq!(list.state(), LoadState::Unloaded);
        assert!(list.users().is_empty());
        assert!(list.error_message().is_none());
    }

    #[tokio::test]
    async fn load_users_success_stores_list() {
        let users = vec![
            user(1, "john@example.com", Some("johndoe")),
            user(2, "jane@example.com", None),
        ];
        let mut list = UserList::new();

        list.load_users(&api_returning(users.clone())).await;

        assert_eq!(list.state(), LoadState::Loaded);
        assert_eq!(list.users(), users.as_slice());
        assert!(list.error_message().is_none());
    }

    #[tokio::test]
    async fn load_users_failure_sets_fixed_message() {
        let mut list = UserList::new();

        list.load_users(&failing_api()).await;

        assert_eq!(list.state(), LoadState::Error);
        assert!(list.users().is_empty());
        assert_eq!(list.error_message(), Some(LOAD_USERS_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn failure_after_success_discards_stale_users() {
        let mut list = UserList::new();
        list.load_users(&api_returning(vec![user(1, "john@example.com", None)]))
            .await;

        list.load_users(&failing_api()).await;

        assert!(list.users().is_empty());
        assert_eq!(list.error_message(), Some(LOAD_USERS_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn success_after_failure_clears_error() {
        let mut list = UserList::new();
        list.load_users(&failing_api()).await;

        list.load_users(&api_returning(vec![])).await;

        assert_eq!(list.state(), LoadState::Loaded);
        assert!(list.error_message().is_none());
    }

    #[tokio::test]
    async fn display_renders_table_with_blank_missing_username() {
        let mut list = UserList::new();
        list.load_users(&api_returning(vec![
            user(1, "john@example.com", Some("johndoe")),
            user(2, "jane@example.com", None),
        ]))
        .await;

        let rendered = list.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Username  Email");
        assert_eq!(lines[1], "johndoe   john@example.com");
        assert_eq!(lines[2], "          jane@example.com");
    }

    #[tokio::test]
    async fn display_renders_error_message_only() {
        let mut list = UserList::new();
        list.load_users(&failing_api()).await;

        assert_eq!(list.to_string(), format!("{LOAD_USERS_ERROR_MESSAGE}\n"));
    }
}
