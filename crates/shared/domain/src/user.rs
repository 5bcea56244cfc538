//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_USERNAME_LENGTH};
use crate::error::DomainResult;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier, always positive
    pub id: i32,
    pub email: String,
    /// Optional handle; unique only among users that have one
    pub username: Option<String>,
}

impl User {
    /// Create a user from already persisted values
    pub fn new(id: i32, email: impl Into<String>, username: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            username,
        }
    }
}

/// Data required to insert a user into the store.
///
/// Only the seeding command and tests write users; there is no HTTP write path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewUser {
    /// Any non-empty string; the store does not check the address format
    #[validate(length(min = 1, max = MAX_EMAIL_LENGTH))]
    pub email: String,
    /// Optional username
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: Option<String>,
}

impl NewUser {
    /// Build and validate a new user.
    pub fn new(email: impl Into<String>, username: Option<&str>) -> DomainResult<Self> {
        let user = Self {
            email: email.into(),
            username: username.map(str::to_string),
        };
        user.validate()?;
        Ok(user)
    }
}

/// User as exposed over HTTP.
///
/// `username` is always present on the wire, as `null` when the user has
/// none. A body without the key is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Username, if the user has one
    #[cfg_attr(feature = "openapi", schema(example = "johndoe", nullable))]
    #[serde(deserialize_with = "Option::deserialize")]
    pub username: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn null_username_is_serialized_not_omitted() {
        let response = UserResponse::from(User::new(2, "jane@example.com", None));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "email": "jane@example.com", "username": null })
        );
    }

    #[test]
    fn explicit_null_username_deserializes_as_none() {
        let response: UserResponse =
            serde_json::from_str(r#"{ "id": 5, "email": "a@example.com", "username": null }"#)
                .unwrap();
        assert_eq!(response.username, None);
    }

    #[test]
    fn missing_username_key_is_rejected() {
        let result =
            serde_json::from_str::<UserResponse>(r#"{ "id": 5, "email": "a@example.com" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_user_accepts_missing_username() {
        let user = NewUser::new("jane@example.com", None).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert!(user.username.is_none());
    }

    #[test]
    fn new_user_rejects_empty_email() {
        let result = NewUser::new("", Some("nobody"));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn new_user_rejects_overlong_fields() {
        let local = "a".repeat(250);
        assert!(NewUser::new(format!("{local}@example.com"), None).is_err());

        let username = "u".repeat(256);
        assert!(NewUser::new("ok@example.com", Some(&username)).is_err());
    }

    #[test]
    fn new_user_accepts_email_without_address_format() {
        let user = NewUser::new("not-an-address", None).unwrap();
        assert_eq!(user.email, "not-an-address");
    }

    #[test]
    fn new_user_accepts_fields_at_the_limit() {
        let email = "e".repeat(MAX_EMAIL_LENGTH as usize);
        let username = "u".repeat(MAX_USERNAME_LENGTH as usize);
        assert!(NewUser::new(email, Some(&username)).is_ok());
    }

    #[test]
    fn new_user_rejects_empty_username() {
        assert!(NewUser::new("ok@example.com", Some("")).is_err());
    }
}
