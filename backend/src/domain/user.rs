//! User entity and its validated field types.
//!
//! Users are created by an external enrolment flow; this service only reads,
//! edits, and deletes them. Login and email are required and must be
//! non-empty; the identifier is immutable once assigned.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised when constructing user field types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyLogin,
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLogin => write!(f, "login must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an already-parsed UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account login name. Guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct Login(String);

impl Login {
    /// Validate and construct a [`Login`].
    pub fn new(login: impl Into<String>) -> Result<Self, UserValidationError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(UserValidationError::EmptyLogin);
        }
        Ok(Self(login))
    }

    /// Borrow the login as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Login> for String {
    fn from(value: Login) -> Self {
        value.0
    }
}

impl TryFrom<String> for Login {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Contact email address. Guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }

    /// Borrow the email as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// User entity mirroring a persisted row.
///
/// The role relationship is carried as an explicit foreign-key field; role
/// rows themselves are never mutated through this service. Serialisation
/// uses camelCase and is the "raw" shape exposed by the public listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Immutable identifier.
    #[serde(rename = "userId")]
    pub id: UserId,
    pub first_name: String,
    /// Optional second (family) name.
    pub second_name: Option<String>,
    pub middle_name: String,
    pub login: Login,
    pub email: Email,
    pub created_date: NaiveDate,
    /// Foreign key into the roles table.
    pub role_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn login_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(Login::new(raw), Err(UserValidationError::EmptyLogin));
    }

    #[rstest]
    #[case("")]
    #[case(" \t ")]
    fn email_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(Email::new(raw), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn login_round_trips_through_serde() {
        let login = Login::new("alice").expect("valid login");
        let json = serde_json::to_string(&login).expect("serialise");
        assert_eq!(json, "\"alice\"");
        let back: Login = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, login);
    }

    #[test]
    fn blank_login_fails_deserialisation() {
        let result: Result<Login, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn user_serialises_with_camel_case_keys() {
        let user = User {
            id: UserId::random(),
            first_name: "Ada".into(),
            second_name: Some("Lovelace".into()),
            middle_name: "Byron".into(),
            login: Login::new("ada").expect("valid login"),
            email: Email::new("ada@example.com").expect("valid email"),
            created_date: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
            role_id: 1,
        };
        let value = serde_json::to_value(&user).expect("serialise");
        assert!(value.get("userId").is_some());
        assert!(value.get("firstName").is_some());
        assert!(value.get("roleId").is_some());
        assert!(value.get("first_name").is_none());
    }
}
