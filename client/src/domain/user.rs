//! User data model.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::datetime::deserialize_optional_timestamp;
use super::ids::entity_id;

/// Validation errors returned when building user drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    InvalidEmail,
    EmptyPassword,
    UnknownRole,
    UnknownGender,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like name@domain"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::UnknownRole => write!(f, "role must be one of: user, admin"),
            Self::UnknownGender => write!(f, "gender must be one of: male, female, other"),
        }
    }
}

impl std::error::Error for UserValidationError {}

entity_id!(
    /// Stable user identifier assigned by the API.
    UserId,
    "user"
);

/// Access level granted by the API.
///
/// The API omits the role for ordinary accounts, so a missing value
/// deserialises as [`Role::User`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary account.
    #[default]
    User,
    /// Administrator with access to the admin console.
    Admin,
}

impl Role {
    /// Whether this role grants access to the admin console.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(UserValidationError::UnknownRole),
        }
    }
}

/// Optional gender recorded on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(UserValidationError::UnknownGender),
        }
    }
}

/// Account as returned by the API.
///
/// The client holds a read-only copy tied to the current session; the API
/// owns the record. The wire name for the identifier is `user_id`, though
/// `id` is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id", alias = "id")]
    id: UserId,
    username: String,
    email: String,
    #[serde(default)]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birth_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<NaiveDateTime>,
}

impl User {
    /// Build a user with the fields every account carries.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            role,
            full_name: None,
            gender: None,
            birth_date: None,
            created_at: None,
        }
    }

    /// Attach a full name.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Access level.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the account may use the admin console.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Full name, if the account recorded one.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Gender, if recorded.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Birth date, if recorded.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Server-side creation timestamp, if returned.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

fn normalise_username(username: &str) -> Result<String, UserValidationError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }
    Ok(trimmed.to_owned())
}

fn normalise_email(email: &str) -> Result<String, UserValidationError> {
    let trimmed = email.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(UserValidationError::InvalidEmail);
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(trimmed.to_owned())
        }
        _ => Err(UserValidationError::InvalidEmail),
    }
}

/// Account details submitted on registration or by an admin.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `email` has a single `@` with non-empty parts and no whitespace.
/// - `password` is non-empty and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
    password: Zeroizing<String>,
    full_name: Option<String>,
    gender: Option<Gender>,
    birth_date: Option<NaiveDate>,
}

impl NewUser {
    /// Validate the required account fields.
    ///
    /// # Examples
    /// ```
    /// use sporthub_client::domain::NewUser;
    ///
    /// let draft = NewUser::try_new(" alice ", "alice@example.com", "pw").unwrap();
    /// assert_eq!(draft.username(), "alice");
    /// assert!(NewUser::try_new("alice", "not-an-email", "pw").is_err());
    /// ```
    pub fn try_new(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let username = normalise_username(username)?;
        let email = normalise_email(email)?;
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            email,
            password: Zeroizing::new(password.to_owned()),
            full_name: None,
            gender: None,
            birth_date: None,
        })
    }

    /// Attach an optional full name; blank input is ignored.
    pub fn with_full_name(mut self, full_name: Option<&str>) -> Self {
        self.full_name = full_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        self
    }

    /// Attach an optional gender.
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Attach an optional birth date.
    pub fn with_birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as entered.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Optional full name.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Optional gender.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Optional birth date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

/// Admin edit of an existing account.
///
/// A missing password leaves the stored password unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    username: String,
    email: String,
    password: Option<Zeroizing<String>>,
}

impl UserUpdate {
    /// Validate the editable account fields.
    pub fn try_new(
        username: &str,
        email: &str,
        password: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: normalise_username(username)?,
            email: normalise_email(email)?,
            password: password
                .filter(|value| !value.is_empty())
                .map(|value| Zeroizing::new(value.to_owned())),
        })
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replacement password, if one was entered.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|value| value.as_str())
    }
}
