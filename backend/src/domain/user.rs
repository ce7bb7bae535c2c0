//! User data model and the field rules it is validated against.
//!
//! The rules are declared once here. [`crate::inbound::http::schemas`] reads
//! the same constants when publishing the OpenAPI description, so the runtime
//! validator and the documentation cannot drift apart.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Minimum length accepted for a user name, in UTF-16 code units.
pub const NAME_MIN_LENGTH: usize = 3;

/// Pattern an email address must match.
///
/// The local part is dot-separated atoms and must end in a letter, digit,
/// `_`, `+` or `-`. Written in the common subset of Rust `regex` and
/// ECMA-262 so the OpenAPI document can publish it verbatim.
pub const EMAIL_PATTERN: &str =
    r"^([A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Field-level failures raised by the [`UserName`] and [`EmailAddress`]
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The name has fewer than [`NAME_MIN_LENGTH`] characters.
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    /// The email address does not match [`EMAIL_PATTERN`].
    #[error("invalid email format")]
    InvalidEmail,
}

/// Name of a user; at least [`NAME_MIN_LENGTH`] UTF-16 code units long.
///
/// Characters outside the Basic Multilingual Plane count twice, the way
/// browser clients measure string length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::UserName;
    ///
    /// assert!(UserName::new("Alice").is_ok());
    /// assert!(UserName::new("Al").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.encode_utf16().count() < NAME_MIN_LENGTH {
            return Err(UserValidationError::NameTooShort {
                min: NAME_MIN_LENGTH,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("a@b.com").is_ok());
    /// assert!(EmailAddress::new("not-an-email").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Part of the input a [`Violation`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    /// The payload as a whole.
    Body,
    /// The `name` field.
    Name,
    /// The `email` field.
    Email,
}

impl UserField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable reason attached to a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// The payload could not be decoded as JSON.
    InvalidJson,
    /// A value has the wrong JSON type.
    InvalidType,
    /// A required field is absent or `null`.
    Required,
    /// A string is shorter than its minimum length.
    TooShort,
    /// A string is not a valid email address.
    InvalidEmail,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    field: UserField,
    code: ViolationCode,
    message: String,
}

impl Violation {
    /// Build a violation for `field`.
    pub fn new(field: UserField, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// Offending field.
    pub fn field(&self) -> UserField {
        self.field
    }

    /// Machine-readable reason.
    pub fn code(&self) -> ViolationCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    fn required(field: UserField) -> Self {
        Self::new(field, ViolationCode::Required, format!("{field} is required"))
    }

    fn not_a_string(field: UserField) -> Self {
        Self::new(
            field,
            ViolationCode::InvalidType,
            format!("{field} must be a string"),
        )
    }
}

impl From<UserValidationError> for Violation {
    fn from(value: UserValidationError) -> Self {
        let message = value.to_string();
        match value {
            UserValidationError::NameTooShort { .. } => {
                Self::new(UserField::Name, ViolationCode::TooShort, message)
            }
            UserValidationError::InvalidEmail => {
                Self::new(UserField::Email, ViolationCode::InvalidEmail, message)
            }
        }
    }
}

/// Non-empty set of violations produced when a payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("user payload rejected: {}", summary(.0))]
pub struct UserViolations(Vec<Violation>);

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl UserViolations {
    /// Wrap a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(vec![violation])
    }

    /// Reject a payload that could not be decoded at all.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::single(Violation::new(
            UserField::Body,
            ViolationCode::InvalidJson,
            message,
        ))
    }

    /// Violations in the order they were detected.
    pub fn violations(&self) -> &[Violation] {
        self.0.as_slice()
    }
}

/// Application user.
///
/// ## Invariants
/// - `name` has at least [`NAME_MIN_LENGTH`] characters.
/// - `email` matches [`EMAIL_PATTERN`].
///
/// Serialises as `{"name": ..., "email": ...}`; deserialising re-runs the
/// field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    name: UserName,
    email: EmailAddress,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Fallible constructor enforcing both field rules.
    ///
    /// Stops at the first failing field; use [`User::validate`] to collect
    /// every violation.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserName::new(name)?, EmailAddress::new(email)?))
    }

    /// Check an arbitrary decoded payload against the user schema.
    ///
    /// Both fields are checked and every failure is reported, `name` first.
    /// Keys other than `name` and `email` are ignored and do not appear in
    /// the result.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use users_api::domain::{User, UserField};
    ///
    /// let user = User::validate(&json!({"name": "Alice", "email": "a@b.com"}))
    ///     .expect("valid payload");
    /// assert_eq!(user.name().as_ref(), "Alice");
    ///
    /// let rejected = User::validate(&json!({"name": "Al", "email": "nope"}))
    ///     .expect_err("invalid payload");
    /// let fields: Vec<_> = rejected.violations().iter().map(|v| v.field()).collect();
    /// assert_eq!(fields, [UserField::Name, UserField::Email]);
    /// ```
    pub fn validate(input: &Value) -> Result<Self, UserViolations> {
        let Some(fields) = input.as_object() else {
            return Err(UserViolations::single(Violation::new(
                UserField::Body,
                ViolationCode::InvalidType,
                "request body must be a JSON object",
            )));
        };

        let name = string_field(fields, UserField::Name)
            .and_then(|raw| UserName::new(raw).map_err(Violation::from));
        let email = string_field(fields, UserField::Email)
            .and_then(|raw| EmailAddress::new(raw).map_err(Violation::from));

        match (name, email) {
            (Ok(name), Ok(email)) => Ok(Self::new(name, email)),
            (name, email) => Err(UserViolations(
                [name.err(), email.err()].into_iter().flatten().collect(),
            )),
        }
    }

    /// The user's name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// The user's email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

fn string_field(fields: &Map<String, Value>, field: UserField) -> Result<&str, Violation> {
    match fields.get(field.as_str()) {
        None | Some(Value::Null) => Err(Violation::required(field)),
        Some(Value::String(raw)) => Ok(raw.as_str()),
        Some(_) => Err(Violation::not_a_string(field)),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { name, email } = value;
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_strings(value.name, value.email)
    }
}
