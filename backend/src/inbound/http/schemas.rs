//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here live in the inbound adapter layer instead. [`UserSchema`] is
//! assembled by hand from [`NAME_MIN_LENGTH`] and [`EMAIL_PATTERN`], the same
//! constants the runtime validator enforces.

use std::borrow::Cow;

use utoipa::openapi::RefOr;
use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaFormat, SchemaType, Type};
use utoipa::{PartialSchema, ToSchema};

use crate::domain::{EMAIL_PATTERN, NAME_MIN_LENGTH};

/// OpenAPI schema for [`crate::domain::User`], also used as the create
/// request body.
pub struct UserSchema;

impl PartialSchema for UserSchema {
    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::new(Type::Object))
                .description(Some("Application user with a validated name and email."))
                .property("name", name_schema())
                .required("name")
                .property("email", email_schema())
                .required("email")
                .build(),
        ))
    }
}

impl ToSchema for UserSchema {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("User")
    }
}

fn name_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .schema_type(SchemaType::new(Type::String))
            .min_length(Some(NAME_MIN_LENGTH))
            .description(Some(format!(
                "Display name; at least {NAME_MIN_LENGTH} characters."
            )))
            .build(),
    ))
}

fn email_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .schema_type(SchemaType::new(Type::String))
            .format(Some(SchemaFormat::Custom("email".to_owned())))
            .pattern(Some(EMAIL_PATTERN))
            .description(Some("Contact email address."))
            .build(),
    ))
}

/// OpenAPI schema for [`crate::domain::UserField`].
#[derive(ToSchema)]
#[schema(as = ViolationField)]
pub enum ViolationFieldSchema {
    /// The payload as a whole.
    #[schema(rename = "body")]
    Body,
    /// The `name` field.
    #[schema(rename = "name")]
    Name,
    /// The `email` field.
    #[schema(rename = "email")]
    Email,
}

/// OpenAPI schema for [`crate::domain::ViolationCode`].
#[derive(ToSchema)]
#[schema(as = ViolationCode)]
pub enum ViolationCodeSchema {
    /// The payload could not be decoded as JSON.
    #[schema(rename = "invalid_json")]
    InvalidJson,
    /// A value has the wrong JSON type.
    #[schema(rename = "invalid_type")]
    InvalidType,
    /// A required field is absent or `null`.
    #[schema(rename = "required")]
    Required,
    /// A string is shorter than its minimum length.
    #[schema(rename = "too_short")]
    TooShort,
    /// A string is not a valid email address.
    #[schema(rename = "invalid_email")]
    InvalidEmail,
}

/// OpenAPI schema for [`crate::domain::Violation`].
#[derive(ToSchema)]
#[schema(as = Violation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ViolationSchema {
    /// Offending field.
    field: ViolationFieldSchema,
    /// Machine-readable reason.
    code: ViolationCodeSchema,
    /// Human-readable message.
    #[schema(example = "name must be at least 3 characters")]
    message: String,
}

/// OpenAPI schema for [`super::error::ValidationErrorBody`].
#[derive(ToSchema)]
#[schema(as = ValidationError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    /// Violations in the order they were detected.
    error: Vec<ViolationSchema>,
}
