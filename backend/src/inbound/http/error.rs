//! HTTP adapter mapping for validation failures.
//!
//! Purpose: keep [`UserViolations`] free of Actix types while letting handlers
//! return it directly. Every rejection, whether the payload failed a field
//! rule or could not be decoded at all, leaves as `400` with the same
//! `{"error": [...]}` envelope.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{UserViolations, Violation};

/// Envelope returned with every `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    /// Violations in the order they were detected.
    pub error: Vec<Violation>,
}

impl From<&UserViolations> for ValidationErrorBody {
    fn from(value: &UserViolations) -> Self {
        Self {
            error: value.violations().to_vec(),
        }
    }
}

impl ResponseError for UserViolations {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ValidationErrorBody::from(self))
    }
}

/// JSON extractor configuration reporting decode failures as violations.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::error::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "request body could not be decoded");
        UserViolations::malformed_body(payload_message(&err)).into()
    })
}

fn payload_message(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "request body must be sent as application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large"
        }
        _ => "request body must be valid JSON",
    }
}
