//! Cross-origin policy letting browser frontends call the API.
//!
//! Any origin may call any route. Responses carry a wildcard
//! `access-control-allow-origin`, and preflights are answered before routing.

use actix_cors::Cors;

use crate::domain::TRACE_ID_HEADER;

/// Methods advertised to preflight requests.
pub const ALLOWED_METHODS: [&str; 6] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

/// Build the permissive CORS middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::middleware::cors::cors;
///
/// let app = App::new().wrap(cors());
/// ```
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        .expose_headers([TRACE_ID_HEADER])
}
