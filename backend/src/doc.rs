//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers both users operations and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document is served as JSON next to a
//! Swagger UI page (see [`swagger_ui`]) and exported by the `openapi-dump`
//! binary.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::inbound::http::schemas::{
    UserSchema, ValidationErrorSchema, ViolationCodeSchema, ViolationFieldSchema, ViolationSchema,
};
use crate::inbound::http::users::UserCreatedResponse;

/// Route pattern of the rendered documentation page.
pub const DOCS_UI_PATH: &str = "/docs/{_:.*}";
/// Route of the machine-readable OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create and list users. Payloads are validated against the published schema.",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
    ),
    components(schemas(
        UserSchema,
        UserCreatedResponse,
        ValidationErrorSchema,
        ViolationSchema,
        ViolationFieldSchema,
        ViolationCodeSchema
    )),
    tags(
        (name = "users", description = "Operations on the users resource")
    )
)]
pub struct ApiDoc;

/// Swagger UI service rendering [`ApiDoc`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::doc::swagger_ui;
///
/// let app = App::new().service(swagger_ui());
/// ```
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
