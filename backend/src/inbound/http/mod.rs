//! HTTP inbound adapter exposing the users resource.

pub mod error;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ValidationErrorBody;
pub use state::HttpState;

/// Mount point of the users resource.
pub const USERS_SCOPE: &str = "/users";

/// Build the `/users` scope. Both `/users` and `/users/` are served.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::{HttpState, users_scope};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(users_scope());
/// ```
pub fn users_scope() -> actix_web::Scope {
    web::scope(USERS_SCOPE).app_data(error::json_config()).service(
        web::resource(["", "/"])
            .route(web::post().to(users::create_user))
            .route(web::get().to(users::list_users)),
    )
}
