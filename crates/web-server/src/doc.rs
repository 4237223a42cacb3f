//! OpenAPI document for the `/usuarios` resource.
//!
//! Served as JSON at `/api-docs/openapi.json`, rendered by Swagger UI at
//! `/docs`, and printed by the `openapi` subcommand of the binary.

use crate::schemas::{ErrorBody, FieldError, MessageBody, UserBody, UserSchema};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios API",
        description = "CRUD operations on the user resource."
    ),
    paths(
        crate::handlers::list_users,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
    ),
    components(schemas(UserSchema, UserBody, MessageBody, ErrorBody, FieldError)),
    tags(
        (name = "usuarios", description = "Operations on users")
    )
)]
pub struct ApiDoc;

/// The document rendered as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
