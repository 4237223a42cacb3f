//! Request and response bodies of the `/usuarios` resource.
//!
//! The request body carries its validation rules (`garde`) and its OpenAPI
//! schema (`utoipa`) side by side, so the documented contract and the
//! enforced one cannot drift apart.

use core_types::NewUser;
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /usuarios` and `PUT /usuarios/{id}`.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserBody {
    /// Display name; must contain something other than whitespace.
    #[garde(custom(not_blank))]
    #[schema(min_length = 1, example = "Ana")]
    pub name: String,
    /// Contact address in email format.
    #[garde(email)]
    #[schema(format = "email", example = "ana@x.com")]
    pub email: String,
}

fn not_blank(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be empty or blank"));
    }
    Ok(())
}

impl From<UserBody> for NewUser {
    fn from(body: UserBody) -> Self {
        NewUser::new(body.name, body.email)
    }
}

/// OpenAPI schema for [`core_types::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Assigned by the server on creation.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ana")]
    name: String,
    #[schema(format = "email", example = "ana@x.com")]
    email: String,
}

/// A plain message payload, e.g. the result of a delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Usuário deletado")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One rejected field of a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "not a valid email: value is missing `@`")]
    pub message: String,
}

/// Payload of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    #[schema(example = 400)]
    pub status_code: u16,
    /// Reason phrase of the status code.
    #[schema(example = "Bad Request")]
    pub error: String,
    #[schema(example = "Request body failed validation")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}
