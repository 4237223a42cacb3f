use crate::{
    error::ApiError,
    schemas::{ErrorBody, MessageBody, UserBody, UserSchema},
    validation::ValidatedJson,
    AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use core_types::{Outcome, User, UserId};

/// Message returned after a successful delete.
pub const USER_DELETED: &str = "Usuário deletado";

/// # GET /usuarios
/// Lists every user in storage order.
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "usuarios",
    operation_id = "listUsuarios"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// # POST /usuarios
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = UserBody,
    responses(
        (status = 200, description = "The created user", body = UserSchema),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "usuarios",
    operation_id = "createUsuario"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserBody>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.create(body.into()).await?;
    Ok(Json(user))
}

/// # PUT /usuarios/:id
/// Replaces both `name` and `email` of an existing user.
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserBody,
    responses(
        (status = 200, description = "The updated user", body = UserSchema),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 404, description = "No user with this id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "usuarios",
    operation_id = "updateUsuario"
)]
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<UserId>, ApiError>,
    ValidatedJson(body): ValidatedJson<UserBody>,
) -> Result<Json<User>, ApiError> {
    match state.store.update(id, body.into()).await? {
        Outcome::Found(user) => Ok(Json(user)),
        Outcome::NotFound => Err(ApiError::user_not_found()),
    }
}

/// # DELETE /usuarios/:id
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user was deleted", body = MessageBody),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No user with this id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "usuarios",
    operation_id = "deleteUsuario"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<UserId>, ApiError>,
) -> Result<Json<MessageBody>, ApiError> {
    match state.store.delete(id).await? {
        Outcome::Found(()) => Ok(Json(MessageBody::new(USER_DELETED))),
        Outcome::NotFound => Err(ApiError::user_not_found()),
    }
}
