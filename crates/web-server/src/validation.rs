//! Extractors that reject malformed requests before a handler runs.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use garde::Validate;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON body that has been deserialized and then checked against its
/// `garde` rules.
///
/// Any failure, from a wrong content type to a malformed email, becomes an
/// `ApiError::Validation` (400) and the handler is never called.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
