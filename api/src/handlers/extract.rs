//! Request extraction that reports through `AppError`
//!
//! axum's own `Path<i64>` and `Json<T>` reject a request before the handler
//! runs. These keep malformed ids and bodies on the usual NotFound redirect
//! and 422 paths instead.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, DomainError, Resource};

/// Parse a path id. Anything that is not an integer cannot name a record.
pub fn parse_id(raw: &str, resource: Resource) -> Result<i64, DomainError> {
    raw.trim().parse().map_err(|_| {
        tracing::debug!("Unparseable {} id {:?}", resource, raw);
        DomainError::not_found(resource, raw)
    })
}

/// A JSON body whose read failure is deferred to the handler.
///
/// Handlers that address an existing record check the record first, so a
/// bad body sent to a missing record still redirects.
pub struct JsonInput<T>(pub Result<T, AppError>);

#[async_trait]
impl<T, S> FromRequest<S> for JsonInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<serde_json::Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(rejection) => {
                return Ok(JsonInput(Err(AppError::malformed(
                    rejection.body_text(),
                    serde_json::Value::Null,
                ))))
            }
        };

        let parsed = serde_json::from_value::<T>(value.clone())
            .map_err(|e| AppError::malformed(e.to_string(), value));
        Ok(JsonInput(parsed))
    }
}
