use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{ErrorResponse, FieldError, collect_field_errors};
use crate::middleware::tracing::RequestId;

/// JSON extractor that rejects malformed bodies and validation failures with
/// a 422 carrying the aggregated `errors` list and the request id.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req.extensions().get::<RequestId>().map(|id| id.to_string());

        let Json(value) = match Json::<T>::from_request(req, state).await {
            Ok(json) => json,
            Err(rejection) => {
                let errors = vec![FieldError {
                    field: "body".to_string(),
                    message: rejection.body_text(),
                    kind: "json_invalid".to_string(),
                }];
                return Err(unprocessable(request_id, errors));
            }
        };

        if let Err(validation_errors) = value.validate() {
            return Err(unprocessable(
                request_id,
                collect_field_errors(&validation_errors),
            ));
        }

        Ok(ValidatedJson(value))
    }
}

fn unprocessable(request_id: Option<String>, errors: Vec<FieldError>) -> Response {
    let mut body = ErrorResponse::new("Validation error").with_errors(errors);
    if let Some(id) = request_id {
        body = body.with_request_id(id);
    }
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}
