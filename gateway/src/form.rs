use crate::error::GatewayError;
use axum::body::HttpBody;
use axum::extract::{Form, FromRequest, Request};
use serde::de::DeserializeOwned;

/// Form-encoded request body where an empty body stands for a form with
/// every field absent.
///
/// Browsers and scripts may POST with no body and no `Content-Type`; that
/// request decodes to `T::default()`. Any other rejection is a 400 with a
/// JSON `{"error"}` body.
#[derive(Debug, Clone, Default)]
pub struct FormBody<T>(pub T);

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.body().size_hint().exact() == Some(0) {
            return Ok(FormBody(T::default()));
        }
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::BadRequest(rejection.body_text()))?;
        Ok(FormBody(value))
    }
}
