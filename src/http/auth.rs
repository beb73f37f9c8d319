use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::mx::LookupMx;

use super::AppState;
use super::error::ApiError;

/// Bearer-token gate for the verification route. The server-side token
/// is checked first: an unset or empty `API_TOKEN` answers 500 before
/// any client credential is looked at.
pub(crate) async fn require_bearer<R>(
    State(state): State<AppState<R>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    R: LookupMx + Send + Sync + 'static,
{
    let expected = match state.api_token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ApiError::TokenNotConfigured),
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty());

    match presented {
        None => Err(ApiError::MissingToken),
        Some(token) if token != expected => Err(ApiError::InvalidToken),
        Some(_) => Ok(next.run(request).await),
    }
}
