use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mx::LookupMx;
use crate::verify::{VerificationReport, verify_email};

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyRequest {
    email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyResponse {
    success: bool,
    result: VerificationReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceBanner {
    success: bool,
    message: String,
}

/// `POST /verify`. Any completed check answers 200, fully negative
/// outcomes included; 400 is reserved for requests whose body cannot
/// be used at all.
pub(crate) async fn verify<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, ApiError>
where
    R: LookupMx + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected request body");
        ApiError::InvalidInput
    })?;
    let email = request.email.trim().to_string();
    if email.is_empty() {
        return Err(ApiError::InvalidInput);
    }

    let report = verify_email(&email, state.resolver.as_ref(), &state.plan, &state.options).await;
    Ok(Json(VerifyResponse {
        success: true,
        result: report,
    }))
}

/// `GET /`: service banner with name and version.
pub(crate) async fn index() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        success: true,
        message: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    })
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}
