//! HTTP boundary: router assembly, bearer auth and error mapping.

mod auth;
mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::mx::LookupMx;
use crate::probe::{ProbeOptions, StagePlan};

/// Read-only state shared by every request task.
pub struct AppState<R> {
    pub api_token: Option<String>,
    pub resolver: Arc<R>,
    pub plan: Arc<StagePlan>,
    pub options: Arc<ProbeOptions>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            api_token: self.api_token.clone(),
            resolver: Arc::clone(&self.resolver),
            plan: Arc::clone(&self.plan),
            options: Arc::clone(&self.options),
        }
    }
}

/// Assembles the service router: `POST /verify` behind the bearer
/// gate, a service banner at `/`, and a JSON 404 everywhere else,
/// wrong-method requests on the known paths included.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: LookupMx + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/verify",
            // The 404 fallback is chained after the auth layer and sits
            // outside it: wrong-method requests answer 404 on any token
            // state.
            post(handlers::verify::<R>)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::require_bearer::<R>,
                ))
                .fallback(handlers::not_found),
        )
        .route("/", get(handlers::index).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
