//! HTTP middleware
//!
//! Request logging and bearer-token authentication.

use axum::{
    extract::{Request, State},
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{extractors::RequestId, AppState};
use crate::auth::{bearer_token, verify_token};

/// Request logging middleware
///
/// Logs all incoming requests with timing information
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    mut request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let request_id = uuid::Uuid::new_v4().to_string();
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        "HTTP request started"
    );

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration = start.elapsed();

    if status >= 400 {
        warn!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    }

    response
}

/// Authentication middleware
///
/// Stores the token's claims in the request extensions when a valid bearer
/// token is present. Never rejects: routes that need a user ask for one with
/// the `AdminUser` extractor.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        match verify_token(token, &state.config.auth.secret_key) {
            Ok(claims) => {
                debug!(username = %claims.username, is_admin = claims.is_admin, "Authenticated request");
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                debug!(error = %e, "Ignoring invalid bearer token");
            }
        }
    }

    next.run(request).await
}
