use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::shared::state::AppState;

/// Decodes an optional `Authorization: Bearer` header and stores the claims
/// in request extensions. Missing or invalid tokens are not rejected here:
/// the `CurrentUser` / `AdminUser` extractors decide per route.
pub async fn attach_claims(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    if let Some(token) = token {
        match super::jwt::validate_token(&state.db, &token).await {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => tracing::debug!("Rejected bearer token: {:#}", e),
        }
    }

    next.run(req).await
}
