use contracts::shared::api::{ApiMessage, ErrorResponse};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use contracts::system::recovery::{RecoveryRequest, RecoveryResetRequest, RecoveryVerifyRequest};
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::shared::api_utils::api_url;

pub const LOGIN_FALLBACK: &str = "Credenciais inválidas. Tente novamente.";

/// Server message of a failed response, or `fallback`
async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => fallback.to_string(),
    }
}

async fn post<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let response = post("/api/login", &LoginRequest { username, password }).await?;
    if !response.ok() {
        return Err(error_message(response, LOGIN_FALLBACK).await);
    }
    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// New access token for a live refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = post("/api/refresh", &RefreshRequest { refresh_token }).await?;
    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }
    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = post("/api/logout", &RefreshRequest { refresh_token }).await?;
    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/user"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

// ============================================================================
// Password recovery
// ============================================================================

async fn recovery_step<B: Serialize>(path: &str, body: &B) -> Result<ApiMessage, String> {
    const FALLBACK: &str = "Não foi possível concluir a operação. Tente novamente.";
    let response = post(path, body).await?;
    if !response.ok() {
        return Err(error_message(response, FALLBACK).await);
    }
    response
        .json::<ApiMessage>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn request_recovery_code(document: String) -> Result<ApiMessage, String> {
    recovery_step("/api/recover-password/request", &RecoveryRequest { document }).await
}

pub async fn verify_recovery_code(document: String, code: String) -> Result<ApiMessage, String> {
    recovery_step(
        "/api/recover-password/verify",
        &RecoveryVerifyRequest { document, code },
    )
    .await
}

pub async fn reset_password(
    document: String,
    code: String,
    password: String,
) -> Result<ApiMessage, String> {
    recovery_step(
        "/api/recover-password/reset",
        &RecoveryResetRequest {
            document,
            code,
            password,
        },
    )
    .await
}
