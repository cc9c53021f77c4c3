//! HTTP helpers shared by every API module.
//!
//! All helpers return `Result<T, ApiFailure>`: the failure carries the message the
//! backend put into its `ErrorResponse`, or a generic fallback.

use contracts::domain::common::{AggregateRoot, ValidationErrors};
use contracts::shared::api::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

pub const GENERIC_ERROR: &str = "Ocorreu um erro. Tente novamente.";

/// Build API base URL. Always use port 3000 for the backend API.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Error detail of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiFailure {
    pub message: String,
    pub fields: ValidationErrors,
}

impl From<ApiFailure> for String {
    fn from(failure: ApiFailure) -> Self {
        failure.message
    }
}

/// Message and field errors from an error body; falls back when the body is
/// not an `ErrorResponse`
pub fn parse_failure(status: u16, body: &str) -> ApiFailure {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.message.is_empty() => ApiFailure {
            message: parsed.message,
            fields: ValidationErrors(parsed.fields),
        },
        _ => ApiFailure {
            message: match status {
                401 => "Sessão expirada. Faça login novamente.".to_string(),
                403 => "Acesso negado".to_string(),
                404 => "Registro não encontrado".to_string(),
                _ => GENERIC_ERROR.to_string(),
            },
            fields: ValidationErrors::default(),
        },
    }
}

async fn failure_of(response: Response) -> ApiFailure {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    parse_failure(status, &body)
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiFailure> {
    let request = request.map_err(|e| ApiFailure {
        message: format!("Failed to serialize request: {}", e),
        ..Default::default()
    })?;
    let response = request.send().await.map_err(|e| {
        log::error!("request failed: {}", e);
        ApiFailure {
            message: GENERIC_ERROR.to_string(),
            ..Default::default()
        }
    })?;
    if !response.ok() {
        return Err(failure_of(response).await);
    }
    Ok(response)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    response.json::<T>().await.map_err(|e| ApiFailure {
        message: format!("Failed to parse response: {}", e),
        ..Default::default()
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    let response = send(with_auth(Request::get(&api_url(path))).build()).await?;
    parse_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiFailure> {
    let response = send(with_auth(Request::post(&api_url(path))).json(body)).await?;
    parse_json(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiFailure> {
    let response = send(with_auth(Request::patch(&api_url(path))).json(body)).await?;
    parse_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiFailure> {
    send(with_auth(Request::delete(&api_url(path))).build()).await?;
    Ok(())
}

// ============================================================================
// Collection helpers over `AggregateRoot::api_path()`
// ============================================================================

pub async fn fetch_collection<T>() -> Result<Vec<T>, ApiFailure>
where
    T: AggregateRoot + DeserializeOwned,
{
    get_json(&T::api_path()).await
}

pub async fn create_record<T>(dto: &T::Dto) -> Result<T, ApiFailure>
where
    T: AggregateRoot + DeserializeOwned,
    T::Dto: Serialize,
{
    post_json(&T::api_path(), dto).await
}

/// Resources are updated with PATCH; the backend accepts PUT on the same path
pub async fn update_record<T>(id: i32, dto: &T::Dto) -> Result<T, ApiFailure>
where
    T: AggregateRoot + DeserializeOwned,
    T::Dto: Serialize,
{
    patch_json(&format!("{}/{}", T::api_path(), id), dto).await
}

pub async fn delete_record<T: AggregateRoot>(id: i32) -> Result<(), ApiFailure> {
    delete(&format!("{}/{}", T::api_path(), id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let body = r#"{"message":"País com este código já existe"}"#;
        let failure = parse_failure(409, body);
        assert_eq!(failure.message, "País com este código já existe");
        assert!(failure.fields.is_empty());
    }

    #[test]
    fn test_field_errors_are_kept() {
        let body = r#"{"message":"Dados inválidos","fields":[{"field":"name","message":"Nome é obrigatório"}]}"#;
        let failure = parse_failure(400, body);
        assert_eq!(failure.fields.get("name"), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_fallback_on_foreign_body() {
        assert_eq!(parse_failure(500, "<html>").message, GENERIC_ERROR);
        assert_eq!(parse_failure(403, "").message, "Acesso negado");
        assert_eq!(String::from(parse_failure(502, "{}")), GENERIC_ERROR);
    }
}
