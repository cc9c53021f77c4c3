use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;
use contracts::system::users::UserRole;

use crate::shared::error::ApiError;

/// Authenticated caller, taken from the claims set by `attach_claims`.
/// Usage in handlers: `async fn handler(user: CurrentUser) -> ...`
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub claims: TokenClaims,
}

impl CurrentUser {
    pub fn role(&self) -> UserRole {
        self.claims.role
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role == UserRole::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Não autenticado"))?;
        let id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| ApiError::unauthorized("Não autenticado"))?;
        Ok(CurrentUser { id, claims })
    }
}

/// Caller with the `admin` role; anyone else gets 403
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(ApiError::forbidden());
        }
        Ok(AdminUser(user))
    }
}

#[cfg(test)]
impl CurrentUser {
    pub(crate) fn for_tests(id: i32, role: UserRole) -> Self {
        CurrentUser {
            id,
            claims: TokenClaims {
                sub: id.to_string(),
                username: format!("user{id}"),
                role,
                exp: 0,
                iat: 0,
            },
        }
    }
}
