use contracts::shared::api::ApiMessage;
use contracts::system::users::{ChangePasswordDto, User};

use crate::shared::api_utils::{get_json, post_json, ApiFailure};

/// POST /api/users/:id/change-password (admins may omit the current password)
pub async fn change_password(id: i32, dto: &ChangePasswordDto) -> Result<ApiMessage, ApiFailure> {
    post_json(&format!("/api/users/{}/change-password", id), dto).await
}

/// Users with the partner role
pub async fn fetch_partners() -> Result<Vec<User>, ApiFailure> {
    get_json("/api/partners").await
}
