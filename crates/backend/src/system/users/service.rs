use contracts::domain::common::{Validate, ValidationErrors};
use contracts::system::users::{validate_password_strength, ChangePasswordDto, User, UserDto, UserRole};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::{password, refresh_tokens};
use crate::system::auth::extractor::CurrentUser;

/// Unique keys: username, email, document. `except` skips the user being edited.
async fn ensure_unique(db: &DatabaseConnection, user: &User, except: Option<i32>) -> ApiResult<()> {
    let taken = |found: Option<User>| found.map(|u| Some(u.id) != except).unwrap_or(false);

    if taken(repository::get_by_username(db, &user.username).await?) {
        return Err(ApiError::conflict("Nome de usuário já existe"));
    }
    if taken(repository::get_by_email(db, &user.email).await?) {
        return Err(ApiError::conflict("Email já cadastrado"));
    }
    if taken(repository::get_by_document(db, &user.document).await?) {
        return Err(ApiError::conflict("CPF/CNPJ já cadastrado"));
    }
    Ok(())
}

/// Create a new user
pub async fn create(db: &DatabaseConnection, dto: UserDto) -> ApiResult<User> {
    let Some(raw_password) = dto.password.clone() else {
        let mut errors = ValidationErrors::new();
        errors.push("password", "Senha é obrigatória");
        return Err(errors.into());
    };
    dto.validate()?;

    let mut user = User::new_for_insert(&dto);
    ensure_unique(db, &user, None).await?;

    let password_hash = password::hash_password(&raw_password)?;
    user.before_write();
    user.id = repository::insert(db, &user, &password_hash).await?;

    tracing::info!("Created user {} ({})", user.username, user.role.as_str());
    Ok(user)
}

/// Update profile fields; the stored password is never touched here
pub async fn update(db: &DatabaseConnection, id: i32, mut dto: UserDto) -> ApiResult<User> {
    dto.password = None;
    dto.confirm_password = None;
    dto.is_adult = None;
    dto.validate()?;

    let mut user = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))?;
    user.update(&dto);
    ensure_unique(db, &user, Some(id)).await?;

    user.before_write();
    repository::update(db, &user).await?;
    Ok(user)
}

pub async fn delete(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<()> {
    if requester.id == id {
        return Err(ApiError::bad_request("Você não pode excluir o próprio usuário"));
    }
    if !repository::delete(db, id).await? {
        return Err(ApiError::not_found("Usuário não encontrado"));
    }
    refresh_tokens::revoke_all_for_user(db, id).await?;
    Ok(())
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<User> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<User>> {
    Ok(repository::list_all(db).await?)
}

pub async fn list_partners(db: &DatabaseConnection) -> ApiResult<Vec<User>> {
    Ok(repository::list_by_role(db, UserRole::Parceiro).await?)
}

/// Own password needs the current one; admins may reset anyone's
pub async fn change_password(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    user_id: i32,
    dto: ChangePasswordDto,
) -> ApiResult<()> {
    let is_self = requester.id == user_id;
    if !is_self && !requester.is_admin() {
        return Err(ApiError::forbidden());
    }
    dto.validate()?;

    let current_hash = repository::get_password_hash(db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))?;

    if is_self {
        let current = dto.current_password.as_deref().unwrap_or_default();
        if !password::verify_password(current, &current_hash)? {
            return Err(ApiError::bad_request("Senha atual incorreta"));
        }
    }

    set_password(db, user_id, &dto.new_password).await
}

/// Strength check + hash + store; all live sessions of the user are dropped
pub async fn set_password(db: &DatabaseConnection, user_id: i32, new_password: &str) -> ApiResult<()> {
    validate_password_strength(new_password).map_err(ApiError::bad_request)?;
    let hash = password::hash_password(new_password)?;
    repository::update_password(db, user_id, &hash).await?;
    refresh_tokens::revoke_all_for_user(db, user_id).await?;
    Ok(())
}

/// `Some(user)` when the username exists and the password matches
pub async fn verify_credentials(
    db: &DatabaseConnection,
    username: &str,
    raw_password: &str,
) -> anyhow::Result<Option<User>> {
    let Some(user) = repository::get_by_username(db, username.trim()).await? else {
        return Ok(None);
    };
    let Some(hash) = repository::get_password_hash(db, user.id).await? else {
        return Ok(None);
    };
    if password::verify_password(raw_password, &hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::system::users::DocumentType;

    pub(crate) fn user_dto(username: &str, document: &str, role: UserRole) -> UserDto {
        UserDto {
            username: username.into(),
            email: format!("{username}@charter.com.br"),
            role,
            full_name: format!("{username} da Silva"),
            document: document.into(),
            document_type: DocumentType::Cpf,
            birth_date: "1985-03-10".into(),
            photo_url: "/img/avatar.png".into(),
            password: Some("Senha@123".into()),
            confirm_password: Some("Senha@123".into()),
            is_adult: Some(true),
            ..Default::default()
        }
    }

    fn caller(id: i32, role: UserRole) -> CurrentUser {
        CurrentUser::for_tests(id, role)
    }

    #[tokio::test]
    async fn test_create_and_login() {
        let db = connect_in_memory().await.unwrap();
        let user = create(&db, user_dto("joana", "111.222.333-44", UserRole::Cliente))
            .await
            .unwrap();
        assert!(user.id > 0);
        assert_eq!(user.document, "11122233344");

        assert!(verify_credentials(&db, "joana", "Senha@123").await.unwrap().is_some());
        assert!(verify_credentials(&db, "joana", "errada").await.unwrap().is_none());
        assert!(verify_credentials(&db, "ninguem", "Senha@123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicates_conflict() {
        let db = connect_in_memory().await.unwrap();
        create(&db, user_dto("joana", "11122233344", UserRole::Cliente))
            .await
            .unwrap();
        let err = create(&db, user_dto("joana", "99988877766", UserRole::Cliente))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        let err = create(&db, user_dto("pedro", "11122233344", UserRole::Cliente))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CPF/CNPJ já cadastrado");
    }

    #[tokio::test]
    async fn test_create_requires_password() {
        let db = connect_in_memory().await.unwrap();
        let dto = UserDto {
            password: None,
            ..user_dto("joana", "11122233344", UserRole::Cliente)
        };
        assert!(matches!(create(&db, dto).await, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_change_password_rules() {
        let db = connect_in_memory().await.unwrap();
        let admin = create(&db, user_dto("chefe", "11111111111", UserRole::Admin)).await.unwrap();
        let client = create(&db, user_dto("joana", "22222222222", UserRole::Cliente)).await.unwrap();

        let dto = ChangePasswordDto {
            current_password: Some("Senha@123".into()),
            new_password: "Nova@2024".into(),
            confirm_password: "Nova@2024".into(),
        };
        // A client cannot touch someone else's password
        let err = change_password(&db, &caller(client.id, UserRole::Cliente), admin.id, dto.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let wrong = ChangePasswordDto {
            current_password: Some("errada".into()),
            ..dto.clone()
        };
        let err = change_password(&db, &caller(client.id, UserRole::Cliente), client.id, wrong)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Senha atual incorreta");

        change_password(&db, &caller(client.id, UserRole::Cliente), client.id, dto)
            .await
            .unwrap();
        assert!(verify_credentials(&db, "joana", "Nova@2024").await.unwrap().is_some());

        // Admin reset without the current password
        let reset = ChangePasswordDto {
            current_password: None,
            new_password: "Outra@999".into(),
            confirm_password: "Outra@999".into(),
        };
        change_password(&db, &caller(admin.id, UserRole::Admin), client.id, reset)
            .await
            .unwrap();
        assert!(verify_credentials(&db, "joana", "Outra@999").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_cannot_delete_self() {
        let db = connect_in_memory().await.unwrap();
        let admin = create(&db, user_dto("chefe", "11111111111", UserRole::Admin)).await.unwrap();
        let err = delete(&db, &caller(admin.id, UserRole::Admin), admin.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
