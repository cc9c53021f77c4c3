use chrono::{Duration, Utc};
use contracts::shared::api::ApiMessage;
use contracts::system::recovery::{
    normalize_document, RecoveryRequest, RecoveryResetRequest, RecoveryVerifyRequest,
};
use contracts::system::users::{validate_password_strength, User};
use rand::Rng;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::users::{repository as users_repository, service as users_service};

const CODE_LIFETIME_MINUTES: i64 = 15;

fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

async fn find_user(db: &DatabaseConnection, document: &str) -> ApiResult<User> {
    let document = normalize_document(document);
    if document.is_empty() {
        return Err(ApiError::bad_request("CPF/CNPJ é obrigatório"));
    }
    users_repository::get_by_document(db, &document)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuário não encontrado"))
}

async fn valid_code_id(db: &DatabaseConnection, user: &User, code: &str) -> ApiResult<i32> {
    repository::find_valid(db, user.id, code.trim(), Utc::now())
        .await?
        .ok_or_else(|| ApiError::bad_request("Código inválido ou expirado"))
}

/// Issues a 6-digit code valid for 15 minutes. There is no mail/SMS
/// channel: the code goes to the server log.
pub async fn request_code(db: &DatabaseConnection, req: RecoveryRequest) -> ApiResult<ApiMessage> {
    let user = find_user(db, &req.document).await?;
    let code = generate_code();
    let expires_at = Utc::now() + Duration::minutes(CODE_LIFETIME_MINUTES);
    repository::insert_code(db, user.id, &code, expires_at).await?;

    tracing::debug!("Recovery code for user {}: {}", user.username, code);
    Ok(ApiMessage::ok("Código de recuperação enviado"))
}

pub async fn verify_code(db: &DatabaseConnection, req: RecoveryVerifyRequest) -> ApiResult<ApiMessage> {
    if req.code.trim().is_empty() {
        return Err(ApiError::bad_request("CPF/CNPJ e código são obrigatórios"));
    }
    let user = find_user(db, &req.document).await?;
    valid_code_id(db, &user, &req.code).await?;
    Ok(ApiMessage::ok("Código verificado com sucesso"))
}

/// Sets the new password and consumes the code
pub async fn reset_password(db: &DatabaseConnection, req: RecoveryResetRequest) -> ApiResult<ApiMessage> {
    if req.code.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "CPF/CNPJ, código e nova senha são obrigatórios",
        ));
    }
    let user = find_user(db, &req.document).await?;
    let code_id = valid_code_id(db, &user, &req.code).await?;
    validate_password_strength(&req.password).map_err(ApiError::bad_request)?;

    if !repository::claim(db, code_id).await? {
        return Err(ApiError::bad_request("Código inválido ou expirado"));
    }
    if let Err(e) = users_service::set_password(db, user.id, &req.password).await {
        repository::release(db, code_id).await?;
        return Err(e);
    }

    tracing::info!("Password reset for user {}", user.username);
    Ok(ApiMessage::ok("Senha alterada com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use crate::system::users::service::tests::user_dto;
    use contracts::system::users::UserRole;

    async fn seeded() -> (DatabaseConnection, User) {
        let db = connect_in_memory().await.unwrap();
        let user = users_service::create(&db, user_dto("joana", "123.456.789-09", UserRole::Cliente))
            .await
            .unwrap();
        (db, user)
    }

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..50 {
            let code = generate_code();
            assert!(contracts::system::recovery::is_valid_code(&code), "{code}");
        }
    }

    #[tokio::test]
    async fn test_unknown_and_missing_document() {
        let (db, _) = seeded().await;
        let err = request_code(&db, RecoveryRequest { document: "".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CPF/CNPJ é obrigatório");
        let err = request_code(&db, RecoveryRequest { document: "000.000.000-00".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reset_consumes_code() {
        let (db, user) = seeded().await;
        repository::insert_code(&db, user.id, "482913", Utc::now() + Duration::minutes(15))
            .await
            .unwrap();

        let verify = RecoveryVerifyRequest {
            document: "123.456.789-09".into(),
            code: "482913".into(),
        };
        assert!(verify_code(&db, verify.clone()).await.unwrap().success);

        let reset = RecoveryResetRequest {
            document: "12345678909".into(),
            code: "482913".into(),
            password: "Nova@2024".into(),
        };
        reset_password(&db, reset.clone()).await.unwrap();
        assert!(users_service::verify_credentials(&db, "joana", "Nova@2024")
            .await
            .unwrap()
            .is_some());

        // Second use of the same code fails
        let err = reset_password(&db, reset).await.unwrap_err();
        assert_eq!(err.to_string(), "Código inválido ou expirado");
        assert!(verify_code(&db, verify).await.is_err());
    }

    #[tokio::test]
    async fn test_expired_code_rejected() {
        let (db, user) = seeded().await;
        repository::insert_code(&db, user.id, "111111", Utc::now() - Duration::minutes(1))
            .await
            .unwrap();
        let err = verify_code(
            &db,
            RecoveryVerifyRequest {
                document: "12345678909".into(),
                code: "111111".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Código inválido ou expirado");
    }

    #[tokio::test]
    async fn test_request_code_reply() {
        let (db, user) = seeded().await;
        let reply = request_code(&db, RecoveryRequest { document: "123.456.789-09".into() })
            .await
            .unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, "Código de recuperação enviado");
        assert!(!reply.message.contains(&user.email));
    }

    #[tokio::test]
    async fn test_code_claimed_once() {
        let (db, user) = seeded().await;
        repository::insert_code(&db, user.id, "333333", Utc::now() + Duration::minutes(15))
            .await
            .unwrap();
        let id = repository::find_valid(&db, user.id, "333333", Utc::now())
            .await
            .unwrap()
            .unwrap();

        // Two resets that both passed the lookup: only one may take the code
        assert!(repository::claim(&db, id).await.unwrap());
        assert!(!repository::claim(&db, id).await.unwrap());

        let reset = RecoveryResetRequest {
            document: "12345678909".into(),
            code: "333333".into(),
            password: "Nova@2024".into(),
        };
        let err = reset_password(&db, reset).await.unwrap_err();
        assert_eq!(err.to_string(), "Código inválido ou expirado");

        repository::release(&db, id).await.unwrap();
        assert!(repository::find_valid(&db, user.id, "333333", Utc::now())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_weak_password_keeps_code() {
        let (db, user) = seeded().await;
        repository::insert_code(&db, user.id, "222222", Utc::now() + Duration::minutes(15))
            .await
            .unwrap();
        let weak = RecoveryResetRequest {
            document: "12345678909".into(),
            code: "222222".into(),
            password: "fraca".into(),
        };
        assert!(matches!(reset_password(&db, weak).await, Err(ApiError::BadRequest(_))));
        assert!(repository::find_valid(&db, user.id, "222222", Utc::now())
            .await
            .unwrap()
            .is_some());
    }
}
