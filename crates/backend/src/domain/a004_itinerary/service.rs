//! Itineraries are shared by admins and partners: a partner only ever sees
//! and writes the rows it owns, an admin sees everything and picks the owner.

use contracts::domain::a004_itinerary::aggregate::{Itinerary, ItineraryDto};
use contracts::domain::common::{Validate, ValidationErrors};
use contracts::system::users::UserRole;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::repository as users_repository;

const NOT_FOUND: &str = "Roteiro não encontrado";

fn is_partner(requester: &CurrentUser) -> bool {
    requester.role() == UserRole::Parceiro
}

/// Admin keeps the submitted owner; a partner always owns what it writes
fn with_owner(requester: &CurrentUser, mut dto: ItineraryDto) -> ApiResult<ItineraryDto> {
    match requester.role() {
        UserRole::Admin => Ok(dto),
        UserRole::Parceiro => {
            dto.partner_id = Some(requester.id);
            Ok(dto)
        }
        UserRole::Cliente => Err(ApiError::forbidden()),
    }
}

async fn validate(db: &DatabaseConnection, dto: &ItineraryDto) -> ApiResult<()> {
    dto.validate()?;
    if let Some(partner_id) = dto.partner_id {
        let partner = users_repository::get_by_id(db, partner_id).await?;
        if partner.map(|u| u.role != UserRole::Parceiro).unwrap_or(true) {
            let mut errors = ValidationErrors::new();
            errors.push("partnerId", "Parceiro inválido");
            return Err(errors.into());
        }
    }
    Ok(())
}

async fn load_owned(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<Itinerary> {
    let aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    if is_partner(requester) && aggregate.partner_id != Some(requester.id) {
        return Err(ApiError::forbidden());
    }
    Ok(aggregate)
}

pub async fn list_for(db: &DatabaseConnection, requester: &CurrentUser) -> ApiResult<Vec<Itinerary>> {
    if is_partner(requester) {
        return Ok(repository::list_by_partner(db, requester.id).await?);
    }
    Ok(repository::list_all(db).await?)
}

/// GET /api/partners/:id/itineraries; a partner may only ask for itself
pub async fn list_by_partner(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    partner_id: i32,
) -> ApiResult<Vec<Itinerary>> {
    if is_partner(requester) && requester.id != partner_id {
        return Err(ApiError::forbidden());
    }
    Ok(repository::list_by_partner(db, partner_id).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<Itinerary> {
    load_owned(db, requester, id).await
}

pub async fn create(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    dto: ItineraryDto,
) -> ApiResult<Itinerary> {
    let dto = with_owner(requester, dto)?;
    validate(db, &dto).await?;

    let mut aggregate = Itinerary::new_for_insert(&dto);
    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    id: i32,
    dto: ItineraryDto,
) -> ApiResult<Itinerary> {
    let dto = with_owner(requester, dto)?;
    let mut aggregate = load_owned(db, requester, id).await?;
    validate(db, &dto).await?;

    aggregate.update(&dto);
    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<()> {
    if requester.role() == UserRole::Cliente {
        return Err(ApiError::forbidden());
    }
    load_owned(db, requester, id).await?;
    repository::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use crate::system::users::service::{self as users_service, tests::user_dto};

    fn dto(name: &str, partner_id: Option<i32>) -> ItineraryDto {
        ItineraryDto {
            name: name.into(),
            partner_id,
            ..Default::default()
        }
    }

    async fn setup() -> (DatabaseConnection, CurrentUser, CurrentUser, CurrentUser) {
        let db = connect_in_memory().await.unwrap();
        let mut ids = Vec::new();
        for (name, doc) in [("parceiro1", "11111111111"), ("parceiro2", "22222222222")] {
            let user = users_service::create(&db, user_dto(name, doc, UserRole::Parceiro))
                .await
                .unwrap();
            ids.push(user.id);
        }
        (
            db,
            CurrentUser::for_tests(100, UserRole::Admin),
            CurrentUser::for_tests(ids[0], UserRole::Parceiro),
            CurrentUser::for_tests(ids[1], UserRole::Parceiro),
        )
    }

    #[tokio::test]
    async fn test_partner_owns_what_it_creates() {
        let (db, admin, p1, p2) = setup().await;
        // Submitted partnerId is ignored for partners
        let own = create(&db, &p1, dto("Volta à Ilha", Some(p2.id))).await.unwrap();
        assert_eq!(own.partner_id, Some(p1.id));
        create(&db, &admin, dto("Passeio Geral", None)).await.unwrap();
        create(&db, &admin, dto("Roteiro do P2", Some(p2.id))).await.unwrap();

        assert_eq!(list_for(&db, &admin).await.unwrap().len(), 3);
        let mine = list_for(&db, &p1).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Volta à Ilha");

        assert!(matches!(
            list_by_partner(&db, &p1, p2.id).await,
            Err(ApiError::Forbidden(_))
        ));
        assert_eq!(list_by_partner(&db, &admin, p2.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_partner_cannot_touch_foreign_rows() {
        let (db, admin, p1, p2) = setup().await;
        let foreign = create(&db, &p2, dto("Roteiro do P2", None)).await.unwrap();

        assert!(matches!(get_by_id(&db, &p1, foreign.id).await, Err(ApiError::Forbidden(_))));
        assert!(matches!(
            update(&db, &p1, foreign.id, dto("Tomado", None)).await,
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(delete(&db, &p1, foreign.id).await, Err(ApiError::Forbidden(_))));

        delete(&db, &admin, foreign.id).await.unwrap();
        assert!(list_for(&db, &admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_must_assign_a_real_partner() {
        let (db, admin, _, _) = setup().await;
        match create(&db, &admin, dto("Sem dono", Some(999))).await {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("partnerId"), Some("Parceiro inválido"))
            }
            other => panic!("unexpected: {other:?}"),
        }
        let client = CurrentUser::for_tests(5, UserRole::Cliente);
        assert!(matches!(
            create(&db, &client, dto("Meu roteiro", None)).await,
            Err(ApiError::Forbidden(_))
        ));
    }
}
