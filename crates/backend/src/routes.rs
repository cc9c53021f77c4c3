use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    api_routes()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::attach_claims,
        ))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

/// `/api/*` only; PUT and PATCH both map to the update handler
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // ========================================
        // SESSION & PASSWORD RECOVERY (PUBLIC)
        // ========================================
        .route("/api/login", post(system::handlers::auth::login))
        .route("/api/refresh", post(system::handlers::auth::refresh))
        .route("/api/logout", post(system::handlers::auth::logout))
        .route("/api/user", get(system::handlers::auth::current_user))
        .route(
            "/api/recover-password/request",
            post(system::handlers::recovery::request),
        )
        .route(
            "/api/recover-password/verify",
            post(system::handlers::recovery::verify),
        )
        .route(
            "/api/recover-password/reset",
            post(system::handlers::recovery::reset),
        )
        // ========================================
        // USERS
        // ========================================
        .route(
            "/api/users",
            get(system::handlers::users::list).post(system::handlers::users::create),
        )
        .route(
            "/api/users/:id",
            get(system::handlers::users::get_by_id)
                .patch(system::handlers::users::update)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete),
        )
        .route(
            "/api/users/:id/change-password",
            post(system::handlers::users::change_password),
        )
        .route(
            "/api/users/:id/bookings",
            get(handlers::a011_booking::list_by_user),
        )
        .route("/api/partners", get(system::handlers::users::list_partners))
        .route(
            "/api/partners/:id/itineraries",
            get(handlers::a004_itinerary::list_by_partner),
        )
        .route(
            "/api/partners/:id/prices",
            get(handlers::a010_partner_price::list_by_partner),
        )
        // A001 Boat types
        .route(
            "/api/boat-types",
            get(handlers::a001_boat_type::list_all).post(handlers::a001_boat_type::create),
        )
        .route(
            "/api/boat-types/:id",
            get(handlers::a001_boat_type::get_by_id)
                .put(handlers::a001_boat_type::update)
                .patch(handlers::a001_boat_type::update)
                .delete(handlers::a001_boat_type::delete),
        )
        // A002 Boats
        .route(
            "/api/boats",
            get(handlers::a002_boat::list_all).post(handlers::a002_boat::create),
        )
        .route(
            "/api/boats/:id",
            get(handlers::a002_boat::get_by_id)
                .put(handlers::a002_boat::update)
                .patch(handlers::a002_boat::update)
                .delete(handlers::a002_boat::delete),
        )
        .route(
            "/api/boats/:id/partner-prices",
            get(handlers::a002_boat::partner_prices),
        )
        // A003 Marinas
        .route(
            "/api/marinas",
            get(handlers::a003_marina::list_all).post(handlers::a003_marina::create),
        )
        .route(
            "/api/marinas/:id",
            get(handlers::a003_marina::get_by_id)
                .put(handlers::a003_marina::update)
                .patch(handlers::a003_marina::update)
                .delete(handlers::a003_marina::delete),
        )
        // A004 Itineraries
        .route(
            "/api/itineraries",
            get(handlers::a004_itinerary::list_all).post(handlers::a004_itinerary::create),
        )
        .route(
            "/api/itineraries/:id",
            get(handlers::a004_itinerary::get_by_id)
                .put(handlers::a004_itinerary::update)
                .patch(handlers::a004_itinerary::update)
                .delete(handlers::a004_itinerary::delete),
        )
        // A005-A007 Locations
        .route(
            "/api/countries",
            get(handlers::a005_country::list_all).post(handlers::a005_country::create),
        )
        .route(
            "/api/countries/:id",
            get(handlers::a005_country::get_by_id)
                .patch(handlers::a005_country::update)
                .put(handlers::a005_country::update)
                .delete(handlers::a005_country::delete),
        )
        .route(
            "/api/states",
            get(handlers::a006_state::list_all).post(handlers::a006_state::create),
        )
        .route(
            "/api/states/:id",
            get(handlers::a006_state::get_by_id)
                .patch(handlers::a006_state::update)
                .put(handlers::a006_state::update)
                .delete(handlers::a006_state::delete),
        )
        .route(
            "/api/cities",
            get(handlers::a007_city::list_all).post(handlers::a007_city::create),
        )
        .route(
            "/api/cities/:id",
            get(handlers::a007_city::get_by_id)
                .patch(handlers::a007_city::update)
                .put(handlers::a007_city::update)
                .delete(handlers::a007_city::delete),
        )
        // A008 Articles
        .route(
            "/api/articles",
            get(handlers::a008_article::list_all).post(handlers::a008_article::create),
        )
        .route("/api/articles/public", get(handlers::a008_article::list_public))
        .route(
            "/api/articles/public/:path",
            get(handlers::a008_article::get_public),
        )
        .route(
            "/api/articles/:id",
            get(handlers::a008_article::get_by_id)
                .patch(handlers::a008_article::update)
                .put(handlers::a008_article::update)
                .delete(handlers::a008_article::delete),
        )
        .route(
            "/api/articles/:id/status",
            axum::routing::patch(handlers::a008_article::set_status),
        )
        // A009 Pages
        .route(
            "/api/pages",
            get(handlers::a009_page::list_all).post(handlers::a009_page::create),
        )
        .route("/api/pages/public/:slug", get(handlers::a009_page::get_public))
        .route(
            "/api/pages/:id",
            get(handlers::a009_page::get_by_id)
                .patch(handlers::a009_page::update)
                .put(handlers::a009_page::update)
                .delete(handlers::a009_page::delete),
        )
        .route(
            "/api/pages/:id/status",
            axum::routing::patch(handlers::a009_page::set_status),
        )
        // A010 Partner prices
        .route(
            "/api/partner-prices",
            get(handlers::a010_partner_price::list_all).post(handlers::a010_partner_price::create),
        )
        .route(
            "/api/partner-prices/:id",
            get(handlers::a010_partner_price::get_by_id)
                .put(handlers::a010_partner_price::update)
                .patch(handlers::a010_partner_price::update)
                .delete(handlers::a010_partner_price::delete),
        )
        // A011 Bookings
        .route(
            "/api/bookings",
            get(handlers::a011_booking::list_all).post(handlers::a011_booking::create),
        )
        .route(
            "/api/bookings/:id",
            get(handlers::a011_booking::get_by_id)
                .put(handlers::a011_booking::update)
                .patch(handlers::a011_booking::update)
                .delete(handlers::a011_booking::delete),
        )
        .route(
            "/api/bookings/:id/status",
            axum::routing::patch(handlers::a011_booking::set_status),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::system::users::UserRole;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::shared::data::db::connect_in_memory;
    use crate::system::users::service::{self as users_service, tests::user_dto};

    struct TestApp {
        router: Router,
    }

    impl TestApp {
        async fn new() -> Self {
            let db = connect_in_memory().await.unwrap();
            users_service::create(&db, user_dto("chefe", "11111111111", UserRole::Admin))
                .await
                .unwrap();
            users_service::create(&db, user_dto("joana", "22222222222", UserRole::Cliente))
                .await
                .unwrap();
            Self {
                router: configure_routes(AppState::new(db)),
            }
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn login(&self, username: &str) -> String {
            let (status, body) = self
                .send(
                    Method::POST,
                    "/api/login",
                    None,
                    Some(json!({"username": username, "password": "Senha@123"})),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            body["accessToken"].as_str().unwrap().to_string()
        }
    }

    fn article(path: &str) -> Value {
        json!({
            "title": "Passeio em Búzios",
            "path": path,
            "author": "Equipe Charter",
            "description": "Roteiro completo de um dia em Búzios",
            "paragraphs": ["Saída às 9h", "Retorno às 17h"],
            "tags": ["buzios"]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = TestApp::new().await;
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_endpoints() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/api/user", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Não autenticado");

        let (status, body) = app
            .send(
                Method::POST,
                "/api/login",
                None,
                Some(json!({"username": "chefe", "password": "errada"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Usuário ou senha inválidos");

        let token = app.login("chefe").await;
        let (status, body) = app.send(Method::GET, "/api/user", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "chefe");
        assert_eq!(body["role"], "admin");

        let (status, _) = app.send(Method::GET, "/api/user", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_reads_need_a_session_and_writes_need_admin() {
        let app = TestApp::new().await;
        let (status, _) = app.send(Method::GET, "/api/boats", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let client = app.login("joana").await;
        let (status, body) = app.send(Method::GET, "/api/boats", Some(&client), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let boat = json!({"name": "Mar Azul", "type": "Lancha", "passengerCount": 8, "tieDocument": "TIE-9"});
        let (status, body) = app
            .send(Method::POST, "/api/boats", Some(&client), Some(boat.clone()))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Acesso negado");

        let admin = app.login("chefe").await;
        let (status, created) = app.send(Method::POST, "/api/boats", Some(&admin), Some(boat)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "active");

        let uri = format!("/api/boats/{}", created["id"]);
        let (status, _) = app.send(Method::DELETE, &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = app.send(Method::GET, &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_errors_carry_fields() {
        let app = TestApp::new().await;
        let admin = app.login("chefe").await;
        let (status, body) = app
            .send(
                Method::POST,
                "/api/boats",
                Some(&admin),
                Some(json!({"name": "", "type": "Lancha", "passengerCount": 0, "tieDocument": ""})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"passengerCount"));

        let (_, boats) = app.send(Method::GET, "/api/boats", Some(&admin), None).await;
        assert_eq!(boats, json!([]));
    }

    #[tokio::test]
    async fn test_duplicate_country_code_conflicts() {
        let app = TestApp::new().await;
        let admin = app.login("chefe").await;
        let (status, _) = app
            .send(
                Method::POST,
                "/api/countries",
                Some(&admin),
                Some(json!({"name": "Brasil", "code": "BR"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = app
            .send(
                Method::POST,
                "/api/countries",
                Some(&admin),
                Some(json!({"name": "Brazil", "code": "br"})),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "País com este código já existe");
    }

    #[tokio::test]
    async fn test_article_trash_and_permanent_delete() {
        let app = TestApp::new().await;
        let admin = app.login("chefe").await;
        let (status, created) = app
            .send(Method::POST, "/api/articles", Some(&admin), Some(article("passeio-buzios")))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/api/articles/{}", created["id"]);

        let (status, public) = app.send(Method::GET, "/api/articles/public", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(public.as_array().unwrap().len(), 1);
        let (status, _) = app
            .send(Method::GET, "/api/articles/public/passeio-buzios", None, None)
            .await;
        assert_eq!(status, StatusCode::OK);

        // Soft delete: gone from the public site, still in the admin list
        let (status, _) = app.send(Method::DELETE, &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, public) = app.send(Method::GET, "/api/articles/public", None, None).await;
        assert_eq!(public, json!([]));
        let (_, all) = app.send(Method::GET, "/api/articles", Some(&admin), None).await;
        assert_eq!(all[0]["isDeleted"], true);

        // Restore through the status endpoint
        let (status, restored) = app
            .send(
                Method::PATCH,
                &format!("{uri}/status"),
                Some(&admin),
                Some(json!({"field": "isDeleted", "value": false})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(restored["isDeleted"], false);

        let (status, _) = app
            .send(Method::DELETE, &format!("{uri}?permanent=true"), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = app.send(Method::GET, &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_recovery_flow_rejects_unknown_code() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                Method::POST,
                "/api/recover-password/request",
                None,
                Some(json!({"document": "222.222.222-22"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (status, body) = app
            .send(
                Method::POST,
                "/api/recover-password/verify",
                None,
                Some(json!({"document": "22222222222", "code": "000000"})),
            )
            .await;
        // A random 6-digit code never starts with 0
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Código inválido ou expirado");
    }
}
