//! Authentication handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use warden_shared::{LoginRequest, RegisterRequest};

use crate::middleware::auth::BearerToken;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let response = state.auth.register(body.into_inner(), Utc::now()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let response = state.auth.login(body.into_inner(), Utc::now()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, token: BearerToken) -> AppResult<HttpResponse> {
    let user = state.auth.authenticate(token.as_str(), Utc::now()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use chrono::TimeDelta;
    use serde_json::{Value, json};

    use warden_core::AuthService;
    use warden_infra::{
        Argon2Config, Argon2PasswordHasher, InMemoryCredentialStore, JwtConfig, JwtTokenService,
    };

    use super::*;
    use crate::handlers::configure_routes;

    fn state() -> AppState {
        let hasher = Argon2PasswordHasher::new(Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();
        let tokens = Arc::new(JwtTokenService::new(JwtConfig::new(
            "handler-test-secret",
            TimeDelta::hours(24),
            "warden-test",
        )));

        AppState::from_service(AuthService::new(
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(hasher),
            tokens.clone(),
            tokens,
        )
        .unwrap())
    }

    fn ann() -> Value {
        json!({ "name": "Ann Lee", "email": "ann@x.com", "password": "secret1" })
    }

    #[actix_web::test]
    async fn test_register_scenario() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(ann())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["email"], "ann@x.com");
        assert_eq!(body["user"]["name"], "Ann Lee");
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert!(!body.to_string().contains("password"));

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(ann())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "Conflict");
    }

    #[actix_web::test]
    async fn test_register_validation_failure() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "name": "A", "email": "nope", "password": "1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ValidationError");
        assert_eq!(body["violations"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BadRequest");
    }

    #[actix_web::test]
    async fn test_login_failures_share_one_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(ann())
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "ann@x.com", "password": "wrong-pass" }))
            .to_request();
        let wrong_password = test::call_service(&app, req).await;
        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        let wrong_password: Value = test::read_body_json(wrong_password).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "nobody@x.com", "password": "secret1" }))
            .to_request();
        let unknown_email = test::call_service(&app, req).await;
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
        let unknown_email: Value = test::read_body_json(unknown_email).await;

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password["code"], "InvalidCredentials");
    }

    #[actix_web::test]
    async fn test_login_then_me() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(ann())
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "ann@x.com", "password": "secret1" }))
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, req).await;
        let token = login["token"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(me, login["user"]);
    }

    #[actix_web::test]
    async fn test_me_rejects_bad_tokens() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "MissingAuth");

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "TokenMalformed");
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
