//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/api/v1` 아래에 있으며, 헬스체크만 루트에 있습니다.
//!
//! ```text
//! GET  /health
//! POST /api/v1/users/register
//! POST /api/v1/users/login
//! GET  /api/v1/users/session
//! GET  /api/v1/verify
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(account_service))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 요청 본문/쿼리 파싱 실패도 `{"error": ...}` 형식의 400으로 응답하도록
/// 추출기 설정을 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_verification_routes(cfg);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리입니다: {}", err)).into()
    }));
}

/// 계정 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users/register` - 회원가입
/// - `POST /api/v1/users/login` - 로그인 (쿠키 발급)
/// - `GET /api/v1/users/session` - 세션 토큰 확인
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::session_status)
    );
}

/// 이메일 인증 라우트를 설정합니다
///
/// 인증 메일 링크(`{SERVER_ADDRESS}/verify?...`)가 이 경로를 가리킵니다.
fn configure_verification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::verification::verify)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:9000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::users::TOKEN_COOKIE;
    use crate::domain::entities::verifications::verification::INVALID_VERIFICATION_CODE;
    use crate::handlers::verification::{INVALID_LINK_MESSAGE, VERIFIED_MESSAGE};
    use crate::test_support::test_context;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_verify_login_flow() {
        let ctx = test_context(true);
        let verifications = ctx.verifications.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        // 회원가입
        let req = test::TestRequest::post()
            .uri("/api/v1/users/register")
            .set_json(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "pw"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // 인증 전 로그인은 403
        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .set_form([("identifier", "alice"), ("password", "pw")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // 인증 링크
        let code = verifications.code_for("alice@example.com").unwrap();
        let uri = format!(
            "/api/v1/verify?email={}&code={}",
            URL_SAFE_NO_PAD.encode("alice@example.com"),
            URL_SAFE_NO_PAD.encode(&code),
        );
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, VERIFIED_MESSAGE.as_bytes());

        // 로그인 -> 204 + 쿠키
        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .set_form([("identifier", "alice"), ("password", "pw")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("login should set the token cookie")
            .into_owned();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age().map(|d| d.whole_seconds()), Some(86_400));

        // 쿠키로 세션 확인
        let req = test::TestRequest::get()
            .uri("/api/v1/users/session")
            .cookie(cookie)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["valid"], true);
    }

    #[actix_web::test]
    async fn test_verify_twice_returns_user_error() {
        let ctx = test_context(true);
        let verifications = ctx.verifications.clone();
        ctx.service.register("alice", "alice@example.com", "pw").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let code = verifications.code_for("alice@example.com").unwrap();
        let uri = format!(
            "/api/v1/verify?email={}&code={}",
            URL_SAFE_NO_PAD.encode("alice@example.com"),
            URL_SAFE_NO_PAD.encode(&code),
        );

        let first = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(second).await;
        assert_eq!(body["error"], INVALID_VERIFICATION_CODE);
    }

    #[actix_web::test]
    async fn test_verify_rejects_undecodable_params() {
        let ctx = test_context(true);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/verify?email=@@@@&code=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], INVALID_LINK_MESSAGE);
    }

    #[actix_web::test]
    async fn test_verify_storage_failure_is_500() {
        let ctx = test_context(true);
        ctx.verifications.fail_redeem(true);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let uri = format!(
            "/api/v1/verify?email={}&code={}",
            URL_SAFE_NO_PAD.encode("alice@example.com"),
            URL_SAFE_NO_PAD.encode("Ab12Cd"),
        );
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_register_missing_field_and_duplicate() {
        let ctx = test_context(false);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/register")
            .set_json(json!({ "username": "alice", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing required field(s)");

        let payload = json!({ "username": "alice", "email": "alice@example.com", "password": "pw" });
        let first = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/v1/users/register").set_json(&payload).to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/v1/users/register").set_json(&payload).to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_login_with_multipart_body() {
        let ctx = test_context(false);
        ctx.service.register("alice", "alice@example.com", "pw").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let body = "--XB\r\n\
            Content-Disposition: form-data; name=\"identifier\"\r\n\r\n\
            alice\r\n\
            --XB\r\n\
            Content-Disposition: form-data; name=\"password\"\r\n\r\n\
            pw\r\n\
            --XB--\r\n";
        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .insert_header(("Content-Type", "multipart/form-data; boundary=XB"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.response().cookies().any(|c| c.name() == TOKEN_COOKIE));
    }

    #[actix_web::test]
    async fn test_login_with_multipart_missing_password() {
        let ctx = test_context(false);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let body = "--XB\r\n\
            Content-Disposition: form-data; name=\"identifier\"\r\n\r\n\
            alice\r\n\
            --XB--\r\n";
        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .insert_header(("Content-Type", "multipart/form-data; boundary=XB"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing required field(s)");
    }

    #[actix_web::test]
    async fn test_login_failures_share_status_and_message() {
        let ctx = test_context(false);
        ctx.service.register("alice", "alice@example.com", "pw").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let wrong_password = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/users/login")
                .set_form([("identifier", "alice"), ("password", "nope")])
                .to_request(),
        )
        .await;
        assert_eq!(wrong_password.status(), StatusCode::NOT_FOUND);
        let wrong_password: serde_json::Value = test::read_body_json(wrong_password).await;

        let unknown = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/users/login")
                .set_form([("identifier", "mallory"), ("password", "pw")])
                .to_request(),
        )
        .await;
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
        let unknown: serde_json::Value = test::read_body_json(unknown).await;

        assert_eq!(wrong_password, unknown);
    }

    #[actix_web::test]
    async fn test_session_with_bearer_header_and_without_token() {
        let ctx = test_context(false);
        ctx.service.register("alice", "alice@example.com", "pw").await.unwrap();
        let token = ctx.service.login("alice", "pw").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/session")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/users/session").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
