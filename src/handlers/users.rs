//! # Account HTTP Handlers
//!
//! 회원가입, 로그인, 세션 확인 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 입력 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/api/v1/users/register` | JSON | 201 Created |
//! | `POST` | `/api/v1/users/login` | form-urlencoded 또는 multipart | 204 No Content + `token` 쿠키 |
//! | `GET` | `/api/v1/users/session` | `token` 쿠키 또는 Bearer 헤더 | 200 OK |
//!
//! ## 요청 예제
//!
//! ```bash
//! curl -X POST http://localhost:9000/api/v1/users/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"alice","email":"alice@example.com","password":"pw"}'
//!
//! curl -i -X POST http://localhost:9000/api/v1/users/login \
//!   -d "identifier=alice&password=pw"
//!
//! curl -i -X POST http://localhost:9000/api/v1/users/login \
//!   -F identifier=alice -F password=pw
//! ```

use actix_multipart::form::MultipartForm;
use actix_web::cookie::{time::Duration, Cookie};
use actix_web::http::header;
use actix_web::{get, post, web, Either, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::{
    LoginForm, LoginMultipartForm, RegisterRequest, MISSING_FIELDS_MESSAGE,
};
use crate::domain::dto::accounts::response::SessionResponse;
use crate::services::accounts::AccountService;
use crate::services::auth::extract_bearer_token;

/// 세션 토큰 쿠키 이름
pub const TOKEN_COOKIE: &str = "token";

/// 회원가입 핸들러
///
/// 인증이 켜져 있으면 가입과 동시에 인증 메일이 발송됩니다.
///
/// # Endpoint
/// `POST /api/v1/users/register`
#[post("/register")]
pub async fn register(
    service: web::Data<AccountService>,
    payload: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    // 유효성 검사
    payload.validate()
        .map_err(|_| AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()))?;

    service
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Created().finish())
}

/// 로그인 핸들러
///
/// 성공하면 본문 없이 `token` 쿠키(HttpOnly, Path=/, 24시간)를 설정합니다.
/// 본문은 `application/x-www-form-urlencoded`와 `multipart/form-data` 모두 받습니다.
///
/// # Endpoint
/// `POST /api/v1/users/login`
#[post("/login")]
pub async fn login(
    service: web::Data<AccountService>,
    form: Either<web::Form<LoginForm>, MultipartForm<LoginMultipartForm>>,
) -> AppResult<HttpResponse> {
    let form: LoginForm = match form {
        Either::Left(form) => form.into_inner(),
        Either::Right(MultipartForm(form)) => form.into(),
    };

    form.validate()
        .map_err(|_| AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()))?;

    let token = service.login(&form.identifier, &form.password).await?;

    Ok(HttpResponse::NoContent()
        .cookie(session_cookie(token))
        .finish())
}

/// 세션 확인 핸들러
///
/// `token` 쿠키를 우선 확인하고, 없으면 `Authorization: Bearer` 헤더를 확인합니다.
///
/// # Endpoint
/// `GET /api/v1/users/session`
#[get("/session")]
pub async fn session_status(
    service: web::Data<AccountService>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let token = extract_session_token(&req)?;
    let claims = service.validate_session(&token)?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        valid: true,
        subject: claims.sub,
        expires_at: claims.exp,
    }))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(JwtConfig::token_ttl_seconds()))
        .finish()
}

/// HTTP 요청에서 세션 토큰 추출
fn extract_session_token(req: &HttpRequest) -> AppResult<String> {
    // 1. 쿠키
    if let Some(cookie) = req.cookie(TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Ok(cookie.value().to_string());
        }
    }

    // 2. Authorization 헤더
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))?;
        return extract_bearer_token(value).map(str::to_string);
    }

    Err(AppError::AuthenticationError("세션 토큰이 제공되지 않았습니다".to_string()))
}
