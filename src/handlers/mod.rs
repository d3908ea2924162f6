//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 파싱과 입력 검증, 응답 형식 변환만 담당하고
//! 비즈니스 로직은 모두 [`AccountService`](crate::services::accounts::AccountService)에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AccountService                               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CredentialStore / VerificationStore          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 계정 엔드포인트
//!   - 회원가입 (`POST /api/v1/users/register`)
//!   - 로그인 (`POST /api/v1/users/login`)
//!   - 세션 확인 (`GET /api/v1/users/session`)
//! - **`verification`**: 이메일 인증 링크 (`GET /api/v1/verify`)
//!
//! ## 의존성 주입
//!
//! 서비스는 `web::Data<AccountService>`로 전달됩니다.
//!
//! ```rust,ignore
//! #[post("/register")]
//! pub async fn register(
//!     service: web::Data<AccountService>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|_| AppError::ValidationError(MISSING_FIELDS_MESSAGE.into()))?;
//!     service.register(&payload.username, &payload.email, &payload.password).await?;
//!     Ok(HttpResponse::Created().finish())
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.

pub mod users;
pub mod verification;
