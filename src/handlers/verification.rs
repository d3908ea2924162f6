//! # Email Verification Handler
//!
//! 인증 메일의 링크가 가리키는 엔드포인트입니다.
//!
//! ```text
//! GET /api/v1/verify?email={b64url(email)}&code={b64url(code)}
//! ```
//!
//! | 결과 | 상태 코드 | 메시지 |
//! |------|-----------|--------|
//! | 성공 | 200 | `User verified successfully` |
//! | 디코딩 실패 | 400 | `Invalid email or code` |
//! | 코드 불일치/재사용 | 400 | `invalid verification code` |
//! | 저장소 오류 | 500 | `Verification failed` |

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::VerifyQuery;
use crate::domain::entities::verifications::verification::VerificationFailure;
use crate::services::accounts::{decode_link_param, AccountService};

pub const VERIFIED_MESSAGE: &str = "User verified successfully";
pub const INVALID_LINK_MESSAGE: &str = "Invalid email or code";
pub const VERIFICATION_FAILED_MESSAGE: &str = "Verification failed";

/// 이메일 인증 핸들러
///
/// 사용자 실패는 `AppError::ValidationError`로 변환되어 원인 메시지와 함께 400으로,
/// 시스템 실패는 로그를 남기고 고정 메시지와 함께 500으로 응답합니다.
#[get("/verify")]
pub async fn verify(
    service: web::Data<AccountService>,
    query: web::Query<VerifyQuery>,
) -> AppResult<HttpResponse> {
    let decoded = decode_link_param(&query.email)
        .zip(decode_link_param(&query.code))
        .filter(|(email, code)| !email.is_empty() && !code.is_empty());

    let Some((email, code)) = decoded else {
        return Err(AppError::ValidationError(INVALID_LINK_MESSAGE.to_string()));
    };

    match service.verify(&email, &code).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(VERIFIED_MESSAGE)),
        Err(VerificationFailure::System(cause)) => {
            log::error!("이메일 인증 처리 실패: {}", cause);
            Ok(HttpResponse::InternalServerError().json(json!({ "error": VERIFICATION_FAILED_MESSAGE })))
        }
        Err(failure) => {
            log::warn!("인증 코드 불일치: {}", email);
            Err(failure.into())
        }
    }
}
