//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP |
//! |------|------|------|
//! | `ValidationError` | 호출자가 입력을 고치면 해결되는 에러 | 400 |
//! | `ConflictError` | 사용자명/이메일 중복 | 409 |
//! | `NotFound` | 계정 없음 또는 비밀번호 불일치 (구분하지 않음) | 404 |
//! | `AuthenticationError` | 토큰 검증 실패 | 401 |
//! | `NotVerifiedError` | 이메일 인증이 끝나지 않은 계정 | 403 |
//! | `DatabaseError` / `ExternalServiceError` / `InternalError` | 내부 장애 | 500 |
//!
//! 5xx 응답 본문에는 내부 정보를 싣지 않습니다. 상세 내용은 서버 로그에만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! fn require_email(email: &str) -> Result<(), AppError> {
//!     if email.is_empty() {
//!         return Err(AppError::ValidationError("Missing required field(s)".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 5xx 응답에 공통으로 내려가는 메시지
pub const GENERIC_FAILURE_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 저장소 계층의 에러는 그대로 서비스 계층까지 전파되고,
/// 서비스 계층에서 아래 분류 중 하나로 정리된 뒤 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실패 등 저장소 계층의 장애입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 잘못된 인코딩 등 클라이언트가 입력을 수정하면
    /// 해결되는 에러입니다. 400 Bad Request로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// if username.trim().is_empty() {
    ///     return Err(AppError::ValidationError(
    ///         "Missing required field(s)".to_string()
    ///     ));
    /// }
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 로그인 시 "계정 없음"과 "비밀번호 불일치"는 모두 이 변형으로,
    /// 그리고 동일한 메시지로 응답합니다. 계정 존재 여부를 노출하지 않기 위함입니다.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 저장소의 유니크 인덱스 위반(사용자명 또는 이메일 중복)에서 발생합니다.
    /// 409 Conflict로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 서명 불일치, 형식 오류, 만료 등 토큰 검증 실패 시 발생합니다.
    /// 401 Unauthorized로 응답됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 이메일 미인증 에러
    ///
    /// 인증 기능이 켜져 있고 아직 인증 코드를 사용하지 않은 계정이
    /// 로그인을 시도할 때 발생합니다. 403 Forbidden으로 응답됩니다.
    #[error("Not verified: {0}")]
    NotVerifiedError(String),

    /// 외부 서비스 에러
    ///
    /// 인증 메일 발송(SMTP) 실패 등 외부 시스템 호출 실패입니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// notifier.send(&email, subject, &body).await
    ///     .map_err(|e| AppError::ExternalServiceError(
    ///         format!("Failed to send email: {}", e)
    ///     ))?;
    /// ```
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 비밀키 파일 읽기 실패, 해싱 실패 등 예상하지 못한 시스템 오류입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotVerifiedError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 보여줄 메시지
    ///
    /// 4xx 에러는 변형에 담긴 메시지를 그대로 사용하고,
    /// 5xx 에러는 내부 정보 대신 [`GENERIC_FAILURE_MESSAGE`]를 사용합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotVerifiedError(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    /// 5xx 에러는 상세 내용을 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = AppError::status_code(self);

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Missing required field(s)".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("email or username already exists".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("identifier or password wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_verified_error_response() {
        let error = AppError::NotVerifiedError("user not verified".to_string());

        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let errors = [
            AppError::DatabaseError("connection refused at 10.0.0.3".to_string()),
            AppError::ExternalServiceError("smtp auth failed".to_string()),
            AppError::InternalError("secret file missing".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(error.public_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_client_errors_keep_message() {
        let error = AppError::NotFound("identifier or password wrong".to_string());
        assert_eq!(error.public_message(), "identifier or password wrong");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
