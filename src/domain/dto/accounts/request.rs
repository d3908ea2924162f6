//! 계정 API 요청 DTO
//!
//! | DTO | 엔드포인트 | 형식 |
//! |-----|-----------|------|
//! | [`RegisterRequest`] | `POST /api/v1/users/register` | JSON |
//! | [`LoginForm`] | `POST /api/v1/users/login` | `application/x-www-form-urlencoded` |
//! | [`LoginMultipartForm`] | `POST /api/v1/users/login` | `multipart/form-data` |
//! | [`VerifyQuery`] | `GET /api/v1/verify` | 쿼리 문자열 |
//!
//! 누락된 필드는 역직렬화 단계에서 빈 문자열로 채워지고,
//! `validator` 검증에서 "Missing required field(s)"로 거부됩니다.
//! 값 자체는 다듬지 않고 그대로 저장합니다.

use actix_multipart::form::{text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_valid_string;

/// 필수 필드가 비어 있을 때의 메시지
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required field(s)";

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// 로그인 폼
///
/// `identifier`에는 사용자명과 이메일 중 아무거나 넣을 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub identifier: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// `multipart/form-data`로 전송된 로그인 폼
///
/// 누락된 파트는 빈 문자열로 바뀌어 [`LoginForm`]과 같은 검증을 거칩니다.
#[derive(MultipartForm)]
pub struct LoginMultipartForm {
    pub identifier: Option<Text<String>>,
    pub password: Option<Text<String>>,
}

impl From<LoginMultipartForm> for LoginForm {
    fn from(form: LoginMultipartForm) -> Self {
        Self {
            identifier: form.identifier.map(|text| text.0).unwrap_or_default(),
            password: form.password.map(|text| text.0).unwrap_or_default(),
        }
    }
}

/// 인증 링크 쿼리
///
/// 두 값 모두 URL-safe base64 (패딩 없음)로 인코딩되어 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message(MISSING_FIELDS_MESSAGE.into()));
    }
    Ok(())
}
