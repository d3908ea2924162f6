//! # 문자열 유틸리티
//!
//! 입력값 검사에 쓰는 공통 함수들입니다.
//! 값을 다듬지 않고 비어 있는지만 판단합니다. 저장되는 값은 입력 그대로입니다.

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::MISSING_FIELDS_MESSAGE;

/// 공백 문자만으로 이루어지지 않은 문자열인지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 모든 값이 채워져 있는지 확인합니다.
///
/// 하나라도 비어 있거나 공백뿐이면 `ValidationError("Missing required field(s)")`.
///
/// # 예제
///
/// ```rust,ignore
/// require_fields(&[username, email, password])?;
/// ```
pub fn require_fields(values: &[&str]) -> AppResult<()> {
    if values.iter().all(|v| is_valid_string(v)) {
        Ok(())
    } else {
        Err(AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()))
    }
}
