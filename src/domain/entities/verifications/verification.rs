//! 이메일 인증 엔티티
//!
//! `verifications` 컬렉션에 이메일당 하나씩 저장되는 인증 코드 문서와,
//! 인증 코드 생성 및 사용 실패 분류를 정의합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! issue_code(email)          redeem(email, code)
//!   ─────────▶ verified=false ─────────────▶ verified=true
//!                   ▲                              │
//!                   └──────── issue_code(email) ───┘  (코드 덮어쓰기)
//! ```

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::errors::AppError;

/// 인증 코드 길이
pub const VERIFICATION_CODE_LENGTH: usize = 6;

/// 일치하는 미사용 코드가 없을 때의 메시지
///
/// 틀린 코드, 재발급으로 교체된 코드, 이미 사용한 코드를 구분하지 않습니다.
pub const INVALID_VERIFICATION_CODE: &str = "invalid verification code";

/// 이메일 인증 문서
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationRecord {
    /// 레코드 키 (유니크 인덱스)
    pub email: String,
    pub verification_code: String,
    pub verified: bool,
}

impl VerificationRecord {
    /// 새로 발급된 미인증 레코드
    pub fn issued(email: String, verification_code: String) -> Self {
        Self {
            email,
            verification_code,
            verified: false,
        }
    }
}

/// 인증 코드를 생성합니다.
///
/// 62개 영숫자(`A-Z`, `a-z`, `0-9`)에서 균등하게 6자를 뽑습니다.
/// 호출마다 OS 엔트로피로 새로 시드한 RNG를 사용합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let code = generate_verification_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_verification_code() -> String {
    StdRng::from_entropy()
        .sample_iter(&Alphanumeric)
        .take(VERIFICATION_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// 인증 코드 사용 실패
///
/// 호출자가 고칠 수 있는 실패(`User`)와 내부 장애(`System`)를 구분합니다.
/// HTTP 계층에서는 각각 400과 500으로 응답합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerificationFailure {
    /// 잘못된 입력 (틀린/교체된/이미 사용한 코드)
    #[error("{0}")]
    User(String),
    /// 저장소 장애 등 내부 오류
    #[error("{0}")]
    System(String),
}

impl VerificationFailure {
    pub fn invalid_code() -> Self {
        VerificationFailure::User(INVALID_VERIFICATION_CODE.to_string())
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, VerificationFailure::User(_))
    }
}

impl From<VerificationFailure> for AppError {
    fn from(failure: VerificationFailure) -> Self {
        match failure {
            VerificationFailure::User(msg) => AppError::ValidationError(msg),
            VerificationFailure::System(msg) => AppError::DatabaseError(msg),
        }
    }
}
