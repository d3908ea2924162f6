//! JWT 클레임 모델
//!
//! 세션 토큰은 저장되지 않습니다. 서명과 만료 시각만으로 유효성이 결정됩니다.

use serde::{Deserialize, Serialize};

/// 세션 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// 토큰의 주체 (계정 ID)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
