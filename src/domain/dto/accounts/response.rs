use serde::{Deserialize, Serialize};

/// `GET /api/v1/users/session` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub valid: bool,
    /// 토큰에 담긴 계정 ID
    pub subject: String,
    /// 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}
