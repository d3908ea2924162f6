//! 계정 엔티티
//!
//! `users` 컬렉션에 저장되는 계정 문서입니다.
//! 생성된 뒤에는 수정되거나 삭제되지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 계정 식별자 (UUID v4 문자열)
pub type AccountId = String;

/// 계정 문서
///
/// `username`과 `email`은 각각 유니크 인덱스로 보호됩니다.
/// 로그인 시에는 둘 중 어느 것으로도 조회할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// 생성 시 발급되는 UUID v4, 재사용되지 않음
    #[serde(rename = "_id")]
    pub id: AccountId,
    pub username: String,
    pub email: String,
    /// bcrypt 해시 (평문 비밀번호는 어디에도 저장하지 않음)
    pub password_hash: String,
    pub created_at: DateTime,
}

impl Account {
    /// 새 계정을 생성합니다.
    ///
    /// ID는 새 UUID v4, 생성 시각은 현재 시각으로 채워집니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let hash = bcrypt::hash("password", 4)?;
    /// let account = Account::new("alice".into(), "alice@example.com".into(), hash);
    /// ```
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }
}
