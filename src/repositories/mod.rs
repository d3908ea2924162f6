//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 아래 두 trait에만 의존합니다.
//! 운영 환경에서는 MongoDB 구현이, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! | Trait | MongoDB 구현 | 컬렉션 |
//! |-------|-------------|--------|
//! | [`CredentialStore`] | [`users::UserRepository`] | `users` |
//! | [`VerificationStore`] | [`verifications::VerificationRepository`] | `verifications` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{CredentialStore, users::UserRepository};
//!
//! let credentials: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(&database));
//! let account = credentials.find_account_by_identifier("alice").await?;
//! ```

pub mod users;
pub mod verifications;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::accounts::account::{Account, AccountId};
use crate::domain::entities::verifications::verification::VerificationFailure;

/// MongoDB 중복 키 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 계정 저장소
///
/// 사용자명과 이메일의 유일성은 저장소가 책임집니다.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 새 계정을 저장하고 발급된 ID를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AccountId)` - 새 계정 ID
    /// * `Err(AppError::ConflictError)` - 사용자명 또는 이메일 중복
    /// * `Err(AppError::DatabaseError)` - 그 외 저장소 오류
    async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<AccountId>;

    /// 사용자명 또는 이메일이 일치하는 계정을 조회합니다.
    ///
    /// 이메일 일치가 사용자명 일치보다 우선합니다.
    async fn find_account_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>>;
}

/// 이메일 인증 코드 저장소
///
/// 이메일당 최대 하나의 레코드만 유지합니다.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// 새 인증 코드를 발급해 저장하고 그 코드를 반환합니다.
    ///
    /// 기존 레코드가 있으면 코드를 덮어쓰고 `verified=false`로 되돌립니다.
    async fn issue_code(&self, email: &str) -> AppResult<String>;

    /// 코드를 사용해 이메일을 인증 상태로 전환합니다.
    ///
    /// 일치 확인과 상태 변경은 하나의 조건부 갱신으로 처리되므로
    /// 같은 코드로 동시에 요청해도 한 번만 성공합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 인증 완료
    /// * `Err(VerificationFailure::User)` - 일치하는 미사용 코드 없음
    /// * `Err(VerificationFailure::System)` - 저장소 오류
    async fn redeem(&self, email: &str, code: &str) -> Result<(), VerificationFailure>;

    /// 레코드가 있고 `verified=true`인 경우에만 `true`를 반환합니다.
    async fn is_verified(&self, email: &str) -> AppResult<bool>;
}
