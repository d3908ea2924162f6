//! # 계정 리포지토리 구현
//!
//! [`CredentialStore`]의 MongoDB 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스 기반 중복 검사**: 사전 조회 없이 삽입 시 중복 키 에러(11000)로 판별
//! - **식별자 조회**: 이메일 일치를 먼저, 없으면 사용자명 일치를 조회

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::accounts::account::{Account, AccountId},
    repositories::{CredentialStore, DUPLICATE_KEY_CODE},
};

/// 사용자명/이메일 중복 시의 메시지
pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "email or username already exists";

/// 계정 데이터 액세스 리포지토리
///
/// ## 저장 구조
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `email_unique`, `username_unique`, `created_at_desc`
/// - **ID**: UUID v4 문자열을 `_id`로 사용
///
/// ## 에러 처리
///
/// - **ConflictError**: 유니크 인덱스 위반 (이메일/사용자명 중복)
/// - **DatabaseError**: 그 외 MongoDB 연결/쿼리 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
///
/// let id = repo.create_account("john_doe", "john@example.com", &hash).await?;
/// let found = repo.find_account_by_identifier("john@example.com").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<Account>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Account>(Self::COLLECTION_NAME),
        }
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 서버 시작 시 한 번 호출됩니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    /// 유니크 인덱스가 없으면 중복 검사가 동작하지 않으므로 실패 시 시작을 중단해야 합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    /// 새 계정 저장
    ///
    /// 중복 여부를 미리 조회하지 않습니다. 동시에 같은 이메일로 가입해도
    /// 유니크 인덱스가 하나만 통과시키고, 나머지는 `ConflictError`가 됩니다.
    async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<AccountId> {
        let account = Account::new(
            username.to_string(),
            email.to_string(),
            password_hash.to_string(),
        );

        self.collection
            .insert_one(&account)
            .await
            .map_err(map_insert_error)?;

        Ok(account.id)
    }

    /// 식별자로 계정 조회
    ///
    /// 유일성은 필드별로만 보장되므로 한 계정의 사용자명이 다른 계정의 이메일과
    /// 같을 수 있습니다. 이 경우 이메일이 일치하는 계정을 반환합니다.
    async fn find_account_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>> {
        for filter in identifier_filters(identifier) {
            let found = self
                .collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if found.is_some() {
                return Ok(found);
            }
        }

        Ok(None)
    }
}

/// 식별자 조회 조건 (우선순위 순서)
pub fn identifier_filters(identifier: &str) -> [Document; 2] {
    [
        doc! { "email": identifier },
        doc! { "username": identifier },
    ]
}

/// MongoDB 에러가 유니크 인덱스 위반인지 판별합니다.
pub fn is_duplicate_key_error(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_insert_error(error: MongoError) -> AppError {
    if is_duplicate_key_error(&error) {
        AppError::ConflictError(DUPLICATE_ACCOUNT_MESSAGE.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}
