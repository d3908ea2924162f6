//! # 이메일 인증 리포지토리 구현
//!
//! [`VerificationStore`]의 MongoDB 구현입니다.
//! `verifications` 컬렉션에 이메일당 하나의 문서를 유지합니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::verifications::verification::{
        generate_verification_code, VerificationFailure, VerificationRecord,
    },
    repositories::VerificationStore,
};

/// 인증 코드 리포지토리
///
/// ## 원자성
///
/// - **발급**: `update_one(..).upsert(true)` 한 번으로 생성 또는 덮어쓰기
/// - **사용**: `{email, code, verified:false}` 조건부 `$set` 한 번으로 확인과 전환을 동시에 처리
#[derive(Clone)]
pub struct VerificationRepository {
    collection: Collection<VerificationRecord>,
}

impl VerificationRepository {
    pub const COLLECTION_NAME: &'static str = "verifications";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database
                .get_database()
                .collection::<VerificationRecord>(Self::COLLECTION_NAME),
        }
    }

    /// 이메일 유니크 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl VerificationStore for VerificationRepository {
    async fn issue_code(&self, email: &str) -> AppResult<String> {
        let code = generate_verification_code();

        self.collection
            .update_one(doc! { "email": email }, issue_update(&code))
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(code)
    }

    async fn redeem(&self, email: &str, code: &str) -> Result<(), VerificationFailure> {
        let result = self
            .collection
            .update_one(redeem_filter(email, code), doc! { "$set": { "verified": true } })
            .await
            .map_err(|e| VerificationFailure::System(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(VerificationFailure::invalid_code());
        }

        Ok(())
    }

    async fn is_verified(&self, email: &str) -> AppResult<bool> {
        let record = self
            .collection
            .find_one(doc! { "email": email, "verified": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(record.is_some())
    }
}

/// 코드 발급(덮어쓰기) 갱신 문서
pub fn issue_update(code: &str) -> Document {
    doc! {
        "$set": {
            "verification_code": code,
            "verified": false,
        }
    }
}

/// 미사용 코드 일치 조건
pub fn redeem_filter(email: &str, code: &str) -> Document {
    doc! {
        "email": email,
        "verification_code": code,
        "verified": false,
    }
}
