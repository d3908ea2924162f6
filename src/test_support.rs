//! 테스트용 메모리 구현
//!
//! 서비스와 핸들러 테스트에서 MongoDB, SMTP 없이 동작을 검증하기 위한
//! 저장소/발송기 구현입니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AccountConfig;
use crate::core::errors::AppError;
use crate::domain::entities::accounts::account::{Account, AccountId};
use crate::domain::entities::verifications::verification::{
    generate_verification_code, VerificationFailure, VerificationRecord,
};
use crate::repositories::users::user_repo::DUPLICATE_ACCOUNT_MESSAGE;
use crate::repositories::{CredentialStore, VerificationStore};
use crate::services::accounts::AccountService;
use crate::services::auth::{JwtTokenService, StaticSecretProvider};
use crate::services::mail::Notifier;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_SERVER_ADDRESS: &str = "http://localhost:9000/api/v1";

/// 유니크 제약을 흉내 내는 계정 저장소
#[derive(Default)]
pub struct InMemoryCredentialStore {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryCredentialStore {
    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<AccountId, AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.username == username || a.email == email) {
            return Err(AppError::ConflictError(DUPLICATE_ACCOUNT_MESSAGE.to_string()));
        }

        let account = Account::new(username.to_string(), email.to_string(), password_hash.to_string());
        let id = account.id.clone();
        accounts.push(account);
        Ok(id)
    }

    async fn find_account_by_identifier(&self, identifier: &str) -> Result<Option<Account>, AppError> {
        let accounts = self.accounts.lock().unwrap();
        let found = accounts
            .iter()
            .find(|a| a.email == identifier)
            .or_else(|| accounts.iter().find(|a| a.username == identifier));
        Ok(found.cloned())
    }
}

/// 이메일당 하나의 레코드를 유지하는 인증 코드 저장소
#[derive(Default)]
pub struct InMemoryVerificationStore {
    records: Mutex<HashMap<String, VerificationRecord>>,
    fail_issue: AtomicBool,
    fail_redeem: AtomicBool,
}

impl InMemoryVerificationStore {
    /// 현재 저장된 코드
    pub fn code_for(&self, email: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(email)
            .map(|r| r.verification_code.clone())
    }

    pub fn fail_issue(&self, fail: bool) {
        self.fail_issue.store(fail, Ordering::SeqCst);
    }

    pub fn fail_redeem(&self, fail: bool) {
        self.fail_redeem.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl VerificationStore for InMemoryVerificationStore {
    async fn issue_code(&self, email: &str) -> Result<String, AppError> {
        if self.fail_issue.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("verification store unavailable".to_string()));
        }

        let code = generate_verification_code();
        self.records.lock().unwrap().insert(
            email.to_string(),
            VerificationRecord::issued(email.to_string(), code.clone()),
        );
        Ok(code)
    }

    async fn redeem(&self, email: &str, code: &str) -> Result<(), VerificationFailure> {
        if self.fail_redeem.load(Ordering::SeqCst) {
            return Err(VerificationFailure::System("verification store unavailable".to_string()));
        }

        let mut records = self.records.lock().unwrap();
        match records.get_mut(email) {
            Some(record) if record.verification_code == code && !record.verified => {
                record.verified = true;
                Ok(())
            }
            _ => Err(VerificationFailure::invalid_code()),
        }
    }

    async fn is_verified(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(email)
            .map(|r| r.verified)
            .unwrap_or(false))
    }
}

/// 발송된 메일
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// 발송 내역을 기록하는 발송기
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMail>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, to_email: &str, subject: &str, body_html: &str) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("smtp unavailable".to_string()));
        }

        self.sent.lock().unwrap().push(SentMail {
            to: to_email.to_string(),
            subject: subject.to_string(),
            body_html: body_html.to_string(),
        });
        Ok(())
    }
}

/// 테스트 대상 서비스와 그 의존성 묶음
pub struct TestContext {
    pub credentials: Arc<InMemoryCredentialStore>,
    pub verifications: Arc<InMemoryVerificationStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub tokens: Arc<JwtTokenService>,
    pub service: AccountService,
}

pub fn test_config(verification_enabled: bool) -> AccountConfig {
    AccountConfig {
        verification_enabled,
        server_address: TEST_SERVER_ADDRESS.to_string(),
        bcrypt_cost: 4,
    }
}

pub fn test_context(verification_enabled: bool) -> TestContext {
    let credentials = Arc::new(InMemoryCredentialStore::default());
    let verifications = Arc::new(InMemoryVerificationStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let tokens = Arc::new(JwtTokenService::new(Arc::new(StaticSecretProvider::new(TEST_SECRET))));

    let service = AccountService::new(
        credentials.clone(),
        verifications.clone(),
        notifier.clone(),
        tokens.clone(),
        test_config(verification_enabled),
    );

    TestContext {
        credentials,
        verifications,
        notifier,
        tokens,
        service,
    }
}
