//! # 계정 서비스 구현
//!
//! 회원가입, 로그인, 이메일 인증 흐름을 조율하는 비즈니스 로직입니다.
//! 저장소, 메일 발송기, 토큰 발급기는 모두 trait 객체로 주입받습니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        AccountService                         │
//! │   register            login               verify              │
//! └──────┬───────────────────┬────────────────────┬───────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//!  CredentialStore    VerificationStore      TokenIssuer      Notifier
//! ```
//!
//! ## 계정 상태
//!
//! 이메일 인증이 켜져 있으면 `Registered(미인증) → Verified` 순서로 전이하며,
//! 미인증 계정은 로그인할 수 없습니다. 꺼져 있으면 가입 직후 바로 로그인 가능합니다.
//!
//! ## 알려진 제약
//!
//! 계정 저장 후 인증 코드 발급이나 메일 발송이 실패하면 가입 요청은 실패하지만,
//! 이미 저장된 계정은 되돌리지 않습니다. 같은 이메일로 다시 가입하면 중복 에러가 납니다.

use std::sync::Arc;
use std::time::Instant;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bcrypt::hash;
use log::{debug, info, warn};

use crate::{
    config::AccountConfig,
    core::errors::{AppError, AppResult},
    domain::{
        entities::verifications::verification::VerificationFailure,
        models::token::claims::TokenClaims,
    },
    repositories::{CredentialStore, VerificationStore},
    services::{auth::TokenIssuer, mail::Notifier},
    utils::string_utils::require_fields,
};

/// 계정 없음과 비밀번호 불일치에 공통으로 쓰는 메시지
pub const LOGIN_FAILED_MESSAGE: &str = "identifier or password wrong";
/// 미인증 계정 로그인 시 메시지
pub const NOT_VERIFIED_MESSAGE: &str = "user not verified";
/// 인증 메일 제목
pub const VERIFICATION_SUBJECT: &str = "Verification Code";

/// 계정 서비스
///
/// `main`에서 한 번 생성되어 `web::Data`로 모든 워커가 공유합니다.
/// 내부에 변경 가능한 상태가 없으므로 별도 잠금이 필요 없습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let service = AccountService::new(
///     Arc::new(UserRepository::new(&database)),
///     Arc::new(VerificationRepository::new(&database)),
///     Arc::new(LogNotifier),
///     Arc::new(JwtTokenService::new(secrets)),
///     AccountConfig::from_env(),
/// );
///
/// service.register("alice", "alice@example.com", "pw").await?;
/// let token = service.login("alice", "pw").await?;
/// ```
pub struct AccountService {
    credentials: Arc<dyn CredentialStore>,
    verifications: Arc<dyn VerificationStore>,
    notifier: Arc<dyn Notifier>,
    tokens: Arc<dyn TokenIssuer>,
    config: AccountConfig,
}

impl AccountService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        verifications: Arc<dyn VerificationStore>,
        notifier: Arc<dyn Notifier>,
        tokens: Arc<dyn TokenIssuer>,
        config: AccountConfig,
    ) -> Self {
        Self {
            credentials,
            verifications,
            notifier,
            tokens,
            config,
        }
    }

    /// 새 계정을 등록합니다.
    ///
    /// # 처리 순서
    ///
    /// 1. 빈 값(공백만 있는 값 포함) 검사
    /// 2. bcrypt 해싱 (설정된 cost)
    /// 3. 계정 저장 (중복이면 `ConflictError`)
    /// 4. 인증이 켜져 있으면 코드 발급 후 인증 링크 메일 발송
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 가입 완료
    /// * `Err(AppError::ValidationError)` - 필수 값 누락
    /// * `Err(AppError::ConflictError)` - 사용자명 또는 이메일 중복
    /// * `Err(AppError::ExternalServiceError)` - 메일 발송 실패 (계정은 남음)
    /// * `Err(AppError::DatabaseError | InternalError)` - 내부 오류
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<()> {
        require_fields(&[username, email, password])?;

        let hash_start = Instant::now();
        let password_hash = hash(password, self.config.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let account_id = self
            .credentials
            .create_account(username, email, &password_hash)
            .await?;

        info!("✅ 계정 생성 완료: {} ({})", username, account_id);

        if self.config.verification_enabled {
            if let Err(e) = self.send_verification(email).await {
                warn!("⚠️ 인증 메일 처리 실패, 계정 {}은 미인증 상태로 남음: {}", account_id, e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn send_verification(&self, email: &str) -> AppResult<()> {
        let code = self.verifications.issue_code(email).await?;
        let link = build_verification_link(&self.config.server_address, email, &code);

        self.notifier
            .send(email, VERIFICATION_SUBJECT, &verification_email_body(&link))
            .await
    }

    /// 로그인하고 세션 토큰을 발급합니다.
    ///
    /// `identifier`는 사용자명 또는 이메일입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 계정 ID를 subject로 담은 JWT
    /// * `Err(AppError::ValidationError)` - 필수 값 누락
    /// * `Err(AppError::NotFound)` - 계정 없음 또는 비밀번호 불일치 (같은 메시지)
    /// * `Err(AppError::NotVerifiedError)` - 인증이 켜져 있고 미인증 계정
    ///
    /// 인증 여부는 비밀번호 비교보다 먼저 확인합니다.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<String> {
        require_fields(&[identifier, password])?;

        let account = self
            .credentials
            .find_account_by_identifier(identifier)
            .await?
            .ok_or_else(|| AppError::NotFound(LOGIN_FAILED_MESSAGE.to_string()))?;

        if self.config.verification_enabled && !self.verifications.is_verified(&account.email).await? {
            return Err(AppError::NotVerifiedError(NOT_VERIFIED_MESSAGE.to_string()));
        }

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::NotFound(LOGIN_FAILED_MESSAGE.to_string()));
        }

        let token = self.tokens.issue(&account.id)?;
        info!("🔑 로그인 성공: {}", account.id);

        Ok(token)
    }

    /// 인증 코드를 사용합니다.
    pub async fn verify(&self, email: &str, code: &str) -> Result<(), VerificationFailure> {
        self.verifications.redeem(email, code).await?;
        info!("✅ 이메일 인증 완료: {}", email);
        Ok(())
    }

    /// 세션 토큰을 검증합니다.
    pub fn validate_session(&self, token: &str) -> AppResult<TokenClaims> {
        self.tokens.validate(token)
    }
}

/// 인증 링크를 만듭니다.
///
/// 이메일과 코드는 각각 URL-safe base64 (패딩 없음)로 인코딩됩니다.
///
/// ```text
/// {server_address}/verify?email={b64(email)}&code={b64(code)}
/// ```
pub fn build_verification_link(server_address: &str, email: &str, code: &str) -> String {
    format!(
        "{}/verify?email={}&code={}",
        server_address,
        URL_SAFE_NO_PAD.encode(email),
        URL_SAFE_NO_PAD.encode(code),
    )
}

/// 인증 메일 HTML 본문
pub fn verification_email_body(link: &str) -> String {
    format!("<a href='{}'>Click here to verify your email</a>", link)
}

/// 인증 링크의 쿼리 값을 복원합니다.
///
/// base64 디코딩이나 UTF-8 변환에 실패하면 `None`을 반환합니다.
pub fn decode_link_param(value: &str) -> Option<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}
