//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명된 세션 토큰의 발급과 검증을 담당합니다.
//! 토큰은 저장되지 않으며 폐기/갱신 기능은 없습니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::models::token::claims::TokenClaims,
    services::auth::secret_provider::SecretProvider,
};

/// 세션 토큰 발급/검증 인터페이스
pub trait TokenIssuer: Send + Sync {
    /// `subject`(계정 ID)를 담은 토큰을 발급합니다.
    fn issue(&self, subject: &str) -> AppResult<String>;

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 형식 오류, 서명 불일치, 만료는 모두 `AuthenticationError`입니다.
    fn validate(&self, token: &str) -> AppResult<TokenClaims>;

    fn is_valid(&self, token: &str) -> bool {
        self.validate(token).is_ok()
    }
}

/// JWT(HS256) 토큰 서비스
///
/// 서명키는 [`SecretProvider`]에서 매 호출마다 가져옵니다.
///
/// # 예제
///
/// ```rust,ignore
/// let secrets = Arc::new(FileSecretProvider::new(JwtConfig::secret_path()));
/// let tokens = JwtTokenService::new(secrets);
///
/// let token = tokens.issue(&account.id)?;
/// let claims = tokens.validate(&token)?;
/// assert_eq!(claims.sub, account.id);
/// ```
pub struct JwtTokenService {
    secrets: Arc<dyn SecretProvider>,
    ttl: Duration,
}

impl JwtTokenService {
    /// 유효 시간 24시간으로 생성합니다.
    pub fn new(secrets: Arc<dyn SecretProvider>) -> Self {
        Self::with_ttl(secrets, Duration::hours(JwtConfig::TOKEN_TTL_HOURS))
    }

    pub fn with_ttl(secrets: Arc<dyn SecretProvider>, ttl: Duration) -> Self {
        Self { secrets, ttl }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, subject: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + self.ttl;

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = self.secrets.secret()?;
        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(&secret);

        encode(&header, &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    fn validate(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = self.secrets.secret()?;
        let decoding_key = DecodingKey::from_secret(&secret);

        decode::<TokenClaims>(token, &decoding_key, &Self::validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
    }
}
