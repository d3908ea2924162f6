//! 인증 및 보안 서비스 모듈
//!
//! 세션 토큰(JWT) 발급/검증과 서명키 공급을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 24시간, 만료 허용 오차 없음
//! - 서명키는 파일에서 매 요청마다 읽음 (재시작 없이 교체 가능)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{FileSecretProvider, JwtTokenService, TokenIssuer};
//!
//! let tokens = JwtTokenService::new(Arc::new(FileSecretProvider::new("privatekey.txt")));
//! let token = tokens.issue(&account_id)?;
//! ```

pub mod secret_provider;
pub mod token_service;

pub use secret_provider::*;
pub use token_service::*;
