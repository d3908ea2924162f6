//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 있으며, 모든 외부 의존성은 trait 객체로 주입받습니다.
//!
//! - [`accounts`] - 회원가입, 로그인, 이메일 인증 흐름
//! - [`auth`] - JWT 발급/검증, 서명키 공급
//! - [`mail`] - 인증 메일 발송
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::AccountService;
//!
//! let service = AccountService::new(credentials, verifications, notifier, tokens, config);
//! service.register("alice", "alice@example.com", "pw").await?;
//! ```

pub mod accounts;
pub mod auth;
pub mod mail;
