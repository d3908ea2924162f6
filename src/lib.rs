//! 계정 서비스 백엔드
//!
//! 회원가입, 이메일 인증, 로그인(JWT 세션 쿠키)을 제공하는 Rust 기반 계정 서비스입니다.
//!
//! # Features
//!
//! - **회원가입**: bcrypt 해싱, 사용자명/이메일 유일성 보장
//! - **이메일 인증**: 6자리 영숫자 코드, 1회용, 링크 메일 발송 (SMTP 또는 로그)
//! - **로그인**: 사용자명 또는 이메일, HS256 JWT를 HttpOnly 쿠키로 발급
//! - **명시적 의존성 주입**: 모든 협력 객체를 trait 객체로 생성자에 주입
//! - **MongoDB**: 계정과 인증 코드 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AccountService  │ ← 비즈니스 로직
//! └─────────────────┘
//!     │         │
//!     ▼         ▼
//! ┌────────┐ ┌─────────────────────┐
//! │ Repos  │ │ Notifier / Tokens   │
//! └────────┘ └─────────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::services::accounts::AccountService;
//!
//! service.register("alice", "alice@example.com", "pw").await?;
//! service.verify("alice@example.com", &code).await?;
//! let token = service.login("alice", "pw").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

#[cfg(test)]
pub mod test_support;
