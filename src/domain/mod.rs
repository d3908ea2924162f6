//! # Domain Layer Module
//!
//! 계정 서비스의 도메인 타입을 모아 둔 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 객체 (Account, VerificationRecord)
//! ├── dto       - HTTP 요청/응답 계약 (JSON, form, query)
//! └── models    - 저장되지 않는 값 객체 (JWT 클레임)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! 엔티티는 저장소 계층과 서비스 계층이 공유하고,
//! DTO는 핸들러에서만 사용됩니다.

pub mod entities;
pub mod dto;
pub mod models;
