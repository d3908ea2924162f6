//! HTTP 요청/응답 DTO

pub mod accounts;

pub use accounts::*;
