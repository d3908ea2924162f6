//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 입력값 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_fields;
//!
//! require_fields(&[identifier, password])?;
//! ```

pub mod string_utils;
