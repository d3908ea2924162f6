//! 인증 메일 발송 모듈

pub mod notifier;

pub use notifier::*;
