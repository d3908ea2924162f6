//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명키, 이메일 인증, SMTP 설정
//!
//! ## 환경 분리
//!
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 중 하나가 먼저 로드되고,
//! 이후 각 설정 구조체가 환경 변수를 읽습니다.
//! `ENVIRONMENT`(development, test, staging, production)는 bcrypt cost 기본값을 결정합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AccountConfig, ServerConfig};
//!
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! let account_config = AccountConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="9000"
//! export ENVIRONMENT="production"
//! export BCRYPT_COST="12"          # 4-31 범위
//!
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="aashub"
//!
//! export VERIFICATION_ENABLED="true"
//! export SERVER_ADDRESS="http://localhost:9000/api/v1"
//! export JWT_SECRET_FILE="privatekey.txt"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
