//! # Authentication Configuration Module
//!
//! JWT 서명키, 이메일 인증, SMTP 발송 등 계정 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ### 이메일 인증
//! ```bash
//! export VERIFICATION_ENABLED="true"
//! export SERVER_ADDRESS="https://accounts.example.com/api/v1"
//! ```
//!
//! ### JWT 서명키
//! ```bash
//! # 파일 내용 전체가 HS256 비밀키로 사용됩니다 (끝의 개행은 제거)
//! export JWT_SECRET_FILE="privatekey.txt"
//! ```
//!
//! ### SMTP (설정하지 않으면 메일 대신 로그로 출력)
//! ```bash
//! export MAIL_ADDRESS="noreply@example.com"
//! export MAIL_PASSWORD="app-password"
//! export MAIL_SMTP="smtp.example.com"
//! export SMTP_PORT="465"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AccountConfig, JwtConfig, SmtpConfig};
//!
//! let account_config = AccountConfig::from_env();
//! let secret_path = JwtConfig::secret_path();
//! let smtp = SmtpConfig::from_env(); // Option<SmtpConfig>
//! ```

use std::env;

use crate::config::PasswordConfig;

/// JSON Web Token (JWT) 관련 설정
///
/// 서명키는 환경 변수에 직접 두지 않고 파일 경로만 둡니다.
/// 토큰 서비스가 요청마다 파일을 다시 읽으므로, 키 교체 시 재시작이 필요 없습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 유효 시간 (시간 단위)
    pub const TOKEN_TTL_HOURS: i64 = 24;

    /// 서명키 파일 경로를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `privatekey.txt` (작업 디렉터리 기준)
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32 > privatekey.txt
    /// ```
    pub fn secret_path() -> String {
        env::var("JWT_SECRET_FILE").unwrap_or_else(|_| "privatekey.txt".to_string())
    }

    /// 토큰 유효 시간을 초 단위로 반환합니다.
    pub fn token_ttl_seconds() -> i64 {
        Self::TOKEN_TTL_HOURS * 60 * 60
    }
}

/// 계정 서비스 동작 설정
///
/// 시작 시 한 번 읽어서 `AccountService`에 주입합니다.
/// 서비스는 호출 시점에 환경 변수를 다시 읽지 않습니다.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// 이메일 인증 활성화 여부 (`VERIFICATION_ENABLED == "true"`)
    pub verification_enabled: bool,
    /// 인증 링크의 기준 URL (`SERVER_ADDRESS`)
    pub server_address: String,
    /// 패스워드 해싱 cost
    pub bcrypt_cost: u32,
}

impl AccountConfig {
    /// 인증 링크 기준 URL의 기본값
    pub const DEFAULT_SERVER_ADDRESS: &'static str = "http://localhost:9000/api/v1";

    /// 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            verification_enabled: Self::parse_flag(env::var("VERIFICATION_ENABLED").ok().as_deref()),
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| Self::DEFAULT_SERVER_ADDRESS.to_string()),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        }
    }

    /// 정확히 `"true"`일 때만 활성화됩니다.
    pub fn parse_flag(value: Option<&str>) -> bool {
        value == Some("true")
    }
}

/// SMTP 발송 설정
///
/// `MAIL_ADDRESS`, `MAIL_PASSWORD`, `MAIL_SMTP` 중 하나라도 비어 있으면
/// SMTP를 사용하지 않습니다.
#[derive(Clone)]
pub struct SmtpConfig {
    /// 발신 메일 주소 (SMTP 로그인 계정)
    pub address: String,
    /// SMTP 비밀번호
    pub password: String,
    /// SMTP 호스트
    pub host: String,
    /// SMTP 포트 (implicit TLS)
    pub port: u16,
}

impl SmtpConfig {
    pub const DEFAULT_PORT: u16 = 465;

    pub fn from_env() -> Option<Self> {
        Self::from_values(
            env::var("MAIL_ADDRESS").ok(),
            env::var("MAIL_PASSWORD").ok(),
            env::var("MAIL_SMTP").ok(),
            env::var("SMTP_PORT").ok(),
        )
    }

    /// 개별 값에서 설정을 구성합니다.
    pub fn from_values(
        address: Option<String>,
        password: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Option<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Some(Self {
            address: non_empty(address)?,
            password: non_empty(password)?,
            host: non_empty(host)?,
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
        })
    }
}

// 비밀번호가 로그에 찍히지 않도록 직접 구현
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("address", &self.address)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
