//! JWT 서명키 공급자
//!
//! 토큰 서비스는 서명키를 직접 보관하지 않고, 발급/검증할 때마다
//! [`SecretProvider`]에 요청합니다.

use std::path::PathBuf;

use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 서명키 공급 인터페이스
pub trait SecretProvider: Send + Sync {
    /// 현재 서명키를 반환합니다.
    fn secret(&self) -> AppResult<Vec<u8>>;
}

/// 파일 기반 서명키 공급자
///
/// 호출할 때마다 파일을 다시 읽습니다. 파일 내용을 교체하면
/// 서버 재시작 없이 다음 요청부터 새 키가 적용됩니다.
///
/// - 파일 끝의 개행(`\n`, `\r\n`)은 제거됩니다.
/// - 파일이 없거나 비어 있으면 `InternalError`입니다.
///
/// # 예제
///
/// ```rust,ignore
/// let provider = FileSecretProvider::new(JwtConfig::secret_path());
/// let secret = provider.secret()?;
/// ```
#[derive(Debug, Clone)]
pub struct FileSecretProvider {
    path: PathBuf,
}

impl FileSecretProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretProvider for FileSecretProvider {
    fn secret(&self) -> AppResult<Vec<u8>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("서명키 파일 읽기 실패 ({})", self.path.display()))?;

        let secret = raw.trim_end_matches(['\r', '\n']);
        if secret.is_empty() {
            return Err(AppError::InternalError(format!(
                "서명키 파일이 비어 있습니다 ({})",
                self.path.display()
            )));
        }

        Ok(secret.as_bytes().to_vec())
    }
}

/// 고정 서명키 공급자
#[derive(Clone)]
pub struct StaticSecretProvider {
    secret: Vec<u8>,
}

impl StaticSecretProvider {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { secret: secret.into() }
    }
}

impl SecretProvider for StaticSecretProvider {
    fn secret(&self) -> AppResult<Vec<u8>> {
        if self.secret.is_empty() {
            return Err(AppError::InternalError("서명키가 비어 있습니다".to_string()));
        }
        Ok(self.secret.clone())
    }
}
