//! 메일 발송 구현
//!
//! - [`SmtpNotifier`]: lettre 비동기 SMTP (implicit TLS)
//! - [`LogNotifier`]: 실제 발송 없이 로그만 남기는 로컬 개발용 구현
//!
//! `main`에서 [`SmtpConfig`]가 있으면 SMTP를, 없으면 로그 구현을 주입합니다.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use log::{debug, info};

use crate::{
    config::SmtpConfig,
    core::errors::{AppError, AppResult},
};

/// 메일 발송 인터페이스
#[async_trait]
pub trait Notifier: Send + Sync {
    /// HTML 본문 메일을 발송합니다.
    ///
    /// 발송 실패는 `ExternalServiceError`로 반환됩니다.
    async fn send(&self, to_email: &str, subject: &str, body_html: &str) -> AppResult<()>;
}

/// SMTP 메일 발송기
///
/// 설정된 메일 계정으로 로그인하여 그 주소를 발신자로 사용합니다.
/// 커넥션 풀은 lettre 전송 객체가 관리합니다.
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// SMTP 전송 객체를 생성합니다. 이 시점에는 서버에 접속하지 않습니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// if let Some(smtp) = SmtpConfig::from_env() {
    ///     let notifier = SmtpNotifier::new(&smtp)?;
    /// }
    /// ```
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let from: Mailbox = config
            .address
            .parse()
            .map_err(|e| AppError::InternalError(format!("발신 주소 형식 오류: {}", e)))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| AppError::InternalError(format!("SMTP 설정 오류: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.address.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to_email: &str, subject: &str, body_html: &str) -> AppResult<()> {
        let to: Mailbox = to_email
            .parse()
            .map_err(|e| AppError::ExternalServiceError(format!("수신 주소 형식 오류: {}", e)))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body_html.to_string())
            .map_err(|e| AppError::ExternalServiceError(format!("메일 생성 실패: {}", e)))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

        info!("📧 인증 메일 발송 완료: {}", to_email);
        Ok(())
    }
}

/// 로그 출력용 발송기
///
/// SMTP 설정이 없는 로컬 환경에서 사용합니다. 본문(인증 링크 포함)은 debug 레벨로만 출력합니다.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to_email: &str, subject: &str, body_html: &str) -> AppResult<()> {
        info!("📭 SMTP 미설정, 메일 발송 생략: to={}, subject={}", to_email, subject);
        debug!("메일 본문: {}", body_html);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_log_notifier_always_succeeds() {
        let notifier = LogNotifier;
        let result = notifier
            .send("alice@example.com", "Verification Code", "<a href='x'>link</a>")
            .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_smtp_notifier_rejects_invalid_sender() {
        let config = SmtpConfig {
            address: "not an address".to_string(),
            password: "pw".to_string(),
            host: "smtp.example.com".to_string(),
            port: 465,
        };

        assert!(matches!(
            SmtpNotifier::new(&config),
            Err(AppError::InternalError(_))
        ));
    }
}
