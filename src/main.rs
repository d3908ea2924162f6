//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 인덱스를 준비한 뒤, 저장소/발송기/토큰 서비스를 조립해
//! `AccountService` 하나를 모든 워커에 공유합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use account_service_backend::config::{AccountConfig, JwtConfig, ServerConfig, SmtpConfig};
use account_service_backend::core::errors::AppError;
use account_service_backend::db::Database;
use account_service_backend::repositories::users::UserRepository;
use account_service_backend::repositories::verifications::VerificationRepository;
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::accounts::AccountService;
use account_service_backend::services::auth::{FileSecretProvider, JwtTokenService};
use account_service_backend::services::mail::{LogNotifier, Notifier, SmtpNotifier};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let service = match build_account_service().await {
        Ok(service) => service,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(service)).await
}

/// 저장소, 메일 발송기, 토큰 서비스를 조립해 `AccountService`를 만듭니다.
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패
/// * SMTP 설정 오류
async fn build_account_service() -> Result<AccountService, AppError> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::new().await?;

    let users = UserRepository::new(&database);
    let verifications = VerificationRepository::new(&database);
    users.create_indexes().await?;
    verifications.create_indexes().await?;
    info!("✅ 인덱스 준비 완료");

    let notifier: Arc<dyn Notifier> = match SmtpConfig::from_env() {
        Some(smtp) => {
            info!("📧 SMTP 발송 사용: {:?}", smtp);
            Arc::new(SmtpNotifier::new(&smtp)?)
        }
        None => {
            warn!("📭 SMTP 설정 없음, 인증 메일은 로그로만 출력됩니다");
            Arc::new(LogNotifier)
        }
    };

    let secret_path = JwtConfig::secret_path();
    info!("🔑 JWT 서명키 파일: {}", secret_path);
    let tokens = JwtTokenService::new(Arc::new(FileSecretProvider::new(secret_path)));

    let config = AccountConfig::from_env();
    info!(
        "⚙️ 이메일 인증: {}, 인증 링크 기준 주소: {}",
        if config.verification_enabled { "사용" } else { "미사용" },
        config.server_address
    );

    Ok(AccountService::new(
        Arc::new(users),
        Arc::new(verifications),
        notifier,
        Arc::new(tokens),
        config,
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<AccountService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패, 시스템 환경 변수만 사용: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=account_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin을 허용하고 자격 증명(쿠키)을 지원합니다.
/// Preflight 캐시는 12시간입니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .supports_credentials()
        .max_age(12 * 60 * 60)
}
