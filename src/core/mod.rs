//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러를 `AppError`로 변환
//!
//! ## 의존성 주입
//!
//! 전역 레지스트리나 싱글톤은 사용하지 않습니다.
//! 모든 저장소와 서비스는 `main`에서 한 번 생성되어 생성자 인자로 주입되고,
//! 핸들러에는 `web::Data`로 전달됩니다.
//!
//! ```rust,ignore
//! let service = AccountService::new(credentials, verifications, notifier, tokens, config);
//! App::new().app_data(web::Data::new(service))
//! ```

pub mod errors;
