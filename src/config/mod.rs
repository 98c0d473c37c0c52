//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`environment`] - 실행 환경, 서버 바인딩, 환경 설정 레코드
//! - [`auth_config`] - Auth0 테넌트 관련 파생 설정 (issuer, JWKS URL 등)
//!
//! ## 설계 원칙
//!
//! ### 1. 단일 불변 레코드
//!
//! 환경별 설정은 [`EnvironmentConfig`] 하나의 레코드로 수렴합니다.
//! 이 레코드는 프로세스 시작 시 한 번 구성되며 이후 절대 변경되지 않으므로
//! 동기화 없이 여러 스레드에서 자유롭게 읽을 수 있습니다.
//!
//! ### 2. 안전한 개발 기본값
//!
//! 모든 필드는 환경 변수로 재정의할 수 있으며, 설정되지 않은 경우
//! 개발 환경용 리터럴 기본값을 사용합니다. 프로덕션 환경에서 기본값으로
//! 실행되면 경고 로그가 출력됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, EnvironmentConfig, ServerConfig, Auth0Config};
//!
//! let env = Environment::current();
//! let config = EnvironmentConfig::get();
//!
//! println!("production: {}", config.production);
//! println!("api server: {}", config.api_server_url);
//! println!("jwks url: {}", Auth0Config::jwks_url());
//! println!("bind to {}:{}", ServerConfig::host(), ServerConfig::port());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 환경 설정 레코드
//! export API_SERVER_URL="http://127.0.0.1:5000"
//! export AUTH0_DOMAIN_PREFIX="dev-bvzlp059.us"
//! export AUTH0_AUDIENCE="drink"
//! export AUTH0_CLIENT_ID="qk3LYH12z3nfFNbXWh2KvW7ahSWquSaG"
//! export AUTH0_CALLBACK_URL="http://127.0.0.1:4200"
//! ```

pub mod environment;
pub mod auth_config;

pub use environment::*;
pub use auth_config::*;
