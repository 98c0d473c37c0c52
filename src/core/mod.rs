//! 핵심 인프라 모듈
//!
//! 애플리케이션 전역 에러 시스템과 싱글톤 의존성 주입 레지스트리를 제공합니다.
//!
//! - [`errors`] - `AppError` 및 HTTP 응답 변환
//! - [`registry`] - `ServiceLocator` 기반 싱글톤 DI 컨테이너

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
