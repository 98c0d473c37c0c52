//! 서비스 계층 모듈
//!
//! 핵심 비즈니스 로직을 담당하는 애플리케이션 서비스들입니다.
//! 리포지토리 계층 위에서 도메인 규칙을 적용하고, 핸들러 계층에
//! DTO 기반 인터페이스를 제공합니다.

pub mod auth;
pub mod drinks;

pub use auth::*;
pub use drinks::*;
