//! 미들웨어 모듈
//!
//! ActixWeb 요청 파이프라인에 들어가는 인증/인가 미들웨어를 제공합니다.

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
