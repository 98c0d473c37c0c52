//! 인증 도메인 모델 모듈
//!
//! Auth0 토큰 클레임, 인증된 사용자 컨텍스트, 권한 요구사항 등
//! 인증/인가 파이프라인에서 사용하는 값 객체들을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;
pub mod claims;

pub use authenticated_user::*;
pub use authentication_request::*;
pub use claims::*;
