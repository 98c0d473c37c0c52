//! 인증 서비스 모듈
//!
//! Auth0 발급 액세스 토큰의 검증 파이프라인을 구성합니다.
//!
//! - [`jwks_service`]: 테넌트 JWKS 공개키 조회 및 캐싱
//! - [`token_service`]: RS256 서명 검증 및 클레임 추출

pub mod jwks_service;
pub mod token_service;

pub use jwks_service::*;
pub use token_service::*;
