//! 리포지토리 계층 모듈
//!
//! MongoDB 컬렉션과 Redis 캐시를 통합하는 데이터 액세스 계층입니다.
//! 각 리포지토리는 `#[repository]` 매크로를 통해 싱글톤으로 등록되고
//! 의존성이 자동 주입됩니다.

pub mod drinks;

pub use drinks::*;
