//! 데이터 전송 객체(DTO) 모듈
//!
//! API 경계에서 주고받는 요청/응답 구조를 정의합니다.
//! 요청 DTO는 [`validator::Validate`]를 통해 입력 검증을 수행합니다.

pub mod drinks;

pub use drinks::*;
