//! 유틸리티 모듈
//!
//! 초기화 과정의 터미널 출력 포맷팅 등 공용 헬퍼를 제공합니다.

pub mod display_terminal;
