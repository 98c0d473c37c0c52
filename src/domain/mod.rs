//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (Drink)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 외부 시스템 통합 모델 (Auth0 인증)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 영속되는 비즈니스의 핵심 객체들입니다. 음료([`entities::Drink`])와
//! 레시피 구성 요소를 포함합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다. 요청 본문의 유효성
//! 검증([`validator::Validate`])과 응답 형식 정의를 담당합니다.
//!
//! ### [`models`] - 외부 시스템 통합 모델
//!
//! Auth0 토큰 클레임, 인증된 사용자 컨텍스트 등 외부 인증 시스템과의
//! 통합을 위한 모델들입니다.
//!
//! ## 설계 원칙
//!
//! - **타입 안전성**: Rust의 타입 시스템을 활용한 컴파일 타임 검증
//! - **불변성 우선**: 가능한 한 불변 객체로 설계
//! - **명시적 변환**: From/Into trait을 통한 타입 변환

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use models::*;
