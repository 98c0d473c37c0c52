//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                   ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`drinks`**: 음료 메뉴 관리 엔드포인트
//!   - 공개 목록 조회 (`GET /drinks`)
//!   - 상세 목록 조회 (`GET /drinks-detail`)
//!   - 음료 등록 (`POST /drinks`)
//!   - 음료 수정 (`PATCH /drinks/{id}`)
//!   - 음료 삭제 (`DELETE /drinks/{id}`)
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - 로그인 URL 조회 (`GET /auth/login-url`)
//!   - 현재 사용자 조회 (`GET /auth/me`)
//!
//! ## 주요 특징
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 사용
//! - **타입 안전성**: 요청/응답 타입의 컴파일 타임 검증
//! - **검증 통합**: validator 크레이트로 입력 검증
//! - **통합 에러 타입**: AppError로 모든 에러 통합 처리

pub mod auth;
pub mod drinks;
