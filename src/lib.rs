//! 커피숍 드링크 메뉴 백엔드
//!
//! Rust 기반의 드링크 메뉴 관리 서비스입니다.
//! Auth0 RS256 JWT 기반의 권한 검증, 환경별 설정 레코드,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **드링크 관리**: 메뉴 조회(공개), 상세 조회/생성/수정/삭제(권한 필요)
//! - **Auth0 인증**: JWKS 기반 RS256 토큰 검증과 permissions 클레임 검사
//! - **환경 설정 레코드**: 프로세스 시작 시 한 번 구성되는 불변 설정
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 드링크 데이터 영구 저장
//! - **Redis**: 메뉴 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 권한 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use coffee_shop_backend::services::drinks::DrinkService;
//! use coffee_shop_backend::config::EnvironmentConfig;
//!
//! // 환경 설정 레코드 (프로세스당 한 번 구성)
//! let config = EnvironmentConfig::get();
//! println!("API server: {}", config.api_server_url);
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let drink_service = DrinkService::instance();
//! let menu = drink_service.list_drinks().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
