//! 음료 서비스 모듈

pub mod drink_service;

pub use drink_service::*;
