//! 음료 리포지토리 모듈

pub mod drink_repo;

pub use drink_repo::*;
