//! 음료 엔티티 모듈

pub mod drink;

pub use drink::*;
