//! 곡 엔티티 모듈
//!
//! [`Song`](song::Song) 문서와 내장 [`Comment`](song::Comment)를 제공합니다.

pub mod song;

pub use song::*;
