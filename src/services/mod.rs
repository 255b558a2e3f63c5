//! 비즈니스 로직 서비스 계층
//!
//! - [`songs`] - 곡 CRUD 및 내장 댓글 조작

pub mod songs;
