//! # Core Module
//!
//! 서비스 전체가 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 메시지와 함께 감싸는 확장 trait

pub mod errors;

pub use errors::*;
