//! # Application Error Handling System
//!
//! 송 투표 백엔드 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 HTTP 응답을 만들 수 있습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ObjectId 형식 |
//! | `NotFound` | 404 Not Found | 수정/댓글 대상 곡 없음 |
//! | `ConfigError` | 500 Internal Server Error | 필수 환경 변수 누락 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 직렬화 등 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let song = repo.find_by_id(&id).await?
//!     .ok_or_else(|| AppError::NotFound(format!("Song {} not found", id)))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 메시지 문자열을 담고 있으며, 응답 본문은
/// `{"error": "<Display 출력>"}` 형식입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값이 저장소에 전달될 수 없는 형식 (400)
    ///
    /// 현재는 ObjectId 파싱 실패에만 사용됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 곡이 존재하지 않음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 설정값 누락 또는 오류 (500, 기동 시에는 치명적)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 `AppError` 변형을 상태 코드와 JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let fixtures: Vec<CreateSongRequest> = serde_json::from_str(raw)
///     .context("Failed to parse seed fixtures")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("invalid id".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Song not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_side_errors_map_to_500() {
        for error in [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::ConfigError("DB_URL missing".to_string()),
            AppError::InternalError("Something went wrong".to_string()),
        ] {
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, &str> = Ok(7);
        let value = result
            .with_context(|| panic!("context must not be evaluated on Ok"))
            .unwrap();

        assert_eq!(value, 7);
    }
}
