//! 데이터베이스 및 서버 설정 관리 모듈
//!
//! 배포 모드, MongoDB 연결 대상, 서버 바인딩 설정을 관리합니다.

use std::env;
use crate::core::errors::AppError;

/// 로컬 개발용 MongoDB 엔드포인트
pub const LOCAL_DATABASE_URI: &str = "mongodb://localhost/konjomusic";

/// URI에 데이터베이스 이름이 없을 때 사용하는 이름
pub const DEFAULT_DATABASE_NAME: &str = "konjomusic";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 로컬 mongod에 연결
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - `DB_URL`로 연결
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인합니다.
    /// 설정되지 않았거나 알 수 없는 값이면 `Development`입니다.
    /// 프로덕션 데이터베이스는 명시적으로 요청할 때만 사용됩니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// 로그에 표시할 이름
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Test => "Test",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 배포 모드에 맞는 연결 URI를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `DB_URL`: 프로덕션 연결 문자열 (프로덕션에서 필수)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 프로덕션인데 `DB_URL`이 없거나 비어 있음
    pub fn uri(environment: &Environment) -> Result<String, AppError> {
        Self::uri_from(environment, env::var("DB_URL").ok())
    }

    /// `DB_URL` 값을 직접 받아 URI를 결정합니다.
    pub fn uri_from(environment: &Environment, db_url: Option<String>) -> Result<String, AppError> {
        if !environment.is_production() {
            return Ok(LOCAL_DATABASE_URI.to_string());
        }

        match db_url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(AppError::ConfigError(
                "DB_URL must be set when running in production".to_string(),
            )),
        }
    }

    /// 사용할 데이터베이스 이름을 결정합니다.
    ///
    /// 우선순위: `DATABASE_NAME` → URI의 기본 데이터베이스 → `konjomusic`
    pub fn database_name(uri_default: Option<&str>) -> String {
        env::var("DATABASE_NAME")
            .ok()
            .filter(|name| !name.is_empty())
            .or_else(|| uri_default.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
