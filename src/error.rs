//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 클라이언트가 보게 되는 실패는 크게 두 종류입니다:
//! - 검증 실패 (필수 필드 누락, 잘못된 이메일 등) → 400
//! - 백엔드 실패 (DB 에러, LLM API 에러 등) → 500 + 일반적인 메시지
//!
//! 구체적인 원인은 서버 로그에만 기록합니다.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 충돌 (HTTP 409) — 중복 slug, 중복 섹션 키 등
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수의 에러에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 외부 LLM API 호출 오류 (HTTP 500)
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    /// 필수 필드 누락 에러를 만드는 단축 함수
    pub fn missing(field: &str) -> Self {
        AppError::BadRequest(format!("Missing required field: {}", field))
    }
}

/// 저장소가 "테이블 없음"을 보고했는지 확인합니다.
///
/// 메뉴처럼 테이블이 아직 만들어지지 않은 배포에서도
/// 기본값으로 동작해야 하는 엔드포인트가 사용합니다.
pub fn is_missing_table(err: &AppError) -> bool {
    match err {
        AppError::Database(sqlx::Error::Database(db_err)) => {
            db_err.message().contains("no such table")
        }
        _ => false,
    }
}

/// UNIQUE 제약조건 위반인지 확인합니다.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// UNIQUE 제약조건 위반을 500 대신 409 Conflict로 바꿉니다.
///
/// slug 중복 검사와 INSERT 사이에 다른 요청이 같은 값을 먼저 저장한 경우 등에 사용합니다.
/// 다른 에러는 그대로 돌려줍니다.
pub fn conflict_on_unique(err: AppError, message: impl FnOnce() -> String) -> AppError {
    match err {
        AppError::Database(db_err) if is_unique_violation(&db_err) => {
            AppError::Conflict(message())
        }
        other => other,
    }
}

/// slug 중복 검사 직후 다른 요청이 같은 slug를 먼저 저장한 경우 → 409
pub fn slug_taken(err: AppError, slug: &str) -> AppError {
    conflict_on_unique(err, || format!("Slug '{}' is already taken", slug))
}

/// 요청 본문 JSON 파싱 실패 (문법 오류, 잘못된 타입, 알 수 없는 상태값 등) → 400
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// 쿼리 문자열 파싱 실패 (`?limit=abc`, `?status=bogus`) → 400
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Upstream, Internal)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Upstream(ref e) => {
                tracing::error!("Upstream error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_error",
                    "Content generation failed".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "not_found", "message": "Resource not found" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn unique_violation_becomes_conflict() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE t (slug TEXT UNIQUE)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (slug) VALUES ('alps')")
            .execute(&pool)
            .await
            .unwrap();

        let err: AppError = sqlx::query("INSERT INTO t (slug) VALUES ('alps')")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();
        let mapped = slug_taken(err, "alps");
        assert!(matches!(mapped, AppError::Conflict(ref msg) if msg.contains("'alps'")));
    }

    #[test]
    fn other_errors_pass_through() {
        let mapped = conflict_on_unique(AppError::NotFound, || unreachable!());
        assert!(matches!(mapped, AppError::NotFound));
    }
}
