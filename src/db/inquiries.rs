//! # 문의하기/뉴스레터 데이터베이스 쿼리 모듈
//!
//! 방문자 폼 두 가지의 저장과 백오피스 목록 조회를 담당합니다.

use super::sql_limit;
use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 문의 메시지를 저장하고 생성된 ID를 반환합니다.
///
/// 입력값 검증(필수 필드, 이메일 형식)은 라우트 핸들러에서 이미 끝난 상태입니다.
pub async fn create_contact_message(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    email: &str,
    request: &ContactRequest,
    message: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO contact_messages (id, name, email, phone, subject, message)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(&request.phone)
    .bind(&request.subject)
    .bind(message)
    .execute(pool)
    .await?;

    Ok(())
}

/// 문의 메시지를 최신순으로 조회합니다.
pub async fn list_contact_messages(
    pool: &SqlitePool,
    limit: Option<i64>,
) -> Result<Vec<ContactMessage>, AppError> {
    let limit = sql_limit(limit)?;
    let messages = sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT id, name, email, phone, subject, message, created_at
        FROM contact_messages
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// 새 구독자를 추가합니다.
///
/// `INSERT OR IGNORE`: 동시에 같은 이메일이 두 번 들어와도
/// UNIQUE 제약조건 에러 대신 조용히 무시합니다.
///
/// ## 반환값
/// - `true`: 새로 추가됨
/// - `false`: 이미 구독 중인 이메일
pub async fn add_subscriber(
    pool: &SqlitePool,
    id: &str,
    email: &str,
    language: Option<Lang>,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO newsletter_subscribers (id, email, language) VALUES (?, ?, ?)",
    )
    .bind(id)
    .bind(email)
    .bind(language.map(Lang::code))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_subscribers(
    pool: &SqlitePool,
    limit: Option<i64>,
) -> Result<Vec<NewsletterSubscriber>, AppError> {
    let limit = sql_limit(limit)?;
    let subscribers = sqlx::query_as::<_, NewsletterSubscriber>(
        r#"
        SELECT id, email, language, created_at
        FROM newsletter_subscribers
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(subscribers)
}
