//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 저장소와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `tours`: 투어와 일정 쿼리
//! - `destinations`: 여행지 쿼리
//! - `categories`: 투어 카테고리 쿼리
//! - `bookings`: 예약 쿼리
//! - `reviews`: 후기 쿼리
//! - `blog`: 블로그 글 쿼리
//! - `menus`: 메뉴 항목 쿼리
//! - `about`: 회사 소개 섹션 쿼리
//! - `inquiries`: 문의/뉴스레터 쿼리
//!
//! 이 파일에는 여러 모듈이 함께 쓰는 도우미(부분 업데이트 빌더, slug 중복 처리 등)가 있습니다.

pub mod about;
pub mod blog;
pub mod bookings;
pub mod categories;
pub mod destinations;
pub mod inquiries;
pub mod menus;
pub mod reviews;
pub mod tours;

pub use about::*;
pub use blog::*;
pub use bookings::*;
pub use categories::*;
pub use destinations::*;
pub use inquiries::*;
pub use menus::*;
pub use reviews::*;
pub use tours::*;

use crate::error::AppError;
use crate::models::Localized;
use sqlx::{Encode, Executor, QueryBuilder, Sqlite, SqlitePool, Type};

/// 저장소의 현재 시각 표현식 (ISO 8601, 밀리초, UTC)
pub const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// UUIDv7 문자열 ID를 생성합니다. v7은 타임스탬프 기반이라 생성 순서대로 정렬됩니다.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// `?limit=` 값을 SQL LIMIT 값으로 바꿉니다.
///
/// - `None` → `-1` (SQLite에서 LIMIT -1은 "제한 없음")
/// - 0 이하 → 400 Bad Request
pub fn sql_limit(limit: Option<i64>) -> Result<i64, AppError> {
    match limit {
        None => Ok(-1),
        Some(n) if n > 0 => Ok(n),
        Some(_) => Err(AppError::BadRequest(
            "limit must be a positive integer".to_string(),
        )),
    }
}

/// 테이블 안에서 겹치지 않는 slug를 만듭니다.
///
/// `base`가 이미 쓰이고 있으면 `base-2`, `base-3`, ... 순서로 빈 번호를 찾습니다.
/// `exclude_id`는 수정 중인 행 자신의 slug를 충돌로 보지 않기 위해 사용합니다.
pub async fn unique_slug(
    pool: &SqlitePool,
    table: &str,
    base: &str,
    exclude_id: Option<&str>,
) -> Result<String, AppError> {
    let base = if base.is_empty() { "item" } else { base };

    let sql = format!(
        "SELECT slug FROM {} WHERE (slug = ? OR slug LIKE ?) AND id != ?",
        table
    );
    let taken: Vec<(String,)> = sqlx::query_as(&sql)
        .bind(base)
        .bind(format!("{}-%", base))
        .bind(exclude_id.unwrap_or(""))
        .fetch_all(pool)
        .await?;
    let taken: Vec<String> = taken.into_iter().map(|(slug,)| slug).collect();

    if !taken.iter().any(|slug| slug == base) {
        return Ok(base.to_string());
    }

    // 번호는 무한히 늘어날 수 있지만 taken 목록이 유한하므로 반드시 끝납니다.
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
        n += 1;
    }
}

/// PUT 부분 업데이트용 동적 UPDATE 쿼리 빌더
///
/// 요청에 들어 있는 필드(Some)만 `SET col = ?`에 추가하고,
/// `updated_at`은 항상 현재 시각으로 갱신합니다.
///
/// ```ignore
/// let mut update = UpdateBuilder::new("tours");
/// update.set("price", payload.price).set_localized("title", payload.title());
/// update.execute(pool, id).await?;
/// ```
pub struct UpdateBuilder<'a> {
    query: QueryBuilder<'a, Sqlite>,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(table: &str) -> Self {
        Self {
            query: QueryBuilder::new(format!("UPDATE {} SET updated_at = {}", table, SQL_NOW)),
        }
    }

    /// 값이 Some일 때만 `, column = ?`을 추가합니다.
    pub fn set<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'a + Encode<'a, Sqlite> + Type<Sqlite> + Send,
    {
        if let Some(value) = value {
            self.query.push(", ").push(column).push(" = ").push_bind(value);
        }
        self
    }

    /// 다국어 필드를 `base_en`, `base_de`, `base_ru` 컬럼으로 나눠 설정합니다.
    pub fn set_localized(&mut self, base: &str, value: Localized) -> &mut Self {
        self.set(&format!("{}_en", base), value.en)
            .set(&format!("{}_de", base), value.de)
            .set(&format!("{}_ru", base), value.ru)
    }

    /// WHERE id = ? 를 붙여 실행합니다. 영향받은 행이 있으면 true.
    ///
    /// 풀(`&SqlitePool`)과 트랜잭션(`&mut *tx`) 어느 쪽에서든 실행할 수 있습니다.
    pub async fn execute<'c, E>(mut self, executor: E, id: &str) -> Result<bool, AppError>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        self.query.push(" WHERE id = ").push_bind(id.to_string());
        let result = self.query.build().execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }
}
