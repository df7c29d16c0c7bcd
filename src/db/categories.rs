//! # 투어 카테고리 데이터베이스 쿼리 모듈
//!
//! `tour_categories` 테이블에 대한 CRUD 쿼리 함수들입니다.
//!
//! `tours.category_id` 외래키에는 ON DELETE 동작이 없으므로,
//! 카테고리를 지우기 전에 이 모듈이 직접 투어의 참조를 끊어야 합니다.

use super::UpdateBuilder;
use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

const CATEGORY_COLUMNS: &str = r#"
    id, slug, name_en, name_de, name_ru,
    description_en, description_de, description_ru,
    icon, order_index, created_at, updated_at
"#;

/// 모든 카테고리를 표시 순서 → 영어 이름순으로 조회합니다.
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<TourCategory>, AppError> {
    let sql = format!(
        "SELECT {} FROM tour_categories ORDER BY order_index, name_en COLLATE NOCASE",
        CATEGORY_COLUMNS
    );
    let categories = sqlx::query_as::<_, TourCategory>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// ID로 카테고리 하나를 조회합니다.
pub async fn get_category(pool: &SqlitePool, id: &str) -> Result<Option<TourCategory>, AppError> {
    let sql = format!("SELECT {} FROM tour_categories WHERE id = ?", CATEGORY_COLUMNS);
    let category = sqlx::query_as::<_, TourCategory>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// 새 카테고리를 생성하고 생성된 행을 반환합니다.
pub async fn create_category(
    pool: &SqlitePool,
    id: &str,
    slug: &str,
    payload: &CategoryPayload,
) -> Result<TourCategory, AppError> {
    let name = payload.name();
    let description = payload.description();

    sqlx::query(
        r#"
        INSERT INTO tour_categories (
            id, slug, name_en, name_de, name_ru,
            description_en, description_de, description_ru,
            icon, order_index
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(slug)
    .bind(name.en)
    .bind(name.de)
    .bind(name.ru)
    .bind(description.en)
    .bind(description.de)
    .bind(description.ru)
    .bind(&payload.icon)
    .bind(payload.order_index.unwrap_or(0))
    .execute(pool)
    .await?;

    get_category(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created category".to_string()))
}

/// 카테고리를 부분 업데이트합니다.
pub async fn update_category(
    pool: &SqlitePool,
    id: &str,
    payload: &CategoryPayload,
    slug: Option<String>,
) -> Result<Option<TourCategory>, AppError> {
    if get_category(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("tour_categories");
    update
        .set("slug", slug)
        .set_localized("name", payload.name())
        .set_localized("description", payload.description())
        .set("icon", payload.icon.clone())
        .set("order_index", payload.order_index);
    update.execute(pool, id).await?;

    get_category(pool, id).await
}

/// 카테고리를 삭제합니다.
///
/// ## 처리 순서
/// 1. 이 카테고리를 참조하는 모든 투어의 `category_id`를 NULL로 변경
/// 2. 카테고리 행 삭제
///
/// 1번을 먼저 하지 않으면 외래키 제약조건 때문에 2번이 실패합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 카테고리가 없음
pub async fn delete_category(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    let detached = sqlx::query(&format!(
        "UPDATE tours SET category_id = NULL, updated_at = {} WHERE category_id = ?",
        super::SQL_NOW
    ))
    .bind(id)
    .execute(&mut *tx)
    .await?;
    tracing::debug!(
        "Detached {} tours from category {}",
        detached.rows_affected(),
        id
    );

    let result = sqlx::query("DELETE FROM tour_categories WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
