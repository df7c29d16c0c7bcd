//! # 메뉴 항목 데이터베이스 쿼리 모듈
//!
//! 이 모듈은 평평한 행 목록만 다룹니다.
//! 부모/자식 트리 구성은 `services::menu::build_tree`가 담당합니다.

use super::UpdateBuilder;
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const MENU_COLUMNS: &str = r#"
    id, parent_id, location, label_en, label_de, label_ru,
    url, order_index, is_active, created_at, updated_at
"#;

/// 메뉴 항목을 조회합니다.
///
/// # 매개변수
/// - `location`: Some이면 해당 위치(header/footer)의 항목만
/// - `active_only`: true면 `is_active = 1`인 항목만 (공개 사이트용)
pub async fn list_menu_items(
    pool: &SqlitePool,
    location: Option<&str>,
    active_only: bool,
) -> Result<Vec<MenuItem>, AppError> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM menu_items WHERE 1 = 1", MENU_COLUMNS));
    if let Some(location) = location {
        builder.push(" AND location = ").push_bind(location.to_string());
    }
    if active_only {
        builder.push(" AND is_active = 1");
    }
    builder.push(" ORDER BY order_index, id");

    let items = builder.build_query_as::<MenuItem>().fetch_all(pool).await?;
    Ok(items)
}

pub async fn get_menu_item(pool: &SqlitePool, id: &str) -> Result<Option<MenuItem>, AppError> {
    let sql = format!("SELECT {} FROM menu_items WHERE id = ?", MENU_COLUMNS);
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(item)
}

pub async fn create_menu_item(
    pool: &SqlitePool,
    id: &str,
    payload: &MenuItemPayload,
) -> Result<MenuItem, AppError> {
    let label = payload.label();

    sqlx::query(
        r#"
        INSERT INTO menu_items (
            id, parent_id, location, label_en, label_de, label_ru,
            url, order_index, is_active
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(payload.parent_id.clone().flatten())
    .bind(payload.location.as_deref().unwrap_or("header"))
    .bind(label.en)
    .bind(label.de)
    .bind(label.ru)
    .bind(&payload.url)
    .bind(payload.order_index.unwrap_or(0))
    .bind(payload.is_active.unwrap_or(true))
    .execute(pool)
    .await?;

    get_menu_item(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created menu item".to_string()))
}

pub async fn update_menu_item(
    pool: &SqlitePool,
    id: &str,
    payload: &MenuItemPayload,
) -> Result<Option<MenuItem>, AppError> {
    if get_menu_item(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("menu_items");
    update
        .set("parent_id", payload.parent_id.clone())
        .set("location", payload.location.clone())
        .set_localized("label", payload.label())
        .set("url", payload.url.clone())
        .set("order_index", payload.order_index)
        .set("is_active", payload.is_active);
    update.execute(pool, id).await?;

    get_menu_item(pool, id).await
}

/// 메뉴 항목을 삭제합니다. 자식 항목은 `ON DELETE CASCADE`로 함께 삭제됩니다.
pub async fn delete_menu_item(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
