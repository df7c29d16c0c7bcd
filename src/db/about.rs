use super::UpdateBuilder;
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const ABOUT_COLUMNS: &str = r#"
    id, section, title_en, title_de, title_ru,
    content_en, content_de, content_ru,
    image_url, order_index, created_at, updated_at
"#;

/// 회사 소개 섹션을 표시 순서대로 조회합니다.
pub async fn list_about(
    pool: &SqlitePool,
    section: Option<&str>,
) -> Result<Vec<AboutContent>, AppError> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM about_content WHERE 1 = 1", ABOUT_COLUMNS));
    if let Some(section) = section {
        builder.push(" AND section = ").push_bind(section.to_string());
    }
    builder.push(" ORDER BY order_index, section");

    let sections = builder
        .build_query_as::<AboutContent>()
        .fetch_all(pool)
        .await?;
    Ok(sections)
}

pub async fn get_about(pool: &SqlitePool, id: &str) -> Result<Option<AboutContent>, AppError> {
    let sql = format!("SELECT {} FROM about_content WHERE id = ?", ABOUT_COLUMNS);
    let about = sqlx::query_as::<_, AboutContent>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(about)
}

pub async fn create_about(
    pool: &SqlitePool,
    id: &str,
    section: &str,
    payload: &AboutPayload,
) -> Result<AboutContent, AppError> {
    let title = payload.title();
    let content = payload.content();

    sqlx::query(
        r#"
        INSERT INTO about_content (
            id, section, title_en, title_de, title_ru,
            content_en, content_de, content_ru, image_url, order_index
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(section)
    .bind(title.en)
    .bind(title.de)
    .bind(title.ru)
    .bind(content.en)
    .bind(content.de)
    .bind(content.ru)
    .bind(&payload.image_url)
    .bind(payload.order_index.unwrap_or(0))
    .execute(pool)
    .await?;

    get_about(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created about section".to_string()))
}

pub async fn update_about(
    pool: &SqlitePool,
    id: &str,
    payload: &AboutPayload,
) -> Result<Option<AboutContent>, AppError> {
    if get_about(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("about_content");
    update
        .set("section", payload.section.clone())
        .set_localized("title", payload.title())
        .set_localized("content", payload.content())
        .set("image_url", payload.image_url.clone())
        .set("order_index", payload.order_index);
    update.execute(pool, id).await?;

    get_about(pool, id).await
}

pub async fn delete_about(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM about_content WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
