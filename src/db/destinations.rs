use super::{sql_limit, UpdateBuilder};
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const DESTINATION_COLUMNS: &str = r#"
    id, slug, name_en, name_de, name_ru,
    description_en, description_de, description_ru,
    country, image_url, is_active, featured, created_at, updated_at
"#;

/// 여행지 목록을 영어 이름순으로 조회합니다.
pub async fn list_destinations(
    pool: &SqlitePool,
    query: &DestinationQuery,
) -> Result<Vec<Destination>, AppError> {
    let limit = sql_limit(query.limit)?;

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {} FROM destinations WHERE 1 = 1",
        DESTINATION_COLUMNS
    ));
    if let Some(slug) = &query.slug {
        builder.push(" AND slug = ").push_bind(slug.clone());
    }
    if let Some(active) = query.active {
        builder.push(" AND is_active = ").push_bind(active);
    }
    if let Some(featured) = query.featured {
        builder.push(" AND featured = ").push_bind(featured);
    }
    builder
        .push(" ORDER BY name_en COLLATE NOCASE, id LIMIT ")
        .push_bind(limit);

    let destinations = builder
        .build_query_as::<Destination>()
        .fetch_all(pool)
        .await?;
    Ok(destinations)
}

pub async fn get_destination(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<Destination>, AppError> {
    let sql = format!("SELECT {} FROM destinations WHERE id = ?", DESTINATION_COLUMNS);
    let destination = sqlx::query_as::<_, Destination>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(destination)
}

pub async fn create_destination(
    pool: &SqlitePool,
    id: &str,
    slug: &str,
    payload: &DestinationPayload,
) -> Result<Destination, AppError> {
    let name = payload.name();
    let description = payload.description();

    sqlx::query(
        r#"
        INSERT INTO destinations (
            id, slug, name_en, name_de, name_ru,
            description_en, description_de, description_ru,
            country, image_url, is_active, featured
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
    .bind(&payload.country)
    .bind(&payload.image_url)
    .bind(payload.is_active.unwrap_or(true))
    .bind(payload.featured.unwrap_or(false))
    .execute(pool)
    .await?;

    get_destination(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created destination".to_string()))
}

pub async fn update_destination(
    pool: &SqlitePool,
    id: &str,
    payload: &DestinationPayload,
    slug: Option<String>,
) -> Result<Option<Destination>, AppError> {
    if get_destination(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("destinations");
    update
        .set("slug", slug)
        .set_localized("name", payload.name())
        .set_localized("description", payload.description())
        .set("country", payload.country.clone())
        .set("image_url", payload.image_url.clone())
        .set("is_active", payload.is_active)
        .set("featured", payload.featured);
    update.execute(pool, id).await?;

    get_destination(pool, id).await
}

pub async fn delete_destination(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM destinations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
