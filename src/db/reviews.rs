use super::{sql_limit, UpdateBuilder};
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const REVIEW_COLUMNS: &str = r#"
    id, tour_id, author_name, author_email, rating, comment,
    language, status, created_at, updated_at
"#;

pub async fn list_reviews(pool: &SqlitePool, query: &ReviewQuery) -> Result<Vec<Review>, AppError> {
    let limit = sql_limit(query.limit)?;

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM reviews WHERE 1 = 1", REVIEW_COLUMNS));
    if let Some(status) = query.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(tour) = &query.tour {
        builder.push(" AND tour_id = ").push_bind(tour.clone());
    }
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit);

    let reviews = builder.build_query_as::<Review>().fetch_all(pool).await?;
    Ok(reviews)
}

pub async fn get_review(pool: &SqlitePool, id: &str) -> Result<Option<Review>, AppError> {
    let sql = format!("SELECT {} FROM reviews WHERE id = ?", REVIEW_COLUMNS);
    let review = sqlx::query_as::<_, Review>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(review)
}

/// 새 후기를 `pending` 상태로 저장합니다. 공개는 관리자 승인 이후입니다.
pub async fn create_review(
    pool: &SqlitePool,
    id: &str,
    payload: &ReviewPayload,
) -> Result<Review, AppError> {
    sqlx::query(
        r#"
        INSERT INTO reviews (
            id, tour_id, author_name, author_email, rating, comment, language, status
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&payload.tour_id)
    .bind(payload.author_name.as_deref().map(str::trim))
    .bind(&payload.author_email)
    .bind(payload.rating)
    .bind(payload.comment.as_deref().map(str::trim))
    .bind(payload.language.map(Lang::code))
    .bind(ReviewStatus::Pending)
    .execute(pool)
    .await?;

    get_review(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created review".to_string()))
}

pub async fn update_review(
    pool: &SqlitePool,
    id: &str,
    payload: &ReviewPayload,
) -> Result<Option<Review>, AppError> {
    if get_review(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("reviews");
    update
        .set("author_name", payload.author_name.clone())
        .set("author_email", payload.author_email.clone())
        .set("rating", payload.rating)
        .set("comment", payload.comment.clone())
        .set("language", payload.language.map(Lang::code))
        .set("status", payload.status);
    update.execute(pool, id).await?;

    get_review(pool, id).await
}

pub async fn delete_review(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
