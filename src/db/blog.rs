//! # 블로그 글 데이터베이스 쿼리 모듈

use super::{sql_limit, UpdateBuilder};
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const POST_COLUMNS: &str = r#"
    id, slug, title_en, title_de, title_ru,
    excerpt_en, excerpt_de, excerpt_ru,
    content_en, content_de, content_ru,
    category, cover_image, author, status, published_at, created_at, updated_at
"#;

/// 블로그 글 목록을 최신순으로 조회합니다.
///
/// 게시일(published_at)이 있는 글은 게시일 기준, 없는 초안은 생성일 기준입니다.
/// `COALESCE(a, b)`: a가 NULL이면 b를 사용하는 SQL 함수
pub async fn list_posts(
    pool: &SqlitePool,
    query: &BlogPostQuery,
) -> Result<Vec<BlogPost>, AppError> {
    let limit = sql_limit(query.limit)?;

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM blog_posts WHERE 1 = 1", POST_COLUMNS));
    if let Some(status) = query.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(category) = &query.category {
        builder.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(slug) = &query.slug {
        builder.push(" AND slug = ").push_bind(slug.clone());
    }
    builder
        .push(" ORDER BY COALESCE(published_at, created_at) DESC, id DESC LIMIT ")
        .push_bind(limit);

    let posts = builder.build_query_as::<BlogPost>().fetch_all(pool).await?;
    Ok(posts)
}

pub async fn get_post(pool: &SqlitePool, id: &str) -> Result<Option<BlogPost>, AppError> {
    let sql = format!("SELECT {} FROM blog_posts WHERE id = ?", POST_COLUMNS);
    let post = sqlx::query_as::<_, BlogPost>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}

/// ID 또는 slug로 블로그 글 하나를 조회합니다.
pub async fn find_post(pool: &SqlitePool, id_or_slug: &str) -> Result<Option<BlogPost>, AppError> {
    let sql = format!(
        "SELECT {} FROM blog_posts WHERE id = ? OR slug = ? LIMIT 1",
        POST_COLUMNS
    );
    let post = sqlx::query_as::<_, BlogPost>(&sql)
        .bind(id_or_slug)
        .bind(id_or_slug)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}

/// 새 블로그 글을 저장합니다.
///
/// `published_at`은 핸들러가 상태에 맞게 계산해서 넘깁니다.
pub async fn create_post(
    pool: &SqlitePool,
    id: &str,
    slug: &str,
    payload: &BlogPostPayload,
    published_at: Option<String>,
) -> Result<BlogPost, AppError> {
    let title = payload.title();
    let excerpt = payload.excerpt();
    let content = payload.content();

    sqlx::query(
        r#"
        INSERT INTO blog_posts (
            id, slug, title_en, title_de, title_ru,
            excerpt_en, excerpt_de, excerpt_ru,
            content_en, content_de, content_ru,
            category, cover_image, author, status, published_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(slug)
    .bind(title.en)
    .bind(title.de)
    .bind(title.ru)
    .bind(excerpt.en)
    .bind(excerpt.de)
    .bind(excerpt.ru)
    .bind(content.en)
    .bind(content.de)
    .bind(content.ru)
    .bind(&payload.category)
    .bind(&payload.cover_image)
    .bind(&payload.author)
    .bind(payload.status.unwrap_or_default())
    .bind(published_at)
    .execute(pool)
    .await?;

    get_post(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created blog post".to_string()))
}

pub async fn update_post(
    pool: &SqlitePool,
    id: &str,
    payload: &BlogPostPayload,
    slug: Option<String>,
    published_at: Option<String>,
) -> Result<Option<BlogPost>, AppError> {
    if get_post(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("blog_posts");
    update
        .set("slug", slug)
        .set_localized("title", payload.title())
        .set_localized("excerpt", payload.excerpt())
        .set_localized("content", payload.content())
        .set("category", payload.category.clone())
        .set("cover_image", payload.cover_image.clone())
        .set("author", payload.author.clone())
        .set("status", payload.status)
        .set("published_at", published_at);
    update.execute(pool, id).await?;

    get_post(pool, id).await
}

pub async fn delete_post(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
