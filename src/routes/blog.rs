//! # 블로그 글 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/blog-posts`      → 목록 (status, category, slug, limit 필터)
//! - `POST   /api/blog-posts`      → 생성 (201)
//! - `GET    /api/blog-posts/{id}` → 단일 글 (id 또는 slug)
//! - `PUT    /api/blog-posts/{id}` → 부분 수정
//! - `DELETE /api/blog-posts/{id}` → 삭제 (204)
//!
//! ## 게시 시각
//! 글이 처음 `published` 상태가 될 때 `published_at`을 현재 시각으로 기록합니다.
//! 요청에 `published_at`을 직접 넣으면 그 값을 그대로 씁니다 (예약 게시, 이관 등).

use crate::{
    db,
    error::{slug_taken, AppError},
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BlogPostQuery>,
) -> Result<Json<Value>, AppError> {
    let posts = db::list_posts(&state.pool, &query).await?;
    Ok(Json(json!({ "posts": posts })))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let post = db::find_post(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(post))
}

/// `POST /blog-posts` — 제목(어느 언어든 하나)이 필수입니다.
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BlogPostPayload>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    let title = payload.title();
    let title_text = title.first().ok_or_else(|| AppError::missing("title"))?;

    let base = slug::slugify(payload.slug.as_deref().unwrap_or(title_text));
    let slug = db::unique_slug(&state.pool, "blog_posts", &base, None).await?;

    let published_at = match payload.status {
        Some(PostStatus::Published) => payload.published_at.clone().or_else(|| Some(now())),
        _ => payload.published_at.clone(),
    };

    let id = db::new_id();
    let post = db::create_post(&state.pool, &id, &slug, &payload, published_at)
        .await
        .map_err(|err| slug_taken(err, &slug))?;
    tracing::info!("Created blog post {} ({:?})", post.slug, post.status);
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<BlogPostPayload>,
) -> Result<Json<BlogPost>, AppError> {
    let existing = db::get_post(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    let slug = match &payload.slug {
        Some(requested) => Some(
            db::unique_slug(&state.pool, "blog_posts", &slug::slugify(requested), Some(&id))
                .await?,
        ),
        None => None,
    };

    // draft → published 전환이고 게시 시각이 비어 있을 때만 현재 시각을 찍습니다.
    let first_publish = payload.status == Some(PostStatus::Published)
        && existing.published_at.is_none();
    let published_at = match &payload.published_at {
        Some(at) => Some(at.clone()),
        None if first_publish => Some(now()),
        None => None,
    };

    let requested = slug.clone().unwrap_or_default();
    let post = db::update_post(&state.pool, &id, &payload, slug, published_at)
        .await
        .map_err(|err| slug_taken(err, &requested))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_post(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DB 기본값(`strftime('%Y-%m-%dT%H:%M:%fZ')`)과 같은 형식의 현재 시각
fn now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
