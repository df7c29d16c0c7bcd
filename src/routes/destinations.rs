//! # 여행지(Destination) 라우트 핸들러
//!
//! - `GET    /api/destinations`      → 목록 (slug, active, featured, limit 필터)
//! - `POST   /api/destinations`      → 생성 (201)
//! - `GET    /api/destinations/{id}` → 단일 조회
//! - `PUT    /api/destinations/{id}` → 부분 수정
//! - `DELETE /api/destinations/{id}` → 삭제 (204)

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
use serde_json::{json, Value};

pub async fn list_destinations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DestinationQuery>,
) -> Result<Json<Value>, AppError> {
    let destinations = db::list_destinations(&state.pool, &query).await?;
    Ok(Json(json!({ "destinations": destinations })))
}

pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, AppError> {
    let destination = db::get_destination(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(destination))
}

/// `POST /destinations` — 이름(어느 언어든 하나)이 필수입니다.
pub async fn create_destination(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DestinationPayload>,
) -> Result<(StatusCode, Json<Destination>), AppError> {
    let name = payload.name();
    let name_text = name.first().ok_or_else(|| AppError::missing("name"))?;

    let base = slug::slugify(payload.slug.as_deref().unwrap_or(name_text));
    let slug = db::unique_slug(&state.pool, "destinations", &base, None).await?;

    let id = db::new_id();
    let destination = db::create_destination(&state.pool, &id, &slug, &payload)
        .await
        .map_err(|err| slug_taken(err, &slug))?;
    Ok((StatusCode::CREATED, Json(destination)))
}

pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<DestinationPayload>,
) -> Result<Json<Destination>, AppError> {
    let slug = match &payload.slug {
        Some(requested) => Some(
            db::unique_slug(&state.pool, "destinations", &slug::slugify(requested), Some(&id))
                .await?,
        ),
        None => None,
    };

    let requested = slug.clone().unwrap_or_default();
    let destination = db::update_destination(&state.pool, &id, &payload, slug)
        .await
        .map_err(|err| slug_taken(err, &requested))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(destination))
}

pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_destination(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
