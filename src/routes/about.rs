//! # 회사 소개(About) 라우트 핸들러
//!
//! 섹션 키(`section`)는 "story", "team" 같은 고유 이름이며 중복될 수 없습니다.

use crate::{
    db,
    error::{conflict_on_unique, AppError},
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
    services::required_text,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /about` 또는 `GET /about?section=team`
pub async fn list_about(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AboutQuery>,
) -> Result<Json<Value>, AppError> {
    let sections = db::list_about(&state.pool, query.section.as_deref()).await?;
    Ok(Json(json!({ "sections": sections })))
}

pub async fn get_about(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AboutContent>, AppError> {
    let about = db::get_about(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(about))
}

pub async fn create_about(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AboutPayload>,
) -> Result<(StatusCode, Json<AboutContent>), AppError> {
    let section = required_text(payload.section.as_deref(), "section")?;

    let id = db::new_id();
    let about = db::create_about(&state.pool, &id, &section, &payload)
        .await
        .map_err(|err| duplicate_section(err, &section))?;
    Ok((StatusCode::CREATED, Json(about)))
}

pub async fn update_about(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<AboutPayload>,
) -> Result<Json<AboutContent>, AppError> {
    if let Some(section) = &payload.section {
        required_text(Some(section), "section")?;
    }

    let about = db::update_about(&state.pool, &id, &payload)
        .await
        .map_err(|err| duplicate_section(err, payload.section.as_deref().unwrap_or_default()))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(about))
}

pub async fn delete_about(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_about(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// UNIQUE(section) 위반을 500 대신 409로 바꿉니다.
fn duplicate_section(err: AppError, section: &str) -> AppError {
    conflict_on_unique(err, || format!("Section '{}' already exists", section))
}
