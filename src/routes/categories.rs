//! # 투어 카테고리 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/tour-categories | `list_categories` | 전체 카테고리 (표시 순서) |
//! | POST | /api/tour-categories | `create_category` | 새 카테고리 생성 |
//! | GET | /api/tour-categories/{id} | `get_category` | 단일 카테고리 |
//! | PUT | /api/tour-categories/{id} | `update_category` | 카테고리 수정 |
//! | DELETE | /api/tour-categories/{id} | `delete_category` | 투어 연결 해제 후 삭제 |

use crate::{
    db,
    error::{slug_taken, AppError},
    models::*,
    routes::{ApiJson, AppState},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 전체 카테고리 목록을 조회합니다.
///
/// `GET /api/tour-categories` → `{ "categories": [...] }`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = db::list_categories(&state.pool).await?;
    Ok(Json(json!({ "categories": categories })))
}

/// 카테고리 하나를 조회합니다.
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TourCategory>, AppError> {
    let category = db::get_category(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(category))
}

/// 새 카테고리를 생성합니다.
///
/// `POST /api/tour-categories` + `{ "name": {"en": "Hiking", "de": "Wandern"} }` → `201 Created`
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> Result<(StatusCode, Json<TourCategory>), AppError> {
    let name = payload.name();
    let name_text = name.first().ok_or_else(|| AppError::missing("name"))?;

    let base = slug::slugify(payload.slug.as_deref().unwrap_or(name_text));
    let slug = db::unique_slug(&state.pool, "tour_categories", &base, None).await?;

    let id = db::new_id();
    let category = db::create_category(&state.pool, &id, &slug, &payload)
        .await
        .map_err(|err| slug_taken(err, &slug))?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// 카테고리를 부분 수정합니다.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> Result<Json<TourCategory>, AppError> {
    let slug = match &payload.slug {
        Some(requested) => Some(
            db::unique_slug(&state.pool, "tour_categories", &slug::slugify(requested), Some(&id))
                .await?,
        ),
        None => None,
    };

    let requested = slug.clone().unwrap_or_default();
    let category = db::update_category(&state.pool, &id, &payload, slug)
        .await
        .map_err(|err| slug_taken(err, &requested))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(category))
}

/// 카테고리를 삭제합니다.
///
/// `DELETE /api/tour-categories/{id}` → `204 No Content`
///
/// 이 카테고리에 속했던 투어들은 삭제되지 않고 `category_id`만 null이 됩니다.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_category(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
