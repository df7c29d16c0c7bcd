//! # 내비게이션 메뉴 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/menus?location=header` → 트리 형태 메뉴 `{ "menus": [...] }`
//! - `GET    /api/menus?flat=true`       → 편집용 평평한 목록 `{ "items": [...] }` (비활성 포함)
//! - `POST   /api/menus`                 → 항목 생성 (201)
//! - `GET    /api/menus/{id}`            → 단일 항목
//! - `PUT    /api/menus/{id}`            → 부분 수정
//! - `DELETE /api/menus/{id}`            → 삭제 (자식 포함, 204)
//!
//! `menu_items` 테이블이 아직 없는 배포에서는 목록 조회가 내장 기본 메뉴로 대체됩니다.

use crate::{
    db,
    error::{is_missing_table, AppError},
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
    services::{
        menu::{build_tree, default_menu},
        required_text,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::collections::HashSet;

pub async fn list_menus(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MenuQuery>,
) -> Result<Json<Value>, AppError> {
    let location = query.location.as_deref();
    // 공개 사이트(트리)는 활성 항목만, 편집 화면(flat)은 전부 보여줍니다.
    let items = match db::list_menu_items(&state.pool, location, !query.flat).await {
        Ok(items) => items,
        Err(err) if is_missing_table(&err) => {
            tracing::warn!("menu_items table is missing, serving the built-in menu");
            default_menu(location)
        }
        Err(err) => return Err(err),
    };

    if query.flat {
        return Ok(Json(json!({ "items": items })));
    }
    Ok(Json(json!({ "menus": build_tree(items) })))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let item = db::get_menu_item(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

/// `POST /menus` — 라벨(어느 언어든 하나)과 `url`이 필수입니다.
///
/// `parent_id`를 보내면 그 항목이 실제로 있어야 합니다.
pub async fn create_menu_item(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MenuItemPayload>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    if payload.label().first().is_none() {
        return Err(AppError::missing("label"));
    }
    required_text(payload.url.as_deref(), "url")?;
    if let Some(Some(parent_id)) = &payload.parent_id {
        ensure_parent(&state.pool, parent_id).await?;
    }

    let id = db::new_id();
    let item = db::create_menu_item(&state.pool, &id, &payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /menus/{id}` — 보낸 필드만 바꿉니다.
///
/// 새 `parent_id`가 자기 자신이나 자기 자손이면 트리가 순환하므로 400입니다.
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<MenuItemPayload>,
) -> Result<Json<MenuItem>, AppError> {
    if let Some(url) = &payload.url {
        required_text(Some(url), "url")?;
    }
    if let Some(Some(parent_id)) = &payload.parent_id {
        ensure_parent(&state.pool, parent_id).await?;
        ensure_not_descendant(&state.pool, &id, parent_id).await?;
    }

    let item = db::update_menu_item(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_menu_item(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_parent(pool: &SqlitePool, parent_id: &str) -> Result<(), AppError> {
    if db::get_menu_item(pool, parent_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown parent_id: {}",
            parent_id
        )));
    }
    Ok(())
}

/// `parent_id`에서 부모를 따라 올라가다 `id`를 만나면 순환입니다.
async fn ensure_not_descendant(
    pool: &SqlitePool,
    id: &str,
    parent_id: &str,
) -> Result<(), AppError> {
    let mut visited = HashSet::new();
    let mut current = Some(parent_id.to_string());

    while let Some(ancestor) = current {
        if ancestor == id {
            return Err(AppError::BadRequest(
                "A menu item cannot be its own parent or ancestor".to_string(),
            ));
        }
        // 이미 저장된 데이터가 순환하고 있어도 무한 루프에 빠지지 않게 합니다.
        if !visited.insert(ancestor.clone()) {
            break;
        }
        current = db::get_menu_item(pool, &ancestor)
            .await?
            .and_then(|item| item.parent_id);
    }
    Ok(())
}
