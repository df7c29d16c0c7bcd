//! # 문의하기/뉴스레터 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/contact`    → 문의 접수 `201 { "success": true, "id": ... }`
//! - `GET  /api/contact`    → 접수된 문의 목록 (최신순)
//! - `POST /api/newsletter` → 구독 `201 { "status": "subscribed" }`
//!                            이미 구독 중이면 `200 { "status": "already_subscribed" }`
//! - `GET  /api/newsletter` → 구독자 목록

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
    services::{normalize_email, required_email, required_text},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `POST /contact` — `name`, `email`, `message`가 필수입니다.
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = required_text(request.name.as_deref(), "name")?;
    let email = required_email(request.email.as_deref(), "email")?;
    let message = required_text(request.message.as_deref(), "message")?;

    let id = db::new_id();
    db::create_contact_message(&state.pool, &id, &name, &email, &request, &message).await?;

    tracing::info!("Contact message {} received", id);
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

pub async fn list_contact_messages(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<Value>, AppError> {
    let messages = db::list_contact_messages(&state.pool, query.limit).await?;
    Ok(Json(json!({ "messages": messages })))
}

/// `POST /newsletter` — 이메일은 소문자로 정규화해서 저장합니다.
///
/// 같은 주소로 다시 구독해도 에러가 아니라 `already_subscribed`입니다.
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewsletterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let email = normalize_email(&required_email(request.email.as_deref(), "email")?);

    let id = db::new_id();
    let added = db::add_subscriber(&state.pool, &id, &email, request.language).await?;
    if !added {
        return Ok((StatusCode::OK, Json(json!({ "status": "already_subscribed" }))));
    }

    tracing::info!("New newsletter subscriber {}", id);
    Ok((StatusCode::CREATED, Json(json!({ "status": "subscribed" }))))
}

pub async fn list_subscribers(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<Value>, AppError> {
    let subscribers = db::list_subscribers(&state.pool, query.limit).await?;
    Ok(Json(json!({ "subscribers": subscribers })))
}
