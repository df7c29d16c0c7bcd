//! # 후기(Review) 라우트 핸들러
//!
//! 방문자가 남긴 후기는 `pending`으로 저장되고,
//! 관리자가 `PUT /api/reviews/{id}`로 `approved`/`rejected` 상태를 지정합니다.

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
    services::{is_valid_email, required_text},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /reviews?tour=...&status=approved`
pub async fn list_reviews(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReviewQuery>,
) -> Result<Json<Value>, AppError> {
    let reviews = db::list_reviews(&state.pool, &query).await?;
    Ok(Json(json!({ "reviews": reviews })))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, AppError> {
    let review = db::get_review(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

/// `POST /reviews` — 후기를 접수합니다.
///
/// `tour_id`, `author_name`, `rating`(1~5), `comment`가 필수입니다.
pub async fn create_review(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReviewPayload>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let tour_id = required_text(payload.tour_id.as_deref(), "tour_id")?;
    required_text(payload.author_name.as_deref(), "author_name")?;
    required_text(payload.comment.as_deref(), "comment")?;
    let rating = payload.rating.ok_or_else(|| AppError::missing("rating"))?;
    validate_rating(rating)?;
    validate_optional_email(payload.author_email.as_deref())?;

    if db::get_tour(&state.pool, &tour_id).await?.is_none() {
        return Err(AppError::BadRequest(format!("Unknown tour_id: {}", tour_id)));
    }

    let id = db::new_id();
    let review = db::create_review(&state.pool, &id, &payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ReviewPayload>,
) -> Result<Json<Review>, AppError> {
    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
    }
    if let Some(comment) = &payload.comment {
        required_text(Some(comment), "comment")?;
    }
    validate_optional_email(payload.author_email.as_deref())?;

    let review = db::update_review(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_review(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

fn validate_rating(rating: i64) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

fn validate_optional_email(email: Option<&str>) -> Result<(), AppError> {
    match email.map(str::trim) {
        Some(email) if !email.is_empty() && !is_valid_email(email) => {
            Err(AppError::BadRequest("Invalid email address".to_string()))
        }
        _ => Ok(()),
    }
}
