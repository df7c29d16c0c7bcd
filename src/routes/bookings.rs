//! # 예약(Booking) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/bookings`      → 예약 목록 (status, tour, limit 필터, 최신순)
//! - `POST   /api/bookings`      → 방문자 예약 접수 (201, 항상 pending)
//! - `GET    /api/bookings/{id}` → 단일 예약
//! - `PUT    /api/bookings/{id}` → 부분 수정 (주로 상태 변경)
//! - `DELETE /api/bookings/{id}` → 삭제 (204)

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{ApiJson, ApiQuery, AppState},
    services::{is_valid_email, required_email, required_text},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list_bookings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookingQuery>,
) -> Result<Json<Value>, AppError> {
    let bookings = db::list_bookings(&state.pool, &query).await?;
    Ok(Json(json!({ "bookings": bookings })))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking = db::get_booking(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(booking))
}

/// `POST /bookings` — 예약을 접수합니다.
///
/// ## 검증
/// - `tour_id`: 필수, 존재하는 투어여야 함
/// - `customer_name`: 필수
/// - `customer_email`: 필수, 이메일 형식
/// - `guests`: 생략 시 1, 1 이상
///
/// `total_price`를 보내지 않으면 (투어 가격 × 인원)으로 계산합니다.
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookingPayload>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let tour_id = required_text(payload.tour_id.as_deref(), "tour_id")?;
    required_text(payload.customer_name.as_deref(), "customer_name")?;
    required_email(payload.customer_email.as_deref(), "customer_email")?;

    let guests = payload.guests.unwrap_or(1);
    validate_guests(guests)?;
    if let Some(total) = payload.total_price {
        validate_total(total)?;
    }

    let tour = db::get_tour(&state.pool, &tour_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown tour_id: {}", tour_id)))?;
    let total_price = payload
        .total_price
        .or(Some(tour.price * guests as f64));

    let id = db::new_id();
    let booking = db::create_booking(&state.pool, &id, &payload, guests, total_price).await?;

    tracing::info!("New booking {} for tour {} ({} guests)", booking.id, tour.slug, guests);
    Ok((StatusCode::CREATED, Json(booking)))
}

/// `PUT /bookings/{id}` — 예약을 부분 수정합니다.
///
/// 보낸 필드만 같은 규칙으로 다시 검증합니다.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<BookingPayload>,
) -> Result<Json<Booking>, AppError> {
    if let Some(name) = &payload.customer_name {
        required_text(Some(name), "customer_name")?;
    }
    if let Some(email) = &payload.customer_email {
        if !is_valid_email(email.trim()) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
    }
    if let Some(guests) = payload.guests {
        validate_guests(guests)?;
    }
    if let Some(total) = payload.total_price {
        validate_total(total)?;
    }
    if let Some(tour_id) = &payload.tour_id {
        if db::get_tour(&state.pool, tour_id).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown tour_id: {}", tour_id)));
        }
    }

    let booking = db::update_booking(&state.pool, &id, &payload)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!("Booking {} is now {:?}", booking.id, booking.status);
    Ok(Json(booking))
}

pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_booking(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

fn validate_guests(guests: i64) -> Result<(), AppError> {
    if guests < 1 {
        return Err(AppError::BadRequest("guests must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_total(total: f64) -> Result<(), AppError> {
    if !total.is_finite() || total < 0.0 {
        return Err(AppError::BadRequest(
            "total_price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
