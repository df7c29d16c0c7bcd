//! # 예약 데이터베이스 쿼리 모듈

use super::{sql_limit, UpdateBuilder};
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const BOOKING_COLUMNS: &str = r#"
    id, tour_id, customer_name, customer_email, customer_phone, travel_date,
    guests, message, language, total_price, status, created_at, updated_at
"#;

/// 예약 목록을 최신순으로 조회합니다.
pub async fn list_bookings(
    pool: &SqlitePool,
    query: &BookingQuery,
) -> Result<Vec<Booking>, AppError> {
    let limit = sql_limit(query.limit)?;

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM bookings WHERE 1 = 1", BOOKING_COLUMNS));
    if let Some(status) = query.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(tour) = &query.tour {
        builder.push(" AND tour_id = ").push_bind(tour.clone());
    }
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit);

    let bookings = builder.build_query_as::<Booking>().fetch_all(pool).await?;
    Ok(bookings)
}

pub async fn get_booking(pool: &SqlitePool, id: &str) -> Result<Option<Booking>, AppError> {
    let sql = format!("SELECT {} FROM bookings WHERE id = ?", BOOKING_COLUMNS);
    let booking = sqlx::query_as::<_, Booking>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(booking)
}

/// 새 예약을 저장합니다. 상태는 항상 `pending`으로 시작합니다.
///
/// # 매개변수
/// - `guests`: 검증을 마친 인원 수
/// - `total_price`: 요청 값 또는 (투어 가격 × 인원)으로 계산된 값
pub async fn create_booking(
    pool: &SqlitePool,
    id: &str,
    payload: &BookingPayload,
    guests: i64,
    total_price: Option<f64>,
) -> Result<Booking, AppError> {
    sqlx::query(
        r#"
        INSERT INTO bookings (
            id, tour_id, customer_name, customer_email, customer_phone,
            travel_date, guests, message, language, total_price, status
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&payload.tour_id)
    .bind(payload.customer_name.as_deref().map(str::trim))
    .bind(payload.customer_email.as_deref().map(str::trim))
    .bind(&payload.customer_phone)
    .bind(&payload.travel_date)
    .bind(guests)
    .bind(&payload.message)
    .bind(payload.language.map(Lang::code))
    .bind(total_price)
    .bind(BookingStatus::Pending)
    .execute(pool)
    .await?;

    get_booking(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created booking".to_string()))
}

/// 예약을 부분 업데이트합니다. 백오피스에서 주로 상태 변경에 사용합니다.
pub async fn update_booking(
    pool: &SqlitePool,
    id: &str,
    payload: &BookingPayload,
) -> Result<Option<Booking>, AppError> {
    if get_booking(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("bookings");
    update
        .set("tour_id", payload.tour_id.clone())
        .set("customer_name", payload.customer_name.as_deref().map(str::trim))
        .set("customer_email", payload.customer_email.as_deref().map(str::trim))
        .set("customer_phone", payload.customer_phone.clone())
        .set("travel_date", payload.travel_date.clone())
        .set("guests", payload.guests)
        .set("message", payload.message.clone())
        .set("language", payload.language.map(Lang::code))
        .set("total_price", payload.total_price)
        .set("status", payload.status);
    update.execute(pool, id).await?;

    get_booking(pool, id).await
}

pub async fn delete_booking(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
