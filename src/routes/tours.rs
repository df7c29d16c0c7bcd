//! # 투어(Tour) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/tours`      → 투어 목록 (status, destination, type, category, slug, featured, limit 필터)
//! - `POST   /api/tours`      → 새 투어 생성 (201)
//! - `GET    /api/tours/{id}` → 단일 투어 + 일정 (id 또는 slug)
//! - `PUT    /api/tours/{id}` → 투어 부분 수정 (itinerary를 보내면 일정 전체 교체)
//! - `DELETE /api/tours/{id}` → 투어 삭제 (204)
//!
//! ## Axum 핸들러 패턴
//! - `State(state)`: 앱 전역 상태 (DB 풀 등)
//! - `Path(id)`: URL 경로 파라미터
//! - `ApiQuery(query)`: URL 쿼리 문자열(`?status=active`)을 구조체로 파싱
//! - `ApiJson(payload)`: 요청 본문을 JSON으로 파싱
//!
//! 두 추출자 모두 파싱에 실패하면 400 `bad_request` JSON 에러를 돌려줍니다.

use crate::{
    db,
    error::{slug_taken, AppError},
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
use sqlx::SqlitePool;

/// `GET /tours` — 필터 조건에 맞는 투어 목록을 조회합니다.
///
/// 응답: `{ "tours": [...] }`
pub async fn list_tours(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TourQuery>,
) -> Result<Json<Value>, AppError> {
    let tours = db::list_tours(&state.pool, &query).await?;
    Ok(Json(json!({ "tours": tours })))
}

/// `GET /tours/{id}` — 투어 하나와 일정을 조회합니다.
///
/// `{id}` 자리에 slug를 넣어도 됩니다 (예: `/api/tours/alpine-lakes`).
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TourDetail>, AppError> {
    let tour = db::find_tour(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    let itinerary = db::list_itinerary(&state.pool, &tour.id).await?;
    Ok(Json(TourDetail { tour, itinerary }))
}

/// `POST /tours` — 새 투어를 생성합니다.
///
/// ## 필수 필드
/// - 제목 (어느 언어든 하나 이상)
/// - `destination`
/// - `price` (0 이상)
///
/// 제목(영어 우선)으로부터 slug를 만들고, 이미 쓰이는 slug면 `-2`, `-3`을 붙입니다.
/// 성공 시 `201 Created`와 함께 생성된 투어(+일정)를 반환합니다.
pub async fn create_tour(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TourPayload>,
) -> Result<(StatusCode, Json<TourDetail>), AppError> {
    let title = payload.title();
    let title_text = title
        .first()
        .ok_or_else(|| AppError::missing("title"))?
        .to_string();
    required_text(payload.destination.as_deref(), "destination")?;
    let price = payload.price.ok_or_else(|| AppError::missing("price"))?;
    validate_price(price)?;
    validate_counts(&payload)?;
    if let Some(Some(category_id)) = &payload.category_id {
        ensure_category(&state.pool, category_id).await?;
    }

    // slug를 직접 보냈으면 그것을, 아니면 제목을 slug로 변환합니다.
    let base = slug::slugify(payload.slug.as_deref().unwrap_or(&title_text));
    let slug = db::unique_slug(&state.pool, "tours", &base, None).await?;

    let id = db::new_id();
    let tour = db::create_tour(&state.pool, &id, &slug, &payload)
        .await
        .map_err(|err| slug_taken(err, &slug))?;
    let itinerary = db::list_itinerary(&state.pool, &tour.id).await?;

    tracing::info!("Created tour {} ({})", tour.slug, tour.id);
    Ok((StatusCode::CREATED, Json(TourDetail { tour, itinerary })))
}

/// `PUT /tours/{id}` — 투어를 부분 수정합니다.
///
/// 요청 본문에 포함된 필드만 바뀝니다.
/// `itinerary` 배열을 보내면 기존 일정은 모두 지워지고 새 배열로 교체됩니다.
/// 제목이 바뀌어도 slug는 그대로 유지됩니다 (외부 링크 보호). slug를 바꾸려면 `slug`를 보냅니다.
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<TourPayload>,
) -> Result<Json<TourDetail>, AppError> {
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    validate_counts(&payload)?;
    if let Some(destination) = &payload.destination {
        required_text(Some(destination), "destination")?;
    }
    if let Some(Some(category_id)) = &payload.category_id {
        ensure_category(&state.pool, category_id).await?;
    }

    let slug = match &payload.slug {
        Some(requested) => {
            let base = slug::slugify(requested);
            Some(db::unique_slug(&state.pool, "tours", &base, Some(&id)).await?)
        }
        None => None,
    };

    let requested = slug.clone().unwrap_or_default();
    let tour = db::update_tour(&state.pool, &id, &payload, slug)
        .await
        .map_err(|err| slug_taken(err, &requested))?
        .ok_or(AppError::NotFound)?;
    let itinerary = db::list_itinerary(&state.pool, &tour.id).await?;
    Ok(Json(TourDetail { tour, itinerary }))
}

/// `DELETE /tours/{id}` — 투어를 삭제합니다.
///
/// 일정과 후기는 함께 삭제되고, 예약은 `tour_id = null`로 남습니다.
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_tour(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    tracing::info!("Deleted tour {}", id);
    Ok(StatusCode::NO_CONTENT)
}

fn validate_price(price: f64) -> Result<(), AppError> {
    // is_finite(): NaN, 무한대를 걸러냅니다.
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn validate_counts(payload: &TourPayload) -> Result<(), AppError> {
    if payload.duration_days.is_some_and(|days| days < 1) {
        return Err(AppError::BadRequest(
            "duration_days must be at least 1".to_string(),
        ));
    }
    if payload.max_group_size.is_some_and(|size| size < 1) {
        return Err(AppError::BadRequest(
            "max_group_size must be at least 1".to_string(),
        ));
    }
    let days = payload.itinerary.as_deref().unwrap_or_default();
    if days.iter().any(|day| day.day_number.is_some_and(|n| n < 1)) {
        return Err(AppError::BadRequest(
            "itinerary day_number must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// 존재하지 않는 카테고리를 가리키면 외래키 에러(500) 대신 400을 돌려줍니다.
async fn ensure_category(pool: &SqlitePool, category_id: &str) -> Result<(), AppError> {
    db::get_category(pool, category_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown category_id: {}", category_id)))
}
