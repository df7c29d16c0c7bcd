//! # 투어 및 일정 데이터베이스 쿼리 모듈
//!
//! `tours`와 `itineraries` 테이블에 대한 CRUD 쿼리 함수들입니다.
//!
//! ## 테이블 관계
//! ```text
//! tour_categories (1) ──< tours (1) ──< itineraries
//!                              └──< bookings, reviews
//! ```

use super::{new_id, sql_limit, UpdateBuilder};
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

/// SELECT 절에서 반복해 쓰는 투어 컬럼 목록 (Tour 구조체 필드 순서와 동일)
const TOUR_COLUMNS: &str = r#"
    id, slug, title_en, title_de, title_ru,
    description_en, description_de, description_ru,
    destination, tour_type, category_id, price, currency,
    duration_days, max_group_size, image_url, status, featured,
    created_at, updated_at
"#;

/// 필터 조건에 맞는 투어 목록을 최신순으로 조회합니다.
///
/// 쿼리 파라미터가 있는 것만 WHERE 조건에 추가해야 하므로
/// `QueryBuilder`로 SQL을 동적으로 조립합니다.
/// `push_bind()`는 값을 SQL 문자열에 넣지 않고 `?`로 바인딩하므로 SQL 인젝션에 안전합니다.
pub async fn list_tours(pool: &SqlitePool, query: &TourQuery) -> Result<Vec<Tour>, AppError> {
    let limit = sql_limit(query.limit)?;

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM tours WHERE 1 = 1", TOUR_COLUMNS));

    if let Some(status) = query.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(destination) = &query.destination {
        // 여행지는 "Alps", "alps" 어느 쪽으로 와도 같은 결과가 나와야 합니다.
        builder
            .push(" AND destination = ")
            .push_bind(destination.clone())
            .push(" COLLATE NOCASE");
    }
    if let Some(tour_type) = &query.tour_type {
        builder.push(" AND tour_type = ").push_bind(tour_type.clone());
    }
    if let Some(category) = &query.category {
        // 카테고리는 ID나 slug 어느 쪽으로도 지정할 수 있습니다.
        builder
            .push(" AND category_id IN (SELECT id FROM tour_categories WHERE id = ")
            .push_bind(category.clone())
            .push(" OR slug = ")
            .push_bind(category.clone())
            .push(")");
    }
    if let Some(slug) = &query.slug {
        builder.push(" AND slug = ").push_bind(slug.clone());
    }
    if let Some(featured) = query.featured {
        builder.push(" AND featured = ").push_bind(featured);
    }

    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit);

    let tours = builder.build_query_as::<Tour>().fetch_all(pool).await?;
    Ok(tours)
}

/// ID로 투어 하나를 조회합니다.
pub async fn get_tour(pool: &SqlitePool, id: &str) -> Result<Option<Tour>, AppError> {
    let sql = format!("SELECT {} FROM tours WHERE id = ?", TOUR_COLUMNS);
    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tour)
}

/// ID 또는 slug로 투어 하나를 조회합니다.
///
/// 공개 사이트는 `/tours/alpine-lakes`처럼 slug로 링크하므로
/// 상세 조회 엔드포인트는 두 가지를 모두 받습니다.
pub async fn find_tour(pool: &SqlitePool, id_or_slug: &str) -> Result<Option<Tour>, AppError> {
    let sql = format!(
        "SELECT {} FROM tours WHERE id = ? OR slug = ? LIMIT 1",
        TOUR_COLUMNS
    );
    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(id_or_slug)
        .bind(id_or_slug)
        .fetch_optional(pool)
        .await?;

    Ok(tour)
}

/// 투어의 일정을 일차 순서대로 조회합니다.
pub async fn list_itinerary(
    pool: &SqlitePool,
    tour_id: &str,
) -> Result<Vec<ItineraryDay>, AppError> {
    let days = sqlx::query_as::<_, ItineraryDay>(
        r#"
        SELECT id, tour_id, day_number, title_en, title_de, title_ru,
               description_en, description_de, description_ru
        FROM itineraries
        WHERE tour_id = ?
        ORDER BY day_number, id
        "#,
    )
    .bind(tour_id)
    .fetch_all(pool)
    .await?;

    Ok(days)
}

/// 새 투어(+일정)를 저장하고, 저장된 행을 다시 조회하여 반환합니다.
///
/// 필수 필드(제목, 여행지, 가격) 검사와 slug 생성은 라우트 핸들러가 먼저 끝낸 상태여야 합니다.
/// 투어 INSERT와 일정 INSERT는 한 트랜잭션이므로, 일정 저장이 실패하면 투어도 남지 않습니다.
pub async fn create_tour(
    pool: &SqlitePool,
    id: &str,
    slug: &str,
    payload: &TourPayload,
) -> Result<Tour, AppError> {
    let title = payload.title();
    let description = payload.description();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO tours (
            id, slug, title_en, title_de, title_ru,
            description_en, description_de, description_ru,
            destination, tour_type, category_id, price, currency,
            duration_days, max_group_size, image_url, status, featured
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(slug)
    .bind(title.en)
    .bind(title.de)
    .bind(title.ru)
    .bind(description.en)
    .bind(description.de)
    .bind(description.ru)
    .bind(&payload.destination)
    .bind(&payload.tour_type)
    // Option<Option<String>>을 한 겹 벗깁니다. 누락이든 null이든 생성 시에는 NULL입니다.
    .bind(payload.category_id.clone().flatten())
    .bind(payload.price)
    .bind(payload.currency.as_deref().unwrap_or("EUR"))
    .bind(payload.duration_days)
    .bind(payload.max_group_size)
    .bind(&payload.image_url)
    .bind(payload.status.unwrap_or_default())
    .bind(payload.featured.unwrap_or(false))
    .execute(&mut *tx)
    .await?;

    if let Some(days) = &payload.itinerary {
        write_itinerary(&mut *tx, id, days).await?;
    }
    tx.commit().await?;

    get_tour(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created tour".to_string()))
}

/// 투어의 일정을 통째로 교체합니다 (기존 행 삭제 → 새 행 삽입).
///
/// 호출하는 쪽이 연 트랜잭션 안에서 실행됩니다.
/// `tx`가 commit 없이 drop되면 sqlx가 자동으로 rollback하므로
/// 삽입 도중 실패해도 투어와 일정은 이전 상태로 돌아갑니다.
async fn write_itinerary(
    conn: &mut SqliteConnection,
    tour_id: &str,
    days: &[ItineraryDayPayload],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM itineraries WHERE tour_id = ?")
        .bind(tour_id)
        .execute(&mut *conn)
        .await?;

    // enumerate(): (위치, 값) 쌍을 돌려줍니다. day_number가 없으면 위치 + 1을 씁니다.
    for (position, day) in days.iter().enumerate() {
        let title = day.title();
        let description = day.description();
        let day_number = day.day_number.unwrap_or(position as i64 + 1);

        sqlx::query(
            r#"
            INSERT INTO itineraries (
                id, tour_id, day_number, title_en, title_de, title_ru,
                description_en, description_de, description_ru
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new_id())
        .bind(tour_id)
        .bind(day_number)
        .bind(title.en)
        .bind(title.de)
        .bind(title.ru)
        .bind(description.en)
        .bind(description.de)
        .bind(description.ru)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// 투어를 부분 업데이트합니다 (PUT, 보낸 필드만 변경).
///
/// `slug`는 핸들러가 중복 검사를 끝낸 새 slug입니다. None이면 그대로 둡니다.
///
/// ## 반환값
/// - `Ok(Some(Tour))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 투어가 없음
pub async fn update_tour(
    pool: &SqlitePool,
    id: &str,
    payload: &TourPayload,
    slug: Option<String>,
) -> Result<Option<Tour>, AppError> {
    if get_tour(pool, id).await?.is_none() {
        return Ok(None);
    }

    let mut update = UpdateBuilder::new("tours");
    update
        .set("slug", slug)
        .set_localized("title", payload.title())
        .set_localized("description", payload.description())
        .set("destination", payload.destination.clone())
        .set("tour_type", payload.tour_type.clone())
        .set("category_id", payload.category_id.clone())
        .set("price", payload.price)
        .set("currency", payload.currency.clone())
        .set("duration_days", payload.duration_days)
        .set("max_group_size", payload.max_group_size)
        .set("image_url", payload.image_url.clone())
        .set("status", payload.status)
        .set("featured", payload.featured);

    // 필드 변경과 일정 교체는 함께 성공하거나 함께 취소됩니다.
    let mut tx = pool.begin().await?;
    update.execute(&mut *tx, id).await?;
    if let Some(days) = &payload.itinerary {
        write_itinerary(&mut *tx, id, days).await?;
    }
    tx.commit().await?;

    get_tour(pool, id).await
}

/// 투어를 삭제합니다.
///
/// 스키마의 외래키 설정에 따라:
/// - 일정(itineraries), 후기(reviews): `ON DELETE CASCADE`로 함께 삭제
/// - 예약(bookings): `ON DELETE SET NULL`로 tour_id만 비워진 채 남음
pub async fn delete_tour(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM tours WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn payload(title: &str) -> TourPayload {
        TourPayload {
            title_en: Some(title.to_string()),
            destination: Some("Austria".to_string()),
            price: Some(990.0),
            ..Default::default()
        }
    }

    /// 두 번째 날이 CHECK(day_number >= 1)에 걸리도록 만든 일정
    fn broken_itinerary() -> Vec<ItineraryDayPayload> {
        vec![
            ItineraryDayPayload {
                day_number: Some(1),
                title_en: Some("Arrival".to_string()),
                ..Default::default()
            },
            ItineraryDayPayload {
                day_number: Some(0),
                title_en: Some("Nowhere".to_string()),
                ..Default::default()
            },
        ]
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_with_itinerary_saves_both() {
        let pool = test_pool().await;
        let mut tour = payload("Alpine Lakes");
        tour.itinerary = Some(vec![ItineraryDayPayload {
            title_en: Some("Arrival".to_string()),
            ..Default::default()
        }]);

        let created = create_tour(&pool, "t1", "alpine-lakes", &tour).await.unwrap();
        let days = list_itinerary(&pool, &created.id).await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day_number, 1);
    }

    #[tokio::test]
    async fn failed_itinerary_rolls_back_new_tour() {
        let pool = test_pool().await;
        let mut tour = payload("Alpine Lakes");
        tour.itinerary = Some(broken_itinerary());

        assert!(create_tour(&pool, "t1", "alpine-lakes", &tour).await.is_err());
        assert_eq!(count(&pool, "tours").await, 0);
        assert_eq!(count(&pool, "itineraries").await, 0);
    }

    #[tokio::test]
    async fn failed_itinerary_rolls_back_update() {
        let pool = test_pool().await;
        let mut original = payload("Alpine Lakes");
        original.itinerary = Some(vec![ItineraryDayPayload {
            title_en: Some("Arrival".to_string()),
            ..Default::default()
        }]);
        create_tour(&pool, "t1", "alpine-lakes", &original).await.unwrap();

        let mut change = TourPayload {
            title_en: Some("Renamed".to_string()),
            ..Default::default()
        };
        change.itinerary = Some(broken_itinerary());
        assert!(update_tour(&pool, "t1", &change, None).await.is_err());

        let tour = get_tour(&pool, "t1").await.unwrap().unwrap();
        assert_eq!(tour.title_en.as_deref(), Some("Alpine Lakes"));
        let days = list_itinerary(&pool, "t1").await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].title_en.as_deref(), Some("Arrival"));
    }
}
