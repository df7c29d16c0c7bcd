//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 API 라우터를 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `tours`, `destinations`, `categories`: 투어 카탈로그
//! - `bookings`, `reviews`: 방문자가 보내는 예약/후기
//! - `blog`, `menus`, `about`: 사이트 콘텐츠
//! - `inquiries`: 문의하기, 뉴스레터 구독
//! - `seo`: 템플릿/AI 기반 SEO 문구 생성
//! - `health`: 서버 상태 확인
//! - `extract`: 파싱 실패를 JSON 에러로 바꾸는 `ApiJson`/`ApiQuery` 추출자

pub mod about;
pub mod blog;
pub mod bookings;
pub mod categories;
pub mod destinations;
pub mod extract;
pub mod health;
pub mod inquiries;
pub mod menus;
pub mod reviews;
pub mod seo;
pub mod tours;

#[cfg(test)]
mod tests;

pub use extract::{ApiJson, ApiQuery};

use crate::services::ai::SeoAssistant;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 State Extractor는 요청마다 clone하므로 필드는 모두 값싸게 복제되어야 합니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// LLM API 클라이언트. API 키가 설정되지 않았으면 None
    pub seo_assistant: Option<Arc<SeoAssistant>>,
}

/// `/api` 아래에 중첩될 라우터를 만듭니다.
///
/// `main`과 테스트가 같은 라우팅 테이블을 쓰도록 여기 한 곳에서 정의합니다.
/// 경로 파라미터는 axum 0.8 문법(`{id}`)을 사용합니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // 투어 카탈로그
        .route("/tours", get(tours::list_tours).post(tours::create_tour))
        .route(
            "/tours/{id}",
            get(tours::get_tour)
                .put(tours::update_tour)
                .delete(tours::delete_tour),
        )
        .route(
            "/destinations",
            get(destinations::list_destinations).post(destinations::create_destination),
        )
        .route(
            "/destinations/{id}",
            get(destinations::get_destination)
                .put(destinations::update_destination)
                .delete(destinations::delete_destination),
        )
        .route(
            "/tour-categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/tour-categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        // 예약/후기
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .route("/reviews", get(reviews::list_reviews).post(reviews::create_review))
        .route(
            "/reviews/{id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        // 사이트 콘텐츠
        .route("/blog-posts", get(blog::list_posts).post(blog::create_post))
        .route(
            "/blog-posts/{id}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/menus", get(menus::list_menus).post(menus::create_menu_item))
        .route(
            "/menus/{id}",
            get(menus::get_menu_item)
                .put(menus::update_menu_item)
                .delete(menus::delete_menu_item),
        )
        .route("/about", get(about::list_about).post(about::create_about))
        .route(
            "/about/{id}",
            get(about::get_about)
                .put(about::update_about)
                .delete(about::delete_about),
        )
        // 방문자 폼
        .route(
            "/contact",
            get(inquiries::list_contact_messages).post(inquiries::submit_contact),
        )
        .route(
            "/newsletter",
            get(inquiries::list_subscribers).post(inquiries::subscribe),
        )
        // SEO 문구 생성
        .route("/generate-seo", post(seo::generate_seo))
        .route("/ai/seo", post(seo::ai_seo))
        .route("/health", get(health::health_check))
        .with_state(state)
}
