//! # 투어 모델 정의
//!
//! - `Tour`: `tours` 테이블 한 행
//! - `ItineraryDay`: `itineraries` 테이블 한 행 (투어의 일차별 일정)
//! - `TourDetail`: 단일 투어 조회 응답 (투어 + 일정)
//! - `TourPayload`: 생성(POST)과 수정(PUT)에 함께 쓰는 요청 본문
//! - `TourQuery`: 목록 조회 쿼리 파라미터

use super::{double_option, Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

/// 투어 공개 상태
///
/// `sqlx::Type` + `rename_all`: DB에는 "draft", "active", "archived" 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TourStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tour {
    pub id: String,
    pub slug: String,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    pub destination: String,
    pub tour_type: Option<String>,
    pub category_id: Option<String>,
    pub price: f64,
    pub currency: String,
    pub duration_days: Option<i64>,
    pub max_group_size: Option<i64>,
    pub image_url: Option<String>,
    pub status: TourStatus,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItineraryDay {
    pub id: String,
    pub tour_id: String,
    pub day_number: i64,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
}

/// `GET /api/tours/:id` 응답
///
/// `#[serde(flatten)]`: 투어 필드를 중첩 없이 같은 레벨에 펼쳐 직렬화합니다.
/// 결과: `{ "id": ..., "slug": ..., ..., "itinerary": [...] }`
#[derive(Debug, Serialize)]
pub struct TourDetail {
    #[serde(flatten)]
    pub tour: Tour,
    pub itinerary: Vec<ItineraryDay>,
}

/// 투어 생성/수정 요청 본문
///
/// 모든 필드가 Option인 이유: PUT은 보낸 필드만 바꾸는 부분 업데이트이고,
/// POST의 필수 필드 검사는 핸들러가 직접 수행하기 때문입니다.
#[derive(Debug, Default, Deserialize)]
pub struct TourPayload {
    pub slug: Option<String>,
    pub title: Option<LocalizedInput>,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub description: Option<LocalizedInput>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    pub destination: Option<String>,
    /// 프론트엔드는 `type`이라는 이름으로 보냅니다.
    #[serde(alias = "type")]
    pub tour_type: Option<String>,
    /// None = 필드 누락 (변경 안 함), Some(None) = null (카테고리 해제)
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<String>>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub duration_days: Option<i64>,
    pub max_group_size: Option<i64>,
    pub image_url: Option<String>,
    pub status: Option<TourStatus>,
    pub featured: Option<bool>,
    /// 보내면 기존 일정을 통째로 교체합니다.
    pub itinerary: Option<Vec<ItineraryDayPayload>>,
}

impl TourPayload {
    pub fn title(&self) -> Localized {
        Localized::merge(
            self.title.as_ref(),
            self.title_en.as_ref(),
            self.title_de.as_ref(),
            self.title_ru.as_ref(),
        )
    }

    pub fn description(&self) -> Localized {
        Localized::merge(
            self.description.as_ref(),
            self.description_en.as_ref(),
            self.description_de.as_ref(),
            self.description_ru.as_ref(),
        )
    }
}

/// 일정 한 줄. `day_number`가 없으면 배열 위치(1부터)를 사용합니다.
#[derive(Debug, Default, Deserialize)]
pub struct ItineraryDayPayload {
    #[serde(alias = "day")]
    pub day_number: Option<i64>,
    pub title: Option<LocalizedInput>,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub description: Option<LocalizedInput>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
}

impl ItineraryDayPayload {
    pub fn title(&self) -> Localized {
        Localized::merge(
            self.title.as_ref(),
            self.title_en.as_ref(),
            self.title_de.as_ref(),
            self.title_ru.as_ref(),
        )
    }

    pub fn description(&self) -> Localized {
        Localized::merge(
            self.description.as_ref(),
            self.description_en.as_ref(),
            self.description_de.as_ref(),
            self.description_ru.as_ref(),
        )
    }
}

/// `GET /api/tours?status=active&destination=alps&type=hiking&limit=6`
#[derive(Debug, Default, Deserialize)]
pub struct TourQuery {
    pub status: Option<TourStatus>,
    pub destination: Option<String>,
    #[serde(rename = "type")]
    pub tour_type: Option<String>,
    /// 카테고리 ID 또는 slug
    pub category: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}
