//! # 투어 카테고리 모델
//!
//! 카테고리는 투어를 "하이킹", "문화", "해변" 같은 묶음으로 분류합니다.
//! `order_index`는 사이트 필터 버튼의 표시 순서입니다.

use super::{Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

/// `tour_categories` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TourCategory {
    pub id: String,
    pub slug: String,
    pub name_en: Option<String>,
    pub name_de: Option<String>,
    pub name_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    /// 아이콘 이름 (예: "mountain")
    pub icon: Option<String>,
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// 카테고리 생성/수정 요청 본문
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    pub slug: Option<String>,
    pub name: Option<LocalizedInput>,
    pub name_en: Option<String>,
    pub name_de: Option<String>,
    pub name_ru: Option<String>,
    pub description: Option<LocalizedInput>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    pub icon: Option<String>,
    pub order_index: Option<i64>,
}

impl CategoryPayload {
    pub fn name(&self) -> Localized {
        Localized::merge(
            self.name.as_ref(),
            self.name_en.as_ref(),
            self.name_de.as_ref(),
            self.name_ru.as_ref(),
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
