use super::{Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

/// 회사 소개 페이지의 섹션 하나 (예: "story", "team", "values")
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AboutContent {
    pub id: String,
    pub section: String,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_de: Option<String>,
    pub content_ru: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AboutPayload {
    pub section: Option<String>,
    pub title: Option<LocalizedInput>,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub content: Option<LocalizedInput>,
    pub content_en: Option<String>,
    pub content_de: Option<String>,
    pub content_ru: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i64>,
}

impl AboutPayload {
    pub fn title(&self) -> Localized {
        Localized::merge(
            self.title.as_ref(),
            self.title_en.as_ref(),
            self.title_de.as_ref(),
            self.title_ru.as_ref(),
        )
    }

    pub fn content(&self) -> Localized {
        Localized::merge(
            self.content.as_ref(),
            self.content_en.as_ref(),
            self.content_de.as_ref(),
            self.content_ru.as_ref(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AboutQuery {
    pub section: Option<String>,
}
