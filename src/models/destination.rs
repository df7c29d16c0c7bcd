use super::{Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Destination {
    pub id: String,
    pub slug: String,
    pub name_en: Option<String>,
    pub name_de: Option<String>,
    pub name_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DestinationPayload {
    pub slug: Option<String>,
    pub name: Option<LocalizedInput>,
    pub name_en: Option<String>,
    pub name_de: Option<String>,
    pub name_ru: Option<String>,
    pub description: Option<LocalizedInput>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub description_ru: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

impl DestinationPayload {
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

#[derive(Debug, Default, Deserialize)]
pub struct DestinationQuery {
    pub slug: Option<String>,
    pub active: Option<bool>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}
