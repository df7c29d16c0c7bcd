use super::Lang;
use serde::{Deserialize, Serialize};

/// 후기 검수 상태. 새 후기는 관리자가 승인하기 전까지 `pending`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: String,
    pub tour_id: String,
    pub author_name: String,
    pub author_email: Option<String>,
    pub rating: i64,
    pub comment: String,
    pub language: Option<String>,
    pub status: ReviewStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewPayload {
    pub tour_id: Option<String>,
    #[serde(alias = "name")]
    pub author_name: Option<String>,
    #[serde(alias = "email")]
    pub author_email: Option<String>,
    pub rating: Option<i64>,
    #[serde(alias = "text")]
    pub comment: Option<String>,
    pub language: Option<Lang>,
    pub status: Option<ReviewStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub status: Option<ReviewStatus>,
    pub tour: Option<String>,
    pub limit: Option<i64>,
}
