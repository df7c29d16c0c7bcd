//! # SEO 문구 모델
//!
//! 템플릿 생성기(`POST /api/generate-seo`)와 AI 생성기(`POST /api/ai/seo`)가
//! 같은 입력/출력 구조체를 공유합니다.

use super::Lang;
use serde::{Deserialize, Serialize};

/// SEO 문구 생성 요청 본문
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoRequest {
    /// 투어 또는 글 제목 (필수)
    pub title: Option<String>,
    pub destination: Option<String>,
    /// AI 프롬프트에 함께 넣는 본문 요약
    pub description: Option<String>,
    #[serde(alias = "duration")]
    pub duration_days: Option<i64>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    /// 없으면 세 언어 모두 생성합니다.
    pub language: Option<Lang>,
}

/// 한 언어의 SEO 문구
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoText {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}
