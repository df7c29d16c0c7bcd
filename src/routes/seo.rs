//! # SEO 문구 생성 라우트 핸들러
//!
//! - `POST /api/generate-seo` → 언어별 템플릿으로 즉시 생성
//! - `POST /api/ai/seo`       → LLM API로 생성 (API 키가 없으면 템플릿으로 대체)
//!
//! `language`를 지정하면 한 언어의 `{meta_title, meta_description, keywords}`를,
//! 생략하면 `{ "en": {...}, "de": {...}, "ru": {...} }`를 반환합니다.

use crate::{
    error::AppError,
    models::*,
    routes::{ApiJson, AppState},
    services::{required_text, seo},
};
use axum::{extract::State, Json};
use serde_json::{json, Map, Value};

/// `POST /generate-seo`
pub async fn generate_seo(
    ApiJson(request): ApiJson<SeoRequest>,
) -> Result<Json<Value>, AppError> {
    let title = required_text(request.title.as_deref(), "title")?;

    let mut body = Map::new();
    for lang in languages(&request) {
        let text = seo::generate(&request, &title, lang);
        insert_text(&mut body, &request, lang, text)?;
    }
    Ok(Json(Value::Object(body)))
}

/// `POST /ai/seo`
///
/// 응답에 `"source": "ai"` 또는 `"source": "template"`을 붙여
/// 어느 쪽이 만든 문구인지 클라이언트가 알 수 있게 합니다.
pub async fn ai_seo(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SeoRequest>,
) -> Result<Json<Value>, AppError> {
    let title = required_text(request.title.as_deref(), "title")?;

    let mut body = Map::new();
    match &state.seo_assistant {
        Some(assistant) => {
            body.insert("source".to_string(), json!("ai"));
            for lang in languages(&request) {
                let text = assistant.generate(&request, &title, lang).await?;
                insert_text(&mut body, &request, lang, text)?;
            }
        }
        None => {
            tracing::debug!("No LLM API key configured, using SEO templates");
            body.insert("source".to_string(), json!("template"));
            for lang in languages(&request) {
                let text = seo::generate(&request, &title, lang);
                insert_text(&mut body, &request, lang, text)?;
            }
        }
    }
    Ok(Json(Value::Object(body)))
}

fn languages(request: &SeoRequest) -> Vec<Lang> {
    match request.language {
        Some(lang) => vec![lang],
        None => Lang::ALL.to_vec(),
    }
}

/// 한 언어만 요청했으면 필드를 최상위에 펼치고, 아니면 언어 코드 아래에 넣습니다.
fn insert_text(
    body: &mut Map<String, Value>,
    request: &SeoRequest,
    lang: Lang,
    text: SeoText,
) -> Result<(), AppError> {
    let value = serde_json::to_value(text)
        .map_err(|e| AppError::Internal(format!("Failed to serialize SEO text: {}", e)))?;

    match (request.language, value) {
        (Some(_), Value::Object(fields)) => body.extend(fields),
        (_, value) => {
            body.insert(lang.code().to_string(), value);
        }
    }
    Ok(())
}
