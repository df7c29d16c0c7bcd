//! # AI SEO 문구 생성 클라이언트
//!
//! OpenAI 호환 `/chat/completions` API에 고정된 프롬프트 템플릿을 보내고,
//! 모델의 답변을 JSON(`meta_title`, `meta_description`, `keywords`)으로 파싱합니다.
//!
//! 모델은 종종 답변을 ```json ... ``` 코드 블록으로 감싸므로
//! 파싱 전에 코드 펜스를 벗겨 냅니다.

use crate::error::AppError;
use crate::models::{Lang, SeoRequest, SeoText};
use crate::services::seo::{truncate_chars, META_DESCRIPTION_MAX, META_TITLE_MAX};
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are an SEO copywriter for a travel agency. \
Reply with a single JSON object and nothing else.";

/// LLM API 클라이언트
///
/// `reqwest::Client`는 내부적으로 커넥션 풀을 가지고 있으므로
/// 한 번 만들어 `AppState`에서 `Arc`로 공유합니다.
pub struct SeoAssistant {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl SeoAssistant {
    pub fn new(api_key: String, api_url: String, model: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key,
            api_url,
            model,
        })
    }

    /// 한 언어의 SEO 문구를 모델에게 요청합니다.
    pub async fn generate(
        &self,
        request: &SeoRequest,
        title: &str,
        lang: Lang,
    ) -> Result<SeoText, AppError> {
        let prompt = build_prompt(request, title, lang);
        let url = format!("{}/chat/completions", self.api_url.trim_end_matches('/'));

        tracing::debug!("Requesting SEO copy for '{}' ({})", title, lang.code());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: &prompt,
                    },
                ],
                temperature: 0.7,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Internal("LLM response contained no choices".to_string()))?;

        parse_reply(&content)
    }
}

fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "English",
        Lang::De => "German",
        Lang::Ru => "Russian",
    }
}

/// 모델에게 보낼 사용자 프롬프트를 만듭니다.
pub fn build_prompt(request: &SeoRequest, title: &str, lang: Lang) -> String {
    let mut facts = vec![format!("Title: {}", title)];
    if let Some(destination) = &request.destination {
        facts.push(format!("Destination: {}", destination));
    }
    if let Some(days) = request.duration_days {
        facts.push(format!("Duration: {} days", days));
    }
    if let Some(price) = request.price {
        let currency = request.currency.as_deref().unwrap_or("EUR");
        facts.push(format!("Price from: {} {}", price, currency));
    }
    if let Some(description) = &request.description {
        facts.push(format!("Description: {}", description));
    }

    format!(
        "Write SEO metadata in {language} for this tour.\n\
         {facts}\n\n\
         Return JSON with exactly these keys:\n\
         \"meta_title\" (at most {title_max} characters),\n\
         \"meta_description\" (at most {description_max} characters),\n\
         \"keywords\" (an array of 5 to 8 lowercase keywords).",
        language = language_name(lang),
        facts = facts.join("\n"),
        title_max = META_TITLE_MAX,
        description_max = META_DESCRIPTION_MAX,
    )
}

/// 모델의 답변 문자열을 `SeoText`로 파싱합니다.
///
/// 모델이 길이 제한을 어기는 경우가 있으므로 파싱 후 다시 한 번 자릅니다.
pub fn parse_reply(content: &str) -> Result<SeoText, AppError> {
    let json = strip_code_fence(content);
    let mut seo: SeoText = serde_json::from_str(json)
        .map_err(|e| AppError::Internal(format!("LLM reply is not valid SEO JSON: {}", e)))?;

    seo.meta_title = truncate_chars(seo.meta_title.trim(), META_TITLE_MAX);
    seo.meta_description = truncate_chars(seo.meta_description.trim(), META_DESCRIPTION_MAX);
    Ok(seo)
}

/// ```json ... ``` 또는 ``` ... ``` 코드 펜스를 벗겨 냅니다.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 여는 펜스 줄의 언어 표시("json")를 건너뜁니다.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    body.trim_end().trim_end_matches("```").trim()
}
