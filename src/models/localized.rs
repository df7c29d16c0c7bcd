//! # 다국어(영어/독일어/러시아어) 텍스트 모델
//!
//! 저장소의 테이블은 번역을 구조화된 객체가 아니라
//! `title_en`, `title_de`, `title_ru`처럼 접미사가 붙은 컬럼으로 보관합니다.
//!
//! 클라이언트는 같은 필드를 세 가지 모양으로 보낼 수 있습니다:
//! - `"title": "Alpine Lakes"` → 영어 값
//! - `"title": { "en": "...", "de": "...", "ru": "..." }` → 언어별 값
//! - `"title_en": "...", "title_de": "..."` → 접미사 컬럼 그대로
//!
//! 이 모듈은 세 가지 모양을 하나의 [`Localized`] 값으로 평탄화합니다.

use serde::{Deserialize, Serialize};

/// 사이트가 지원하는 언어
///
/// `#[serde(rename_all = "lowercase")]`: JSON에서는 "en", "de", "ru"로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    De,
    Ru,
}

impl Lang {
    /// 지원하는 모든 언어 (응답 키 순서이기도 합니다)
    pub const ALL: [Lang; 3] = [Lang::En, Lang::De, Lang::Ru];

    /// 컬럼 접미사이자 JSON 키로 쓰이는 언어 코드
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Ru => "ru",
        }
    }
}

/// 언어별 텍스트 한 묶음
///
/// 모든 필드가 Option인 이유: 번역이 아직 없는 언어가 있을 수 있기 때문입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub en: Option<String>,
    pub de: Option<String>,
    pub ru: Option<String>,
}

/// 요청 본문에서 받을 수 있는 다국어 필드의 두 가지 JSON 모양
///
/// `#[serde(untagged)]`: 태그 없이 순서대로 시도하여 맞는 variant를 고릅니다.
/// 문자열이면 `Text`, 객체면 `PerLanguage`가 됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocalizedInput {
    Text(String),
    PerLanguage(Localized),
}

impl Localized {
    /// 중첩 형태와 접미사 형태를 합쳐 하나의 값으로 만듭니다.
    ///
    /// 두 형태가 같은 언어를 모두 보냈다면 접미사 형태(`title_en` 등)가 이깁니다.
    pub fn merge(
        nested: Option<&LocalizedInput>,
        en: Option<&String>,
        de: Option<&String>,
        ru: Option<&String>,
    ) -> Self {
        let base = match nested {
            Some(LocalizedInput::Text(text)) => Localized {
                en: Some(text.clone()),
                ..Default::default()
            },
            Some(LocalizedInput::PerLanguage(map)) => map.clone(),
            None => Localized::default(),
        };

        Localized {
            en: en.cloned().or(base.en),
            de: de.cloned().or(base.de),
            ru: ru.cloned().or(base.ru),
        }
    }

    /// 특정 언어의 값을 가져옵니다. 공백뿐인 값은 없는 것으로 봅니다.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        let value = match lang {
            Lang::En => &self.en,
            Lang::De => &self.de,
            Lang::Ru => &self.ru,
        };
        value.as_deref().filter(|text| !text.trim().is_empty())
    }

    /// 영어 → 독일어 → 러시아어 순으로 처음 발견되는 값
    ///
    /// slug 생성과 필수 필드 검사에 사용합니다.
    pub fn first(&self) -> Option<&str> {
        Lang::ALL.iter().find_map(|lang| self.get(*lang))
    }
}
