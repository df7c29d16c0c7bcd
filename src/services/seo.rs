//! # SEO 문구 템플릿 생성기
//!
//! 언어별로 고정된 문장 템플릿에 투어 정보(제목, 여행지, 기간, 가격)를 채워 넣어
//! 메타 제목, 메타 설명, 키워드를 만듭니다. 외부 API를 쓰지 않으므로 실패하지 않습니다.
//!
//! 검색엔진 권장 길이에 맞춰 메타 제목은 60자, 메타 설명은 160자로 자릅니다.

use crate::models::{Lang, SeoRequest, SeoText};
use std::collections::HashSet;

pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;

/// 사이트 이름 (메타 제목 접미사)
const BRAND: &str = "Tourdesk";

/// 한 언어의 문장 조각들
struct Template {
    /// 여행지가 있을 때의 제목: "{title} in {destination}"
    title_with_destination: &'static str,
    /// 설명 첫 문장: "Discover {title}"
    discover: &'static str,
    /// 기간 문장: "{days}-day trip"
    duration: &'static str,
    /// 가격 문장: "from {price}"
    price: &'static str,
    /// 마지막 행동 유도 문장
    call_to_action: &'static str,
    /// 항상 붙는 키워드
    keywords: [&'static str; 3],
}

fn template(lang: Lang) -> Template {
    match lang {
        Lang::En => Template {
            title_with_destination: "{title} in {destination}",
            discover: "Discover {title}",
            duration: "{days}-day trip",
            price: "from {price}",
            call_to_action: "Book your tour today.",
            keywords: ["tour", "travel", "holiday"],
        },
        Lang::De => Template {
            title_with_destination: "{title} in {destination}",
            discover: "Entdecken Sie {title}",
            duration: "{days}-tägige Reise",
            price: "ab {price}",
            call_to_action: "Jetzt Reise buchen.",
            keywords: ["Reise", "Rundreise", "Urlaub"],
        },
        Lang::Ru => Template {
            title_with_destination: "{title} — {destination}",
            discover: "Откройте для себя {title}",
            duration: "тур на {days} дн.",
            price: "от {price}",
            call_to_action: "Забронируйте тур сегодня.",
            keywords: ["тур", "путешествие", "отдых"],
        },
    }
}

/// 한 언어의 SEO 문구를 생성합니다.
///
/// `title`은 호출자가 필수 검사를 끝낸 값입니다.
pub fn generate(request: &SeoRequest, title: &str, lang: Lang) -> SeoText {
    let tpl = template(lang);
    let destination = request
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    // ── 메타 제목 ──
    let base_title = match destination {
        Some(destination) => tpl
            .title_with_destination
            .replace("{title}", title)
            .replace("{destination}", destination),
        None => title.to_string(),
    };
    let meta_title = truncate_chars(&format!("{} | {}", base_title, BRAND), META_TITLE_MAX);

    // ── 메타 설명 ──
    // 첫 문장: "Discover {title} in {destination}" + 선택적인 기간/가격 조각
    let mut first = tpl.discover.replace("{title}", &base_title);
    let mut details = Vec::new();
    if let Some(days) = request.duration_days.filter(|d| *d > 0) {
        details.push(tpl.duration.replace("{days}", &days.to_string()));
    }
    if let Some(price) = request.price.filter(|p| *p > 0.0) {
        let currency = request.currency.as_deref().unwrap_or("EUR");
        details.push(tpl.price.replace("{price}", &format_price(price, currency)));
    }
    if !details.is_empty() {
        first.push_str(": ");
        first.push_str(&details.join(", "));
    }
    let meta_description = truncate_chars(
        &format!("{}. {}", first, tpl.call_to_action),
        META_DESCRIPTION_MAX,
    );

    // ── 키워드 ──
    let mut keywords = vec![title.to_lowercase()];
    if let Some(destination) = destination {
        keywords.push(destination.to_lowercase());
    }
    keywords.extend(tpl.keywords.iter().map(|k| k.to_lowercase()));
    // 제목이 템플릿 키워드와 같을 수 있으므로 처음 나온 것만 남깁니다 (순서 유지).
    let mut seen = HashSet::new();
    keywords.retain(|k| seen.insert(k.clone()));

    SeoText {
        meta_title,
        meta_description,
        keywords,
    }
}

/// 가격을 "1290 EUR", "1290.50 EUR" 형태로 표시합니다.
fn format_price(price: f64, currency: &str) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} {}", price, currency)
    } else {
        format!("{:.2} {}", price, currency)
    }
}

/// 문자열을 최대 `max`개의 문자(char)로 자릅니다.
///
/// 바이트 단위 슬라이스(`&s[..n]`)는 러시아어·독일어 움라우트 같은
/// 멀티바이트 문자 중간에서 패닉할 수 있으므로 문자 단위로 셉니다.
/// 잘린 경우 마지막 문자를 "…"로 바꿔 전체 길이가 `max`를 넘지 않게 합니다.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut = cut.trim_end().to_string();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SeoRequest {
        SeoRequest {
            title: Some("Alpine Lakes".to_string()),
            destination: Some("Austria".to_string()),
            duration_days: Some(7),
            price: Some(1290.0),
            currency: Some("EUR".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn english_template_is_filled() {
        let seo = generate(&request(), "Alpine Lakes", Lang::En);
        assert_eq!(seo.meta_title, "Alpine Lakes in Austria | Tourdesk");
        assert_eq!(
            seo.meta_description,
            "Discover Alpine Lakes in Austria: 7-day trip, from 1290 EUR. Book your tour today."
        );
        assert_eq!(seo.keywords[0], "alpine lakes");
        assert_eq!(seo.keywords[1], "austria");
    }

    #[test]
    fn german_and_russian_templates_differ() {
        let de = generate(&request(), "Alpine Lakes", Lang::De);
        assert!(de.meta_description.starts_with("Entdecken Sie Alpine Lakes in Austria"));
        assert!(de.meta_description.contains("7-tägige Reise"));
        assert!(de.meta_description.contains("ab 1290 EUR"));

        let ru = generate(&request(), "Alpine Lakes", Lang::Ru);
        assert!(ru.meta_title.starts_with("Alpine Lakes — Austria"));
        assert!(ru.meta_description.contains("от 1290 EUR"));
    }

    #[test]
    fn optional_fields_are_skipped() {
        let bare = SeoRequest::default();
        let seo = generate(&bare, "Baikal", Lang::En);
        assert_eq!(seo.meta_title, "Baikal | Tourdesk");
        assert_eq!(seo.meta_description, "Discover Baikal. Book your tour today.");
    }

    #[test]
    fn long_text_is_cut_on_char_boundaries() {
        let long_title = "Путешествие по Золотому кольцу России с остановками".repeat(3);
        let seo = generate(&SeoRequest::default(), &long_title, Lang::Ru);
        assert!(seo.meta_title.chars().count() <= META_TITLE_MAX);
        assert!(seo.meta_description.chars().count() <= META_DESCRIPTION_MAX);
        assert!(seo.meta_title.ends_with('…'));
    }

    #[test]
    fn keywords_are_unique_and_keep_order() {
        let request = SeoRequest {
            destination: Some("Alps".to_string()),
            ..Default::default()
        };
        let seo = generate(&request, "Tour", Lang::En);
        assert_eq!(seo.keywords[0], "tour");
        assert_eq!(seo.keywords[1], "alps");
        assert_eq!(seo.keywords.iter().filter(|k| *k == "tour").count(), 1);

        let mut unique = seo.keywords.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), seo.keywords.len());
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_chars("Seen", 10), "Seen");
        assert_eq!(truncate_chars("Grüße aus Wien", 6), "Grüße…");
    }

    #[test]
    fn fractional_prices_keep_cents() {
        assert_eq!(format_price(99.5, "EUR"), "99.50 EUR");
        assert_eq!(format_price(100.0, "USD"), "100 USD");
    }
}
