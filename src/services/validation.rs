//! # 입력값 검증 유틸리티
//!
//! 폼 요청의 필수 필드 검사와 이메일 형식 검사를 제공합니다.
//! 실패하면 모두 `AppError::BadRequest`(HTTP 400)가 됩니다.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

/// 이메일 형식 정규식: `로컬@도메인.최상위도메인`
///
/// `Lazy`: 처음 사용될 때 한 번만 컴파일되고 이후에는 재사용됩니다.
/// 정규식 컴파일은 비용이 크므로 요청마다 만들지 않습니다.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex is valid")
});

/// 이메일 형식이 올바른지 확인합니다.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// 이메일을 저장용으로 정규화합니다 (앞뒤 공백 제거 + 소문자).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 필수 텍스트 필드를 꺼냅니다.
///
/// 값이 없거나 공백뿐이면 `Missing required field: <field>` 400 에러를 반환하고,
/// 있으면 앞뒤 공백을 제거한 문자열을 돌려줍니다.
pub fn required_text(value: Option<&str>, field: &str) -> Result<String, AppError> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::missing(field))
}

/// 필수 이메일 필드를 꺼내고 형식까지 확인합니다.
pub fn required_email(value: Option<&str>, field: &str) -> Result<String, AppError> {
    let email = required_text(value, field)?;
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(format!("Invalid email address: {}", field)));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("anna@example.com"));
        assert!(is_valid_email("  j.doe+tours@mail.example.de "));
        assert!(is_valid_email("иван@пример.рф"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("anna@"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("an na@example.com"));
        assert!(!is_valid_email("anna@@example.com"));
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text(Some("  Anna "), "name").unwrap(), "Anna");
        assert!(matches!(
            required_text(Some("   "), "name"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(required_text(None, "name"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn normalize_email_lowercases() {
        assert_eq!(normalize_email(" Anna@Example.COM "), "anna@example.com");
    }
}
