//! # 문의/뉴스레터 모델
//!
//! 방문자가 사이트 하단 폼으로 보내는 두 가지 요청을 다룹니다.
//! - 문의하기(contact): 이름, 이메일, 메시지
//! - 뉴스레터 구독(newsletter): 이메일

use super::Lang;
use serde::{Deserialize, Serialize};

/// `contact_messages` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// 문의하기 폼 요청 본문 — `POST /api/contact`
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// `newsletter_subscribers` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NewsletterSubscriber {
    pub id: String,
    /// 소문자로 정규화된 이메일 (UNIQUE)
    pub email: String,
    pub language: Option<String>,
    pub created_at: String,
}

/// 뉴스레터 구독 요청 본문 — `POST /api/newsletter`
#[derive(Debug, Default, Deserialize)]
pub struct NewsletterRequest {
    pub email: Option<String>,
    pub language: Option<Lang>,
}

/// 백오피스 목록 조회용 `?limit=`
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}
