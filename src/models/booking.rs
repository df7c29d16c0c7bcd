//! # 예약(Booking) 모델
//!
//! 예약은 고객이 특정 투어에 대해 남기는 예약 요청입니다.
//! 결제는 다루지 않으며, 관리자가 백오피스에서 상태를 바꿔 가며 처리합니다.
//!
//! ## 상태 흐름
//! `pending` → `confirmed` → `completed`, 또는 어느 단계에서든 `cancelled`

use super::Lang;
use serde::{Deserialize, Serialize};

/// 예약 처리 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// `bookings` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    /// 예약한 투어. 투어가 삭제되면 NULL이 됩니다 (예약 기록은 보존).
    pub tour_id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    /// 희망 출발일 (예: "2026-07-14")
    pub travel_date: Option<String>,
    /// 인원 수 (1 이상)
    pub guests: i64,
    pub message: Option<String>,
    /// 고객이 예약할 때 보고 있던 사이트 언어
    pub language: Option<String>,
    pub total_price: Option<f64>,
    pub status: BookingStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// 예약 생성/수정 요청 본문
///
/// 예약 폼은 `name`, `email`, `phone`처럼 짧은 이름을 보내기도 하므로
/// `#[serde(alias)]`로 두 이름을 모두 받습니다.
#[derive(Debug, Default, Deserialize)]
pub struct BookingPayload {
    pub tour_id: Option<String>,
    #[serde(alias = "name")]
    pub customer_name: Option<String>,
    #[serde(alias = "email")]
    pub customer_email: Option<String>,
    #[serde(alias = "phone")]
    pub customer_phone: Option<String>,
    #[serde(alias = "date")]
    pub travel_date: Option<String>,
    pub guests: Option<i64>,
    pub message: Option<String>,
    pub language: Option<Lang>,
    pub total_price: Option<f64>,
    pub status: Option<BookingStatus>,
}

/// `GET /api/bookings?status=pending&tour=<id>&limit=20`
#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub tour: Option<String>,
    pub limit: Option<i64>,
}
