//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 저장소의 테이블 하나(또는 폼 하나)를 담당합니다:
//! - `localized`: 언어 코드와 다국어 텍스트 평탄화
//! - `tour`: 투어와 일정(itinerary)
//! - `destination`: 여행지
//! - `category`: 투어 카테고리
//! - `booking`: 예약
//! - `review`: 후기
//! - `blog`: 블로그 글
//! - `menu`: 내비게이션 메뉴
//! - `about`: 회사 소개 섹션
//! - `inquiry`: 문의하기/뉴스레터 폼
//! - `seo`: SEO 문구 생성 입출력
//!
//! 행(row) 구조체는 테이블을 거의 1:1로 옮겨 놓은 평평한 구조이고,
//! `*Payload` 구조체는 POST(생성)와 PUT(부분 수정)이 함께 쓰는 요청 본문입니다.

pub mod about;
pub mod blog;
pub mod booking;
pub mod category;
pub mod destination;
pub mod inquiry;
pub mod localized;
pub mod menu;
pub mod review;
pub mod seo;
pub mod tour;

pub use about::*;
pub use blog::*;
pub use booking::*;
pub use category::*;
pub use destination::*;
pub use inquiry::*;
pub use localized::*;
pub use menu::*;
pub use review::*;
pub use seo::*;
pub use tour::*;

use serde::{Deserialize, Deserializer};

/// "필드 없음"과 "null"을 구분해서 받기 위한 역직렬화 함수
///
/// `#[serde(default, deserialize_with = "double_option")]`와 함께 사용합니다.
/// - 필드 누락 → `None` (`default`가 채움, 변경하지 않음)
/// - `null` → `Some(None)` (값을 NULL로 지움)
/// - 값 → `Some(Some(v))`
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
