//! # 서비스(비즈니스 로직) 모듈
//!
//! DB 쿼리도 HTTP 처리도 아닌 순수 로직을 모아둔 모듈입니다.
//! - `validation`: 필수 필드/이메일 검증
//! - `menu`: 평평한 메뉴 행을 트리로 구성
//! - `seo`: 언어별 템플릿 기반 SEO 문구 생성
//! - `ai`: LLM API 기반 SEO 문구 생성

pub mod ai;
pub mod menu;
pub mod seo;
pub mod validation;

pub use validation::*;
