//! # 블로그 글 모델
//!
//! 블로그 글은 언어별 제목/요약/본문을 가집니다.
//! `published_at`은 처음 `published` 상태가 될 때 기록됩니다.

use super::{Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

/// 블로그 글 공개 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// `blog_posts` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_de: Option<String>,
    pub excerpt_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_de: Option<String>,
    pub content_ru: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// 블로그 글 생성/수정 요청 본문
#[derive(Debug, Default, Deserialize)]
pub struct BlogPostPayload {
    pub slug: Option<String>,
    pub title: Option<LocalizedInput>,
    pub title_en: Option<String>,
    pub title_de: Option<String>,
    pub title_ru: Option<String>,
    pub excerpt: Option<LocalizedInput>,
    pub excerpt_en: Option<String>,
    pub excerpt_de: Option<String>,
    pub excerpt_ru: Option<String>,
    pub content: Option<LocalizedInput>,
    pub content_en: Option<String>,
    pub content_de: Option<String>,
    pub content_ru: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "image_url")]
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub status: Option<PostStatus>,
    pub published_at: Option<String>,
}

impl BlogPostPayload {
    pub fn title(&self) -> Localized {
        Localized::merge(
            self.title.as_ref(),
            self.title_en.as_ref(),
            self.title_de.as_ref(),
            self.title_ru.as_ref(),
        )
    }

    pub fn excerpt(&self) -> Localized {
        Localized::merge(
            self.excerpt.as_ref(),
            self.excerpt_en.as_ref(),
            self.excerpt_de.as_ref(),
            self.excerpt_ru.as_ref(),
        )
    }

    pub fn content(&self) -> Localized {
        Localized::merge(
            self.content.as_ref(),
            self.content_en.as_ref(),
            self.content_de.as_ref(),
            self.content_ru.as_ref(),
        )
    }
}

/// `GET /api/blog-posts?status=published&category=tips&limit=3`
#[derive(Debug, Default, Deserialize)]
pub struct BlogPostQuery {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub limit: Option<i64>,
}
