//! # 내비게이션 메뉴 모델
//!
//! 메뉴 항목은 `parent_id`로 한 단계 아래에 중첩될 수 있습니다.
//! 응답용 트리 구성은 `services::menu`가 담당합니다.

use super::{double_option, Localized, LocalizedInput};
use serde::{Deserialize, Serialize};

/// `menu_items` 테이블 한 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    /// 부모 항목 ID. None이면 최상위 항목
    pub parent_id: Option<String>,
    /// 메뉴 위치 (예: "header", "footer")
    pub location: String,
    pub label_en: Option<String>,
    pub label_de: Option<String>,
    pub label_ru: Option<String>,
    pub url: String,
    /// 같은 부모 아래에서의 표시 순서 (오름차순)
    pub order_index: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// 트리 형태의 메뉴 응답 노드
///
/// 결과: `{ "id": ..., "label_en": ..., "children": [ {...}, ... ] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

/// 메뉴 항목 생성/수정 요청 본문
#[derive(Debug, Default, Deserialize)]
pub struct MenuItemPayload {
    /// None = 필드 누락, Some(None) = 최상위로 이동
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<String>>,
    pub location: Option<String>,
    pub label: Option<LocalizedInput>,
    pub label_en: Option<String>,
    pub label_de: Option<String>,
    pub label_ru: Option<String>,
    pub url: Option<String>,
    pub order_index: Option<i64>,
    pub is_active: Option<bool>,
}

impl MenuItemPayload {
    pub fn label(&self) -> Localized {
        Localized::merge(
            self.label.as_ref(),
            self.label_en.as_ref(),
            self.label_de.as_ref(),
            self.label_ru.as_ref(),
        )
    }
}

/// `GET /api/menus?location=header&flat=true`
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub location: Option<String>,
    /// true면 트리로 묶지 않은 행 목록을 그대로 반환 (백오피스 편집용)
    #[serde(default)]
    pub flat: bool,
}
