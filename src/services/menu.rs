//! # 메뉴 트리 구성
//!
//! 저장소에서 읽은 평평한 메뉴 행 목록을 부모/자식 트리로 묶습니다.
//!
//! ## 규칙
//! - `parent_id`가 없거나, 부모가 목록에 없는 항목은 최상위(root)가 됩니다.
//! - 같은 부모 아래의 형제들은 `order_index` 오름차순 (같으면 id순)으로 정렬됩니다.
//! - 최상위에서 출발해 내려가며 트리를 만들기 때문에,
//!   순환(cycle)에만 속한 항목은 결과에 나오지 않고 무한 루프도 생기지 않습니다.

use crate::models::{MenuItem, MenuNode};
use std::collections::{HashMap, HashSet};

/// 평평한 메뉴 항목 목록을 트리로 변환합니다.
pub fn build_tree(items: Vec<MenuItem>) -> Vec<MenuNode> {
    let ids: HashSet<String> = items.iter().map(|item| item.id.clone()).collect();

    // 부모 ID → 자식 목록. 최상위 항목은 None 키 아래에 모입니다.
    let mut children: HashMap<Option<String>, Vec<MenuItem>> = HashMap::new();
    for item in items {
        let parent = item
            .parent_id
            .clone()
            .filter(|parent_id| ids.contains(parent_id) && *parent_id != item.id);
        children.entry(parent).or_default().push(item);
    }

    let roots = children.remove(&None).unwrap_or_default();
    attach(roots, &mut children)
}

/// 형제 목록을 정렬하고, 각 항목의 자식을 재귀적으로 붙입니다.
///
/// `children`에서 꺼낸(remove) 목록은 다시 방문되지 않으므로
/// 같은 항목이 두 번 나오는 일이 없습니다.
fn attach(
    mut siblings: Vec<MenuItem>,
    children: &mut HashMap<Option<String>, Vec<MenuItem>>,
) -> Vec<MenuNode> {
    siblings.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.id.cmp(&b.id))
    });

    siblings
        .into_iter()
        .map(|item| {
            let own = children.remove(&Some(item.id.clone())).unwrap_or_default();
            MenuNode {
                children: attach(own, children),
                item,
            }
        })
        .collect()
}

/// 메뉴 테이블이 없는 배포에서 사용하는 기본 메뉴
///
/// 프론트엔드에 하드코딩되어 있던 것과 같은 항목입니다.
pub fn default_menu(location: Option<&str>) -> Vec<MenuItem> {
    let location = location.unwrap_or("header");
    let entries: &[(&str, &str, &str, &str, &str)] = match location {
        "footer" => &[
            ("footer-about", "About us", "Über uns", "О нас", "/about"),
            ("footer-contact", "Contact", "Kontakt", "Контакты", "/contact"),
            ("footer-blog", "Blog", "Blog", "Блог", "/blog"),
        ],
        _ => &[
            ("header-home", "Home", "Startseite", "Главная", "/"),
            ("header-tours", "Tours", "Reisen", "Туры", "/tours"),
            ("header-destinations", "Destinations", "Reiseziele", "Направления", "/destinations"),
            ("header-blog", "Blog", "Blog", "Блог", "/blog"),
            ("header-about", "About us", "Über uns", "О нас", "/about"),
            ("header-contact", "Contact", "Kontakt", "Контакты", "/contact"),
        ],
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, (id, en, de, ru, url))| MenuItem {
            id: id.to_string(),
            parent_id: None,
            location: location.to_string(),
            label_en: Some(en.to_string()),
            label_de: Some(de.to_string()),
            label_ru: Some(ru.to_string()),
            url: url.to_string(),
            order_index: index as i64,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, parent: Option<&str>, order: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            location: "header".to_string(),
            label_en: Some(id.to_string()),
            label_de: None,
            label_ru: None,
            url: format!("/{}", id),
            order_index: order,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn ids(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.item.id.as_str()).collect()
    }

    #[test]
    fn nests_children_under_parents_sorted_by_order_index() {
        let tree = build_tree(vec![
            item("tours-alps", Some("tours"), 2),
            item("about", None, 3),
            item("tours", None, 1),
            item("tours-baltic", Some("tours"), 1),
            item("home", None, 0),
        ]);

        assert_eq!(ids(&tree), vec!["home", "tours", "about"]);
        assert_eq!(ids(&tree[1].children), vec!["tours-baltic", "tours-alps"]);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn equal_order_index_falls_back_to_id() {
        let tree = build_tree(vec![item("b", None, 0), item("a", None, 0)]);
        assert_eq!(ids(&tree), vec!["a", "b"]);
    }

    #[test]
    fn items_with_unknown_parent_become_roots() {
        let tree = build_tree(vec![item("orphan", Some("gone"), 5), item("home", None, 0)]);
        assert_eq!(ids(&tree), vec!["home", "orphan"]);
    }

    #[test]
    fn cycles_terminate_without_emitting_the_cycle() {
        let tree = build_tree(vec![
            item("a", Some("b"), 0),
            item("b", Some("a"), 0),
            item("self", Some("self"), 1),
            item("root", None, 0),
        ]);
        // 자기 자신을 부모로 가리키는 항목은 최상위로 취급합니다.
        assert_eq!(ids(&tree), vec!["root", "self"]);
    }

    #[test]
    fn default_menu_depends_on_location() {
        assert_eq!(default_menu(None).len(), 6);
        let footer = default_menu(Some("footer"));
        assert_eq!(footer.len(), 3);
        assert!(footer.iter().all(|item| item.location == "footer"));
        assert_eq!(footer[1].label_de.as_deref(), Some("Kontakt"));
    }
}
