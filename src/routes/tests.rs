//! API 통합 테스트
//!
//! 인메모리 SQLite에 마이그레이션을 적용한 뒤
//! `tower::ServiceExt::oneshot`으로 라우터에 요청을 하나씩 보냅니다.

use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn test_pool() -> SqlitePool {
    // 인메모리 DB는 연결마다 따로 생기므로 연결을 하나로 고정합니다.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        pool: pool.clone(),
        seo_assistant: None,
    };
    (api_router(state), pool)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_tour(app: &Router, title: &str, price: f64) -> Value {
    let (status, tour) = send(
        app,
        "POST",
        "/tours",
        Some(json!({ "title": title, "destination": "Austria", "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    tour
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn tour_create_generates_slug_and_defaults() {
    let (app, _) = test_app().await;

    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;
    assert_eq!(tour["slug"], "alpine-lakes");
    assert_eq!(tour["title_en"], "Alpine Lakes");
    assert_eq!(tour["status"], "draft");
    assert_eq!(tour["currency"], "EUR");
    assert_eq!(tour["itinerary"], json!([]));

    // 같은 제목이면 -2가 붙습니다.
    let second = create_tour(&app, "Alpine Lakes", 990.0).await;
    assert_eq!(second["slug"], "alpine-lakes-2");
}

#[tokio::test]
async fn tour_accepts_all_localized_shapes() {
    let (app, _) = test_app().await;

    let (status, tour) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": { "en": "Lake Baikal", "de": "Baikalsee" },
            "title_ru": "Байкал",
            "description": "Ice and silence",
            "destination": "Russia",
            "price": 0,
            "type": "adventure"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tour["title_en"], "Lake Baikal");
    assert_eq!(tour["title_de"], "Baikalsee");
    assert_eq!(tour["title_ru"], "Байкал");
    assert_eq!(tour["description_en"], "Ice and silence");
    assert_eq!(tour["tour_type"], "adventure");
}

#[tokio::test]
async fn tour_validation_errors_are_400() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({ "destination": "Austria", "price": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
    assert_eq!(body["error"]["message"], "Missing required field: title");

    let (status, _) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({ "title": "Cheap", "destination": "Austria", "price": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Lost",
            "destination": "Austria",
            "price": 1,
            "category_id": "no-such-category"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_bodies_are_json_400() {
    let (app, _) = test_app().await;
    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;

    let cases = [
        ("/tours", json!({ "title": "Alps", "destination": "Austria", "price": "cheap" })),
        (
            "/bookings",
            json!({
                "tour_id": tour["id"],
                "customer_name": "Anna",
                "customer_email": "anna@example.de",
                "status": "bogus"
            }),
        ),
        ("/reviews", json!({ "tour_id": tour["id"], "name": "Ivan", "rating": "five" })),
    ];
    for (uri, body) in cases {
        let (status, error) = send(&app, "POST", uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(error["error"]["code"], "bad_request", "{}", uri);
        assert!(error["error"]["message"].is_string());
    }

    // 문법이 깨진 JSON
    let request = Request::builder()
        .method("POST")
        .uri("/tours")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["error"]["code"], "bad_request");
}

#[tokio::test]
async fn malformed_query_strings_are_json_400() {
    let (app, _) = test_app().await;

    for uri in ["/tours?limit=abc", "/tours?status=bogus", "/bookings?limit=-x"] {
        let (status, error) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(error["error"]["code"], "bad_request", "{}", uri);
    }
}

#[tokio::test]
async fn itinerary_day_number_must_be_positive() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Alpine Lakes",
            "destination": "Austria",
            "price": 1290,
            "itinerary": [{ "day": 1, "title": "Arrival" }, { "day": 0, "title": "Nowhere" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (_, body) = send(&app, "GET", "/tours", None).await;
    assert!(body["tours"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn tour_lookup_by_slug_and_itinerary_replacement() {
    let (app, _) = test_app().await;

    let (status, tour) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Danube Cycling",
            "destination": "Austria",
            "price": 850,
            "itinerary": [
                { "title": "Passau" },
                { "title": "Linz" },
                { "day": 5, "title": "Vienna" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let days: Vec<i64> = tour["itinerary"]
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["day_number"].as_i64().unwrap())
        .collect();
    assert_eq!(days, vec![1, 2, 5]);

    let (status, by_slug) = send(&app, "GET", "/tours/danube-cycling", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], tour["id"]);

    let id = tour["id"].as_str().unwrap();
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/tours/{}", id),
        Some(json!({ "price": 900, "itinerary": [{ "title": "Melk" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 900.0);
    assert_eq!(updated["title_en"], "Danube Cycling");
    assert_eq!(updated["itinerary"].as_array().unwrap().len(), 1);
    assert_eq!(updated["itinerary"][0]["title_en"], "Melk");
}

#[tokio::test]
async fn tour_list_filters() {
    let (app, _) = test_app().await;

    send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Fjords", "destination": "Norway", "price": 2000,
            "status": "active", "featured": true
        })),
    )
    .await;
    send(
        &app,
        "POST",
        "/tours",
        Some(json!({ "title": "Tatra", "destination": "Slovakia", "price": 600 })),
    )
    .await;

    let (_, body) = send(&app, "GET", "/tours?destination=norway", None).await;
    assert_eq!(body["tours"].as_array().unwrap().len(), 1);
    assert_eq!(body["tours"][0]["title_en"], "Fjords");

    let (_, body) = send(&app, "GET", "/tours?status=draft", None).await;
    assert_eq!(body["tours"][0]["title_en"], "Tatra");

    let (_, body) = send(&app, "GET", "/tours?featured=true", None).await;
    assert_eq!(body["tours"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/tours?limit=1", None).await;
    assert_eq!(body["tours"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/tours?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_resources_are_404() {
    let (app, _) = test_app().await;

    for uri in [
        "/tours/nope",
        "/destinations/nope",
        "/tour-categories/nope",
        "/bookings/nope",
        "/reviews/nope",
        "/blog-posts/nope",
        "/menus/nope",
        "/about/nope",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);
        assert_eq!(body["error"]["code"], "not_found");

        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {}", uri);
    }

    let (status, _) = send(&app, "PUT", "/tours/nope", Some(json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_category_detaches_tours() {
    let (app, _) = test_app().await;

    let (status, category) = send(
        &app,
        "POST",
        "/tour-categories",
        Some(json!({ "name": { "en": "Hiking", "de": "Wandern" } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["slug"], "hiking");
    let category_id = category["id"].as_str().unwrap();

    let (_, tour) = send(
        &app,
        "POST",
        "/tours",
        Some(json!({
            "title": "Dolomites", "destination": "Italy", "price": 1500,
            "category_id": category_id
        })),
    )
    .await;
    assert_eq!(tour["category_id"], category_id);

    let (_, body) = send(&app, "GET", "/tours?category=hiking", None).await;
    assert_eq!(body["tours"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/tour-categories/{}", category_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, tour) = send(&app, "GET", "/tours/dolomites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tour["category_id"], Value::Null);
}

#[tokio::test]
async fn booking_computes_total_and_starts_pending() {
    let (app, _) = test_app().await;
    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;

    let (status, booking) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({
            "tour_id": tour["id"],
            "name": "Anna Müller",
            "email": "anna@example.de",
            "guests": 2,
            "language": "de"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["guests"], 2);
    assert_eq!(booking["total_price"], 2580.0);
    assert_eq!(booking["language"], "de");

    let id = booking["id"].as_str().unwrap();
    let (status, booking) = send(
        &app,
        "PUT",
        &format!("/bookings/{}", id),
        Some(json!({ "status": "confirmed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["status"], "confirmed");

    let (_, body) = send(&app, "GET", "/bookings?status=confirmed", None).await;
    assert_eq!(body["bookings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn booking_validation() {
    let (app, _) = test_app().await;
    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;

    let cases = [
        json!({ "tour_id": "missing", "customer_name": "A", "customer_email": "a@b.co" }),
        json!({ "tour_id": tour["id"], "customer_email": "a@b.co" }),
        json!({ "tour_id": tour["id"], "customer_name": "A", "customer_email": "not-an-email" }),
        json!({ "tour_id": tour["id"], "customer_name": "A", "customer_email": "a@b.co", "guests": 0 }),
    ];
    for body in cases {
        let (status, _) = send(&app, "POST", "/bookings", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
    }
}

#[tokio::test]
async fn booking_update_trims_customer_fields() {
    let (app, _) = test_app().await;
    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;

    let (status, booking) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "tour_id": tour["id"], "customer_name": "Anna", "customer_email": "anna@example.de" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/bookings/{}", booking["id"].as_str().unwrap());
    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "customer_name": "  Anna Berg ", "customer_email": " anna.berg@example.de  " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["customer_name"], "Anna Berg");
    assert_eq!(updated["customer_email"], "anna.berg@example.de");
}

#[tokio::test]
async fn review_rating_must_be_in_range() {
    let (app, _) = test_app().await;
    let tour = create_tour(&app, "Alpine Lakes", 1290.0).await;

    let (status, _) = send(
        &app,
        "POST",
        "/reviews",
        Some(json!({ "tour_id": tour["id"], "name": "Ivan", "rating": 6, "comment": "Отлично" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, review) = send(
        &app,
        "POST",
        "/reviews",
        Some(json!({ "tour_id": tour["id"], "name": "Ivan", "rating": 5, "comment": "Отлично" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["status"], "pending");
    assert_eq!(review["author_name"], "Ivan");

    // 투어를 지우면 후기도 함께 지워집니다.
    let tour_id = tour["id"].as_str().unwrap();
    send(&app, "DELETE", &format!("/tours/{}", tour_id), None).await;
    let (_, body) = send(&app, "GET", "/reviews", None).await;
    assert!(body["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn publishing_a_post_stamps_published_at() {
    let (app, _) = test_app().await;

    let (status, post) = send(
        &app,
        "POST",
        "/blog-posts",
        Some(json!({ "title": "Packing for the Alps", "content": "Layers." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["status"], "draft");
    assert_eq!(post["published_at"], Value::Null);

    let id = post["id"].as_str().unwrap();
    let (status, post) = send(
        &app,
        "PUT",
        &format!("/blog-posts/{}", id),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["status"], "published");
    assert!(post["published_at"].is_string());

    let (status, by_slug) = send(&app, "GET", "/blog-posts/packing-for-the-alps", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id);
}

#[tokio::test]
async fn menus_are_nested_and_ordered() {
    let (app, _) = test_app().await;

    let (_, tours) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Tours", "url": "/tours", "order_index": 2 })),
    )
    .await;
    send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Home", "url": "/", "order_index": 1 })),
    )
    .await;
    for (label, order) in [("Winter", 2), ("Summer", 1)] {
        let (status, _) = send(
            &app,
            "POST",
            "/menus",
            Some(json!({
                "label": label,
                "url": format!("/tours/{}", label.to_lowercase()),
                "parent_id": tours["id"],
                "order_index": order
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/menus?location=header", None).await;
    assert_eq!(status, StatusCode::OK);
    let menus = body["menus"].as_array().unwrap();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0]["label_en"], "Home");
    assert_eq!(menus[1]["label_en"], "Tours");
    assert_eq!(menus[1]["children"][0]["label_en"], "Summer");
    assert_eq!(menus[1]["children"][1]["label_en"], "Winter");

    let (_, flat) = send(&app, "GET", "/menus?flat=true", None).await;
    assert_eq!(flat["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn menu_parent_must_exist() {
    let (app, _) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Orphan", "url": "/x", "parent_id": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/menus", Some(json!({ "label": "No url" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_parent_cannot_be_a_descendant() {
    let (app, _) = test_app().await;

    let (_, tours) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Tours", "url": "/tours" })),
    )
    .await;
    let (_, winter) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Winter", "url": "/tours/winter", "parent_id": tours["id"] })),
    )
    .await;
    let (_, skiing) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({ "label": "Skiing", "url": "/tours/skiing", "parent_id": winter["id"] })),
    )
    .await;
    let tours_uri = format!("/menus/{}", tours["id"].as_str().unwrap());

    for parent in [&tours, &winter, &skiing] {
        let change = json!({ "parent_id": parent["id"] });
        let (status, body) = send(&app, "PUT", &tours_uri, Some(change)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", parent["label_en"]);
        assert_eq!(body["error"]["code"], "bad_request");
    }

    // 트리는 그대로입니다.
    let (_, body) = send(&app, "GET", "/menus", None).await;
    let menus = body["menus"].as_array().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["label_en"], "Tours");
    assert_eq!(menus[0]["children"][0]["label_en"], "Winter");

    // 순환이 아닌 이동은 허용됩니다.
    let skiing_uri = format!("/menus/{}", skiing["id"].as_str().unwrap());
    let change = json!({ "parent_id": tours["id"] });
    let (status, moved) = send(&app, "PUT", &skiing_uri, Some(change)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["parent_id"], tours["id"]);
}

#[tokio::test]
async fn missing_menu_table_serves_default_menu() {
    let (app, pool) = test_app().await;
    sqlx::query("DROP TABLE menu_items")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send(&app, "GET", "/menus?location=footer", None).await;
    assert_eq!(status, StatusCode::OK);
    let menus = body["menus"].as_array().unwrap();
    assert_eq!(menus.len(), 3);
    assert_eq!(menus[0]["location"], "footer");
}

#[tokio::test]
async fn about_section_must_be_unique() {
    let (app, _) = test_app().await;

    let payload = json!({ "section": "story", "title": "Our story" });
    let (status, _) = send(&app, "POST", "/about", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/about", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");

    let (_, body) = send(&app, "GET", "/about?section=story", None).await;
    assert_eq!(body["sections"][0]["title_en"], "Our story");
}

#[tokio::test]
async fn contact_requires_valid_email() {
    let (app, _) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/contact",
        Some(json!({ "name": "Olga", "email": "olga@", "message": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/contact",
        Some(json!({ "name": "Olga", "email": "olga@example.ru", "message": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["id"].is_string());

    let (_, body) = send(&app, "GET", "/contact", None).await;
    assert_eq!(body["messages"][0]["email"], "olga@example.ru");
}

#[tokio::test]
async fn newsletter_duplicate_is_already_subscribed() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/newsletter",
        Some(json!({ "email": "Traveler@Example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "subscribed");

    let (status, body) = send(
        &app,
        "POST",
        "/newsletter",
        Some(json!({ "email": " traveler@example.com " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "already_subscribed");

    let (_, body) = send(&app, "GET", "/newsletter", None).await;
    let subscribers = body["subscribers"].as_array().unwrap();
    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0]["email"], "traveler@example.com");
}

#[tokio::test]
async fn generate_seo_single_and_all_languages() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/generate-seo",
        Some(json!({ "title": "Alpine Lakes", "destination": "Austria", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["meta_title"].as_str().unwrap().contains("Alpine Lakes"));
    assert!(body["keywords"].is_array());

    let (status, body) = send(
        &app,
        "POST",
        "/generate-seo",
        Some(json!({ "title": "Alpine Lakes" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    for lang in ["en", "de", "ru"] {
        assert!(body[lang]["meta_title"].is_string(), "{}", lang);
    }

    let (status, _) = send(&app, "POST", "/generate-seo", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ai_seo_without_key_falls_back_to_templates() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/ai/seo",
        Some(json!({ "title": "Lake Baikal", "language": "ru" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "template");
    assert!(body["meta_title"].as_str().unwrap().contains("Lake Baikal"));
}
