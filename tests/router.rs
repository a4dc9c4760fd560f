//! In-process tests of the routed service.

use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{get, post};

#[tokio::test]
async fn test_calculation_routes() {
    let cases = [
        ("/calculation/add?num1=2&num2=3", 5.0),
        ("/calculation/subtract?num1=5&num2=2", 3.0),
        ("/calculation/multiply?num1=4&num2=5", 20.0),
        ("/calculation/divide?num1=10&num2=2", 5.0),
    ];

    for (uri, expected) in cases {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "result": expected }), "{uri}");
    }
}

#[tokio::test]
async fn test_divide_by_zero() {
    let (status, body) = get("/calculation/divide?num1=7&num2=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Cannot divide by zero" }));
}

#[tokio::test]
async fn test_trigonometry_routes() {
    let x: f64 = 1.0 / 2.0;
    let cases = [
        ("sin", x.sin()),
        ("cos", x.cos()),
        ("tan", x.tan()),
        ("ctg", 1.0 / x.tan()),
    ];

    for (name, expected) in cases {
        let (status, body) = get(&format!("/trigonometry/{name}?num1=1&num2=2")).await;
        assert_eq!(status, StatusCode::OK, "{name}");
        assert_eq!(body["result"].as_f64(), Some(expected), "{name}");
    }
}

#[tokio::test]
async fn test_trigonometry_zero_denominator() {
    let (status, body) = get("/trigonometry/sin?num1=1&num2=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Cannot divide by zero" }));

    // The zero check runs before the name is resolved.
    let (_, body) = get("/trigonometry/nope?num1=1&num2=0").await;
    assert_eq!(body, json!({ "error": "Cannot divide by zero" }));
}

#[tokio::test]
async fn test_invalid_input() {
    for uri in [
        "/calculation/add?num1=abc&num2=1",
        "/calculation/add?num2=1",
        "/trigonometry/cos?num1=1",
        "/calculation/unknown?num1=x&num2=1",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Invalid input values." }), "{uri}");
    }
}

#[tokio::test]
async fn test_operand_trailing_text_is_ignored() {
    let (status, body) = get("/calculation/add?num1=3abc&num2=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 5.0 }));

    let (status, body) = post(
        "/calculation/multiply",
        "application/json",
        r#"{"num1": "2.5kg", "num2": 2}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 5.0 }));
}

#[tokio::test]
async fn test_invalid_operation() {
    for uri in [
        "/calculation/modulo?num1=1&num2=2",
        "/calculation/sin?num1=1&num2=2",
        "/trigonometry/add?num1=1&num2=2",
        "/calculator?num1=1&num2=2",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Invalid operation" }), "{uri}");
    }
}

#[tokio::test]
async fn test_unified_route() {
    let (status, body) = get("/calculator?operation=multiply&num1=4&num2=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 20.0 }));

    let (status, body) = post(
        "/calculator",
        "application/json",
        r#"{"operation": "cos", "num1": 0, "num2": 3}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 1.0 }));
}

#[tokio::test]
async fn test_post_json_body() {
    let (status, body) = post(
        "/calculation/add",
        "application/json",
        r#"{"num1": 2, "num2": "3"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 5.0 }));

    let (status, body) = post(
        "/calculation/add",
        "application/json; charset=utf-8",
        r#"{"num1": 2.5, "num2": 0.5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 3.0 }));
}

#[tokio::test]
async fn test_post_wrong_content_type() {
    let (status, body) = post("/calculation/add", "text/plain", r#"{"num1": 2, "num2": 3}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid content type" }));
}

#[tokio::test]
async fn test_post_non_object_body() {
    for payload in ["[2, 3]", "{broken", "\"num1\""] {
        let (status, body) = post("/calculation/add", "application/json", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({ "error": "Invalid input values." }), "{payload}");
    }
}

#[tokio::test]
async fn test_non_finite_result_is_null() {
    let (status, body) = get("/trigonometry/ctg?num1=0&num2=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": null }));
}

#[tokio::test]
async fn test_unknown_path() {
    let (status, body) = get("/nothing/here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
