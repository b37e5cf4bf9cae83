//! Rejected payloads: every failure is a 422 with a `detail` list

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{ServerBuilder, TestFixtures, TestHelpers};

#[tokio::test]
async fn test_conversions_above_views_rejected() {
    let router = ServerBuilder::new().build();
    let payload = TestFixtures::variants(&[("A", 10, 2), ("B", 5, 6)]);

    let (status, body) = TestHelpers::post_json(router, "/ab/select", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["variants[1]"]);
    assert_eq!(body["detail"][0]["code"], "conversions_exceed_views");
    assert_eq!(body["detail"][0]["message"], "conversions cannot exceed views");
}

#[tokio::test]
async fn test_empty_variant_list_rejected() {
    let router = ServerBuilder::new().build();

    let (status, body) = TestHelpers::post_json(router, "/ab/select", json!({ "variants": [] })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["variants"]);
}

#[tokio::test]
async fn test_negative_views_rejected_as_body_error() {
    let router = ServerBuilder::new().build();
    let payload = json!({ "variants": [{ "name": "A", "views": -1, "conversions": 0 }] });

    let (status, body) = TestHelpers::post_json(router, "/ab/select", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["body"]);
    assert_eq!(body["detail"][0]["code"], "parse");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let router = ServerBuilder::new().build();

    let (status, body) = TestHelpers::post_raw(router, "/pricing/suggest", "{\"country\": ").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["body"]);
}

#[tokio::test]
async fn test_engagement_out_of_range_rejected() {
    let router = ServerBuilder::new().build();

    let (status, body) =
        TestHelpers::post_json(router, "/predict/lead", json!({ "engagement_score": 1.5 })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["engagement_score"]);
    assert_eq!(body["detail"][0]["code"], "range");
}

#[tokio::test]
async fn test_short_series_rejected() {
    let router = ServerBuilder::new().without_detector_calls().build();

    let (status, body) =
        TestHelpers::post_json(router, "/anomaly/events", json!({ "values": [1.0, 2.0, 3.0, 4.0] })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["values"]);
}

#[tokio::test]
async fn test_contamination_bounds_rejected() {
    let router = ServerBuilder::new().without_detector_calls().build();
    let payload = json!({ "values": [1.0, 2.0, 3.0, 4.0, 5.0], "method": "iforest", "contamination": 0.5 });

    let (status, body) = TestHelpers::post_json(router, "/anomaly/events", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["contamination"]);
}

#[tokio::test]
async fn test_unknown_method_rejected() {
    let router = ServerBuilder::new().without_detector_calls().build();
    let payload = json!({ "values": [1.0, 2.0, 3.0, 4.0, 5.0], "method": "lof" });

    let (status, body) = TestHelpers::post_json(router, "/anomaly/events", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["body"]);
}

#[tokio::test]
async fn test_blank_copy_fields_rejected() {
    let router = ServerBuilder::new().build();
    let payload = json!({ "product": "  x  ", "audience": "founders", "goal": "grow" });

    let (status, body) = TestHelpers::post_json(router, "/generate/copy", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["product"]);
    assert_eq!(body["detail"][0]["code"], "blank");
}

#[tokio::test]
async fn test_missing_copy_field_rejected() {
    let router = ServerBuilder::new().build();

    let (status, body) =
        TestHelpers::post_json(router, "/generate/copy", json!({ "product": "Insight", "audience": "ops" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(TestHelpers::rejected_fields(&body), vec!["body"]);
}

#[tokio::test]
async fn test_pricing_bounds_rejected() {
    let router = ServerBuilder::new().build();
    let payload = json!({ "base_monthly": 0, "currency": "US", "country": "FRAN" });

    let (status, body) = TestHelpers::post_json(router, "/pricing/suggest", payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        TestHelpers::rejected_fields(&body),
        vec!["base_monthly", "country", "currency"]
    );
}
