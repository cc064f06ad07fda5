use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rr_api::{router, AppState, SharedState};
use rr_core::models::{timestamp, Review, SentimentScores};
use rr_core::service::ReviewService;
use rr_core::traits::MockSentimentScorer;
use rr_sentiment_vader::VaderScorer;
use rr_store_memory::MemoryReviewRepo;
use serde_json::Value;
use std::collections::HashSet;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn seed_review(id: &str, location: &str, ts: &str, body: &str) -> Review {
    Review {
        id: id.into(),
        body: body.into(),
        location: location.into(),
        timestamp: timestamp::parse(ts).unwrap(),
    }
}

fn seed() -> Vec<Review> {
    vec![
        seed_review("1", "Denver, Colorado", "2021-01-10 09:00:00", "The staff were rude and the room was dirty"),
        seed_review("2", "Tucson, Arizona", "2021-02-01 00:00:00", "Excellent food, wonderful staff!"),
        seed_review("3", "Denver, Colorado", "2021-02-01 14:30:00", "It was fine"),
        seed_review("4", "Phoenix, Arizona", "2021-03-15 18:45:00", "Terrible, never again"),
    ]
}

fn app_with(seed: Vec<Review>) -> (Router, SharedState) {
    let mut service = ReviewService::new(
        Box::new(MemoryReviewRepo::new()),
        Box::new(VaderScorer::default()),
    );
    service.load(seed);
    let state = AppState::new(service);
    (router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response.headers()[header::CONTENT_TYPE].clone();
    let content_length: usize = response.headers()[header::CONTENT_LENGTH]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(content_type, "application/json");
    assert_eq!(content_length, bytes.len());
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ReviewId"].as_str().unwrap())
        .collect()
}

fn assert_ranked(value: &Value) {
    let scores: Vec<f64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["sentiment"]["compound"].as_f64().unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "not sorted: {scores:?}");
    }
}

#[tokio::test]
async fn get_without_filters_returns_every_review_ranked() {
    let (app, state) = app_with(seed());
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), state.review_count().unwrap());
    assert_ranked(&body);
    assert_eq!(ids(&body).first(), Some(&"2"));

    let first = &body[0];
    assert_eq!(first["Location"], "Tucson, Arizona");
    assert_eq!(first["Timestamp"], "2021-02-01 00:00:00");
    assert_eq!(first["ReviewBody"], "Excellent food, wonderful staff!");
    for key in ["neg", "neu", "pos", "compound"] {
        assert!(first["sentiment"][key].is_f64(), "missing {key}");
    }
}

#[tokio::test]
async fn get_on_empty_store_is_an_empty_array() {
    let (app, _) = app_with(Vec::new());
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn get_filters_by_exact_location() {
    let (app, _) = app_with(seed());
    let (status, body) = send(&app, get("/?location=Denver%2C+Colorado")).await;

    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort_unstable();
    assert_eq!(found, ["1", "3"]);
    assert_ranked(&body);

    let (_, body) = send(&app, get("/?location=Denver")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_date_range_truncates_end_date_to_midnight() {
    let (app, _) = app_with(seed());

    let (status, body) = send(&app, get("/?start_date=2021-01-10&end_date=2021-02-01")).await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort_unstable();
    // Review 3 was written at 14:30 on the end date and falls outside.
    assert_eq!(found, ["1", "2"]);

    let (_, body) = send(&app, get("/?start_date=2021-02-01")).await;
    let mut found = ids(&body);
    found.sort_unstable();
    assert_eq!(found, ["2", "3", "4"]);
}

#[tokio::test]
async fn get_combines_location_and_dates() {
    let (app, _) = app_with(seed());
    let (_, body) = send(
        &app,
        get("/?location=Denver%2C+Colorado&start_date=2021-02-01&end_date=2021-12-31"),
    )
    .await;
    assert_eq!(ids(&body), ["3"]);
}

#[tokio::test]
async fn blank_query_values_are_ignored() {
    let (app, _) = app_with(seed());
    let (status, body) = send(&app, get("/?location=&start_date=&end_date=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn repeated_query_key_keeps_the_first_value() {
    let (app, _) = app_with(seed());
    let (status, body) = send(
        &app,
        get("/?location=Denver%2C+Colorado&location=Tucson%2C+Arizona"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort_unstable();
    assert_eq!(found, ["1", "3"]);

    let (_, body) = send(&app, get("/?location=&location=Tucson%2C+Arizona")).await;
    assert_eq!(ids(&body), ["2"]);
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
    let (app, _) = app_with(seed());
    let (status, body) = send(&app, get("/?start_date=02%2F01%2F2021")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn post_creates_a_review() {
    let (app, state) = app_with(seed());
    let (status, body) = send(
        &app,
        post_form("ReviewBody=Lovely+stay&Location=Salt+Lake+City%2C+Utah"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ReviewBody"], "Lovely stay");
    assert_eq!(body["Location"], "Salt Lake City, Utah");
    assert!(body.get("sentiment").is_none());
    let ts = body["Timestamp"].as_str().unwrap();
    assert!(timestamp::parse(ts).is_ok(), "bad timestamp {ts}");
    assert_eq!(body.as_object().unwrap().len(), 4);
    assert_eq!(state.review_count().unwrap(), 5);
}

#[tokio::test]
async fn post_ids_are_unique() {
    let (app, _) = app_with(Vec::new());
    let mut seen = HashSet::new();
    for _ in 0..20 {
        let (status, body) = send(&app, post_form("ReviewBody=ok&Location=Fresno%2C+California")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(seen.insert(body["ReviewId"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn post_with_unknown_location_is_rejected() {
    let (app, state) = app_with(seed());
    let (status, body) = send(&app, post_form("ReviewBody=Nice&Location=Boston%2C+Massachusetts")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Invalid Location" }));
    assert_eq!(state.review_count().unwrap(), 4);
}

#[tokio::test]
async fn post_with_missing_fields_is_rejected() {
    let (app, state) = app_with(seed());
    for form in [
        "",
        "ReviewBody=Nice",
        "Location=Denver%2C+Colorado",
        "ReviewBody=&Location=Denver%2C+Colorado",
        "ReviewBody=Nice&Location=",
    ] {
        let (status, body) = send(&app, post_form(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "form {form:?}");
        assert_eq!(body["error"], "ReviewBody and Location are required");
    }
    assert_eq!(state.review_count().unwrap(), 4);
}

#[tokio::test]
async fn post_body_is_decoded_whatever_the_content_type() {
    let (app, state) = app_with(seed());
    for content_type in [None, Some("text/plain"), Some("application/json")] {
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(value) = content_type {
            request = request.header(header::CONTENT_TYPE, value);
        }
        let request = request
            .body(Body::from("ReviewBody=Friendly+desk&Location=Oceanside%2C+California"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::CREATED, "content type {content_type:?}");
        assert_eq!(body["ReviewBody"], "Friendly desk");
        assert_eq!(body["Location"], "Oceanside, California");
    }
    assert_eq!(state.review_count().unwrap(), 7);
}

#[tokio::test]
async fn post_with_undecodable_body_is_rejected() {
    let (app, state) = app_with(seed());
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(vec![b'R', 0xff, 0xfe]))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("UTF-8"));
    assert_eq!(state.review_count().unwrap(), 4);
}

#[tokio::test]
async fn submitted_review_round_trips_through_get() {
    let (app, _) = app_with(seed());
    let (status, created) = send(&app, post_form("ReviewBody=Great+service&Location=Denver%2C+Colorado")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, get("/?location=Denver%2C+Colorado")).await;
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["ReviewId"] == created["ReviewId"])
        .expect("submitted review missing from listing");

    assert_eq!(entry["ReviewBody"], "Great service");
    assert_eq!(entry["Location"], "Denver, Colorado");
    assert_eq!(entry["Timestamp"], created["Timestamp"]);
    let compound = entry["sentiment"]["compound"].as_f64().unwrap();
    assert!((-1.0..=1.0).contains(&compound));
    assert_ranked(&listed);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let (app, state) = app_with(seed());
    for method in ["DELETE", "PUT", "PATCH", "OPTIONS"] {
        let request = Request::builder()
            .method(method)
            .uri("/?location=Denver%2C+Colorado")
            .header(header::CONTENT_TYPE, FORM)
            .body(Body::from("ReviewBody=x&Location=Denver%2C+Colorado"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
    }
    assert_eq!(state.review_count().unwrap(), 4);
}

#[tokio::test]
async fn head_is_not_allowed() {
    let (app, _) = app_with(seed());
    let request = Request::builder()
        .method("HEAD")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // HEAD responses carry no body, so only the status and headers are checked.
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn every_path_dispatches_by_method() {
    let (app, state) = app_with(seed());

    let (status, body) = send(&app, get("/index?location=Denver%2C+Colorado")).await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort_unstable();
    assert_eq!(found, ["1", "3"]);

    let request = Request::builder()
        .method("DELETE")
        .uri("/reviews")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let request = Request::builder()
        .method("POST")
        .uri("/any/where")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from("ReviewBody=Quiet+rooms&Location=Fresno%2C+California"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(state.review_count().unwrap(), 5);
}

#[tokio::test]
async fn ranking_follows_the_scorer() {
    let mut scorer = MockSentimentScorer::new();
    scorer.expect_score().returning(|text| SentimentScores {
        compound: text.len() as f64 / 100.0,
        ..SentimentScores::default()
    });
    let mut service = ReviewService::new(Box::new(MemoryReviewRepo::new()), Box::new(scorer));
    service.load(vec![
        seed_review("short", "El Paso, Texas", "2021-01-01 00:00:00", "ab"),
        seed_review("long", "El Paso, Texas", "2021-01-01 00:00:00", "abcdefgh"),
        seed_review("mid", "El Paso, Texas", "2021-01-01 00:00:00", "abcd"),
    ]);
    let app = router(AppState::new(service));

    let (_, body) = send(&app, get("/")).await;
    assert_eq!(ids(&body), ["long", "mid", "short"]);
    assert_eq!(body[0]["sentiment"]["compound"], 0.08);
}
