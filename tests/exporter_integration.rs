mod common;

use std::sync::Arc;

use axum::http::{header, Method, StatusCode};
use common::{
    assert_valid_exposition, body_string, build_exporter, load_config, load_test_config, request,
};
use naimat_exporter::routes::create_router;
use naimat_exporter::startup::build_state;
use tower::ServiceExt;

#[tokio::test]
async fn scrape_returns_every_gauge_in_bounds() {
    let app = build_exporter(load_test_config());

    let response = app
        .oneshot(request("/metrics", Method::GET))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type missing")
        .to_str()
        .expect("content type not valid UTF-8")
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{}", content_type);

    let body = body_string(response).await;
    assert_valid_exposition(&body);

    let lines: Vec<&str> = body.lines().collect();
    let type_line = lines
        .iter()
        .position(|line| *line == "# TYPE meals_received gauge")
        .expect("TYPE line for meals_received");
    let value: i64 = lines[type_line + 1]
        .strip_prefix("meals_received ")
        .expect("value line follows TYPE line")
        .parse()
        .expect("integer value");
    assert!((100..=200).contains(&value));
}

#[tokio::test]
async fn repeated_scrapes_stay_valid_and_stable() {
    let app = build_exporter(load_test_config());

    for _ in 0..1_000 {
        let response = app
            .clone()
            .oneshot(request("/metrics", Method::GET))
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::OK);
        assert_valid_exposition(&body_string(response).await);
    }
}

#[tokio::test]
async fn sequential_scrapes_are_independently_valid() {
    let app = build_exporter(load_test_config());

    let first = body_string(
        app.clone()
            .oneshot(request("/metrics", Method::GET))
            .await
            .unwrap(),
    )
    .await;
    let second = body_string(app.oneshot(request("/metrics", Method::GET)).await.unwrap()).await;

    assert_valid_exposition(&first);
    assert_valid_exposition(&second);
}

#[tokio::test]
async fn same_seed_serves_same_values() {
    let first = build_exporter(load_test_config());
    let second = build_exporter(load_test_config());

    for _ in 0..5 {
        let a = body_string(
            first
                .clone()
                .oneshot(request("/metrics", Method::GET))
                .await
                .unwrap(),
        )
        .await;
        let b = body_string(
            second
                .clone()
                .oneshot(request("/metrics", Method::GET))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn concurrent_scrapes_each_serve_a_full_set() {
    let app = build_exporter(load_test_config());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app.oneshot(request("/metrics", Method::GET)).await.unwrap();
                body_string(response).await
            })
        })
        .collect();

    for task in tasks {
        assert_valid_exposition(&task.await.expect("task should not panic"));
    }
}

#[tokio::test]
async fn configured_gauges_replace_the_catalogue() {
    let config = load_config(
        r#"
version: "1.0.0"
exporter:
  seed: 3
  gauges:
    - name: fixed_meals
      help: Always the same
      generator:
        type: uniform_int
        lo: 42
        hi: 42
    - name: fixed_weight_kg
      help: Also fixed
      generator:
        type: uniform_float
        lo: 1.5
        hi: 1.5
        precision: 2
"#,
    );
    let app = build_exporter(config);

    let response = app.oneshot(request("/metrics", Method::GET)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "# HELP fixed_meals Always the same\n\
         # TYPE fixed_meals gauge\n\
         fixed_meals 42\n\
         # HELP fixed_weight_kg Also fixed\n\
         # TYPE fixed_weight_kg gauge\n\
         fixed_weight_kg 1.50\n"
    );
}

#[tokio::test]
async fn duplicate_gauges_prevent_startup() {
    let config = load_config(
        r#"
version: "1.0.0"
exporter:
  gauges:
    - name: meals_saved
      help: first
      generator: { type: uniform_int, lo: 1, hi: 2 }
    - name: meals_saved
      help: second
      generator: { type: uniform_int, lo: 1, hi: 2 }
"#,
    );

    let err = build_state(Arc::new(config)).err().expect("duplicate must fail");
    assert!(err.to_string().contains("already registered"), "{}", err);
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = create_router(build_state(Arc::new(load_test_config())).unwrap());

    let response = app.oneshot(request("/health", Method::GET)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn unsampleable_float_bounds_prevent_startup() {
    for (lo, hi) in [("1.0e19", "2.0e19"), ("-1.0e308", "1.0e308")] {
        let config = load_config(&format!(
            "version: \"1.0.0\"\nexporter:\n  gauges:\n    - name: food_donated_kg\n      help: Total food donated (kg)\n      generator: {{ type: uniform_float, lo: {}, hi: {}, precision: 0 }}\n",
            lo, hi
        ));

        let err = build_state(Arc::new(config)).err().expect("bounds must be rejected");
        assert!(err.to_string().contains("invalid generator policy"), "{}", err);
    }
}
