//! Integration tests for `CatalogLoader` over `FetchClient`.
//!
//! Each test stands up a local `wiremock` server serving `{id}.json` files.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use harvest_commerce::catalog::CatalogHandle;
use harvest_commerce::ProductId;
use harvest_data::{
    BackoffStrategy, CatalogLoader, FetchClient, FetchError, FetchPolicy, ProductSource,
    RetryPolicy, TimeoutConfig,
};

fn product_json(id: &str, name: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "description": format!("Fresh {name}."),
        "image": format!("{id}.jpg")
    })
}

fn no_retry_client(base: &str) -> FetchClient {
    FetchClient::new(
        base,
        FetchPolicy::new(TimeoutConfig::from_millis(5000), RetryPolicy::none()),
    )
    .expect("failed to build test FetchClient")
}

async fn serve(server: &MockServer, id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/products/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn loads_all_products_in_identifier_order() {
    let server = MockServer::start().await;
    serve(&server, "apple", product_json("apple", "Apple", 1.25)).await;
    serve(&server, "grapes", product_json("grapes", "Grapes", 3.5)).await;
    serve(&server, "orange", product_json("orange", "Orange", 0.99)).await;
    serve(&server, "pear", product_json("pear", "Pear", 1.1)).await;

    let client = no_retry_client(&format!("{}/products", server.uri()));
    let loader = CatalogLoader::with_default_ids(Box::new(client));
    let catalog = CatalogHandle::new();

    let report = loader.load(&catalog).await;

    assert!(report.is_complete(), "unexpected failures: {:?}", report.failed);
    let catalog = catalog.read();
    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Grapes", "Orange", "Pear"]);
    assert_eq!(catalog.products()[0].price.display(), "$1.25");
    assert!(catalog.products().iter().all(|p| p.in_stock));
    assert!(catalog.products().iter().all(|p| p.reviews.is_empty()));
    assert!(!catalog.is_loading());
}

#[tokio::test]
async fn server_error_omits_only_that_product() {
    let server = MockServer::start().await;
    serve(&server, "apple", product_json("apple", "Apple", 1.25)).await;
    serve(&server, "orange", product_json("orange", "Orange", 0.99)).await;
    serve(&server, "pear", product_json("pear", "Pear", 1.1)).await;
    Mock::given(method("GET"))
        .and(path("/products/grapes.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = no_retry_client(&format!("{}/products", server.uri()));
    let loader = CatalogLoader::with_default_ids(Box::new(client));
    let catalog = CatalogHandle::new();

    let report = loader.load(&catalog).await;

    assert_eq!(report.loaded.len(), 3);
    assert_eq!(report.failed.len(), 1);
    let (id, err) = &report.failed[0];
    assert_eq!(id, &ProductId::new("grapes"));
    assert!(
        matches!(err, FetchError::Http { status: 500, .. }),
        "expected Http 500, got: {err:?}"
    );
    assert!(catalog.product(&ProductId::new("grapes")).is_none());
    assert!(!catalog.is_loading());
}

#[tokio::test]
async fn missing_required_field_is_a_parse_error() {
    let server = MockServer::start().await;
    serve(&server, "apple", json!({ "id": "apple", "name": "Apple" })).await;

    let client = no_retry_client(&format!("{}/products", server.uri()));
    let result = client.fetch_product(&ProductId::new("apple")).await;

    assert!(
        matches!(result, Err(FetchError::Deserialization(_))),
        "expected Deserialization, got: {result:?}"
    );
}

#[tokio::test]
async fn optional_fields_are_read_when_present() {
    let server = MockServer::start().await;
    let mut body = product_json("grapes", "Grapes", 3.5);
    body["inStock"] = json!(false);
    body["reviews"] = json!([
        { "author": "Sam", "comment": "Juicy.", "date": "2025-06-01T10:00:00.000Z" }
    ]);
    serve(&server, "grapes", body).await;

    let client = no_retry_client(&format!("{}/products", server.uri()));
    let grapes = client
        .fetch_product(&ProductId::new("grapes"))
        .await
        .expect("expected grapes to load");

    assert!(!grapes.in_stock);
    assert_eq!(grapes.reviews.len(), 1);
    assert_eq!(grapes.reviews[0].author, "Sam");
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/kiwi.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let policy = FetchPolicy::new(
        TimeoutConfig::from_millis(5000),
        RetryPolicy::new(3).with_backoff(BackoffStrategy::None),
    );
    let client = FetchClient::new(format!("{}/products", server.uri()), policy).unwrap();
    let result = client.fetch_product(&ProductId::new("kiwi")).await;

    assert!(matches!(result, Err(FetchError::Http { status: 404, .. })));
}

#[tokio::test]
async fn retries_after_503_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/pear.json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    serve(&server, "pear", product_json("pear", "Pear", 1.1)).await;

    let policy = FetchPolicy::new(
        TimeoutConfig::from_millis(5000),
        RetryPolicy::new(1).with_backoff(BackoffStrategy::None),
    );
    let client = FetchClient::new(format!("{}/products", server.uri()), policy).unwrap();
    let pear = client
        .fetch_product(&ProductId::new("pear"))
        .await
        .expect("expected Ok after 503 retry");

    assert_eq!(pear.name, "Pear");
    assert_eq!(pear.price.amount_cents, 110);
}

#[tokio::test]
async fn slow_response_loads_under_default_policy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/orange.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_json("orange", "Orange", 0.99))
                .set_delay(Duration::from_millis(600)),
        )
        .mount(&server)
        .await;

    let client =
        FetchClient::new(format!("{}/products", server.uri()), FetchPolicy::default()).unwrap();
    let loader = CatalogLoader::new(Box::new(client), vec![ProductId::new("orange")]);
    let catalog = CatalogHandle::new();

    let report = loader.load(&catalog).await;

    assert!(report.is_complete(), "unexpected failures: {:?}", report.failed);
    assert!(catalog.product(&ProductId::new("orange")).is_some());
}

#[tokio::test]
async fn configured_timeout_fails_slow_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/orange.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_json("orange", "Orange", 0.99))
                .set_delay(Duration::from_millis(2000)),
        )
        .mount(&server)
        .await;

    let policy = FetchPolicy::new(TimeoutConfig::from_millis(200), RetryPolicy::none());
    let client = FetchClient::new(format!("{}/products", server.uri()), policy).unwrap();
    let result = client.fetch_product(&ProductId::new("orange")).await;

    assert!(
        matches!(result, Err(FetchError::Timeout(_))),
        "expected Timeout, got: {result:?}"
    );
}
