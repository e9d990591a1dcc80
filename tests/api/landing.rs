use crate::helpers::{assert_no_issues, spawn_app};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn the_landing_page_shows_the_signup_form() {
    // Arrange
    let app = spawn_app().await;
    app.mount_response_count(41).await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<form method="post" action="/">"#));
    assert!(html_page.contains("A social network,"));
    assert!(html_page.contains("Vouch with 41 others"));
    assert!(html_page.contains(r#"href="/privacy""#));
    assert_no_issues(&html_page);
}

#[tokio::test]
async fn a_single_response_reads_as_a_plain_vouch() {
    let app = spawn_app().await;
    app.mount_response_count(1).await;

    let html_page = app.get_landing_html().await;

    assert!(html_page.contains("I'll vouch for that"));
}

#[tokio::test]
async fn a_failing_count_reads_as_zero_without_an_error() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/responses/count"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let html_page = app.get_landing_html().await;

    // Assert
    assert!(html_page.contains("I'll vouch for that"));
    assert!(!html_page.contains(r#"class="spinner""#));
    assert!(!html_page.contains(" disabled"));
    assert_no_issues(&html_page);
}

#[tokio::test]
async fn an_unknown_count_reads_as_zero() {
    let app = spawn_app().await;
    Mock::given(path("/responses/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "count": null })))
        .mount(&app.backend_server)
        .await;

    let html_page = app.get_landing_html().await;

    assert!(html_page.contains("I'll vouch for that"));
}

#[tokio::test]
async fn query_strings_do_not_change_the_page() {
    let app = spawn_app().await;
    app.mount_response_count(7).await;

    let response = app.get("/?ref=newsletter").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("Vouch with 7 others"));
}
