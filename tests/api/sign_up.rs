use crate::helpers::{assert_no_issues, spawn_app};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn invalid_form_data_is_reported_without_calling_the_remote_service() {
    // Arrange
    let app = spawn_app().await;
    app.mount_response_count(3).await;
    Mock::given(path("/responses"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        // We assert that no signup is recorded!
        .expect(0)
        .mount(&app.backend_server)
        .await;
    let test_cases = vec![
        (
            "name=&email=",
            vec!["Who are you, though?", "You'll need an email to join the list."],
            "empty name and email",
        ),
        (
            "",
            vec!["Who are you, though?", "You'll need an email to join the list."],
            "missing name and email",
        ),
        (
            "name=%20%20&email=ursula%40example.com",
            vec!["Who are you, though?"],
            "blank name",
        ),
        (
            "name=Ursula&email=definitely-not-an-email",
            vec!["That email address doesn't look quite right."],
            "invalid email",
        ),
    ];

    for (body, messages, description) in test_cases {
        // Act
        let html_page = app.post_sign_up_html(body).await;

        // Assert
        for message in messages {
            assert!(
                html_page.contains(message),
                "The page did not say `{}` when the payload had {}.",
                message,
                description
            );
        }
        assert!(html_page.contains(r#"<form method="post" action="/">"#));
    }
}

#[tokio::test]
async fn an_accepted_signup_is_thanked() {
    // Arrange
    let app = spawn_app().await;
    app.mount_response_count(3).await;
    Mock::given(path("/responses"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })),
        )
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let html_page = app
        .post_sign_up_html("name=le%20guin&email=ursula_le_guin%40gmail.com")
        .await;

    // Assert
    assert!(html_page.contains("Thanks for joining in!"));
    assert!(!html_page.contains("<form"));
}

#[tokio::test]
async fn a_taken_email_is_reported() {
    // Arrange
    let app = spawn_app().await;
    app.mount_response_count(3).await;
    Mock::given(path("/responses"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "issues": { "email": "not-unique" }
        })))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let html_page = app
        .post_sign_up_html("name=le%20guin&email=ursula_le_guin%40gmail.com")
        .await;

    // Assert
    assert!(html_page.contains("This email has already been used."));
    // What the visitor typed is kept so they can fix it.
    assert!(html_page.contains(r#"value="ursula_le_guin@gmail.com""#));
    assert!(html_page.contains(r#"value="le guin""#));
}

#[tokio::test]
async fn a_rejection_without_details_is_a_generic_error() {
    let app = spawn_app().await;
    app.mount_response_count(3).await;
    Mock::given(path("/responses"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "error" })),
        )
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let html_page = app
        .post_sign_up_html("name=le%20guin&email=ursula_le_guin%40gmail.com")
        .await;

    assert!(html_page.contains("Something went wrong"));
}

#[tokio::test]
async fn an_unreachable_remote_service_is_a_generic_error() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend_server)
        .await;

    // Act
    let html_page = app
        .post_sign_up_html("name=le%20guin&email=ursula_le_guin%40gmail.com")
        .await;

    // Assert
    assert!(html_page.contains("Something went wrong"));
    assert!(!html_page.contains("This email has already been used."));
    // The form can be sent again straight away.
    assert!(!html_page.contains(" disabled"));
}

#[tokio::test]
async fn unknown_issue_codes_are_not_displayed() {
    let app = spawn_app().await;
    app.mount_response_count(3).await;
    Mock::given(path("/responses"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "issues": { "email": "banned-domain", "shoe_size": "required" }
        })))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let html_page = app
        .post_sign_up_html("name=le%20guin&email=ursula_le_guin%40gmail.com")
        .await;

    assert_no_issues(&html_page);
    assert!(html_page.contains(r#"<form method="post" action="/">"#));
}

#[tokio::test]
async fn what_the_visitor_typed_is_escaped() {
    let app = spawn_app().await;
    app.mount_response_count(3).await;

    let html_page = app
        .post_sign_up_html("name=%3Cscript%3E&email=nope")
        .await;

    assert!(!html_page.contains("<script>"));
    assert!(html_page.contains("&lt;script&gt;"));
}
