use crate::helpers::spawn_app;

#[tokio::test]
async fn the_privacy_policy_is_served() {
    let app = spawn_app().await;

    let response = app.get("/privacy").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("Privacy Policy"));
}

#[tokio::test]
async fn pages_cannot_be_posted_to() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(&format!("{}/privacy", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    assert!(!response.text().await.unwrap().contains("Privacy Policy"));
}

#[tokio::test]
async fn unknown_paths_went_for_a_long_walk() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec!["/admin", "/privacy/", "/privacy/policy", "/subscriptions"];

    for path in test_cases {
        // Act
        let response = app.get(path).await;

        // Assert
        assert_eq!(
            404,
            response.status().as_u16(),
            "The server did not answer 404 Not Found for {}.",
            path
        );
        assert!(response
            .text()
            .await
            .unwrap()
            .contains("404 page went for a long walk"));
    }
}
