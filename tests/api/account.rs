use crate::common::spawn_app;
use claims::assert_ok;
use storefront_e2e::api::{response_body, verify_status_code};
use storefront_e2e::cleanup::delete_account_best_effort;
use storefront_e2e::test_data::UserRecord;

#[derive(serde::Deserialize)]
struct ApiMessage {
    message: String,
}

async fn message_of(response: reqwest::Response) -> String {
    let body: ApiMessage = response_body(response)
        .await
        .expect("Failed to parse the API message envelope.");
    body.message
}

#[tokio::test]
async fn created_account_round_trips_through_verify_and_delete() {
    // Arrange
    let app = spawn_app().await;
    let user = UserRecord::generate();

    // Act & Assert - create
    let response = assert_ok!(app.api.create_account(&user).await);
    assert_ok!(verify_status_code(&response, 200));
    assert_eq!(message_of(response).await, "User created!");

    // Act & Assert - the fresh credentials verify
    let response = assert_ok!(app.api.verify_login(&user.email, &user.password).await);
    assert_ok!(verify_status_code(&response, 200));
    assert_eq!(message_of(response).await, "User exists!");

    // Act & Assert - delete
    let response = assert_ok!(app.api.delete_account(&user.email, &user.password).await);
    assert_ok!(verify_status_code(&response, 200));

    // Act & Assert - deletion holds: the same credentials are now unknown
    let response = assert_ok!(app.api.verify_login(&user.email, &user.password).await);
    assert_ok!(verify_status_code(&response, 200));
    assert_eq!(message_of(response).await, "User not found!");
}

#[tokio::test]
async fn invalid_credentials_yield_200_with_user_not_found() {
    // Arrange
    let app = spawn_app().await;
    // Act
    let response = assert_ok!(
        app.api
            .verify_login("invalid@email.com", "wrongpassword")
            .await
    );
    // Assert - the endpoint answers 200 even for unknown users; only the
    // message distinguishes the outcome
    assert_ok!(verify_status_code(&response, 200));
    assert_eq!(message_of(response).await, "User not found!");
}

#[tokio::test]
async fn duplicate_account_creation_is_reported_in_the_message() {
    // Arrange
    let app = spawn_app().await;
    let user = UserRecord::generate();
    let response = assert_ok!(app.api.create_account(&user).await);
    assert_ok!(verify_status_code(&response, 200));

    // Act
    let response = assert_ok!(app.api.create_account(&user).await);

    // Assert
    assert_ok!(verify_status_code(&response, 200));
    assert_eq!(message_of(response).await, "Email already exists!");
}

#[tokio::test]
async fn cleanup_after_a_scenario_is_best_effort() {
    // Arrange
    let app = spawn_app().await;
    let user = UserRecord::generate();
    let response = assert_ok!(app.api.create_account(&user).await);
    assert_ok!(verify_status_code(&response, 200));

    // Act - first cleanup succeeds, the repeat finds nothing to delete
    let first = delete_account_best_effort(&app.api, &user.email, &user.password).await;
    let second = delete_account_best_effort(&app.api, &user.email, &user.password).await;

    // Assert - the repeat is reported, not escalated
    assert!(first.is_completed());
    assert!(!second.is_completed());
}
