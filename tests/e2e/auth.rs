use crate::common::launch_browser_harness;
use claims::assert_ok;
use storefront_e2e::api::verify_status_code;
use storefront_e2e::cleanup::delete_account_best_effort;
use storefront_e2e::pages::LoginResult;
use storefront_e2e::test_data::UserRecord;

#[tokio::test]
async fn api_created_user_can_log_in_via_ui() {
    // Arrange - create the test user through the API, not the UI
    let Some(harness) = launch_browser_harness().await else {
        return;
    };
    let user = UserRecord::generate();
    let response = assert_ok!(harness.app.api.create_account(&user).await);
    assert_ok!(verify_status_code(&response, 200));

    // Act
    let login = harness.login_page().await;
    login.goto().await.expect("Failed to open the login page.");
    login
        .verify_login_form_visible()
        .await
        .expect("Login form should be visible.");
    let outcome = login
        .login(&user.email, &user.password)
        .await
        .expect("Login submission failed.");

    // Assert
    let LoginResult::LoggedIn(home) = outcome else {
        panic!("valid credentials were rejected");
    };
    home.verify_user_logged_in(&user.firstname)
        .await
        .expect("Logged-in banner and account links should be visible.");

    // Cleanup - best effort, never escalated
    let cleanup = delete_account_best_effort(&harness.app.api, &user.email, &user.password).await;
    assert!(cleanup.is_completed());
    harness.close().await;
}

#[tokio::test]
async fn logged_in_user_sees_more_than_thirty_products() {
    // Arrange
    let Some(harness) = launch_browser_harness().await else {
        return;
    };
    let user = UserRecord::generate();
    let response = assert_ok!(harness.app.api.create_account(&user).await);
    assert_ok!(verify_status_code(&response, 200));

    let login = harness.login_page().await;
    login.goto().await.expect("Failed to open the login page.");
    let outcome = login
        .login(&user.email, &user.password)
        .await
        .expect("Login submission failed.");
    let LoginResult::LoggedIn(home) = outcome else {
        panic!("valid credentials were rejected");
    };

    // Act - follow the nav link rather than navigating directly
    let products = home
        .navigate_to_products()
        .await
        .expect("Failed to reach the products page.");

    // Assert
    products
        .verify_page_loaded()
        .await
        .expect("Products page should be loaded.");
    products
        .verify_products_displayed()
        .await
        .expect("Product cards should be displayed.");
    let count = products
        .product_count()
        .await
        .expect("Failed to count products.");
    assert!(count > 30, "expected more than 30 products, got {count}");

    delete_account_best_effort(&harness.app.api, &user.email, &user.password).await;
    harness.close().await;
}

#[tokio::test]
async fn invalid_ui_login_shows_the_exact_error_text() {
    // Arrange
    let Some(harness) = launch_browser_harness().await else {
        return;
    };
    let login = harness.login_page().await;
    login.goto().await.expect("Failed to open the login page.");
    login
        .verify_login_form_visible()
        .await
        .expect("Login form should be visible.");

    // Act
    login
        .fill_login_credentials("invalid@test.com", "wrongpassword")
        .await
        .expect("Failed to fill the login form.");
    let submitted_login = match login.submit_login().await.expect("Login submission failed.") {
        LoginResult::Rejected(login) => login,
        LoginResult::LoggedIn(_) => panic!("invalid credentials were accepted"),
    };

    // Assert
    submitted_login
        .verify_invalid_credentials_error()
        .await
        .expect("The exact incorrect-credentials message should be shown.");
    harness.close().await;
}

#[tokio::test]
async fn signup_form_is_visible_on_the_login_page() {
    // Arrange
    let Some(harness) = launch_browser_harness().await else {
        return;
    };
    let login = harness.login_page().await;
    // Act
    login.goto().await.expect("Failed to open the login page.");
    // Assert
    login
        .verify_signup_form_visible()
        .await
        .expect("Signup form should be visible.");
    harness.close().await;
}
