use super::{PageError, expect_text, expect_visible, fill, has_text};
use crate::browser::Locator;
use crate::pages::HomePage;
use chromiumoxide::page::Page;

pub const INCORRECT_CREDENTIALS_TEXT: &str = "Your email or password is incorrect!";

/// Where a login submission landed. Valid credentials move the session to the
/// home page; invalid ones stay on the login page with an error shown.
pub enum LoginResult {
    LoggedIn(HomePage),
    Rejected(LoginPage),
}

pub struct LoginPage {
    page: Page,
    base_url: String,
}

impl LoginPage {
    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into(),
        }
    }

    // Login form locators
    fn login_email_input(&self) -> Locator {
        Locator::Css("[data-qa=\"login-email\"]")
    }

    fn login_password_input(&self) -> Locator {
        Locator::Css("[data-qa=\"login-password\"]")
    }

    fn login_button(&self) -> Locator {
        Locator::Css("[data-qa=\"login-button\"]")
    }

    // Signup form locators
    fn signup_name_input(&self) -> Locator {
        Locator::Css("[data-qa=\"signup-name\"]")
    }

    fn signup_email_input(&self) -> Locator {
        Locator::Css("[data-qa=\"signup-email\"]")
    }

    fn signup_button(&self) -> Locator {
        Locator::Css("[data-qa=\"signup-button\"]")
    }

    // Headings
    fn login_heading(&self) -> Locator {
        Locator::Heading("Login to your account")
    }

    fn signup_heading(&self) -> Locator {
        Locator::Heading("New User Signup!")
    }

    // Actions - Login
    pub async fn goto(&self) -> Result<(), PageError> {
        self.page.goto(format!("{}/login", self.base_url)).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    pub async fn fill_login_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), PageError> {
        fill(&self.page, self.login_email_input(), email).await?;
        fill(&self.page, self.login_password_input(), password).await
    }

    /// Submit the login form and report which screen the session landed on.
    pub async fn submit_login(self) -> Result<LoginResult, PageError> {
        super::click(&self.page, self.login_button()).await?;
        self.page.wait_for_navigation().await?;
        if has_text(&self.page, INCORRECT_CREDENTIALS_TEXT).await? {
            Ok(LoginResult::Rejected(self))
        } else {
            let page = self.page.clone();
            Ok(LoginResult::LoggedIn(HomePage::new(page, self.base_url)))
        }
    }

    pub async fn login(self, email: &str, password: &str) -> Result<LoginResult, PageError> {
        self.fill_login_credentials(email, password).await?;
        self.submit_login().await
    }

    // Actions - Signup
    pub async fn fill_signup_info(&self, name: &str, email: &str) -> Result<(), PageError> {
        fill(&self.page, self.signup_name_input(), name).await?;
        fill(&self.page, self.signup_email_input(), email).await
    }

    pub async fn submit_signup(&self) -> Result<(), PageError> {
        super::click(&self.page, self.signup_button()).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    // Verifications
    pub async fn verify_login_form_visible(&self) -> Result<(), PageError> {
        expect_visible(&self.page, self.login_heading()).await?;
        expect_visible(&self.page, self.login_email_input()).await?;
        expect_visible(&self.page, self.login_password_input()).await
    }

    pub async fn verify_signup_form_visible(&self) -> Result<(), PageError> {
        expect_visible(&self.page, self.signup_heading()).await?;
        expect_visible(&self.page, self.signup_name_input()).await?;
        expect_visible(&self.page, self.signup_email_input()).await
    }

    pub async fn verify_invalid_credentials_error(&self) -> Result<(), PageError> {
        expect_text(&self.page, INCORRECT_CREDENTIALS_TEXT).await
    }
}
