use super::{PageError, expect_text, expect_visible, is_visible};
use crate::browser::Locator;
use crate::pages::{LoginPage, ProductsPage};
use chromiumoxide::page::Page;

const EXPECTED_TITLE: &str = "Automation Exercise";

pub struct HomePage {
    page: Page,
    base_url: String,
}

impl HomePage {
    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into(),
        }
    }

    // Locators
    fn products_link(&self) -> Locator {
        Locator::Link("Products")
    }

    fn cart_link(&self) -> Locator {
        Locator::Link("Cart")
    }

    fn signup_login_link(&self) -> Locator {
        Locator::Link("Signup / Login")
    }

    fn features_items_heading(&self) -> Locator {
        Locator::Heading("Features Items")
    }

    fn logout_link(&self) -> Locator {
        Locator::Link("Logout")
    }

    fn delete_account_link(&self) -> Locator {
        Locator::Link("Delete Account")
    }

    // Actions
    pub async fn goto(&self) -> Result<(), PageError> {
        self.page.goto(format!("{}/", self.base_url)).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    pub async fn navigate_to_products(self) -> Result<ProductsPage, PageError> {
        super::click(&self.page, self.products_link()).await?;
        self.page.wait_for_navigation().await?;
        Ok(ProductsPage::new(self.page, self.base_url))
    }

    pub async fn navigate_to_signup_login(self) -> Result<LoginPage, PageError> {
        super::click(&self.page, self.signup_login_link()).await?;
        self.page.wait_for_navigation().await?;
        Ok(LoginPage::new(self.page, self.base_url))
    }

    // Verifications
    pub async fn verify_page_title(&self) -> Result<(), PageError> {
        let actual = self.page.get_title().await?.unwrap_or_default();
        if actual.contains(EXPECTED_TITLE) {
            Ok(())
        } else {
            Err(PageError::TitleMismatch {
                expected: EXPECTED_TITLE.to_string(),
                actual,
            })
        }
    }

    pub async fn verify_navigation_visible(&self) -> Result<(), PageError> {
        expect_visible(&self.page, self.products_link()).await?;
        expect_visible(&self.page, self.cart_link()).await?;
        expect_visible(&self.page, self.signup_login_link()).await
    }

    pub async fn verify_featured_items_visible(&self) -> Result<(), PageError> {
        expect_visible(&self.page, self.features_items_heading()).await
    }

    /// The post-login banner plus both account links must be present.
    pub async fn verify_user_logged_in(&self, firstname: &str) -> Result<(), PageError> {
        expect_text(&self.page, &format!("Logged in as {firstname}")).await?;
        expect_visible(&self.page, self.logout_link()).await?;
        expect_visible(&self.page, self.delete_account_link()).await
    }

    /// Query form of the logged-in check, for conditional logic.
    pub async fn is_logged_in(&self) -> Result<bool, PageError> {
        is_visible(&self.page, self.logout_link()).await
    }
}
