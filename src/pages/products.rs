use super::{PageError, count, expect_visible, fill, is_visible};
use crate::browser::Locator;
use chromiumoxide::page::Page;

const PRODUCT_ITEM_SELECTOR: &str = ".productinfo";

pub struct ProductsPage {
    page: Page,
    base_url: String,
}

impl ProductsPage {
    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into(),
        }
    }

    // Locators
    fn products_heading(&self) -> Locator {
        Locator::Heading("All Products")
    }

    fn products_list(&self) -> Locator {
        Locator::Css(".features_items")
    }

    fn product_items(&self) -> Locator {
        Locator::Css(PRODUCT_ITEM_SELECTOR)
    }

    fn search_input(&self) -> Locator {
        Locator::Css("#search_product")
    }

    fn search_button(&self) -> Locator {
        Locator::Css("#submit_search")
    }

    // Actions
    pub async fn goto(&self) -> Result<(), PageError> {
        self.page
            .goto(format!("{}/products", self.base_url))
            .await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    pub async fn search_product(&self, product_name: &str) -> Result<(), PageError> {
        fill(&self.page, self.search_input(), product_name).await?;
        super::click(&self.page, self.search_button()).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    pub async fn product_count(&self) -> Result<u32, PageError> {
        count(&self.page, PRODUCT_ITEM_SELECTOR).await
    }

    // Verifications
    pub async fn verify_page_loaded(&self) -> Result<(), PageError> {
        expect_visible(&self.page, self.products_heading()).await?;
        expect_visible(&self.page, self.products_list()).await
    }

    pub async fn verify_products_displayed(&self) -> Result<(), PageError> {
        if !is_visible(&self.page, self.product_items()).await? {
            return Err(PageError::NotVisible {
                locator: self.product_items().describe(),
            });
        }
        let count = self.product_count().await?;
        if count == 0 {
            return Err(PageError::MissingText {
                expected: "at least one product card".to_string(),
            });
        }
        Ok(())
    }
}
