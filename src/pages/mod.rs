mod home;
mod login;
mod products;

pub use home::HomePage;
pub use login::{LoginPage, LoginResult};
pub use products::ProductsPage;

use crate::browser::Locator;
use chromiumoxide::page::Page;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("failed to decode a value returned by the page")]
    Decode(#[from] serde_json::Error),
    #[error("element not found: {locator}")]
    ElementNotFound { locator: String },
    #[error("expected {locator} to be visible")]
    NotVisible { locator: String },
    #[error("page title {actual:?} does not contain {expected:?}")]
    TitleMismatch { expected: String, actual: String },
    #[error("expected text {expected:?} on the page")]
    MissingText { expected: String },
}

/// Resolve the locator and report whether the element is rendered.
pub(crate) async fn is_visible(page: &Page, locator: Locator) -> Result<bool, PageError> {
    let expression = format!(
        "(() => {{ const el = {}; if (!el) return false; \
         const style = window.getComputedStyle(el); \
         return style.display !== 'none' && style.visibility !== 'hidden' \
            && el.getClientRects().length > 0; }})()",
        locator.js_query()
    );
    Ok(page.evaluate(expression).await?.into_value()?)
}

pub(crate) async fn expect_visible(page: &Page, locator: Locator) -> Result<(), PageError> {
    if is_visible(page, locator).await? {
        Ok(())
    } else {
        Err(PageError::NotVisible {
            locator: locator.describe(),
        })
    }
}

pub(crate) async fn click(page: &Page, locator: Locator) -> Result<(), PageError> {
    match locator {
        Locator::Css(selector) => {
            page.find_element(selector)
                .await
                .map_err(|_| PageError::ElementNotFound {
                    locator: locator.describe(),
                })?
                .click()
                .await?;
        }
        _ => {
            let expression = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                locator.js_query()
            );
            let clicked: bool = page.evaluate(expression).await?.into_value()?;
            if !clicked {
                return Err(PageError::ElementNotFound {
                    locator: locator.describe(),
                });
            }
        }
    }
    Ok(())
}

/// Type into an input resolved by a CSS locator.
pub(crate) async fn fill(page: &Page, locator: Locator, value: &str) -> Result<(), PageError> {
    let Locator::Css(selector) = locator else {
        return Err(PageError::ElementNotFound {
            locator: format!("{} (fill needs a css locator)", locator.describe()),
        });
    };
    let element = page
        .find_element(selector)
        .await
        .map_err(|_| PageError::ElementNotFound {
            locator: locator.describe(),
        })?;
    element.focus().await?;
    element.type_str(value).await?;
    Ok(())
}

pub(crate) async fn count(page: &Page, selector: &str) -> Result<u32, PageError> {
    let expression = format!(
        "document.querySelectorAll({}).length",
        serde_json::Value::String(selector.to_string())
    );
    Ok(page.evaluate(expression).await?.into_value()?)
}

pub(crate) async fn has_text(page: &Page, text: &str) -> Result<bool, PageError> {
    let expression = format!(
        "document.body.innerText.includes({})",
        serde_json::Value::String(text.to_string())
    );
    Ok(page.evaluate(expression).await?.into_value()?)
}

pub(crate) async fn expect_text(page: &Page, text: &str) -> Result<(), PageError> {
    if has_text(page, text).await? {
        Ok(())
    } else {
        Err(PageError::MissingText {
            expected: text.to_string(),
        })
    }
}
