/// A deferred reference to a UI element: a semantic name mapped to a selector
/// strategy. Locators are re-resolved in the DOM on every use, never cached,
/// so they tolerate re-renders between interactions.
#[derive(Clone, Copy, Debug)]
pub enum Locator {
    /// Raw CSS selector.
    Css(&'static str),
    /// Anchor matched by its exact accessible name.
    Link(&'static str),
    /// Heading (h1-h3) whose text contains the fragment, case-insensitive.
    Heading(&'static str),
}

impl Locator {
    /// JS expression evaluating to the first matching element, or null.
    pub(crate) fn js_query(&self) -> String {
        match self {
            Locator::Css(selector) => {
                format!("document.querySelector({})", js_string(selector))
            }
            Locator::Link(name) => format!(
                "([...document.querySelectorAll('a')].find(a => a.textContent.trim() === {}) ?? null)",
                js_string(name)
            ),
            Locator::Heading(fragment) => format!(
                "([...document.querySelectorAll('h1, h2, h3')].find(h => h.textContent.toLowerCase().includes({})) ?? null)",
                js_string(&fragment.to_lowercase())
            ),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Locator::Css(selector) => format!("css `{selector}`"),
            Locator::Link(name) => format!("link `{name}`"),
            Locator::Heading(fragment) => format!("heading `{fragment}`"),
        }
    }
}

/// Quote a Rust string as a JS string literal.
fn js_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}
