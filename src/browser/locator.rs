//! Accessibility-style element queries
//!
//! Elements are located the way a user perceives them: a heading or button by
//! its accessible name, an input by its placeholder text, or any element by
//! its visible text. Queries run as generated JavaScript against the live
//! document, and visibility waits poll with a deadline instead of sleeping
//! for a fixed duration.

use crate::browser::PageHandle;
use crate::error::{Error, LocatorError, Result};
use chromiumoxide::element::Element;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Attribute used to hand a JS-located element over to CDP element lookup
const MARKER: &str = "data-verify-target";

/// Accessible roles the runner can query by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Heading elements (h1-h6 or role="heading")
    Heading,
    /// Button elements (button, role="button", submit inputs)
    Button,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Heading => write!(f, "heading"),
            Role::Button => write!(f, "button"),
        }
    }
}

/// A query for an element on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Match by role and accessible name
    Role {
        /// The accessible role
        role: Role,
        /// The accessible name (aria-label or visible label)
        name: String,
    },
    /// Match an input by its placeholder text
    Placeholder(String),
    /// Match the deepest element containing the given visible text
    Text(String),
}

impl Locator {
    /// Locate a heading by its accessible name
    pub fn heading<S: Into<String>>(name: S) -> Self {
        Locator::Role {
            role: Role::Heading,
            name: name.into(),
        }
    }

    /// Locate a button by its accessible name
    pub fn button<S: Into<String>>(name: S) -> Self {
        Locator::Role {
            role: Role::Button,
            name: name.into(),
        }
    }

    /// Locate an input by its placeholder text
    pub fn placeholder<S: Into<String>>(text: S) -> Self {
        Locator::Placeholder(text.into())
    }

    /// Locate an element by its visible text
    pub fn text<S: Into<String>>(text: S) -> Self {
        Locator::Text(text.into())
    }

    /// JS function expression that evaluates to the matched element or null
    fn finder_js(&self) -> String {
        match self {
            Locator::Role {
                role: Role::Heading,
                name,
            } => format!(
                r#"() => {{
                    const name = {name};
                    for (const el of document.querySelectorAll('h1, h2, h3, h4, h5, h6, [role="heading"]')) {{
                        const label = (el.getAttribute('aria-label') || el.textContent || '').trim();
                        if (label === name) return el;
                    }}
                    return null;
                }}"#,
                name = js_string(name)
            ),
            Locator::Role {
                role: Role::Button,
                name,
            } => format!(
                r#"() => {{
                    const name = {name};
                    for (const el of document.querySelectorAll('button, [role="button"], input[type="submit"], input[type="button"]')) {{
                        const label = (el.getAttribute('aria-label') || el.textContent.trim() || el.value || '').trim();
                        if (label === name) return el;
                    }}
                    return null;
                }}"#,
                name = js_string(name)
            ),
            Locator::Placeholder(text) => format!(
                r#"() => {{
                    const text = {text};
                    for (const el of document.querySelectorAll('input[placeholder], textarea[placeholder]')) {{
                        if (el.getAttribute('placeholder') === text) return el;
                    }}
                    return null;
                }}"#,
                text = js_string(text)
            ),
            Locator::Text(text) => format!(
                r#"() => {{
                    const text = {text};
                    const hits = Array.from(document.querySelectorAll('body *'))
                        .filter(el => (el.textContent || '').includes(text));
                    return hits.find(el => !hits.some(other => other !== el && el.contains(other))) || null;
                }}"#,
                text = js_string(text)
            ),
        }
    }

    /// Wait until a matching element is attached and visible
    ///
    /// Visible means the element has a computed style that renders it and a
    /// non-empty bounding box. Fails with a timeout naming the locator if the
    /// deadline expires, which is how copy drift in the target markup
    /// surfaces.
    #[instrument(skip(page))]
    pub async fn wait_until_visible(&self, page: &PageHandle, timeout_ms: u64) -> Result<()> {
        debug!("Waiting for {} to become visible", self);

        let script = format!(
            r#"
            new Promise((resolve, reject) => {{
                const find = {finder};
                const deadline = Date.now() + {timeout_ms};
                const visible = (el) => {{
                    if (!el) return false;
                    const style = window.getComputedStyle(el);
                    if (style.display === 'none' || style.visibility === 'hidden') return false;
                    const rect = el.getBoundingClientRect();
                    return rect.width > 0 && rect.height > 0;
                }};
                const check = () => {{
                    if (visible(find())) {{
                        resolve(true);
                    }} else if (Date.now() > deadline) {{
                        reject(new Error('Timeout waiting for element'));
                    }} else {{
                        requestAnimationFrame(check);
                    }}
                }};
                check();
            }})
            "#,
            finder = self.finder_js(),
            timeout_ms = timeout_ms
        );

        // The script rejects on its own deadline; the outer timeout only
        // covers a page that stops evaluating entirely.
        let timeout = Duration::from_millis(timeout_ms + 1000);
        tokio::time::timeout(timeout, page.page.evaluate(script))
            .await
            .map_err(|_| LocatorError::NotVisible {
                locator: self.to_string(),
                timeout_ms,
            })?
            .map_err(|_| LocatorError::NotVisible {
                locator: self.to_string(),
                timeout_ms,
            })?;

        debug!("{} is visible", self);
        Ok(())
    }

    /// Resolve the locator to a CDP element handle
    ///
    /// The element is tagged with a marker attribute so chromiumoxide can
    /// find it by CSS; the marker is removed again once the handle exists.
    async fn resolve(&self, page: &PageHandle) -> Result<Element> {
        let script = format!(
            "(() => {{ const el = ({finder})(); if (!el) return false; el.setAttribute('{marker}', ''); return true; }})()",
            finder = self.finder_js(),
            marker = MARKER
        );

        let found = page
            .page
            .evaluate(script)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .into_value::<bool>()
            .map_err(|e| Error::cdp(e.to_string()))?;

        if !found {
            return Err(LocatorError::NotFound(self.to_string()).into());
        }

        let element = page
            .page
            .find_element(format!("[{}]", MARKER))
            .await
            .map_err(|e| LocatorError::InteractionFailed {
                action: "resolve",
                locator: self.to_string(),
                reason: e.to_string(),
            })?;

        // Unmark so a later resolve cannot match this element again
        let _ = page
            .page
            .evaluate(format!(
                "document.querySelectorAll('[{marker}]').forEach(el => el.removeAttribute('{marker}'))",
                marker = MARKER
            ))
            .await;

        Ok(element)
    }

    /// Write a literal string into the located input element
    #[instrument(skip(page))]
    pub async fn fill(&self, page: &PageHandle, value: &str) -> Result<()> {
        debug!("Filling {}", self);

        let element = self.resolve(page).await?;

        element
            .click()
            .await
            .map_err(|e| LocatorError::InteractionFailed {
                action: "focus",
                locator: self.to_string(),
                reason: e.to_string(),
            })?;

        element
            .type_str(value)
            .await
            .map_err(|e| LocatorError::InteractionFailed {
                action: "fill",
                locator: self.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    /// Click the located element
    #[instrument(skip(page))]
    pub async fn click(&self, page: &PageHandle) -> Result<()> {
        debug!("Clicking {}", self);

        let element = self.resolve(page).await?;

        element
            .click()
            .await
            .map_err(|e| LocatorError::InteractionFailed {
                action: "click",
                locator: self.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Role { role, name } => write!(f, "{} \"{}\"", role, name),
            Locator::Placeholder(text) => write!(f, "placeholder \"{}\"", text),
            Locator::Text(text) => write!(f, "text \"{}\"", text),
        }
    }
}

/// Encode a Rust string as a JS string literal (JSON encoding is valid JS)
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display() {
        assert_eq!(
            Locator::heading("Division Report Tracker").to_string(),
            "heading \"Division Report Tracker\""
        );
        assert_eq!(Locator::button("Continue").to_string(), "button \"Continue\"");
        assert_eq!(
            Locator::placeholder("Email address").to_string(),
            "placeholder \"Email address\""
        );
        assert_eq!(Locator::text("Account not registered.").to_string(), "text \"Account not registered.\"");
    }

    #[test]
    fn test_locator_constructors() {
        assert_eq!(
            Locator::heading("Title"),
            Locator::Role {
                role: Role::Heading,
                name: "Title".to_string()
            }
        );
        assert_eq!(
            Locator::button("Go"),
            Locator::Role {
                role: Role::Button,
                name: "Go".to_string()
            }
        );
    }

    #[test]
    fn test_heading_finder_queries_heading_elements() {
        let js = Locator::heading("Division Report Tracker").finder_js();
        assert!(js.contains("h1, h2, h3, h4, h5, h6"));
        assert!(js.contains("\"Division Report Tracker\""));
    }

    #[test]
    fn test_button_finder_queries_button_elements() {
        let js = Locator::button("Continue").finder_js();
        assert!(js.contains("button"));
        assert!(js.contains("input[type=\"submit\"]"));
    }

    #[test]
    fn test_placeholder_finder_compares_attribute() {
        let js = Locator::placeholder("Email address").finder_js();
        assert!(js.contains("input[placeholder]"));
        assert!(js.contains("getAttribute('placeholder')"));
    }

    #[test]
    fn test_text_finder_picks_deepest_match() {
        let js = Locator::text("Account not registered.").finder_js();
        assert!(js.contains("body *"));
        assert!(js.contains("contains(other)"));
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_js_string_escapes_newlines() {
        assert_eq!(js_string("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn test_finder_js_with_quoted_name_stays_valid() {
        // A name containing quotes must not break out of the string literal
        let js = Locator::heading("He said \"hi\"").finder_js();
        assert!(js.contains("\\\"hi\\\""));
        assert!(!js.contains("= \"He said \"hi\"\""));
    }
}
