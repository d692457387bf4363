use web_sys::{Document, Element};
use yew::prelude::*;
use webcraft_shared::content::{SiteMetadata, SITE_METADATA};

use crate::browser::document;

/// Writes the page title and the description/keywords/open-graph tags into `<head>`.
/// `page` is `None` for the landing page.
#[hook]
pub fn use_document_metadata(page: Option<&'static str>) {
    use_effect_with(page, |page| {
        if let Some(document) = document() {
            apply(&document, &SITE_METADATA, *page);
        }
        || ()
    });
}

fn apply(document: &Document, meta: &SiteMetadata, page: Option<&str>) {
    let title = meta.page_title(page);
    document.set_title(&title);

    set_meta(document, "name", "description", meta.description);
    set_meta(document, "name", "keywords", meta.keywords);
    set_meta(document, "name", "author", meta.author);
    set_meta(document, "property", "og:title", page.map_or(meta.og_title, |_| title.as_str()));
    set_meta(document, "property", "og:description", meta.og_description);
    set_meta(document, "property", "og:type", meta.og_type);
}

fn set_meta(document: &Document, attribute: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    let element = match document.query_selector(&selector) {
        Ok(Some(element)) => Some(element),
        _ => create_meta(document, attribute, key),
    };
    match element {
        Some(element) => {
            if element.set_attribute("content", content).is_err() {
                log::warn!("could not set content of meta {}", key);
            }
        }
        None => log::warn!("could not create meta {}", key),
    }
}

fn create_meta(document: &Document, attribute: &str, key: &str) -> Option<Element> {
    let element = document.create_element("meta").ok()?;
    element.set_attribute(attribute, key).ok()?;
    document.head()?.append_child(&element).ok()?;
    Some(element)
}
