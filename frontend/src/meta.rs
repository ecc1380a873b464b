use wasm_bindgen::JsValue;
use web_sys::{window, Document};

use crate::config;

/// Writes the declared site metadata into `<head>`. Tags that already exist
/// (matched by `name` or `property`) get their content replaced.
pub fn apply_site_metadata() -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    document.set_title(config::SITE_TITLE);

    let named = [
        ("description", config::SITE_DESCRIPTION),
        ("keywords", config::SITE_KEYWORDS),
        ("author", config::SITE_AUTHOR),
        ("viewport", config::SITE_VIEWPORT),
        ("robots", config::SITE_ROBOTS),
    ];
    for (name, content) in named {
        upsert_meta(&document, "name", name, content)?;
    }

    let open_graph = [
        ("og:title", config::OG_TITLE),
        ("og:description", config::OG_DESCRIPTION),
        ("og:type", config::OG_TYPE),
        ("og:locale", config::OG_LOCALE),
    ];
    for (property, content) in open_graph {
        upsert_meta(&document, "property", property, content)?;
    }

    Ok(())
}

fn upsert_meta(document: &Document, key: &str, value: &str, content: &str) -> Result<(), JsValue> {
    let selector = format!("meta[{}=\"{}\"]", key, value);
    let meta = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute(key, value)?;
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
            head.append_child(&created)?;
            created
        }
    };
    meta.set_attribute("content", content)
}
