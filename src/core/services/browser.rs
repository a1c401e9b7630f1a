use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::core::config::Theme;
use crate::core::error::{AppError, Result};

fn browser_err(context: &str, e: JsValue) -> AppError {
    AppError::Browser(format!("{}: {:?}", context, e))
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Browser("no document".to_string()))
}

/// Offers `contents` to the user as a JSON file download.
pub fn download_json(file_name: &str, contents: &str) -> Result<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| browser_err("create blob", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_err("create object url", e))?;

    let anchor = document()?
        .create_element("a")
        .map_err(|e| browser_err("create anchor", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("anchor cast".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| browser_err("revoke object url", e))
}

/// Reads a user-picked file as text.
pub async fn read_file_text(file: web_sys::File) -> Result<String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| browser_err("read file", e))?;
    text.as_string()
        .ok_or_else(|| AppError::Browser("file content is not text".to_string()))
}

/// Native confirmation prompt. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Puts the theme on `<body data-theme=...>` where the stylesheet picks it up.
pub fn apply_theme(theme: Theme) -> Result<()> {
    let body = document()?
        .body()
        .ok_or_else(|| AppError::Browser("no body".to_string()))?;
    body.set_attribute("data-theme", theme.as_str())
        .map_err(|e| browser_err("set theme", e))
}

/// Non-empty text of every `<span>` under `element`, in document order.
pub fn span_texts(element: &web_sys::Element) -> Vec<String> {
    let Ok(nodes) = element.query_selector_all("span") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}
