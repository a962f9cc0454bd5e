use bella_common::Asset;
use wasm_bindgen::JsValue;

/// Directory the static host serves images from
pub const ASSET_BASE: &str = "/assets";

/// URL of a bundled image
pub fn asset_url(asset: Asset) -> String {
    format!("{}/{}", ASSET_BASE, asset.file_name())
}

/// Smoothly scroll the window to the bottom of the page
pub fn scroll_to_bottom() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let height = window
        .document()
        .and_then(|document| document.body())
        .map(|body| body.scroll_height())
        .unwrap_or_default();

    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(height));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Best-effort text for an error thrown by a browser API
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url(Asset::Logo), "/assets/logo.png");
        assert_eq!(asset_url(Asset::Pasta), "/assets/pasta.avif");
        assert_eq!(asset_url(Asset::Lasana), "/assets/lasana.jpg");
    }
}
