//! Clipboard writes for the share button.

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns a displayable reason when the browser refuses the write (no
/// permission, insecure context) or when running outside a browser.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| e.as_string().unwrap_or_else(|| "clipboard write was rejected".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard requires a browser".to_owned())
    }
}
