use dioxus::document::eval;

pub(super) fn write_clipboard_script(text: &str) -> String {
    format!(
        r"try {{
            await navigator.clipboard.writeText({text:?});
            return true;
        }} catch (_) {{
            return false;
        }}"
    )
}

/// Returns `true` only when the webview confirmed the write.
pub(super) async fn copy_to_clipboard(text: &str) -> bool {
    match eval(&write_clipboard_script(text)).join::<bool>().await {
        Ok(copied) => copied,
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write unavailable");
            false
        }
    }
}
