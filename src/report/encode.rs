//! Text encoding for values placed into the report.

use serde::Serialize;

use crate::error::Result;

/// Escape text for use inside HTML element content or a quoted attribute.
///
/// `&` is replaced first so the entities introduced by the later
/// replacements are not escaped a second time.
///
/// # Examples
///
/// ```
/// use play_history::report::html_encode;
///
/// assert_eq!(html_encode("Simon & Garfunkel"), "Simon &amp; Garfunkel");
/// assert_eq!(html_encode("plain"), "plain");
/// ```
#[must_use]
pub fn html_encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Like [`html_encode`], with `None` encoding to an empty string.
#[must_use]
pub fn html_encode_opt(text: Option<&str>) -> String {
    text.map(html_encode).unwrap_or_default()
}

/// Serialize a value as JSON that can sit inside an inline `<script>`.
///
/// `<`, `>` and `&` are written as unicode escapes, so a label such as
/// `</script>` cannot end the script block early.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
