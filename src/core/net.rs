/// Read the response body as text.
/// With the `debug-dumps` feature, a pretty-printed copy is written via `core::dump`.
pub(crate) async fn get_text(resp: reqwest::Response, _key: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "debug-dumps")]
    crate::core::dump::dump_body(_key, &text);

    Ok(text)
}
