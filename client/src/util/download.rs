//! Offer generated content to the visitor as a file download.
//!
//! Blob + object URL + temporary anchor; the object URL is revoked once the
//! click has been dispatched.

/// Trigger a browser download of `body`.
///
/// # Errors
///
/// Returns a description of the failing DOM call. On the server this
/// always fails: there is no browser to download into.
#[cfg(feature = "hydrate")]
pub fn offer_download(file_name: &str, content_type: &str, body: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let js_err = |e: JsValue| format!("{e:?}");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let page_body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    page_body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    let _ = page_body.remove_child(&anchor);
    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}

/// Server-side stand-in for the browser download.
///
/// # Errors
///
/// Always; there is no document to attach the anchor to.
#[cfg(not(feature = "hydrate"))]
pub fn offer_download(file_name: &str, content_type: &str, body: &str) -> Result<(), String> {
    let _ = (content_type, body);
    Err(format!("cannot download {file_name} outside the browser"))
}
