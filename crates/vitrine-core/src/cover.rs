//! Cover-image extraction from rendered documents.

use std::cell::RefCell;

use lol_html::{HtmlRewriter, Settings, element};

/// Scans a document buffer for its canonical preview image.
///
/// Looks for a `<meta property="og:image" content="…">` element and returns
/// the `content` attribute of the first one found. A missing cover image is
/// an expected, common case, so the not-found signal is `None`, never an
/// error; the scan also never fails on malformed markup or broken text
/// encoding.
///
/// This path is independent of the archive pipeline: it runs directly on a
/// raw buffer without any extraction.
///
/// # Examples
///
/// ```
/// use vitrine_core::cover_image_path;
///
/// let html = br#"<html><head><meta property="og:image" content="cover.png"></head></html>"#;
/// assert_eq!(cover_image_path(html), Some("cover.png".to_string()));
///
/// assert_eq!(cover_image_path(b"<html><head></head></html>"), None);
/// ```
#[must_use]
pub fn cover_image_path(buffer: &[u8]) -> Option<String> {
    let html = String::from_utf8_lossy(buffer);
    let cover = RefCell::new(None);

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![element!(r#"meta[property="og:image"]"#, |el| {
                let mut slot = cover.borrow_mut();
                if slot.is_none() {
                    *slot = el.get_attribute("content");
                }
                Ok(())
            })],
            ..Settings::default()
        },
        |_: &[u8]| {},
    );

    rewriter.write(html.as_bytes()).ok()?;
    rewriter.end().ok()?;

    cover.into_inner()
}
