use scraper::{Html, Selector};
use std::error::Error;

/// Collects absolute page links from the root document.
///
/// Anchors are matched on their href prefix and kept in document order.
/// An href that appears twice yields two entries; the link list carries no
/// uniqueness guarantee. Each absolute URL is built by stripping the
/// leading `./` from the href and concatenating with the root URL.
pub fn collect_page_links(
    html: &str,
    root_url: &str,
    prefix: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let doc = Html::parse_document(html);

    let selector_str = format!("a[href^=\"{}\"]", prefix);
    let link_selector =
        Selector::parse(&selector_str).map_err(|e| format!("invalid link selector: {}", e))?;

    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|href| format!("{}{}", root_url, href.get(2..).unwrap_or_default()))
        .collect::<Vec<String>>();

    ::log::debug!("Link collector found {} page links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    Ok(links)
}

/// Returns the serialized HTML of the first element with the given class.
///
/// Zero matches is a hard failure; the caller aborts the run rather than
/// skipping the page.
pub fn select_content_block(html: &str, class: &str) -> Result<String, Box<dyn Error>> {
    let doc = Html::parse_document(html);

    let selector_str = format!(".{}", class);
    let content_selector =
        Selector::parse(&selector_str).map_err(|e| format!("invalid content selector: {}", e))?;

    match doc.select(&content_selector).next() {
        Some(element) => Ok(element.html()),
        None => Err(format!("no element with class {:?} in page", class).into()),
    }
}
