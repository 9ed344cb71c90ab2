use regex::Regex;

/// Cleans a content block's serialized HTML before rendering.
///
/// Removes the two stray characters the source pages carry from their
/// encoding, and rewrites the relative image prefix so rendered image
/// links point back at the site.
pub fn clean_html(html: &str, root_url: &str) -> String {
    html.replace('Â', "")
        .replace('â', "")
        .replace("../img", &format!("{}img", root_url))
}

/// Replaces every img tag with markdown image syntax.
///
/// html2text's plain renderer keeps only an image's alt text and discards
/// its src, so the tag is turned into `![alt](src)` text first to carry
/// the URL through into the output file.
fn inline_image_links(html: &str) -> String {
    let img_tag = Regex::new(r"<img\b[^>]*>").unwrap();
    let src_attr = Regex::new(r#"src="([^"]*)""#).unwrap();
    let alt_attr = Regex::new(r#"alt="([^"]*)""#).unwrap();

    img_tag
        .replace_all(html, |caps: &regex::Captures| {
            let tag = &caps[0];
            let src = src_attr
                .captures(tag)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            let alt = alt_attr
                .captures(tag)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            format!("![{}]({})", alt, src)
        })
        .into_owned()
}

/// Renders a content block's HTML as plain text wrapped at `width` columns.
pub fn render(html: &str, root_url: &str, width: usize) -> String {
    let cleaned = clean_html(html, root_url);
    let prepared = inline_image_links(&cleaned);
    html2text::from_read(prepared.as_bytes(), width)
}
