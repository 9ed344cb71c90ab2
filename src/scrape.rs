use crate::config::ScrapeConfig;
use crate::fetch;
use crate::output;
use crate::parsers::{html, text};
use std::error::Error;
use url::Url;

/// Outcome of a completed scrape run
#[derive(Debug, Clone, Copy)]
pub struct ScrapeSummary {
    /// Number of pages fetched, rendered and appended
    pub pages_written: usize,
}

/// Runs the whole pipeline.
///
/// Fetches the root page, collects the page links, then fetches, renders
/// and appends each linked page in document order. The link list is built
/// once and never mutated. The first failure of any step aborts the run;
/// pages already appended stay in the output file.
pub async fn run(config: &ScrapeConfig) -> Result<ScrapeSummary, Box<dyn Error>> {
    // Reject a malformed root URL before any request goes out
    Url::parse(&config.root_url)?;

    let client = fetch::build_client()?;

    ::log::info!("Fetching root page: {}", config.root_url);
    let root_html = fetch::get_text(&client, &config.root_url).await?;

    let links = html::collect_page_links(&root_html, &config.root_url, &config.link_prefix)?;
    ::log::info!("Collected {} page links", links.len());

    let mut pages_written = 0;
    for link in &links {
        let page_html = fetch::get_text(&client, link).await?;
        let rendered = render_page(&page_html, config)?;
        output::append_page(&config.output_path, &rendered)?;

        pages_written += 1;
        ::log::info!("Appended page {} of {}: {}", pages_written, links.len(), link);
    }

    Ok(ScrapeSummary { pages_written })
}

/// Selects the content block of a fetched page and renders it to text.
fn render_page(page_html: &str, config: &ScrapeConfig) -> Result<String, Box<dyn Error>> {
    let block = html::select_content_block(page_html, &config.content_class)?;
    Ok(text::render(&block, &config.root_url, config.render_width))
}
