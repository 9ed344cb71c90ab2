use sicp_md::ScrapeConfig;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Everything is a fixed literal: the root URL, the link prefix, the
    // content class and the output file. No flags, no arguments.
    let config = ScrapeConfig::default();

    ::log::info!("Starting scrape of root URL: {}", config.root_url);
    let start_time = std::time::Instant::now();

    match sicp_md::run(&config).await {
        Ok(summary) => {
            let duration = start_time.elapsed();
            ::log::info!(
                "Scrape complete - appended {} pages to {} in {:.2} seconds",
                summary.pages_written,
                config.output_path.display(),
                duration.as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    }
}
