// Re-export modules
pub mod config;
pub mod fetch;
pub mod output;
pub mod parsers;
pub mod scrape;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use scrape::{ScrapeSummary, run};
