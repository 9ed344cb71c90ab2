use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the root page where link discovery starts
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// Href prefix an anchor must carry to be collected as a page link
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,

    /// Class name of the content block on each linked page
    #[serde(default = "default_content_class")]
    pub content_class: String,

    /// File the rendered text is appended to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Column width the rendered text is wrapped at
    #[serde(default = "default_render_width")]
    pub render_width: usize,
}

/// Default root URL
fn default_root_url() -> String {
    "http://www.composingprograms.com/".to_string()
}

/// Default href prefix for page links
fn default_link_prefix() -> String {
    "./pages/".to_string()
}

/// Default class name of the content block
fn default_content_class() -> String {
    "inner-content".to_string()
}

/// Default output file path
fn default_output_path() -> PathBuf {
    PathBuf::from("sicp-python3.md")
}

/// Default wrap width for rendered text
fn default_render_width() -> usize {
    80
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            link_prefix: default_link_prefix(),
            content_class: default_content_class(),
            output_path: default_output_path(),
            render_width: default_render_width(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ScrapeConfig::default();
        assert_eq!(config.root_url, "http://www.composingprograms.com/");
        assert_eq!(config.link_prefix, "./pages/");
        assert_eq!(config.content_class, "inner-content");
        assert_eq!(config.output_path, PathBuf::from("sicp-python3.md"));
        assert_eq!(config.render_width, 80);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "root_url": "http://example.com/" }"#;
        let config: ScrapeConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.root_url, "http://example.com/");
        assert_eq!(config.link_prefix, "./pages/");
        assert_eq!(config.content_class, "inner-content");
    }

    #[test]
    fn test_full_json_overrides() {
        let json = r#"{
            "root_url": "http://example.com/",
            "link_prefix": "./docs/",
            "content_class": "article-body",
            "output_path": "out.md",
            "render_width": 100
        }"#;
        let config: ScrapeConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.link_prefix, "./docs/");
        assert_eq!(config.content_class, "article-body");
        assert_eq!(config.output_path, PathBuf::from("out.md"));
        assert_eq!(config.render_width, 100);
    }
}
