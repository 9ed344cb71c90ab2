use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Appends one page's rendered text to the output file.
///
/// The file is created if absent and opened in append mode, so the handle
/// lives only for the duration of one call. Re-running a scrape appends
/// the same content again; nothing is overwritten.
pub fn append_page(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_output(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sicp_md_{}_{}.md", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_append_creates_file() {
        let path = temp_output("create");

        append_page(&path, "first page\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first page\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_twice_doubles_content() {
        let path = temp_output("double");

        append_page(&path, "segment\n").unwrap();
        append_page(&path, "segment\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "segment\nsegment\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_has_no_delimiters() {
        let path = temp_output("delim");

        append_page(&path, "one").unwrap();
        append_page(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "onetwo");

        let _ = fs::remove_file(&path);
    }
}
