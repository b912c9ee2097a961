//! Document store — the static CV text every model call is grounded on.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

/// The CV document. Loaded once at startup and held immutably for the
/// lifetime of the process; handlers only ever read it.
#[derive(Debug, Clone)]
pub struct Document {
    text: Arc<str>,
}

impl Document {
    /// Loads the document from `path`. A missing or unreadable file is logged
    /// as an error and yields an empty document — the service stays up and
    /// degrades to empty-context answers instead of crashing at startup.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            error!("{} not found", path.display());
            return Self::empty();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                info!(
                    "Loaded CV document ({} bytes) from {}",
                    content.len(),
                    path.display()
                );
                Self {
                    text: content.into(),
                }
            }
            Err(e) => {
                error!("Failed to read {}: {e}", path.display());
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self { text: "".into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_returns_empty_document() {
        let doc = Document::load("definitely/not/a/real/path.txt");
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_load_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Nguyễn Hồng Phong — AI Engineer").unwrap();

        let doc = Document::load(file.path());
        assert!(!doc.is_empty());
        assert!(doc.text().contains("AI Engineer"));
    }

    #[test]
    fn test_whitespace_only_file_counts_as_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n\n  ").unwrap();

        let doc = Document::load(file.path());
        assert!(doc.is_empty());
    }
}
