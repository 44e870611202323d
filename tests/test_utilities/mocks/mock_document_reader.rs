use pipo_diff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DocumentReader for testing
pub struct MockDocumentReader {
    documents: HashMap<PathBuf, String>,
    should_fail: bool,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.documents
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock has no document for {}", path.display()))
    }
}
