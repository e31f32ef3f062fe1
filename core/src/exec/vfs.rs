use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DIR_MARKER: &str = "(dir)";

/// Flat path → content map. Directories are entries ending in `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualFs {
    files: BTreeMap<String, String>,
}

impl VirtualFs {
    pub fn new(files: BTreeMap<String, String>) -> Self {
        Self { files }
    }

    pub fn list(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn read(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn write(&mut self, path: &str, content: impl Into<String>) {
        tracing::debug!(target: "osprey.exec", path, "write");
        self.files.insert(path.to_string(), content.into());
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        tracing::debug!(target: "osprey.exec", path, "remove");
        self.files.remove(path).is_some()
    }

    pub fn mkdir(&mut self, path: &str) {
        let dir = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };
        self.files.insert(dir, DIR_MARKER.to_string());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove() {
        let mut fs = VirtualFs::default();
        fs.write("notes.txt", "hello world");
        assert_eq!(fs.read("notes.txt"), Some("hello world"));
        assert!(fs.remove("notes.txt"));
        assert!(!fs.remove("notes.txt"));
        assert_eq!(fs.read("notes.txt"), None);
    }

    #[test]
    fn mkdir_stores_dir_marker_and_lists_sorted() {
        let mut fs = VirtualFs::default();
        fs.write("b.txt", "");
        fs.mkdir("a");
        fs.mkdir("c/");
        assert_eq!(fs.list(), vec!["a/", "b.txt", "c/"]);
        assert_eq!(fs.read("a/"), Some("(dir)"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut fs = VirtualFs::default();
        fs.write("x", "1");
        assert_eq!(serde_json::to_string(&fs).unwrap(), r#"{"x":"1"}"#);
    }
}
