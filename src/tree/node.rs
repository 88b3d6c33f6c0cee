use serde::{Deserialize, Serialize};

/// Kind of a tree entry, as reported by directory enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry in the scanned tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Entry name (final path component)
    pub name: String,
    /// Virtual path relative to the scan root (e.g., "api/intro.md")
    pub path: String,
    /// Directory or regular file
    pub kind: NodeKind,
    /// Ordered children; always empty for files
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}
