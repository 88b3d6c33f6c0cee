mod node;
mod path;
#[cfg(test)]
mod tests;

pub use node::{NodeKind, TreeNode};

use crate::error::SidebarError;
use std::path::Path;
use walkdir::WalkDir;

/// Immutable snapshot of a scanned directory tree
#[derive(Debug, Clone)]
pub struct DocTree {
    children: Vec<TreeNode>,
}

/// Mutable builder for constructing a tree snapshot
pub struct TreeBuilder {
    children: Vec<TreeNode>,
    sorted: bool,
}

impl TreeBuilder {
    /// Create an empty builder keeping directory enumeration order
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            sorted: false,
        }
    }

    /// Sort entries by file name instead of keeping directory order
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Insert a directory node, creating missing parents.
    ///
    /// Re-adding an existing directory is a no-op.
    pub fn add_dir(&mut self, raw_path: &str) -> Result<(), SidebarError> {
        let components = path::normalize(raw_path)?;
        Self::insert(&mut self.children, &components, "", NodeKind::Directory)
    }

    /// Insert a file node, creating missing parent directories in
    /// encounter order.
    pub fn add_file(&mut self, raw_path: &str) -> Result<(), SidebarError> {
        let components = path::normalize(raw_path)?;
        Self::insert(&mut self.children, &components, "", NodeKind::File)
    }

    fn insert(
        nodes: &mut Vec<TreeNode>,
        components: &[String],
        parent_path: &str,
        kind: NodeKind,
    ) -> Result<(), SidebarError> {
        let Some((head, rest)) = components.split_first() else {
            return Ok(());
        };

        let child_path = if parent_path.is_empty() {
            head.clone()
        } else {
            format!("{}/{}", parent_path, head)
        };

        let position = nodes.iter().position(|n| n.name == *head);

        if rest.is_empty() {
            match position {
                Some(idx) if nodes[idx].kind == kind => return Ok(()),
                Some(_) => {
                    return Err(SidebarError::InvalidPath(format!(
                        "conflicting entry kinds at {}",
                        child_path
                    )));
                }
                None => {
                    nodes.push(TreeNode {
                        name: head.clone(),
                        path: child_path,
                        kind,
                        children: Vec::new(),
                    });
                    return Ok(());
                }
            }
        }

        // Descend, creating the intermediate directory on first sight
        let idx = match position {
            Some(idx) => {
                if nodes[idx].kind != NodeKind::Directory {
                    return Err(SidebarError::InvalidPath(format!(
                        "{} is a file, not a directory",
                        child_path
                    )));
                }
                idx
            }
            None => {
                nodes.push(TreeNode {
                    name: head.clone(),
                    path: child_path,
                    kind: NodeKind::Directory,
                    children: Vec::new(),
                });
                nodes.len() - 1
            }
        };

        let parent = nodes[idx].path.clone();
        Self::insert(&mut nodes[idx].children, rest, &parent, kind)
    }

    /// Walk a directory on disk into the builder.
    ///
    /// Hidden directories (name starts with `.`) are skipped along with
    /// everything beneath them; hidden files are kept. Symlinks are not
    /// followed, and entries that are neither directories nor regular
    /// files are skipped. The scan root itself is never subject to the
    /// hidden check.
    pub fn ingest_dir(mut self, root: &Path) -> Result<Self, SidebarError> {
        let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        for entry in walker.into_iter().filter_entry(keep_entry) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                SidebarError::Scan { path, source: e }
            })?;

            let rel = relative_virtual_path(entry.path(), root)?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                self.add_dir(&rel)?;
            } else if file_type.is_file() {
                self.add_file(&rel)?;
            }
        }

        Ok(self)
    }

    /// Build the immutable snapshot
    pub fn build(self) -> DocTree {
        DocTree {
            children: self.children,
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocTree {
    /// Ordered top-level entries of the scanned tree
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of directories in the tree
    pub fn dir_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes
                .iter()
                .map(|n| if n.is_dir() { 1 + count(&n.children) } else { 0 })
                .sum()
        }
        count(&self.children)
    }

    /// Total number of files in the tree
    pub fn file_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes
                .iter()
                .map(|n| if n.is_dir() { count(&n.children) } else { 1 })
                .sum()
        }
        count(&self.children)
    }
}

fn keep_entry(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if !entry.file_type().is_dir() {
        return true;
    }
    !entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn relative_virtual_path(entry_path: &Path, root: &Path) -> Result<String, SidebarError> {
    let rel = entry_path.strip_prefix(root).unwrap_or(entry_path);
    let raw = rel.to_str().ok_or_else(|| {
        SidebarError::InvalidPath(format!("invalid UTF-8 in path: {:?}", rel))
    })?;
    Ok(path::normalize(raw)?.join("/"))
}
