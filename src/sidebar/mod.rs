mod link;

pub use link::encode_link;

use crate::error::SidebarError;
use crate::tree::{DocTree, TreeBuilder, TreeNode};
use std::fs;
use std::path::Path;

/// File name excluded from page links at every level
const EXCLUDED_PAGE: &str = "README.md";
/// Suffix a file needs to be listed as a page
const PAGE_SUFFIX: &str = ".md";
const INDENT: &str = "  ";

/// Render a scanned tree into sidebar markdown.
///
/// Directories become heading lines, markdown files become link lines,
/// both indented by two spaces per nesting level. Entries appear in tree
/// order; a directory's subtree is emitted immediately after its heading,
/// before the next sibling.
pub fn render(tree: &DocTree) -> String {
    let mut out = String::new();
    render_nodes(tree.children(), 0, &mut out);
    out
}

fn render_nodes(nodes: &[TreeNode], depth: usize, out: &mut String) {
    for node in nodes {
        if node.is_dir() {
            push_indent(out, depth);
            out.push_str("- ");
            out.push_str(&node.name);
            out.push('\n');
            render_nodes(&node.children, depth + 1, out);
        } else if let Some(title) = page_title(&node.name) {
            push_indent(out, depth);
            out.push_str("- [");
            out.push_str(title);
            out.push_str("](");
            out.push_str(&encode_link(&node.path));
            out.push_str(")\n");
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Display title for a file that should be listed, or `None` to skip it.
///
/// The exclusion compares the exact file name, so `README.md.md` is still
/// listed.
fn page_title(name: &str) -> Option<&str> {
    if name == EXCLUDED_PAGE {
        return None;
    }
    name.strip_suffix(PAGE_SUFFIX)
}

/// Write generated text to `path`, overwriting any previous content.
pub fn write_file(path: &Path, contents: &str) -> Result<(), SidebarError> {
    fs::write(path, contents).map_err(|source| SidebarError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan `root` and render its sidebar in one call.
pub fn generate_sidebar(root: &Path, sorted: bool) -> Result<String, SidebarError> {
    let tree = TreeBuilder::new().sorted(sorted).ingest_dir(root)?.build();
    Ok(render(&tree))
}
