// Public API exports
pub mod error;
pub mod sidebar;
pub mod tree;

// Re-export main types for convenience
pub use error::SidebarError;

pub use tree::{DocTree, NodeKind, TreeBuilder, TreeNode};

pub use sidebar::{encode_link, generate_sidebar, render, write_file};
