use crate::error::SidebarError;
use std::path::{Component, Path};

/// Split a raw path into normalized virtual-path components.
///
/// Rejects empty paths, absolute paths, parent directory traversal and
/// non-UTF-8 components. `.` markers are skipped. The components joined
/// with `/` form the entry's virtual path.
pub fn normalize(raw_path: &str) -> Result<Vec<String>, SidebarError> {
    if raw_path.is_empty() {
        return Err(SidebarError::InvalidPath("empty path".to_string()));
    }

    let path = Path::new(raw_path);
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                return Err(SidebarError::InvalidPath(format!(
                    "absolute path not allowed: {}",
                    raw_path
                )));
            }
            Component::ParentDir => {
                return Err(SidebarError::InvalidPath(format!(
                    "parent directory traversal not allowed: {}",
                    raw_path
                )));
            }
            Component::CurDir => continue,
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    SidebarError::InvalidPath(format!("invalid UTF-8 in path: {:?}", part))
                })?;
                components.push(part.to_string());
            }
        }
    }

    if components.is_empty() {
        return Err(SidebarError::InvalidPath(format!(
            "no valid components: {}",
            raw_path
        )));
    }

    Ok(components)
}
