//! Workspace root resolution
//!
//! The workspace is the one fixed directory commands execute in. It is
//! resolved and validated once at startup; a missing or invalid root is
//! fatal at boot, never a per-call error.

use std::path::{Path, PathBuf};

use crate::types::TerminalError;

/// Resolved workspace root. Always absolute, always an existing directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Resolve a configured root path, expanding `~` and canonicalizing.
    pub fn resolve(configured: &str) -> Result<Self, TerminalError> {
        let expanded = expand_tilde(configured);

        let root = expanded.canonicalize().map_err(|e| {
            TerminalError::InvalidWorkspace(format!("{}: {}", expanded.display(), e))
        })?;

        if !root.is_dir() {
            return Err(TerminalError::InvalidWorkspace(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
