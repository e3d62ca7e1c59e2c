use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The one piece of state that survives a restart: whether the splash was already shown.
#[derive(Debug, Clone)]
pub struct VisitTracker {
    path: PathBuf,
}

impl VisitTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_visited(&self) -> bool {
        self.path.exists()
    }

    pub fn mark_visited(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, "true")
    }

    /// Returns true on the first visit and records it.
    pub fn first_visit(&self) -> io::Result<bool> {
        if self.has_visited() {
            return Ok(false);
        }
        self.mark_visited()?;
        Ok(true)
    }

    pub fn reset(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
