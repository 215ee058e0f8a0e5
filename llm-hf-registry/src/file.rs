//! Flat-file registry.
//!
//! Format: one identifier per line, no header, no escaping.
//! ```text
//! bigscience/bloom
//! gpt2
//! ```
//! Blank lines and surrounding whitespace are ignored on read.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, RegistryResult};
use crate::paths;
use crate::registry::ModelRegistry;

/// Registry stored in a newline-separated text file.
#[derive(Debug, Clone)]
pub struct FileModelRegistry {
    path: PathBuf,
}

impl FileModelRegistry {
    /// Create a registry backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a registry backed by `hf_models.txt` in the user directory.
    pub fn in_user_dir() -> RegistryResult<Self> {
        Ok(Self::new(paths::models_file()?))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| paths::MODELS_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ModelRegistry for FileModelRegistry {
    fn load(&self) -> RegistryResult<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RegistryError::io(&self.path, e)),
        };
        Ok(parse_models(&content))
    }

    /// Write to `<file>.tmp`, then rename over the list so readers never
    /// see a partial file.
    fn save(&self, models: &[String]) -> RegistryResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| RegistryError::io(dir, e))?;
        }

        let temp_path = self.temp_path();
        let written = write_synced(&temp_path, models.join("\n").as_bytes())
            .map_err(|e| RegistryError::io(&temp_path, e));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            RegistryError::io(&self.path, e)
        })?;

        tracing::debug!(path = %self.path.display(), count = models.len(), "Saved model list");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn parse_models(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}
