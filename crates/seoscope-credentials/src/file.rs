//! File-backed credential storage.
//!
//! Reads and writes a versioned JSON file with secure permissions (0o600).
//! Unreadable, unparseable, or version-mismatched files are treated as
//! absent rather than fatal.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::store::CredentialStore;

/// Default credentials file name.
const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// Supported storage format version.
const STORAGE_VERSION: u32 = 1;

/// On-disk layout of the credentials file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialFile {
    version: u32,
    keys: HashMap<String, String>,
    last_updated: String,
}

impl Default for CredentialFile {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            keys: HashMap::new(),
            last_updated: String::new(),
        }
    }
}

/// Resolve the default credentials path (`~/.seoscope/credentials.json`).
#[must_use]
pub fn credentials_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home)
        .join(".seoscope")
        .join(CREDENTIALS_FILE_NAME)
}

fn load_file(path: &Path) -> Option<CredentialFile> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read credentials file: {e}");
            return None;
        }
    };

    match serde_json::from_str::<CredentialFile>(&data) {
        Ok(file) if file.version == STORAGE_VERSION => Some(file),
        Ok(file) => {
            tracing::warn!("unsupported credentials file version: {}", file.version);
            None
        }
        Err(e) => {
            tracing::warn!("failed to parse credentials file: {e}");
            None
        }
    }
}

fn save_file(path: &Path, file: &mut CredentialFile) -> Result<()> {
    file.last_updated = chrono::Utc::now().to_rfc3339();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(file)?;
    std::fs::write(path, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        let _ = std::fs::set_permissions(path, perms);
    }

    Ok(())
}

/// Credential store persisted as a JSON file.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by the default path.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(credentials_path())
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        load_file(&self.path)?.keys.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut file = load_file(&self.path).unwrap_or_default();
        let _ = file.keys.insert(key.to_string(), value.to_string());
        save_file(&self.path, &mut file)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
