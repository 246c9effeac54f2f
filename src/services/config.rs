use crate::domain::constants::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub photos: PhotosConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub posts_dir: PathBuf,
    pub posts_output: PathBuf,
    pub staging_dir: PathBuf,
    pub travel_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts_dir: DEFAULT_POSTS_DIR.into(),
            posts_output: DEFAULT_POSTS_OUTPUT.into(),
            staging_dir: DEFAULT_STAGING_DIR.into(),
            travel_output: DEFAULT_TRAVEL_OUTPUT.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhotosConfig {
    pub base_url: String,
    pub extensions: Vec<String>,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub cli: String,
    pub bucket: String,
    pub upload_extensions: Vec<String>,
    pub list_timeout_secs: u64,
    pub put_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cli: DEFAULT_STORAGE_CLI.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            upload_extensions: UPLOAD_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            list_timeout_secs: LIST_TIMEOUT_SECS,
            put_timeout_secs: PUT_TIMEOUT_SECS,
        }
    }
}

impl StorageConfig {
    pub fn list_timeout(&self) -> Duration {
        Duration::from_secs(self.list_timeout_secs)
    }

    pub fn put_timeout(&self) -> Duration {
        Duration::from_secs(self.put_timeout_secs)
    }
}

/// A site checkout: its root directory plus the settings in `folio.toml`.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl Project {
    pub fn open(root: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            config: load_config(root)?,
        })
    }

    fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.posts_dir)
    }

    pub fn posts_output(&self) -> PathBuf {
        self.resolve(&self.config.paths.posts_output)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.staging_dir)
    }

    pub fn travel_output(&self) -> PathBuf {
        self.resolve(&self.config.paths.travel_output)
    }

    pub fn audit_path(&self) -> PathBuf {
        self.root.join(AUDIT_LOG)
    }
}

pub fn load_config(root: &Path) -> anyhow::Result<SiteConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("bad config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: SiteConfig = toml::from_str(
            r#"[storage]
bucket = "my-bucket"
"#,
        )
        .unwrap();
        assert_eq!(cfg.storage.bucket, "my-bucket");
        assert_eq!(cfg.storage.cli, "wrangler");
        assert_eq!(cfg.storage.put_timeout_secs, 60);
        assert_eq!(cfg.paths.staging_dir, PathBuf::from("photos-staging"));
        assert!(cfg.photos.extensions.iter().any(|e| e == "heic"));
        assert!(!cfg.storage.upload_extensions.iter().any(|e| e == "heic"));
    }

    #[test]
    fn relative_paths_resolve_against_root() {
        let project = Project {
            root: PathBuf::from("/site"),
            config: SiteConfig::default(),
        };
        assert_eq!(
            project.travel_output(),
            PathBuf::from("/site/src/data/travel-data.json")
        );
        assert_eq!(project.audit_path(), PathBuf::from("/site/.folio/audit.jsonl"));
    }
}
