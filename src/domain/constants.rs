pub const CONFIG_FILE: &str = "folio.toml";
pub const AUDIT_LOG: &str = ".folio/audit.jsonl";

pub const DEFAULT_POSTS_DIR: &str = "content/posts";
pub const DEFAULT_POSTS_OUTPUT: &str = "src/data/posts.json";
pub const DEFAULT_STAGING_DIR: &str = "photos-staging";
pub const DEFAULT_TRAVEL_OUTPUT: &str = "src/data/travel-data.json";

pub const DEFAULT_BASE_URL: &str = "https://img.chunlin.ch";
pub const DEFAULT_BUCKET: &str = "chunlin-travel";
pub const DEFAULT_STORAGE_CLI: &str = "wrangler";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic"];
/// Subset of `IMAGE_EXTENSIONS` that gets published.
pub const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub const LIST_TIMEOUT_SECS: u64 = 30;
pub const PUT_TIMEOUT_SECS: u64 = 60;

/// Object keys and local URLs live under this prefix.
pub const TRAVEL_PREFIX: &str = "travel";

pub const NEW_LOCATION_NAME: &str = "New Location";
