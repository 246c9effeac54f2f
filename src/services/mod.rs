//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — `folio.toml` loading and path resolution.
//! - `posts.rs` — Markdown front matter to the posts list.
//! - `exif.rs` — GPS/date extraction from photo files.
//! - `photos.rs` — staging scan, location building, merge with manual edits.
//! - `upload.rs` — object-storage CLI wrapper and the upload flow.
//! - `travel.rs` — edits to the travel data file (set/add/remove/check).
//! - `storage.rs` — JSON persistence, directory scans, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod exif;
pub mod output;
pub mod photos;
pub mod posts;
pub mod storage;
pub mod travel;
pub mod upload;
