//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the record shapes of the generated JSON files in one place.
//! - Keep report/output structs next to them so `--json` output is reviewable.
//!
//! ## Files
//! - `models.rs` — posts, travel locations, photos, command reports.
//! - `constants.rs` — defaults for paths, URLs, and extension lists.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! `Post`, `TravelLocation` and `Photo` are read by the site's front end.
//! Field renames are schema changes; keep `docs/contracts/*` in sync.

pub mod constants;
pub mod models;
