//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `blog.rs` — generate/list/tags/show over the posts file.
//! - `photos.rs` — staging scan and upload.
//! - `travel.rs` — list/show/set/add/remove/check over the travel file.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod blog;
pub mod photos;
pub mod travel;

pub use blog::handle_blog_commands;
pub use photos::handle_photo_commands;
pub use travel::handle_travel_commands;
