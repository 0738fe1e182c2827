//! Song records for MPD clients.
//!
//! A [`Song`] is built from the field/value pairs a music server reports for
//! one track. The `time` and `file` entries are promoted to dedicated
//! attributes; every other entry lands in an open field map that can be read
//! and written by name.
//!
//! Display settings for rendering a song as a single line live in
//! [`config`].

pub mod config;
mod error;
pub mod song;

pub use error::SongError;
pub use song::{FieldValue, Song};
