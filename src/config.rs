//! Display settings and their loader.
//!
//! Settings control how a song is rendered as a single line and are read
//! from an optional TOML file with environment overrides.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
