//! Song module: the song record and its field values.
//!
//! `song::model` holds the `Song` record, `song::value` the loosely-typed
//! values kept in its field map and `song::display` the single-line
//! rendering driven by [`crate::config::DisplaySettings`].

mod display;
mod model;
mod value;

pub use model::*;
pub use value::FieldValue;
