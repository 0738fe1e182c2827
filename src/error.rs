use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongError {
    /// A dynamic field call with positional arguments but no `=` marker.
    #[error("unsupported operation: `{0}`")]
    UnsupportedCall(String),

    #[error("song has no duration")]
    MissingDuration,

    #[error("malformed duration: {0:?}")]
    MalformedDuration(String),
}
