//! The `Song` record.
//!
//! A song keeps its duration and file identifier as dedicated attributes and
//! every other reported tag in an open, name-ordered field map.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::value::FieldValue;
use crate::error::SongError;

/// Field name whose value becomes the song duration.
pub const TIME_FIELD: &str = "time";
/// Field name whose value becomes the song's file identifier.
pub const FILE_FIELD: &str = "file";

/// Suffix marking a dynamic call as a write (`"title="`).
const ASSIGN_MARKER: char = '=';

/// One song as reported by the server.
///
/// Equality follows file identity only: two songs are equal when both have a
/// file and the files match. A song without a file is equal to nothing, not
/// even itself, which is why `Song` implements `PartialEq` but not `Eq`.
#[derive(Debug, Clone, Default)]
pub struct Song {
    duration: Option<u64>,
    file: Option<String>,
    fields: BTreeMap<String, FieldValue>,
}

impl Song {
    /// Build a song from field/value pairs.
    ///
    /// `time` and `file` are taken out of the pairs; `time` may arrive
    /// wrapped in a sequence, in which case its first element is used. The
    /// remaining pairs are stored as-is, later pairs overwriting earlier ones
    /// with the same name.
    pub fn new<I, K, V>(pairs: I) -> Result<Self, SongError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut song = Song::default();
        let mut time: Option<FieldValue> = None;

        for (name, value) in pairs {
            let name = name.into();
            let value = value.into();
            match name.as_str() {
                TIME_FIELD => time = Some(value),
                FILE_FIELD => song.file = value.into_first().map(|v| v.to_string()),
                _ => {
                    song.fields.insert(name, value);
                }
            }
        }

        if let Some(time) = time {
            song.duration = parse_duration(time)?;
        }

        debug!(
            file = ?song.file,
            duration = ?song.duration,
            fields = song.fields.len(),
            "song constructed"
        );
        Ok(song)
    }

    /// A song that only knows its file.
    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Length in whole seconds.
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn set_duration(&mut self, seconds: Option<u64>) {
        self.duration = seconds;
    }

    pub fn duration_as_std(&self) -> Option<Duration> {
        self.duration.map(Duration::from_secs)
    }

    /// Read a field by name. Unknown names yield `None`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Store `value` under `name`, returning whatever was there before.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        let name = name.into();
        let value = value.into();
        trace!(field = %name, value = %value, "set field");
        self.fields.insert(name, value)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Fields in name order, excluding `time` and `file`.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dynamic field access by call name.
    ///
    /// - `"name="` with an argument stores it; without one the field is
    ///   removed.
    /// - `"name"` without arguments reads the field.
    /// - Anything else is rejected with [`SongError::UnsupportedCall`].
    ///
    /// `time` maps onto the duration (writes are validated like at
    /// construction). `file` can be read but not written.
    pub fn call(&mut self, name: &str, args: &[FieldValue]) -> Result<Option<FieldValue>, SongError> {
        if let Some(field) = name.strip_suffix(ASSIGN_MARKER) {
            return match (field, args.first()) {
                (FILE_FIELD, _) => {
                    warn!(name, "file is fixed after construction");
                    Err(SongError::UnsupportedCall(name.to_string()))
                }
                (TIME_FIELD, Some(value)) => {
                    self.duration = parse_duration(value.clone())?;
                    Ok(self.duration.map(duration_value))
                }
                (TIME_FIELD, None) => {
                    self.duration = None;
                    Ok(None)
                }
                (_, Some(value)) => {
                    self.set(field, value.clone());
                    Ok(Some(value.clone()))
                }
                (_, None) => {
                    self.remove(field);
                    Ok(None)
                }
            };
        }

        if !args.is_empty() {
            warn!(name, args = args.len(), "unsupported field call");
            return Err(SongError::UnsupportedCall(name.to_string()));
        }

        Ok(match name {
            TIME_FIELD => self.duration.map(duration_value),
            FILE_FIELD => self.file.clone().map(FieldValue::Text),
            _ => self.get(name).cloned(),
        })
    }

    /// Length formatted as `minutes:seconds`, e.g. `"1:02"`.
    pub fn length(&self) -> Result<String, SongError> {
        let secs = self.duration.ok_or(SongError::MissingDuration)?;
        Ok(format!("{}:{:02}", secs / 60, secs % 60))
    }

    pub fn artist(&self) -> Option<&str> {
        self.text("artist")
    }

    pub fn album(&self) -> Option<&str> {
        self.text("album")
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.text("albumartist")
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn genre(&self) -> Option<&str> {
        self.text("genre")
    }

    pub fn date(&self) -> Option<&str> {
        self.text("date")
    }

    pub fn composer(&self) -> Option<&str> {
        self.text("composer")
    }

    pub fn performer(&self) -> Option<&str> {
        self.text("performer")
    }

    /// Stream or station name.
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// Track number; `"3/12"` yields 3.
    pub fn track(&self) -> Option<u32> {
        self.number("track")
    }

    pub fn disc(&self) -> Option<u32> {
        self.number("disc")
    }

    /// Position in the playlist.
    pub fn pos(&self) -> Option<u32> {
        self.number("pos")
    }

    /// Playlist song id.
    pub fn id(&self) -> Option<u32> {
        self.number("id")
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.get(name)?.first()?.as_str()
    }

    fn number(&self, name: &str) -> Option<u32> {
        match self.get(name)?.first()? {
            FieldValue::Int(n) => u32::try_from(*n).ok(),
            FieldValue::Text(s) => s.split('/').next()?.trim().parse().ok(),
            FieldValue::List(_) => None,
        }
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        matches!((&self.file, &other.file), (Some(a), Some(b)) if a == b)
    }
}

fn duration_value(secs: u64) -> FieldValue {
    i64::try_from(secs)
        .map(FieldValue::Int)
        .unwrap_or_else(|_| FieldValue::Text(secs.to_string()))
}

/// Unwrap a reported `time` value into whole seconds.
fn parse_duration(value: FieldValue) -> Result<Option<u64>, SongError> {
    let Some(first) = value.into_first() else {
        return Ok(None);
    };

    match first.as_int().and_then(|n| u64::try_from(n).ok()) {
        Some(secs) => Ok(Some(secs)),
        None => {
            warn!(value = %first, "rejecting malformed duration");
            Err(SongError::MalformedDuration(first.to_string()))
        }
    }
}
