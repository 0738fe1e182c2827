use std::path::Path;

use crate::config::{DisplayField, DisplaySettings};

use super::model::Song;

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl Song {
    /// Build a one-line description according to `settings.fields`.
    ///
    /// Fields without a value are skipped. When nothing was produced the
    /// file name is used, then `settings.unknown_title`.
    pub fn display(&self, settings: &DisplaySettings) -> String {
        let stem = self
            .file()
            .and_then(|f| Path::new(f).file_stem())
            .and_then(|s| s.to_str());

        let mut parts: Vec<String> = Vec::new();

        for f in &settings.fields {
            let part = match f {
                DisplayField::Artist => non_empty(self.artist()).map(str::to_string),
                DisplayField::Title => non_empty(self.title()).map(str::to_string),
                DisplayField::Album => non_empty(self.album()).map(str::to_string),
                DisplayField::AlbumArtist => non_empty(self.album_artist()).map(str::to_string),
                DisplayField::Filename => non_empty(stem).map(str::to_string),
                DisplayField::File => non_empty(self.file()).map(str::to_string),
                // Length always renders, falling back to the placeholder.
                DisplayField::Length => Some(
                    self.length()
                        .unwrap_or_else(|_| settings.unknown_length.clone()),
                ),
            };
            parts.extend(part);
        }

        if !parts.is_empty() {
            parts.join(&settings.separator)
        } else if let Some(stem) = non_empty(stem) {
            stem.to_string()
        } else {
            settings.unknown_title.clone()
        }
    }
}
