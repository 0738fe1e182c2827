use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mpdsong/config.toml` or `~/.config/mpdsong/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MPDSONG__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which song fields make up the display line, and in what order.
    ///
    /// Example: ["artist", "title", "length"] -> "Artist - Title - 3:12"
    pub fields: Vec<DisplayField>,
    /// Separator used to join `fields`.
    pub separator: String,
    /// Shown for `length` when the song has no duration.
    pub unknown_length: String,
    /// Shown when no field and no file name produced any text.
    pub unknown_title: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![DisplayField::Artist, DisplayField::Title],
            separator: " - ".to_string(),
            unknown_length: "-:--".to_string(),
            unknown_title: "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayField {
    Artist,
    Title,
    Album,
    #[serde(alias = "albumartist", alias = "album_artist")]
    AlbumArtist,
    /// File name without directories or extension.
    Filename,
    /// The full file identifier.
    File,
    /// Formatted length (`m:ss`).
    #[serde(alias = "time")]
    Length,
}
