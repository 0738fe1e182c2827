use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_mpdsong_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MPDSONG_CONFIG_PATH", "/tmp/mpdsong-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mpdsong-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mpdsong")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mpdsong")
            .join("config.toml")
    );
}

#[test]
fn settings_fall_back_to_defaults_without_a_file() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let _g1 = EnvGuard::set("MPDSONG_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("MPDSONG__DISPLAY__SEPARATOR");

    let s = Settings::load().unwrap();
    assert_eq!(s.display.fields, vec![DisplayField::Artist, DisplayField::Title]);
    assert_eq!(s.display.separator, " - ");
    assert_eq!(s.display.unknown_length, "-:--");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_field_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[display]
fields = ["albumartist", "title", "time", "filename"]
separator = " | "
unknown_length = "?"
unknown_title = "(untitled)"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MPDSONG_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MPDSONG__DISPLAY__SEPARATOR");

    let s = Settings::load().unwrap();
    assert_eq!(
        s.display.fields,
        vec![
            DisplayField::AlbumArtist,
            DisplayField::Title,
            DisplayField::Length,
            DisplayField::Filename,
        ]
    );
    assert_eq!(s.display.separator, " | ");
    assert_eq!(s.display.unknown_length, "?");
    assert_eq!(s.display.unknown_title, "(untitled)");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[display]
separator = " / "
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MPDSONG_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MPDSONG__DISPLAY__SEPARATOR", "::");

    let s = Settings::load().unwrap();
    assert_eq!(s.display.separator, "::");
}

#[test]
fn validate_rejects_empty_field_list() {
    let mut s = Settings::default();
    s.display.fields.clear();
    assert!(s.validate().is_err());
}
