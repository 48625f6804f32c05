use crate::error::{LauncherError, Result};
use crate::utils::clamp_width;
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
pub const DEFAULT_BASE_CSS: &str = include_str!("resources/base.css");
pub const DEFAULT_DARK_CSS: &str = include_str!("resources/dark.css");
pub const DEFAULT_LIGHT_CSS: &str = include_str!("resources/light.css");
pub const SETTINGS_FILE: &str = "settings.json";
pub const BACKUP_EXTENSION: &str = "json.bak";
pub const DEFAULT_WINDOW_WIDTH: i32 = 700;
pub const DEFAULT_WINDOW_TITLE: &str = "Application Launcher";
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}
impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
    fn file_name(self) -> &'static str {
        match self {
            Theme::Light => "light.css",
            Theme::Dark => "dark.css",
        }
    }
    fn default_css(self) -> &'static str {
        match self {
            Theme::Light => DEFAULT_LIGHT_CSS,
            Theme::Dark => DEFAULT_DARK_CSS,
        }
    }
}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Shortcut {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub command: String,
    // Older settings files store "no icon" as an empty string.
    #[serde(default, deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub icon: Option<String>,
}
impl Shortcut {
    pub fn new(name: impl Into<String>, command: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            icon: icon.filter(|i| !i.trim().is_empty()),
        }
    }
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.command.trim().is_empty()
    }
}
fn empty_as_none<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
fn none_as_empty<S: Serializer>(icon: &Option<String>, ser: S) -> std::result::Result<S::Ok, S::Error> {
    ser.serialize_str(icon.as_deref().unwrap_or_default())
}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub apps: Vec<Shortcut>,
    pub window_width: i32,
    pub window_title: String,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            apps: Vec::new(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}
/// Reads and writes the JSON settings document. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}
impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn default_location() -> Self {
        Self::new(get_config_dir().join(SETTINGS_FILE))
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(LauncherError::io(&self.path, e)),
        };
        let mut settings: Settings = serde_json::from_str(&content)?;
        settings.window_width = clamp_width(settings.window_width);
        debug!(apps = settings.apps.len(), theme = ?settings.theme, "settings loaded");
        Ok(settings)
    }
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension(BACKUP_EXTENSION)
    }
    /// Falls back to defaults when the file cannot be read or parsed. The bad
    /// file is moved aside first so the next save cannot overwrite it.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring unreadable settings");
            let backup = self.backup_path();
            match fs::rename(&self.path, &backup) {
                Ok(()) => warn!(backup = %backup.display(), "moved unreadable settings aside"),
                Err(e) => warn!(backup = %backup.display(), error = %e, "could not back up settings"),
            }
            Settings::default()
        })
    }
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| LauncherError::io(dir, e))?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| LauncherError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| LauncherError::io(&self.path, e))?;
        debug!(path = %self.path.display(), apps = settings.apps.len(), "settings saved");
        Ok(())
    }
}
pub fn get_config_dir() -> PathBuf {
    ProjectDirs::from("org", "shortcut", "shortcut-launcher")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config").join("shortcut-launcher")
        })
}
pub fn ensure_config_files() {
    ensure_theme_files(&get_config_dir());
}
fn ensure_theme_files(dir: &Path) {
    if let Err(e) = fs::create_dir_all(dir) {
        warn!(dir = %dir.display(), error = %e, "cannot create config dir");
        return;
    }
    for theme in [Theme::Light, Theme::Dark] {
        let path = dir.join(theme.file_name());
        if !path.exists() {
            if let Err(e) = fs::write(&path, theme.default_css()) {
                warn!(path = %path.display(), error = %e, "cannot write default theme");
            }
        }
    }
}
pub fn theme_css(theme: Theme) -> String {
    theme_css_from(&get_config_dir(), theme)
}
fn theme_css_from(dir: &Path, theme: Theme) -> String {
    let mut css = String::from(DEFAULT_BASE_CSS);
    css.push('\n');
    match fs::read_to_string(dir.join(theme.file_name())) {
        Ok(user) => css.push_str(&user),
        Err(_) => css.push_str(theme.default_css()),
    }
    css
}
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("nested").join(SETTINGS_FILE))
    }
    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = store_in(&dir).load().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window_width, 700);
        assert_eq!(settings.window_title, "Application Launcher");
    }
    #[test]
    fn save_then_load_preserves_everything() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let settings = Settings {
            theme: Theme::Dark,
            apps: vec![
                Shortcut::new("Editor", "/usr/bin/gedit", Some("/tmp/gedit.png".into())),
                Shortcut::new("Docs", "https://docs.rs", None),
            ],
            window_width: 840,
            window_title: "Games".into(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
        assert!(!store.path().with_extension("json.tmp").exists());
    }
    #[test]
    fn legacy_empty_icon_reads_as_none() {
        let json = r#"{"theme":"dark","apps":[{"name":"a","command":"b","icon":""}]}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.apps[0].icon, None);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
        let written = serde_json::to_value(&settings).unwrap();
        assert_eq!(written["apps"][0]["icon"], "");
    }
    #[test]
    fn corrupt_file_is_an_error_but_load_or_default_recovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();
        let store = SettingsStore::new(&path);
        assert!(matches!(store.load(), Err(LauncherError::Json(_))));
        assert_eq!(store.load_or_default(), Settings::default());
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "{ not json");
    }
    #[test]
    fn entries_with_missing_fields_do_not_reject_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let json = r#"{"apps":[{"name":"Doom","command":"/g/doom"},{"name":"Broken","icon":""},{"command":"steam"}]}"#;
        fs::write(&path, json).unwrap();
        let apps = SettingsStore::new(&path).load().unwrap().apps;
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0], Shortcut::new("Doom", "/g/doom", None));
        assert_eq!(apps[1].command, "");
        assert_eq!(apps[2].name, "");
        assert!(!apps[1].is_complete());
    }
    #[test]
    fn out_of_range_width_is_clamped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let store = SettingsStore::new(&path);
        for (raw, expected) in [(-40, 500), (5000, 1000), (820, 820)] {
            fs::write(&path, format!(r#"{{"window_width": {raw}}}"#)).unwrap();
            assert_eq!(store.load().unwrap().window_width, expected);
        }
    }
    #[test]
    fn theme_css_prefers_user_file() {
        let dir = TempDir::new().unwrap();
        assert!(theme_css_from(dir.path(), Theme::Dark).ends_with(DEFAULT_DARK_CSS));
        ensure_theme_files(dir.path());
        fs::write(dir.path().join("light.css"), "window { color: red; }").unwrap();
        let css = theme_css_from(dir.path(), Theme::Light);
        assert!(css.starts_with(DEFAULT_BASE_CSS));
        assert!(css.ends_with("window { color: red; }"));
        assert!(dir.path().join("dark.css").exists());
    }
    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().css_class(), "light");
    }
}
