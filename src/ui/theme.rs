//! Light/dark theme state
//!
//! The controller only knows a [`ThemeStore`]; where the preference lives is
//! up to the store.

use crate::config::Config;
use ratatui::prelude::Color;
use std::cell::Cell;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(()),
        }
    }
}

/// Durable home of the theme preference.
pub trait ThemeStore {
    /// The persisted mode, if one was saved and is recognized.
    fn load(&self) -> Option<ThemeMode>;

    fn save(&self, mode: ThemeMode) -> Result<(), std::io::Error>;
}

/// Keeps the preference under the `theme` key of the JSON config file.
#[derive(Debug, Clone)]
pub struct ConfigThemeStore {
    path: PathBuf,
}

impl ConfigThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ThemeStore for ConfigThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        let config = Config::load_from_file(&self.path).ok()?;
        config.theme?.parse().ok()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), std::io::Error> {
        // Preserve the other settings stored alongside the theme.
        let mut config = Config::load_or_default(&self.path).unwrap_or_default();
        config.theme = Some(mode.to_string());
        config.save(&self.path)
    }
}

/// Keeps the preference for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Cell<Option<ThemeMode>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.value.get()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), std::io::Error> {
        self.value.set(Some(mode));
        Ok(())
    }
}

/// Colors derived from the active mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Palette {
                background: Color::Rgb(248, 250, 252),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(37, 99, 235),
                border: Color::Rgb(203, 213, 225),
            },
            ThemeMode::Dark => Palette {
                background: Color::Rgb(16, 20, 24),
                surface: Color::Rgb(30, 41, 59),
                text: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                accent: Color::Cyan,
                border: Color::DarkGray,
            },
        }
    }
}

pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .finish()
    }
}

impl ThemeController {
    /// Loads the persisted mode, defaulting to light.
    pub fn init(store: Box<dyn ThemeStore>) -> Self {
        let mode = store.load().unwrap_or_default();
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }

    /// Flips the mode and persists it. The new mode stays active even if it
    /// could not be saved; the save error is returned for logging.
    pub fn toggle(&mut self) -> Result<ThemeMode, std::io::Error> {
        self.set(self.mode.toggled())
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<ThemeMode, std::io::Error> {
        self.mode = mode;
        self.store.save(mode)?;
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// Shares one memory store between a controller and the test body.
    struct SharedStore(Rc<MemoryThemeStore>);

    impl ThemeStore for SharedStore {
        fn load(&self) -> Option<ThemeMode> {
            self.0.load()
        }

        fn save(&self, mode: ThemeMode) -> Result<(), std::io::Error> {
            self.0.save(mode)
        }
    }

    #[test]
    fn test_fresh_load_defaults_to_light() {
        let controller = ThemeController::init(Box::new(MemoryThemeStore::default()));
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    // Toggling twice restores both the active and the persisted value.
    fn test_double_toggle_round_trips() {
        let store = Rc::new(MemoryThemeStore::default());
        store.save(ThemeMode::Dark).unwrap();
        let mut controller = ThemeController::init(Box::new(SharedStore(store.clone())));
        assert_eq!(controller.mode(), ThemeMode::Dark);

        controller.toggle().unwrap();
        assert_eq!(store.load(), Some(ThemeMode::Light));
        controller.toggle().unwrap();
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert_eq!(store.load(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_palette_follows_mode() {
        let mut controller = ThemeController::init(Box::new(MemoryThemeStore::default()));
        let light = controller.palette();
        controller.toggle().unwrap();
        assert_ne!(light, controller.palette());
        assert_eq!(controller.palette(), Palette::for_mode(ThemeMode::Dark));
    }

    #[test]
    fn test_config_store_persists_lowercase_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".nexero").join("config.json");
        Config::new(None, Some(90)).save(&path).unwrap();

        let store = ConfigThemeStore::new(path.clone());
        assert_eq!(store.load(), None);
        store.save(ThemeMode::Dark).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert_eq!(config.default_days, Some(90));
        assert_eq!(ConfigThemeStore::new(path).load(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_unrecognized_persisted_value_defaults_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new(Some("solarized".to_string()), None)
            .save(&path)
            .unwrap();

        let controller = ThemeController::init(Box::new(ConfigThemeStore::new(path)));
        assert_eq!(controller.mode(), ThemeMode::Light);
    }
}
