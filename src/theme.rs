//! Light/dark theme preference.
//!
//! Stored as a bool under its own key, independent of the task list.

use crate::error::Result;
use crate::prefs::Preferences;

/// Key the dark-mode flag is stored under
pub const DARK_MODE_KEY: &str = "dark_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Read the stored theme; absent means light.
pub async fn load_theme(prefs: &dyn Preferences) -> Result<Theme> {
    let dark = prefs.get_bool(DARK_MODE_KEY).await?.unwrap_or(false);
    Ok(Theme::from_dark_mode(dark))
}

pub async fn save_theme(prefs: &dyn Preferences, theme: Theme) -> Result<()> {
    prefs.set_bool(DARK_MODE_KEY, theme.is_dark()).await?;
    log::info!("Saved theme: {}", theme.label());
    Ok(())
}

/// Flip the stored theme and return the new one.
pub async fn toggle_theme(prefs: &dyn Preferences) -> Result<Theme> {
    let theme = load_theme(prefs).await?.toggle();
    save_theme(prefs, theme).await?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;
    use crate::store::TASKS_KEY;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert!(Theme::from_dark_mode(true).is_dark());
    }

    #[tokio::test]
    async fn test_absent_flag_is_light() {
        let prefs = MemoryPreferences::new();
        assert_eq!(load_theme(&prefs).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let prefs = MemoryPreferences::new();
        assert_eq!(toggle_theme(&prefs).await.unwrap(), Theme::Dark);
        assert_eq!(prefs.get_bool(DARK_MODE_KEY).await.unwrap(), Some(true));
        assert_eq!(toggle_theme(&prefs).await.unwrap(), Theme::Light);
        assert_eq!(load_theme(&prefs).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_theme_key_is_independent_of_tasks() {
        let prefs = MemoryPreferences::new().with_string(TASKS_KEY, "[]");
        save_theme(&prefs, Theme::Dark).await.unwrap();
        assert_eq!(prefs.get_string(TASKS_KEY).await.unwrap(), Some("[]".to_string()));
    }
}
