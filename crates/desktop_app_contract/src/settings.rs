//! User-facing desktop preferences persisted as a single blob.

use serde::{Deserialize, Serialize};

/// Prefs key holding the serialized [`DesktopSettings`] blob.
pub const SETTINGS_PREFS_KEY: &str = "sanjayos-settings";

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    #[default]
    Dark,
    /// Follow `prefers-color-scheme`.
    System,
}

impl ThemeMode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Serialized token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Selector label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Resolves the mode to `true` for dark, consulting the host preference for `System`.
    pub const fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }
}

/// Built-in desktop wallpapers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallpaper {
    /// Starfield.
    #[default]
    Space,
    /// Circuit grid.
    Tech,
    /// Soft color gradient.
    Gradient,
}

impl Wallpaper {
    /// All wallpapers in selector order.
    pub const ALL: [Self; 3] = [Self::Space, Self::Tech, Self::Gradient];

    /// Serialized token, also used as the CSS modifier.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tech => "tech",
            Self::Gradient => "gradient",
        }
    }

    /// Selector label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::Tech => "Tech Circuit",
            Self::Gradient => "Purple Gradient",
        }
    }

    /// Compact label for the dock swatch tooltip.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::Tech => "Tech",
            Self::Gradient => "Gradient",
        }
    }
}

/// Persisted desktop preferences. Missing keys decode to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopSettings {
    /// Color scheme.
    pub theme: ThemeMode,
    /// Desktop background.
    pub wallpaper: Wallpaper,
    /// Window and dock animations.
    pub animations: bool,
    /// UI sounds.
    pub sounds: bool,
    /// Desktop notifications.
    pub notifications: bool,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            wallpaper: Wallpaper::Space,
            animations: true,
            sounds: false,
            notifications: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_keys_merge_over_defaults() {
        let settings: DesktopSettings =
            serde_json::from_str(r#"{"wallpaper":"tech","sounds":true}"#).expect("decode");
        assert_eq!(
            settings,
            DesktopSettings {
                wallpaper: Wallpaper::Tech,
                sounds: true,
                ..DesktopSettings::default()
            }
        );
    }

    #[test]
    fn blob_uses_lowercase_tokens() {
        let encoded = serde_json::to_value(DesktopSettings {
            theme: ThemeMode::System,
            wallpaper: Wallpaper::Gradient,
            ..DesktopSettings::default()
        })
        .expect("encode");
        assert_eq!(encoded["theme"], "system");
        assert_eq!(encoded["wallpaper"], "gradient");
        assert_eq!(encoded["animations"], true);
    }

    #[test]
    fn system_theme_follows_host_preference() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }

    #[test]
    fn unknown_wallpaper_token_is_rejected() {
        let decoded = serde_json::from_str::<DesktopSettings>(r#"{"wallpaper":"aurora"}"#);
        assert!(decoded.is_err());
    }
}
