//! Settings blob persistence for boot hydration and settings changes.
//!
//! Only [`DesktopSettings`] are stored. Window layout is rebuilt from scratch on every load.

use desktop_app_contract::{DesktopSettings, SETTINGS_PREFS_KEY};
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

/// Loads stored settings, merging present keys over defaults.
///
/// Missing blobs yield defaults. Store or decode failures are logged and also yield defaults.
pub async fn load_settings(prefs: &dyn PrefsStore) -> DesktopSettings {
    match load_pref_with::<_, DesktopSettings>(prefs, SETTINGS_PREFS_KEY).await {
        Ok(Some(settings)) => settings,
        Ok(None) => DesktopSettings::default(),
        Err(err) => {
            leptos::logging::warn!("settings load failed, using defaults: {err}");
            DesktopSettings::default()
        }
    }
}

/// Writes the full settings blob.
///
/// # Errors
///
/// Returns an error when serialization or the underlying store fails.
pub async fn save_settings(
    prefs: &dyn PrefsStore,
    settings: &DesktopSettings,
) -> Result<(), String> {
    save_pref_with(prefs, SETTINGS_PREFS_KEY, settings).await
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ThemeMode, Wallpaper};
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_blob_loads_defaults() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(block_on(load_settings(&prefs)), DesktopSettings::default());
    }

    #[test]
    fn partial_blob_keeps_defaults_for_missing_keys() {
        let prefs = MemoryPrefsStore::default();
        block_on(prefs.save_pref(SETTINGS_PREFS_KEY, r#"{"wallpaper":"tech"}"#))
            .expect("seed prefs");

        let settings = block_on(load_settings(&prefs));
        assert_eq!(settings.wallpaper, Wallpaper::Tech);
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(settings.animations);
        assert!(!settings.sounds);
        assert!(settings.notifications);
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let prefs = MemoryPrefsStore::default();
        block_on(prefs.save_pref(SETTINGS_PREFS_KEY, "{not json"))
            .expect("seed prefs");

        assert_eq!(block_on(load_settings(&prefs)), DesktopSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let prefs = MemoryPrefsStore::default();
        let settings = DesktopSettings {
            theme: ThemeMode::Light,
            wallpaper: Wallpaper::Gradient,
            animations: false,
            sounds: true,
            notifications: false,
        };

        block_on(save_settings(&prefs, &settings)).expect("save");
        assert!(prefs
            .raw(SETTINGS_PREFS_KEY)
            .is_some_and(|raw| raw.contains("\"theme\":\"light\"")));
        assert_eq!(block_on(load_settings(&prefs)), settings);
    }
}
