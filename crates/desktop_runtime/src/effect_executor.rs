//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use desktop_app_contract::ThemeMode;
use leptos::*;

use crate::{persistence, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

const DARK_CLASS: &str = "dark";
const LIGHT_CLASS: &str = "light";

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before draining so nested dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::PersistSettings => {
            let prefs = runtime.host.get_value().prefs;
            let settings = runtime.state.get_untracked().settings;
            spawn_local(async move {
                if let Err(err) = persistence::save_settings(prefs.as_ref(), &settings).await {
                    logging::warn!("settings save failed: {err}");
                }
            });
        }
        RuntimeEffect::ApplyTheme(mode) => apply_theme_mode(mode),
    }
}

/// Class placed on the document root for a theme mode.
pub(crate) fn theme_class(mode: ThemeMode, system_prefers_dark: bool) -> &'static str {
    if mode.is_dark(system_prefers_dark) {
        DARK_CLASS
    } else {
        LIGHT_CLASS
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_mode(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let _ = class_list.remove_2(DARK_CLASS, LIGHT_CLASS);
    if let Err(err) = class_list.add_1(theme_class(mode, system_prefers_dark())) {
        logging::warn!("theme class update failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_mode(mode: ThemeMode) {
    let _ = theme_class(mode, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_media_preference() {
        assert_eq!(theme_class(ThemeMode::System, true), "dark");
        assert_eq!(theme_class(ThemeMode::System, false), "light");
    }

    #[test]
    fn explicit_modes_ignore_media_preference() {
        assert_eq!(theme_class(ThemeMode::Dark, false), "dark");
        assert_eq!(theme_class(ThemeMode::Light, true), "light");
    }
}
