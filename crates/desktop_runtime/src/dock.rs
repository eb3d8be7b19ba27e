//! Dock entry state and click routing.
//!
//! The dock only reads the window store; clicks are translated into [`DesktopAction`] values so
//! every mutation still goes through the reducer.

use crate::{apps::AppDescriptor, reducer::DesktopAction, window_manager::WindowManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEntryState {
    NotOpen,
    Active,
    Minimized,
}

impl DockEntryState {
    pub const fn token(self) -> &'static str {
        match self {
            Self::NotOpen => "closed",
            Self::Active => "active",
            Self::Minimized => "minimized",
        }
    }
}

pub fn dock_entry_state(windows: &WindowManager, entry: &AppDescriptor) -> DockEntryState {
    match windows.get(&entry.id()) {
        None => DockEntryState::NotOpen,
        Some(window) if window.minimized => DockEntryState::Minimized,
        Some(_) => DockEntryState::Active,
    }
}

/// Minimized entries restore; anything else opens, which raises an existing window.
pub fn dock_click_action(entry: &AppDescriptor, state: DockEntryState) -> DesktopAction {
    match state {
        DockEntryState::Minimized => DesktopAction::Restore {
            app_id: entry.id(),
        },
        DockEntryState::NotOpen | DockEntryState::Active => entry.open_action(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::app_registry;
    use desktop_app_contract::AppId;
    use pretty_assertions::assert_eq;

    fn entry(app_id: &str) -> &'static AppDescriptor {
        app_registry()
            .iter()
            .find(|entry| entry.app_id == app_id)
            .expect("registered app")
    }

    #[test]
    fn entry_state_tracks_the_store() {
        let skills = entry("skills");
        let mut windows = WindowManager::default();
        assert_eq!(dock_entry_state(&windows, skills), DockEntryState::NotOpen);

        windows.open(skills.id(), skills.title, skills.content());
        assert_eq!(dock_entry_state(&windows, skills), DockEntryState::Active);

        windows.minimize(&skills.id());
        assert_eq!(dock_entry_state(&windows, skills), DockEntryState::Minimized);
    }

    #[test]
    fn clicks_route_by_entry_state() {
        let skills = entry("skills");
        assert_eq!(
            dock_click_action(skills, DockEntryState::Minimized),
            DesktopAction::Restore {
                app_id: AppId::trusted("skills"),
            }
        );
        assert_eq!(
            dock_click_action(skills, DockEntryState::NotOpen),
            skills.open_action()
        );
        assert_eq!(
            dock_click_action(skills, DockEntryState::Active),
            skills.open_action()
        );
    }

    #[test]
    fn state_tokens_match_dock_button_contract() {
        assert_eq!(DockEntryState::NotOpen.token(), "closed");
        assert_eq!(DockEntryState::Active.token(), "active");
        assert_eq!(DockEntryState::Minimized.token(), "minimized");
    }
}
