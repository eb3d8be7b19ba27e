use desktop_app_contract::{AppId, ContentId, DesktopSettings, ThemeMode, Wallpaper};
use thiserror::Error;

use crate::{
    apps::app_descriptor,
    dock::{dock_click_action, dock_entry_state},
    model::{
        resize_geometry, DesktopState, DragSession, GeometryPatch, InteractionState,
        PointerPosition, ResizeEdge, ResizeSession, Size,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open a window, or raise and un-minimize the existing one with the same id.
    Open {
        /// Window id.
        app_id: AppId,
        /// Title bar text.
        title: String,
        /// Panel key resolved by the registry.
        content_id: ContentId,
    },
    /// Open a registered app by id using its registry title and content key.
    Launch {
        /// Registered app id.
        app_id: AppId,
    },
    /// Close a window.
    Close {
        /// Window to close.
        app_id: AppId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Raise a window without changing its minimized flag.
    Focus {
        /// Window to raise.
        app_id: AppId,
    },
    /// Un-minimize and raise a window.
    Restore {
        /// Window to restore.
        app_id: AppId,
    },
    /// Merge a geometry patch into a window.
    UpdateGeometry {
        /// Window to update.
        app_id: AppId,
        /// Fields to replace.
        patch: GeometryPatch,
    },
    /// Route a dock click according to the app's current dock state.
    ActivateDockEntry {
        /// Registered app id.
        app_id: AppId,
    },
    /// Start dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Visible desktop size, when the host can report it.
        viewport: Option<Size>,
    },
    /// Update an active drag session.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag session.
    EndMove,
    /// Start resizing a window from an edge handle.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Dragged edge.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an active resize session.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize session.
    EndResize,
    /// Change the wallpaper and persist settings.
    SetWallpaper {
        /// Selected wallpaper.
        wallpaper: Wallpaper,
    },
    /// Replace all settings and persist them.
    ApplySettings {
        /// New settings.
        settings: DesktopSettings,
    },
    /// Load settings read at boot without writing them back.
    HydrateSettings {
        /// Stored settings.
        settings: DesktopSettings,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the provider to execute.
pub enum RuntimeEffect {
    /// Write the current settings blob.
    PersistSettings,
    /// Apply the color scheme to the document root.
    ApplyTheme(ThemeMode),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. Window-level operations on unknown ids are no-ops, not errors.
pub enum ReducerError {
    /// A pointer update arrived without a matching drag or resize session.
    #[error("no active drag or resize session")]
    NoActiveInteraction,
    /// The app id is not in the registry.
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::NoActiveInteraction`] for pointer updates outside a session and
/// [`ReducerError::UnknownApp`] when launching an id the registry does not know.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open {
            app_id,
            title,
            content_id,
        } => {
            state.windows.open(app_id, title, content_id);
        }
        DesktopAction::Launch { app_id } => {
            let entry = app_descriptor(&app_id).ok_or(ReducerError::UnknownApp(app_id))?;
            return reduce_desktop(state, interaction, entry.open_action());
        }
        DesktopAction::Close { app_id } => {
            state.windows.close(&app_id);
            end_sessions_for(interaction, &app_id);
        }
        DesktopAction::Minimize { app_id } => {
            state.windows.minimize(&app_id);
            end_sessions_for(interaction, &app_id);
        }
        DesktopAction::Focus { app_id } => {
            state.windows.focus(&app_id);
        }
        DesktopAction::Restore { app_id } => {
            state.windows.restore(&app_id);
        }
        DesktopAction::UpdateGeometry { app_id, patch } => {
            state.windows.update_geometry(&app_id, patch);
        }
        DesktopAction::ActivateDockEntry { app_id } => {
            let entry = app_descriptor(&app_id).ok_or(ReducerError::UnknownApp(app_id))?;
            let dock_state = dock_entry_state(&state.windows, entry);
            return reduce_desktop(state, interaction, dock_click_action(entry, dock_state));
        }
        DesktopAction::BeginMove {
            app_id,
            pointer,
            viewport,
        } => {
            if let Some(window) = state.windows.get(&app_id) {
                let session = DragSession {
                    window_id: app_id.clone(),
                    pointer_start: pointer,
                    position_start: window.position,
                    size: window.size,
                    viewport,
                };
                state.windows.focus(&app_id);
                interaction.resizing = None;
                interaction.dragging = Some(session);
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            let session = interaction
                .dragging
                .as_ref()
                .ok_or(ReducerError::NoActiveInteraction)?;
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let target = session
                .position_start
                .offset(dx, dy)
                .kept_reachable(session.size, session.viewport);
            state
                .windows
                .update_geometry(&session.window_id, GeometryPatch::position(target));
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
        } => {
            if let Some(window) = state.windows.get(&app_id) {
                let session = ResizeSession {
                    window_id: app_id.clone(),
                    edge,
                    pointer_start: pointer,
                    position_start: window.position,
                    size_start: window.size,
                };
                state.windows.focus(&app_id);
                interaction.dragging = None;
                interaction.resizing = Some(session);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            let session = interaction
                .resizing
                .as_ref()
                .ok_or(ReducerError::NoActiveInteraction)?;
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let (position, size) =
                resize_geometry(session.position_start, session.size_start, session.edge, dx, dy);
            state.windows.update_geometry(
                &session.window_id,
                GeometryPatch {
                    position: Some(position),
                    size: Some(size),
                },
            );
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::SetWallpaper { wallpaper } => {
            state.settings_settled = true;
            if state.settings.wallpaper != wallpaper {
                state.settings.wallpaper = wallpaper;
                effects.push(RuntimeEffect::PersistSettings);
            }
        }
        DesktopAction::ApplySettings { settings } => {
            let theme_changed = state.settings.theme != settings.theme;
            state.settings = settings;
            state.settings_settled = true;
            effects.push(RuntimeEffect::PersistSettings);
            if theme_changed {
                effects.push(RuntimeEffect::ApplyTheme(settings.theme));
            }
        }
        DesktopAction::HydrateSettings { settings } => {
            // A choice made before the stored blob arrived wins over the blob.
            if !state.settings_settled {
                state.settings = settings;
                state.settings_settled = true;
            }
            effects.push(RuntimeEffect::ApplyTheme(state.settings.theme));
        }
    }

    Ok(effects)
}

fn end_sessions_for(interaction: &mut InteractionState, app_id: &AppId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.window_id == app_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| &session.window_id == app_id)
    {
        interaction.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Position, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, REACHABLE_MARGIN, TITLEBAR_HEIGHT,
    };
    use pretty_assertions::assert_eq;

    fn id(raw: &str) -> AppId {
        AppId::trusted(raw)
    }

    fn launch(state: &mut DesktopState, interaction: &mut InteractionState, raw: &str) {
        reduce_desktop(state, interaction, DesktopAction::Launch { app_id: id(raw) })
            .expect("launch");
    }

    fn topmost(state: &DesktopState) -> Option<String> {
        state
            .windows
            .topmost()
            .map(|window| window.id.as_str().to_string())
    }

    #[test]
    fn launch_uses_registry_title_and_content() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "chat");

        let chat = state.windows.get(&id("chat")).expect("chat window");
        assert_eq!(chat.title, "SanjayBot AI Assistant");
        assert_eq!(chat.content_id, ContentId::new("ChatBot"));
    }

    #[test]
    fn launch_of_unknown_app_is_an_error_and_changes_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Launch { app_id: id("paint") },
        )
        .expect_err("unknown app");
        assert_eq!(err, ReducerError::UnknownApp(id("paint")));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn dock_click_restores_minimized_skills() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "skills");
        launch(&mut state, &mut interaction, "resume");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Minimize { app_id: id("skills") },
        )
        .expect("minimize");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDockEntry { app_id: id("skills") },
        )
        .expect("dock click");

        let skills = state.windows.get(&id("skills")).expect("skills");
        assert!(!skills.minimized);
        assert_eq!(skills.z_index, state.windows.next_z() - 1);
        assert_eq!(topmost(&state).as_deref(), Some("skills"));
    }

    #[test]
    fn dock_click_on_active_entry_refocuses_without_duplicating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "resume");
        launch(&mut state, &mut interaction, "projects");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDockEntry { app_id: id("resume") },
        )
        .expect("dock click");

        assert_eq!(state.windows.len(), 2);
        assert_eq!(topmost(&state).as_deref(), Some("resume"));
    }

    #[test]
    fn unknown_window_operations_are_silent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "resume");
        let snapshot = state.clone();

        for action in [
            DesktopAction::Close { app_id: id("ghost") },
            DesktopAction::Minimize { app_id: id("ghost") },
            DesktopAction::Focus { app_id: id("ghost") },
            DesktopAction::Restore { app_id: id("ghost") },
            DesktopAction::UpdateGeometry {
                app_id: id("ghost"),
                patch: GeometryPatch::position(Position { x: 1, y: 1 }),
            },
            DesktopAction::BeginMove {
                app_id: id("ghost"),
                pointer: PointerPosition::default(),
                viewport: None,
            },
        ] {
            let effects = reduce_desktop(&mut state, &mut interaction, action).expect("no-op");
            assert!(effects.is_empty());
        }
        assert_eq!(state, snapshot);
        assert!(!interaction.is_active());
    }

    #[test]
    fn drag_session_moves_window_by_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "resume");
        launch(&mut state, &mut interaction, "projects");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("resume"),
                pointer: PointerPosition { x: 300, y: 100 },
                viewport: None,
            },
        )
        .expect("begin move");
        assert_eq!(topmost(&state).as_deref(), Some("resume"));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 340, y: 70 },
            },
        )
        .expect("update move");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end move");

        assert_eq!(
            state.windows.position_of(&id("resume")),
            Some(Position { x: 140, y: 50 })
        );
        assert!(!interaction.is_active());
    }

    #[test]
    fn resize_session_clamps_to_minimum() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "resume");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: id("resume"),
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 900, y: 680 },
            },
        )
        .expect("begin resize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 200, y: 180 },
            },
        )
        .expect("update resize");

        assert_eq!(
            state.windows.get(&id("resume")).map(|w| w.size),
            Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            })
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize).expect("end");
        assert!(interaction.resizing.is_none());
    }

    #[test]
    fn pointer_updates_without_session_are_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let pointer = PointerPosition { x: 5, y: 5 };

        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::UpdateMove { pointer }),
            Err(ReducerError::NoActiveInteraction)
        );
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::UpdateResize { pointer }),
            Err(ReducerError::NoActiveInteraction)
        );
    }

    #[test]
    fn closing_the_dragged_window_ends_the_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "github");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("github"),
                pointer: PointerPosition::default(),
                viewport: None,
            },
        )
        .expect("begin move");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Close { app_id: id("github") },
        )
        .expect("close");
        assert!(!interaction.is_active());
    }

    #[test]
    fn settings_changes_emit_persistence_effects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper: Wallpaper::Tech,
            },
        )
        .expect("wallpaper");
        assert_eq!(effects, vec![RuntimeEffect::PersistSettings]);
        assert_eq!(state.settings.wallpaper, Wallpaper::Tech);

        let unchanged = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper: Wallpaper::Tech,
            },
        )
        .expect("same wallpaper");
        assert!(unchanged.is_empty());

        let light = DesktopSettings {
            theme: ThemeMode::Light,
            ..state.settings
        };
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplySettings { settings: light },
        )
        .expect("apply");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistSettings,
                RuntimeEffect::ApplyTheme(ThemeMode::Light),
            ]
        );
    }

    #[test]
    fn hydration_applies_theme_without_persisting() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let stored = DesktopSettings {
            wallpaper: Wallpaper::Gradient,
            theme: ThemeMode::System,
            ..DesktopSettings::default()
        };

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateSettings { settings: stored },
        )
        .expect("hydrate");
        assert_eq!(effects, vec![RuntimeEffect::ApplyTheme(ThemeMode::System)]);
        assert_eq!(state.settings, stored);
    }

    #[test]
    fn drag_past_the_viewport_keeps_the_title_bar_on_screen() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "resume");
        let viewport = Size {
            width: 1280,
            height: 720,
        };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("resume"),
                pointer: PointerPosition { x: 400, y: 90 },
                viewport: Some(viewport),
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: -3000, y: -2000 },
            },
        )
        .expect("drag up and left");
        assert_eq!(
            state.windows.position_of(&id("resume")),
            Some(Position {
                x: REACHABLE_MARGIN - 800,
                y: 0,
            })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 9000, y: 9000 },
            },
        )
        .expect("drag down and right");
        assert_eq!(
            state.windows.position_of(&id("resume")),
            Some(Position {
                x: 1280 - REACHABLE_MARGIN,
                y: 720 - TITLEBAR_HEIGHT,
            })
        );
    }

    #[test]
    fn late_hydration_keeps_settings_changed_at_boot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper: Wallpaper::Tech,
            },
        )
        .expect("wallpaper");

        let stored = DesktopSettings {
            wallpaper: Wallpaper::Gradient,
            theme: ThemeMode::Light,
            ..DesktopSettings::default()
        };
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateSettings { settings: stored },
        )
        .expect("hydrate");

        assert_eq!(state.settings.wallpaper, Wallpaper::Tech);
        assert_eq!(state.settings.theme, ThemeMode::Dark);
        assert_eq!(effects, vec![RuntimeEffect::ApplyTheme(ThemeMode::Dark)]);
    }
}
