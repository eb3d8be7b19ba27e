use super::*;
use crate::apps::{missing_panel_message, resolve_panel, PanelResolution};
use crate::model::{ResizeEdge, Size};
use desktop_app_contract::{ContentId, PanelCommand, PanelHost, PanelMountContext};
use system_ui::{
    EmptyState, IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(target_arch = "wasm32")]
fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size {
        width: width as i32,
        height: height as i32,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_size() -> Option<Size> {
    None
}

/// Maps a panel request onto the reducer action for the hosting window.
pub(super) fn panel_command_action(app_id: &AppId, command: PanelCommand) -> DesktopAction {
    match command {
        PanelCommand::Close => DesktopAction::Close {
            app_id: app_id.clone(),
        },
        PanelCommand::Minimize => DesktopAction::Minimize {
            app_id: app_id.clone(),
        },
        PanelCommand::Focus => DesktopAction::Focus {
            app_id: app_id.clone(),
        },
        PanelCommand::OpenApp(target) => DesktopAction::Launch { app_id: target },
        PanelCommand::ApplySettings(settings) => DesktopAction::ApplySettings { settings },
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId, content_id: ContentId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window_id = app_id.clone();
    let window = Signal::derive(move || runtime.state.get().windows.get(&window_id).cloned());
    let focused_id = app_id.clone();
    let focused = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .topmost()
            .is_some_and(|top| top.id == focused_id)
    });

    let style = Signal::derive(move || {
        window
            .get()
            .map(|win| win.frame_style())
            .unwrap_or_default()
    });
    let title = Signal::derive(move || window.get().map(|win| win.title).unwrap_or_default());
    let minimized = Signal::derive(move || window.get().is_some_and(|win| win.minimized));

    let focus_id = app_id.clone();
    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::Focus {
                app_id: focus_id.clone(),
            });
        }
    });
    let minimize_id = app_id.clone();
    let minimize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Minimize {
            app_id: minimize_id.clone(),
        })
    });
    let close_id = app_id.clone();
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Close {
            app_id: close_id.clone(),
        })
    });
    let move_id = app_id.clone();
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id: move_id.clone(),
            pointer: pointer_from_pointer_event(&ev),
            viewport: viewport_size(),
        });
    });

    let resize_handles = ResizeEdge::ALL
        .into_iter()
        .map(|edge| view! { <WindowResizeHandle app_id=app_id.clone() edge /> })
        .collect_view();

    view! {
        <WindowFrame
            style
            aria_label=title
            focused
            minimized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=minimize
                    />
                    <WindowControlButton
                        icon=IconName::WindowMaximize
                        aria_label="Maximize window"
                        disabled=true
                    />
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContents app_id=app_id.clone() content_id />
            </WindowBody>
            {resize_handles}
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(app_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app_id: app_id.clone(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown /> }
}

#[component]
fn WindowContents(app_id: AppId, content_id: ContentId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    match resolve_panel(&content_id) {
        PanelResolution::Found(module) => {
            let command_id = app_id.clone();
            let sender = Callback::new(move |command: PanelCommand| {
                runtime.dispatch_action(panel_command_action(&command_id, command));
            });
            module.mount(PanelMountContext {
                app_id,
                content_id,
                host: PanelHost::new(sender),
                services: runtime.panel_services(),
            })
        }
        PanelResolution::NotFound(content_id) => view! {
            <EmptyState>
                <p>{missing_panel_message(&content_id)}</p>
            </EmptyState>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktop_app_contract::{DesktopSettings, Wallpaper};
    use pretty_assertions::assert_eq;

    #[test]
    fn window_scoped_commands_target_the_hosting_window() {
        let host = AppId::trusted("projects");
        assert_eq!(
            panel_command_action(&host, PanelCommand::Minimize),
            DesktopAction::Minimize {
                app_id: host.clone()
            }
        );
        assert_eq!(
            panel_command_action(&host, PanelCommand::Close),
            DesktopAction::Close {
                app_id: host.clone()
            }
        );
    }

    #[test]
    fn open_app_launches_the_requested_app() {
        let host = AppId::trusted("chat");
        assert_eq!(
            panel_command_action(&host, PanelCommand::OpenApp(AppId::trusted("resume"))),
            DesktopAction::Launch {
                app_id: AppId::trusted("resume")
            }
        );
    }

    #[test]
    fn settings_are_forwarded_unchanged() {
        let settings = DesktopSettings {
            wallpaper: Wallpaper::Gradient,
            ..DesktopSettings::default()
        };
        assert_eq!(
            panel_command_action(&AppId::trusted("settings"), PanelCommand::ApplySettings(settings)),
            DesktopAction::ApplySettings { settings }
        );
    }
}
