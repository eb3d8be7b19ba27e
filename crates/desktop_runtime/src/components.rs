//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod header;
mod window;

use desktop_app_contract::AppId;
use leptos::*;
use system_ui::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer};

use self::{dock::DesktopDock, header::DesktopHeader, window::DesktopWindow};

use crate::{
    apps,
    model::PointerPosition,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: wallpaper, header, desktop icons, windows, and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let wallpaper = Signal::derive(move || state.get().settings.wallpaper.token().to_string());
    let animations = Signal::derive(move || state.get().settings.animations);

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if !interaction.is_active() {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        end_active_pointer_interaction(runtime)
    });

    view! {
        <DesktopRoot
            wallpaper
            animations
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <DesktopBackdrop wallpaper />
            <DesktopHeader />
            <DesktopIconGrid>
                {apps::desktop_icon_apps()
                    .map(|(entry, icon)| {
                        let open = entry.open_action();
                        let open_on_key = open.clone();
                        view! {
                            <DesktopIconButton
                                title=icon.label
                                aria_label=format!("Open {}", icon.label)
                                on_dblclick=Callback::new(move |_: web_sys::MouseEvent| {
                                    runtime.dispatch_action(open.clone());
                                })
                                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        runtime.dispatch_action(open_on_key.clone());
                                    }
                                })
                            >
                                <span data-ui-slot="glyph" aria-hidden="true">{icon.glyph}</span>
                                <span data-ui-slot="label">{icon.label}</span>
                            </DesktopIconButton>
                        }
                    })
                    .collect_view()}
            </DesktopIconGrid>

            <DesktopWindowLayer>
                <For
                    each=move || state.get().windows.windows().to_vec()
                    key=|win| win.id.clone()
                    let:win
                >
                    <DesktopWindow app_id=win.id content_id=win.content_id />
                </For>
            </DesktopWindowLayer>

            <DesktopDock />
        </DesktopRoot>
    }
}

/// Opens a registered app by id, as used by deep links.
pub fn launch_app(runtime: DesktopRuntimeContext, app_id: AppId) {
    runtime.dispatch_action(DesktopAction::Launch { app_id });
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
