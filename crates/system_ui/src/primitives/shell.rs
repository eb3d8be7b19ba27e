use super::*;

#[component]
/// Full-viewport desktop container.
///
/// Pointer moves and releases anywhere on the desktop are forwarded so window drags and
/// resizes keep tracking once the pointer leaves the frame being dragged.
pub fn DesktopRoot(
    #[prop(into)] wallpaper: MaybeSignal<String>,
    #[prop(into)] animations: MaybeSignal<bool>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-wallpaper=move || wallpaper.get()
            data-ui-animations=move || bool_token(animations.get())
            on:pointermove=move |ev| forward(on_pointermove, ev)
            on:pointerup=move |ev| forward(on_pointerup, ev)
            on:pointercancel=move |ev| forward(on_pointerup, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Wallpaper layer behind every other desktop element.
pub fn DesktopBackdrop(#[prop(into)] wallpaper: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div
            class="desktop-backdrop"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            data-ui-variant=move || wallpaper.get()
        ></div>
    }
}

#[component]
/// Column of desktop launcher icons.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <div class="ui-desktop-icon-grid" data-ui-primitive="true" data-ui-kind="desktop-icon-grid">
            {children()}
        </div>
    }
}

#[component]
/// Desktop launcher icon; apps open on double-click or Enter.
pub fn DesktopIconButton(
    #[prop(into)] title: String,
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| forward(on_dblclick, ev)
            on:keydown=move |ev| forward(on_keydown, ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Positioning context for window frames.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-layer" data-ui-primitive="true" data-ui-kind="desktop-window-layer">
            {children()}
        </div>
    }
}

#[component]
/// Absolutely positioned window.
///
/// `style` carries the geometry and stacking order; minimized frames stay mounted and are
/// hidden through `data-ui-minimized`.
pub fn WindowFrame(
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] focused: MaybeSignal<bool>,
    #[prop(into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            aria-hidden=move || minimized.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Window header; pointer-down here starts a drag.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Title text group inside [`WindowTitleBar`].
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Row of [`WindowControlButton`]s.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button.
///
/// Pointer-down is stopped here so pressing a control never starts a titlebar drag.
pub fn WindowControlButton(
    icon: IconName,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <Button
            aria_label
            disabled
            ui_slot="window-control"
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
            on_click=Callback::new(move |ev: MouseEvent| forward(on_click, ev))
        >
            <Icon icon size=IconSize::Xs />
        </Button>
    }
}

#[component]
/// Scrollable content area of a window.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Invisible grab strip on one edge or corner of a window; `edge` becomes its slot token.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        ></div>
    }
}

#[component]
/// Fixed status bar across the top of the desktop.
pub fn TopBar(#[prop(into)] aria_label: String, children: Children) -> impl IntoView {
    view! {
        <header
            class="ui-topbar"
            role="banner"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="topbar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Named region inside [`TopBar`].
pub fn TopBarSection(ui_slot: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-topbar-section"
            data-ui-primitive="true"
            data-ui-kind="topbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Floating launcher dock.
pub fn Dock(#[prop(into)] aria_label: String, children: Children) -> impl IntoView {
    view! {
        <nav class="ui-dock" aria-label=aria_label data-ui-primitive="true" data-ui-kind="dock">
            {children()}
        </nav>
    }
}

#[component]
/// Dock launcher button with a running-state indicator.
///
/// `state` is one of `closed`, `active` or `minimized`.
pub fn DockButton(
    icon: IconName,
    #[prop(into)] title: String,
    #[prop(into)] state: MaybeSignal<&'static str>,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dock-button"
            title=title.clone()
            aria-label=title
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-state=move || state.get()
            data-ui-accent=accent
            on:click=move |ev| forward(on_click, ev)
        >
            <Icon icon size=IconSize::Lg />
            <span data-ui-slot="indicator" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Vertical separator between dock groups.
pub fn DockDivider() -> impl IntoView {
    view! {
        <span
            class="ui-dock-divider"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="dock-divider"
        ></span>
    }
}

#[component]
/// Round wallpaper preview swatch.
pub fn WallpaperSwatch(
    variant: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-wallpaper-swatch"
            title=title.clone()
            aria-label=title
            aria-pressed=move || selected.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="wallpaper-swatch"
            data-ui-variant=variant
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| forward(on_click, ev)
        ></button>
    }
}
