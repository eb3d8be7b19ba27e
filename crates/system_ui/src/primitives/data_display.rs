use super::*;

#[component]
/// Plain styled container.
pub fn Surface(
    #[prop(optional)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Titled `<section>` grouping related controls.
pub fn Panel(
    #[prop(optional)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Lg)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </section>
    }
}

#[component]
/// Glass card; becomes interactive when `on_click` is set.
pub fn Card(
    #[prop(optional)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            data-ui-interactive=bool_token(on_click.is_some())
            on:click=move |ev| forward(on_click, ev)
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Block heading; defaults to the title role.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            role="heading"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Pill used for technology chips and status labels.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Centered message shown when a panel has nothing to render.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}

#[component]
/// Spinner with an optional status label, shown while panel data loads.
pub fn LoadingState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-loading-state", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="loading-state"
        >
            <span data-ui-slot="spinner">
                <Icon icon=IconName::Loader size=IconSize::Xl />
            </span>
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </div>
    }
}

#[component]
/// Icon, headline value, and caption tile for profile statistics.
pub fn StatTile(
    icon: IconName,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(into)] label: String,
    #[prop(default = TextTone::Accent)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stat-tile", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stat-tile"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="icon"><Icon icon size=IconSize::Md /></span>
            <span data-ui-slot="value">{move || value.get()}</span>
            <span data-ui-slot="label">{label}</span>
        </div>
    }
}
