use super::*;

#[component]
/// Push button with optional leading and trailing icons.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<MaybeSignal<String>>,
    #[prop(optional, into)] title: Option<MaybeSignal<String>>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.as_ref().map(|label| label.get())
            title=move || title.as_ref().map(|title| title.get())
            aria-pressed=move || selected.get().then_some("true")
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| forward(on_click, ev)
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Anchor rendered with button styling that opens an external page in a new tab.
///
/// Clicks never bubble, so a link inside an interactive card does not trigger the card.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=merge_layout_class("ui-button", layout_class)
            href=href
            target="_blank"
            rel="noopener noreferrer"
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=|ev| ev.stop_propagation()
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </a>
    }
}

#[component]
/// Single-line text input bound to an external value signal.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=merge_layout_class("ui-field", layout_class)
            placeholder=placeholder
            aria-label=aria_label
            autocomplete="off"
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| forward(on_input, ev)
            on:keydown=move |ev| forward(on_keydown, ev)
        />
    }
}

#[component]
/// On/off toggle with `role="switch"`; Space and Enter toggle it like a click.
pub fn Switch(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let toggle = move || forward(on_toggle, !checked.get_untracked());

    view! {
        <button
            type="button"
            class="ui-switch"
            role="switch"
            aria-label=aria_label
            aria-checked=move || checked.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |_| toggle()
            on:keydown=move |ev| {
                if matches!(ev.key().as_str(), " " | "Enter") {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Horizontal progress meter; `value` is capped at `max`.
pub fn ProgressBar(
    max: u32,
    value: u32,
    #[prop(default = TextTone::Accent)] tone: TextTone,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let value = value.min(max);

    view! {
        <progress
            class="ui-progress"
            max=max
            value=value
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-tone=tone.token()
        ></progress>
    }
}

#[component]
/// Icon, title, and description row with a trailing control such as a [`Switch`].
pub fn ToggleRow(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-toggle-row" data-ui-primitive="true" data-ui-kind="toggle-row">
            {icon.map(|icon| view! { <span data-ui-slot="icon"><Icon icon size=IconSize::Sm /></span> })}
            <span data-ui-slot="copy">
                <span data-ui-slot="title">{title}</span>
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
        </div>
    }
}
