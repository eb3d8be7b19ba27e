//! Settings panel for theme, wallpaper, and system preference switches.
//!
//! The panel holds no settings state of its own. It renders the runtime-owned
//! [`DesktopSettings`] signal and sends every change back through
//! [`PanelHost::apply_settings`](desktop_app_contract::PanelHost::apply_settings), which applies
//! the theme and persists the blob.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{DesktopSettings, PanelMountContext, ThemeMode, Wallpaper};
use leptos::*;
use system_ui::prelude::*;

const ABOUT_TECH: [&str; 5] = ["Rust", "Leptos", "WebAssembly", "Trunk", "CSS Tokens"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsChange {
    Theme(ThemeMode),
    Wallpaper(Wallpaper),
    Animations(bool),
    Sounds(bool),
    Notifications(bool),
}

impl SettingsChange {
    fn apply(self, mut settings: DesktopSettings) -> DesktopSettings {
        match self {
            Self::Theme(theme) => settings.theme = theme,
            Self::Wallpaper(wallpaper) => settings.wallpaper = wallpaper,
            Self::Animations(enabled) => settings.animations = enabled,
            Self::Sounds(enabled) => settings.sounds = enabled,
            Self::Notifications(enabled) => settings.notifications = enabled,
        }
        settings
    }
}

fn theme_icon(theme: ThemeMode) -> IconName {
    match theme {
        ThemeMode::Light => IconName::Sun,
        ThemeMode::Dark => IconName::Moon,
        ThemeMode::System => IconName::Monitor,
    }
}

#[derive(Clone, Copy)]
struct PreferenceSwitch {
    icon: IconName,
    title: &'static str,
    description: &'static str,
    read: fn(&DesktopSettings) -> bool,
    change: fn(bool) -> SettingsChange,
}

fn animations_enabled(settings: &DesktopSettings) -> bool {
    settings.animations
}

fn sounds_enabled(settings: &DesktopSettings) -> bool {
    settings.sounds
}

fn notifications_enabled(settings: &DesktopSettings) -> bool {
    settings.notifications
}

const PREFERENCE_SWITCHES: [PreferenceSwitch; 3] = [
    PreferenceSwitch {
        icon: IconName::Image,
        title: "Smooth Animations",
        description: "Enable smooth window transitions and effects",
        read: animations_enabled,
        change: SettingsChange::Animations,
    },
    PreferenceSwitch {
        icon: IconName::Volume,
        title: "System Sounds",
        description: "Play sounds for system events and notifications",
        read: sounds_enabled,
        change: SettingsChange::Sounds,
    },
    PreferenceSwitch {
        icon: IconName::Wifi,
        title: "Notifications",
        description: "Show desktop notifications for updates",
        read: notifications_enabled,
        change: SettingsChange::Notifications,
    },
];

#[component]
/// Settings window contents.
pub fn SettingsPanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let settings = context.services.settings;
    let host = context.host;
    let update = move |change: SettingsChange| {
        host.apply_settings(change.apply(settings.get_untracked()));
    };

    view! {
        <div class="app-settings" data-ui-slot="panel-scroll">
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                    <Heading>"Settings"</Heading>
                    <Text tone=TextTone::Secondary>"Customize your SanjayOS experience"</Text>
                </Stack>

                <Panel ui_slot="appearance">
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::Palette size=IconSize::Md />
                        <Heading role=TextRole::Label>"Appearance"</Heading>
                    </Cluster>

                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"Theme"</Text>
                        <Grid gap=LayoutGap::Sm ui_slot="theme-options">
                            {ThemeMode::ALL
                                .into_iter()
                                .map(|theme| view! {
                                    <Button
                                        layout_class="settings-option"
                                        selected=Signal::derive(move || settings.get().theme == theme)
                                        leading_icon=theme_icon(theme)
                                        on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                            update(SettingsChange::Theme(theme))
                                        })
                                    >
                                        {theme.label()}
                                    </Button>
                                })
                                .collect_view()}
                        </Grid>
                    </Stack>

                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"Wallpaper"</Text>
                        <Grid gap=LayoutGap::Sm ui_slot="wallpaper-options">
                            {Wallpaper::ALL
                                .into_iter()
                                .map(|wallpaper| view! {
                                    <Button
                                        layout_class="settings-option"
                                        selected=Signal::derive(move || settings.get().wallpaper == wallpaper)
                                        on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                            update(SettingsChange::Wallpaper(wallpaper))
                                        })
                                    >
                                        <span
                                            data-ui-slot="wallpaper-preview"
                                            data-ui-variant=wallpaper.token()
                                            aria-hidden="true"
                                        ></span>
                                        {wallpaper.label()}
                                    </Button>
                                })
                                .collect_view()}
                        </Grid>
                    </Stack>
                </Panel>

                <Panel ui_slot="system">
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::Monitor size=IconSize::Md />
                        <Heading role=TextRole::Label>"System"</Heading>
                    </Cluster>
                    {PREFERENCE_SWITCHES
                        .into_iter()
                        .map(|switch| view! {
                            <ToggleRow icon=switch.icon title=switch.title description=switch.description>
                                <Switch
                                    aria_label=switch.title.to_string()
                                    checked=Signal::derive(move || (switch.read)(&settings.get()))
                                    on_toggle=Callback::new(move |enabled: bool| update((switch.change)(enabled)))
                                />
                            </ToggleRow>
                        })
                        .collect_view()}
                </Panel>

                <Panel ui_slot="about">
                    <Heading role=TextRole::Label>"About SanjayOS"</Heading>
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>"Version: 1.0.0 (MVP)"</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "Built with Rust, Leptos, and WebAssembly"
                        </Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "Designed for showcasing portfolio content with AI assistance"
                        </Text>
                    </Stack>
                    <Cluster gap=LayoutGap::Sm ui_slot="tech">
                        {ABOUT_TECH
                            .into_iter()
                            .map(|tech| view! { <Badge tone=TextTone::Accent>{tech}</Badge> })
                            .collect_view()}
                    </Cluster>
                </Panel>
            </Stack>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_change_touches_only_its_field() {
        let base = DesktopSettings::default();

        assert_eq!(
            SettingsChange::Theme(ThemeMode::Light).apply(base),
            DesktopSettings {
                theme: ThemeMode::Light,
                ..base
            }
        );
        assert_eq!(
            SettingsChange::Wallpaper(Wallpaper::Gradient).apply(base),
            DesktopSettings {
                wallpaper: Wallpaper::Gradient,
                ..base
            }
        );
        assert_eq!(
            SettingsChange::Sounds(true).apply(base),
            DesktopSettings {
                sounds: true,
                ..base
            }
        );
    }

    #[test]
    fn switches_read_and_write_the_same_field() {
        let base = DesktopSettings::default();
        for switch in PREFERENCE_SWITCHES {
            let current = (switch.read)(&base);
            let toggled = (switch.change)(!current).apply(base);
            assert_eq!((switch.read)(&toggled), !current, "{}", switch.title);
        }
    }

    #[test]
    fn theme_options_have_distinct_icons() {
        let icons: Vec<IconName> = ThemeMode::ALL.into_iter().map(theme_icon).collect();
        assert_eq!(icons, vec![IconName::Sun, IconName::Moon, IconName::Monitor]);
    }
}
