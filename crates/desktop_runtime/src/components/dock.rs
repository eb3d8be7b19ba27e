use super::*;
use crate::dock::dock_entry_state;
use desktop_app_contract::Wallpaper;
use system_ui::{Dock, DockButton, DockDivider, WallpaperSwatch};

fn wallpaper_switch_title(wallpaper: Wallpaper) -> String {
    format!("Switch to {} wallpaper", wallpaper.short_label())
}

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let app_buttons = apps::app_registry()
        .iter()
        .map(|entry| {
            let dock_state =
                Signal::derive(move || dock_entry_state(&state.get().windows, entry).token());
            view! {
                <DockButton
                    icon=entry.icon
                    title=entry.title
                    state=dock_state
                    accent=entry.accent
                    on_click=Callback::new(move |_: web_sys::MouseEvent| {
                        runtime.dispatch_action(DesktopAction::ActivateDockEntry {
                            app_id: entry.id(),
                        });
                    })
                />
            }
        })
        .collect_view();

    let swatches = Wallpaper::ALL
        .into_iter()
        .map(|wallpaper| {
            let selected = Signal::derive(move || state.get().settings.wallpaper == wallpaper);
            view! {
                <WallpaperSwatch
                    variant=wallpaper.token()
                    title=wallpaper_switch_title(wallpaper)
                    selected
                    on_click=Callback::new(move |_: web_sys::MouseEvent| {
                        runtime.dispatch_action(DesktopAction::SetWallpaper { wallpaper });
                    })
                />
            }
        })
        .collect_view();

    view! {
        <Dock aria_label="Applications">
            {app_buttons}
            <DockDivider />
            {swatches}
        </Dock>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallpaper_titles_use_short_labels() {
        assert_eq!(wallpaper_switch_title(Wallpaper::Space), "Switch to Space wallpaper");
        assert_eq!(wallpaper_switch_title(Wallpaper::Tech), "Switch to Tech wallpaper");
        assert_eq!(
            wallpaper_switch_title(Wallpaper::Gradient),
            "Switch to Gradient wallpaper"
        );
    }
}
