use desktop_app_contract::AppId;
use desktop_runtime::{launch_app, use_desktop_runtime, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_host_services, host_strategy_name};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SanjayOS" />
        <Meta name="description" content="Sanjay's portfolio presented as a desktop operating system." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <DesktopEntry /> } />
                    <Route path="/apps/:app_id" view=DeepLinkEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry(#[prop(optional_no_strip)] launch: Option<AppId>) -> impl IntoView {
    let host_services = build_host_services();
    logging::log!("desktop host strategy: {}", host_strategy_name());

    view! {
        <DesktopProvider host_services>
            <BootLaunch launch />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn DeepLinkEntry() -> impl IntoView {
    let params = use_params_map();
    let raw = params.with_untracked(|map| map.get("app_id").cloned());

    view! { <DesktopEntry launch=deep_link_app(raw) /> }
}

/// Opens the deep-linked app once the runtime context exists.
#[component]
fn BootLaunch(launch: Option<AppId>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    if let Some(app_id) = launch {
        launch_app(runtime, app_id);
    }
}

fn deep_link_app(raw: Option<String>) -> Option<AppId> {
    let raw = raw?;
    match AppId::new(raw.as_str()) {
        Ok(app_id) => Some(app_id),
        Err(err) => {
            logging::warn!("ignoring deep link `{raw}`: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_links_parse_app_ids() {
        assert_eq!(
            deep_link_app(Some("projects".to_string())),
            Some(AppId::trusted("projects"))
        );
        assert_eq!(deep_link_app(Some("Not An App".to_string())), None);
        assert_eq!(deep_link_app(None), None);
    }
}
