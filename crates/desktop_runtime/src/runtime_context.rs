//! Reactive container around [`reduce_desktop`].
//!
//! [`DesktopProvider`] owns the desktop and interaction signals plus the effect queue, and
//! hydrates the settings blob once at boot. Rendering lives in [`crate::components`].

use desktop_app_contract::{DesktopSettings, PanelServices};
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    model::{DesktopState, InteractionState},
    persistence,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle used by effects and mounted panels.
    pub host: StoredValue<HostServices>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Settings slice of the desktop state.
    pub fn settings(&self) -> Signal<DesktopSettings> {
        let state = self.state;
        Signal::derive(move || state.get().settings)
    }

    /// Service bundle handed to mounted panels.
    pub fn panel_services(&self) -> PanelServices {
        PanelServices::from_host(&self.host.get_value(), self.settings())
    }
}

fn install_boot_hydration(runtime: DesktopRuntimeContext) {
    let prefs = runtime.host.get_value().prefs;
    spawn_local(async move {
        let settings = persistence::load_settings(prefs.as_ref()).await;
        runtime.dispatch_action(DesktopAction::HydrateSettings { settings });
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted settings.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    // Unchanged slices are not written back.
    let dispatch = Callback::new(move |action: DesktopAction| {
        let before = (state.get_untracked(), interaction.get_untracked());
        let (mut desktop, mut pointer) = before.clone();

        match reduce_desktop(&mut desktop, &mut pointer, action) {
            Ok(emitted) => {
                if desktop != before.0 {
                    state.set(desktop);
                }
                if pointer != before.1 {
                    interaction.set(pointer);
                }
                if !emitted.is_empty() {
                    effects.update(|queue| queue.extend(emitted));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    install_boot_hydration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
