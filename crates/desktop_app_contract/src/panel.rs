use std::rc::Rc;

use leptos::*;
use platform_host::{ChatTransport, ContentSource, HostServices};

use crate::{
    load_content_document, AppId, ContentDocument, ContentError, ContentId, DesktopSettings,
};

/// Loading state of the content document as seen by a panel.
pub type ContentLoad = Option<Result<ContentDocument, ContentError>>;

/// Requests a panel can send to the window manager hosting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Close the hosting window.
    Close,
    /// Minimize the hosting window.
    Minimize,
    /// Raise the hosting window.
    Focus,
    /// Open (or raise) another dock app by id.
    OpenApp(AppId),
    /// Replace the desktop settings and persist them.
    ApplySettings(DesktopSettings),
}

/// Command channel from a mounted panel back into the window manager.
#[derive(Clone, Copy)]
pub struct PanelHost {
    sender: Callback<PanelCommand>,
}

impl PanelHost {
    /// Wraps the runtime command callback.
    pub fn new(sender: Callback<PanelCommand>) -> Self {
        Self { sender }
    }

    /// Closes the hosting window.
    pub fn close(&self) {
        self.sender.call(PanelCommand::Close);
    }

    /// Minimizes the hosting window.
    pub fn minimize(&self) {
        self.sender.call(PanelCommand::Minimize);
    }

    /// Raises the hosting window.
    pub fn focus(&self) {
        self.sender.call(PanelCommand::Focus);
    }

    /// Opens another app's window, or raises it when already open.
    pub fn open_app(&self, app_id: AppId) {
        self.sender.call(PanelCommand::OpenApp(app_id));
    }

    /// Applies and persists new desktop settings.
    pub fn apply_settings(&self, settings: DesktopSettings) {
        self.sender.call(PanelCommand::ApplySettings(settings));
    }
}

/// Data services injected into every panel.
#[derive(Clone)]
pub struct PanelServices {
    /// Portfolio content document source.
    pub content: Rc<dyn ContentSource>,
    /// Chat assistant transport.
    pub chat: Rc<dyn ChatTransport>,
    /// Current desktop settings owned by the runtime.
    pub settings: Signal<DesktopSettings>,
}

impl PanelServices {
    /// Builds the panel bundle from host adapters and the runtime settings signal.
    pub fn from_host(host: &HostServices, settings: Signal<DesktopSettings>) -> Self {
        Self {
            content: host.content.clone(),
            chat: host.chat.clone(),
            settings,
        }
    }

    /// Starts loading the content document and returns a signal that is `None` until it settles.
    ///
    /// Failures are logged under `label` and surfaced as `Some(Err(_))` so the panel can render
    /// its own fallback.
    pub fn content_document(&self, label: &'static str) -> ReadSignal<ContentLoad> {
        let (document, set_document) = create_signal(None);
        let content = self.content.clone();
        spawn_local(async move {
            let loaded = load_content_document(content.as_ref()).await;
            if let Err(err) = &loaded {
                logging::warn!("failed to load {label} data: {err}");
            }
            set_document.set(Some(loaded));
        });
        document
    }
}

/// Everything a panel receives when mounted into a window.
#[derive(Clone)]
pub struct PanelMountContext {
    /// Id of the hosting window.
    pub app_id: AppId,
    /// Content key the panel was resolved from.
    pub content_id: ContentId,
    /// Command channel to the window manager.
    pub host: PanelHost,
    /// Injected data services.
    pub services: PanelServices,
}

/// Static mount function used by the panel registry.
pub type PanelMountFn = fn(PanelMountContext) -> View;

/// Mountable panel descriptor.
#[derive(Debug, Clone, Copy)]
pub struct PanelModule {
    mount_fn: PanelMountFn,
}

impl PanelModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: PanelMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the panel view.
    pub fn mount(self, context: PanelMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn host_methods_forward_commands_in_order() {
        let _ = leptos::create_runtime();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let host = PanelHost::new(Callback::new(move |command| sink.borrow_mut().push(command)));

        host.focus();
        host.open_app(AppId::trusted("projects"));
        host.minimize();
        host.close();

        assert_eq!(
            *received.borrow(),
            vec![
                PanelCommand::Focus,
                PanelCommand::OpenApp(AppId::trusted("projects")),
                PanelCommand::Minimize,
                PanelCommand::Close,
            ]
        );
    }

    #[test]
    fn services_share_host_adapters() {
        let _ = leptos::create_runtime();
        let host = HostServices::offline();
        let settings = create_rw_signal(DesktopSettings::default());
        let services = PanelServices::from_host(&host, settings.into());

        assert!(Rc::ptr_eq(&services.content, &host.content));
        assert!(Rc::ptr_eq(&services.chat, &host.chat));
        assert_eq!(services.settings.get_untracked(), DesktopSettings::default());
    }
}
