use desktop_app_chat::ChatPanel;
use desktop_app_contract::{AppId, ContentId, PanelModule, PanelMountContext};
use desktop_app_github::GitHubPanel;
use desktop_app_leetcode::LeetCodePanel;
use desktop_app_projects::ProjectsPanel;
use desktop_app_resume::ResumePanel;
use desktop_app_settings::SettingsPanel;
use desktop_app_skills::SkillsPanel;
use leptos::*;
use system_ui::IconName;

use crate::reducer::DesktopAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub glyph: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub title: &'static str,
    pub content_id: &'static str,
    pub icon: IconName,
    pub accent: &'static str,
    pub desktop_icon: Option<DesktopIcon>,
    module: PanelModule,
}

impl AppDescriptor {
    pub fn id(&self) -> AppId {
        AppId::trusted(self.app_id)
    }

    pub fn content(&self) -> ContentId {
        ContentId::new(self.content_id)
    }

    pub fn open_action(&self) -> DesktopAction {
        DesktopAction::Open {
            app_id: self.id(),
            title: self.title.to_string(),
            content_id: self.content(),
        }
    }
}

/// Dock order; desktop icons are the entries carrying a [`DesktopIcon`].
static APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: "resume",
        title: "Resume",
        content_id: "ResumeView",
        icon: IconName::FileText,
        accent: "blue",
        desktop_icon: Some(DesktopIcon {
            glyph: "📝",
            label: "Resume",
        }),
        module: PanelModule::new(mount_resume),
    },
    AppDescriptor {
        app_id: "projects",
        title: "Projects",
        content_id: "ProjectsView",
        icon: IconName::FolderOpen,
        accent: "purple",
        desktop_icon: Some(DesktopIcon {
            glyph: "🚀",
            label: "Projects",
        }),
        module: PanelModule::new(mount_projects),
    },
    AppDescriptor {
        app_id: "skills",
        title: "Skills",
        content_id: "SkillsView",
        icon: IconName::Zap,
        accent: "yellow",
        desktop_icon: Some(DesktopIcon {
            glyph: "⚡",
            label: "Skills",
        }),
        module: PanelModule::new(mount_skills),
    },
    AppDescriptor {
        app_id: "chat",
        title: "SanjayBot AI Assistant",
        content_id: "ChatBot",
        icon: IconName::MessageCircle,
        accent: "green",
        desktop_icon: Some(DesktopIcon {
            glyph: "🤖",
            label: "SanjayBot",
        }),
        module: PanelModule::new(mount_chat),
    },
    AppDescriptor {
        app_id: "github",
        title: "GitHub Profile",
        content_id: "GitHubView",
        icon: IconName::Github,
        accent: "gray",
        desktop_icon: None,
        module: PanelModule::new(mount_github),
    },
    AppDescriptor {
        app_id: "leetcode",
        title: "LeetCode Profile",
        content_id: "LeetCodeView",
        icon: IconName::Code,
        accent: "orange",
        desktop_icon: None,
        module: PanelModule::new(mount_leetcode),
    },
    AppDescriptor {
        app_id: "settings",
        title: "Settings",
        content_id: "SettingsView",
        icon: IconName::Settings,
        accent: "primary",
        desktop_icon: None,
        module: PanelModule::new(mount_settings),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn desktop_icon_apps() -> impl Iterator<Item = (&'static AppDescriptor, DesktopIcon)> {
    app_registry()
        .iter()
        .filter_map(|entry| entry.desktop_icon.map(|icon| (entry, icon)))
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id.as_str())
}

/// Outcome of looking up a window's content key.
#[derive(Debug, Clone)]
pub enum PanelResolution {
    Found(PanelModule),
    NotFound(ContentId),
}

pub fn resolve_panel(content_id: &ContentId) -> PanelResolution {
    app_registry()
        .iter()
        .find(|entry| entry.content_id == content_id.as_str())
        .map(|entry| PanelResolution::Found(entry.module))
        .unwrap_or_else(|| PanelResolution::NotFound(content_id.clone()))
}

pub fn missing_panel_message(content_id: &ContentId) -> String {
    format!("Component {content_id} not found")
}

fn mount_resume(context: PanelMountContext) -> View {
    view! { <ResumePanel context /> }.into_view()
}

fn mount_projects(context: PanelMountContext) -> View {
    view! { <ProjectsPanel context /> }.into_view()
}

fn mount_skills(context: PanelMountContext) -> View {
    view! { <SkillsPanel context /> }.into_view()
}

fn mount_chat(context: PanelMountContext) -> View {
    view! { <ChatPanel context /> }.into_view()
}

fn mount_github(context: PanelMountContext) -> View {
    view! { <GitHubPanel context /> }.into_view()
}

fn mount_leetcode(context: PanelMountContext) -> View {
    view! { <LeetCodePanel context /> }.into_view()
}

fn mount_settings(context: PanelMountContext) -> View {
    view! { <SettingsPanel context /> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dock_order_matches_launcher_layout() {
        let ids = app_registry()
            .iter()
            .map(|entry| entry.app_id)
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["resume", "projects", "skills", "chat", "github", "leetcode", "settings"]
        );
    }

    #[test]
    fn registry_ids_are_valid_and_content_keys_unique() {
        let mut content_ids = Vec::new();
        for entry in app_registry() {
            assert!(AppId::new(entry.app_id).is_ok(), "{}", entry.app_id);
            assert!(!content_ids.contains(&entry.content_id));
            content_ids.push(entry.content_id);
        }
    }

    #[test]
    fn desktop_icons_cover_the_four_primary_apps() {
        let icons = desktop_icon_apps()
            .map(|(entry, icon)| (entry.app_id, icon.glyph, icon.label))
            .collect::<Vec<_>>();
        assert_eq!(
            icons,
            vec![
                ("resume", "📝", "Resume"),
                ("projects", "🚀", "Projects"),
                ("skills", "⚡", "Skills"),
                ("chat", "🤖", "SanjayBot"),
            ]
        );
    }

    #[test]
    fn every_registered_content_key_resolves() {
        for entry in app_registry() {
            assert!(matches!(
                resolve_panel(&entry.content()),
                PanelResolution::Found(_)
            ));
        }
    }

    #[test]
    fn unknown_content_key_resolves_to_placeholder() {
        let content_id = ContentId::new("PaintView");
        match resolve_panel(&content_id) {
            PanelResolution::NotFound(missing) => {
                assert_eq!(missing_panel_message(&missing), "Component PaintView not found");
            }
            PanelResolution::Found(_) => panic!("PaintView should not resolve"),
        }
    }

    #[test]
    fn open_action_carries_registry_metadata() {
        let chat = app_descriptor(&AppId::trusted("chat")).expect("chat registered");
        assert_eq!(
            chat.open_action(),
            DesktopAction::Open {
                app_id: AppId::trusted("chat"),
                title: "SanjayBot AI Assistant".to_string(),
                content_id: ContentId::new("ChatBot"),
            }
        );
        assert!(app_descriptor(&AppId::trusted("paint")).is_none());
    }
}
