//! Projects panel: featured projects, a compact list of all projects, and a detail view.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{content::ProjectRecord, PanelMountContext};
use leptos::*;
use system_ui::prelude::*;

const COMPACT_TECH_LIMIT: usize = 3;
const FULL_TECH_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    Other,
}

impl ProjectStatus {
    fn parse(raw: &str) -> Self {
        match raw {
            "completed" => Self::Completed,
            "in-progress" => Self::InProgress,
            "planned" => Self::Planned,
            _ => Self::Other,
        }
    }

    fn tone(self) -> TextTone {
        match self {
            Self::Completed => TextTone::Success,
            Self::InProgress => TextTone::Warning,
            Self::Planned => TextTone::Accent,
            Self::Other => TextTone::Secondary,
        }
    }
}

fn featured_projects(projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
    projects
        .iter()
        .filter(|project| project.featured)
        .cloned()
        .collect()
}

/// Leading technologies plus a `+N more` label for the remainder.
fn technology_preview(technologies: &[String], limit: usize) -> (Vec<String>, Option<String>) {
    let shown = technologies.iter().take(limit).cloned().collect();
    let hidden = technologies.len().saturating_sub(limit);
    let more = (hidden > 0).then(|| format!("+{hidden} more"));
    (shown, more)
}

#[component]
/// Projects window contents.
///
/// Clicking any project card swaps the list for that project's detail view; the back button
/// returns to the list.
pub fn ProjectsPanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let document = context.services.content_document("projects");
    let selected = create_rw_signal(None::<ProjectRecord>);

    view! {
        <div class="app-projects" data-ui-slot="panel-scroll">
            {move || match (document.get(), selected.get()) {
                (None, _) => view! { <LoadingState label="Loading projects" /> }.into_view(),
                (Some(Err(_)), _) => view! {
                    <EmptyState>
                        <p>"Failed to load projects data"</p>
                    </EmptyState>
                }
                .into_view(),
                (Some(Ok(_)), Some(project)) => view! {
                    <ProjectDetail
                        project
                        on_back=Callback::new(move |_: web_sys::MouseEvent| selected.set(None))
                    />
                }
                .into_view(),
                (Some(Ok(document)), None) => view! {
                    <ProjectList projects=document.projects selected />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn ProjectList(
    projects: Vec<ProjectRecord>,
    selected: RwSignal<Option<ProjectRecord>>,
) -> impl IntoView {
    let featured = featured_projects(&projects);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading>"Projects"</Heading>
                <Text tone=TextTone::Secondary>"Showcasing my latest work and experiments"</Text>
            </Stack>

            <Stack gap=LayoutGap::Md ui_slot="featured">
                <Heading role=TextRole::Label>
                    <Icon icon=IconName::Star size=IconSize::Md />
                    "Featured Projects"
                </Heading>
                {featured
                    .into_iter()
                    .map(|project| view! { <ProjectCard project selected compact=false /> })
                    .collect_view()}
            </Stack>

            <Stack gap=LayoutGap::Md ui_slot="all">
                <Heading role=TextRole::Label>"All Projects"</Heading>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project selected compact=true /> })
                    .collect_view()}
            </Stack>
        </Stack>
    }
}

#[component]
fn ProjectCard(
    project: ProjectRecord,
    selected: RwSignal<Option<ProjectRecord>>,
    compact: bool,
) -> impl IntoView {
    let status = ProjectStatus::parse(&project.status);
    let limit = if compact {
        COMPACT_TECH_LIMIT
    } else {
        FULL_TECH_LIMIT
    };
    let (technologies, more) = technology_preview(&project.technologies, limit);
    let description = if compact {
        project.description.clone()
    } else {
        project.long_description.clone()
    };
    let more = more.filter(|_| compact);
    let github = project.github.clone();
    let demo = project.demo.clone();
    let title = project.title.clone();
    let status_label = project.status.clone();
    let featured = project.featured;

    view! {
        <Card
            layout_class=if compact { "project-card compact" } else { "project-card" }
            on_click=Callback::new(move |_: web_sys::MouseEvent| {
                selected.set(Some(project.clone()))
            })
        >
            <Cluster gap=LayoutGap::Sm>
                <Text role=TextRole::Label>{title}</Text>
                <Badge tone=status.tone()>{status_label}</Badge>
                {featured.then(|| view! {
                    <Text tone=TextTone::Warning>
                        <Icon icon=IconName::Star size=IconSize::Sm />
                    </Text>
                })}
            </Cluster>
            <Text tone=TextTone::Secondary>{description}</Text>
            <Cluster gap=LayoutGap::Sm ui_slot="technologies">
                {technologies
                    .into_iter()
                    .map(|tech| view! { <Badge tone=TextTone::Accent>{tech}</Badge> })
                    .collect_view()}
                {more.map(|more| view! { <Badge>{more}</Badge> })}
            </Cluster>
            <Cluster gap=LayoutGap::Sm ui_slot="links">
                {github.map(|href| view! {
                    <LinkButton href size=ButtonSize::Sm leading_icon=IconName::Github>
                        "Code"
                    </LinkButton>
                })}
                {demo.map(|href| view! {
                    <LinkButton href size=ButtonSize::Sm leading_icon=IconName::ExternalLink>
                        "Demo"
                    </LinkButton>
                })}
            </Cluster>
        </Card>
    }
}

#[component]
fn ProjectDetail(project: ProjectRecord, on_back: Callback<web_sys::MouseEvent>) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md padding=LayoutPadding::Lg>
            <Button leading_icon=IconName::ArrowLeft on_click=on_back>
                "Back to Projects"
            </Button>
            <Heading>{project.title}</Heading>
            <Text tone=TextTone::Secondary>{project.long_description}</Text>
            <Cluster gap=LayoutGap::Sm ui_slot="technologies">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <Badge tone=TextTone::Accent>{tech}</Badge> })
                    .collect_view()}
            </Cluster>
            <Cluster gap=LayoutGap::Md ui_slot="links">
                {project.github.map(|href| view! {
                    <LinkButton href variant=ButtonVariant::Primary leading_icon=IconName::Github>
                        "View Code"
                    </LinkButton>
                })}
                {project.demo.map(|href| view! {
                    <LinkButton href leading_icon=IconName::ExternalLink>
                        "Live Demo"
                    </LinkButton>
                })}
            </Cluster>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: &str, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: id.to_string(),
            featured,
            status: "completed".to_string(),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn featured_filter_keeps_document_order() {
        let projects = vec![
            project("a", true),
            project("b", false),
            project("c", true),
        ];
        let ids: Vec<String> = featured_projects(&projects)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn compact_preview_counts_hidden_technologies() {
        let technologies: Vec<String> = ["React", "TypeScript", "Node.js", "OpenAI", "Redis"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let (shown, more) = technology_preview(&technologies, COMPACT_TECH_LIMIT);
        assert_eq!(shown, vec!["React", "TypeScript", "Node.js"]);
        assert_eq!(more.as_deref(), Some("+2 more"));

        let (shown, more) = technology_preview(&technologies[..3], COMPACT_TECH_LIMIT);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, None);
    }

    #[test]
    fn status_tokens_map_to_tones() {
        assert_eq!(ProjectStatus::parse("completed").tone(), TextTone::Success);
        assert_eq!(ProjectStatus::parse("in-progress").tone(), TextTone::Warning);
        assert_eq!(ProjectStatus::parse("planned").tone(), TextTone::Accent);
        assert_eq!(ProjectStatus::parse("archived"), ProjectStatus::Other);
    }
}
