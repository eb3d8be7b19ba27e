//! Skills panel: six skill categories with expandable chips and a per-category overview.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{content::SkillsSection, PanelMountContext};
use leptos::*;
use system_ui::prelude::*;

const COLLAPSED_SKILL_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Cloud,
    Tools,
    Ai,
}

impl SkillCategory {
    const ALL: [Self; 6] = [
        Self::Languages,
        Self::Frontend,
        Self::Backend,
        Self::Cloud,
        Self::Tools,
        Self::Ai,
    ];

    fn title(self) -> &'static str {
        match self {
            Self::Languages => "Programming Languages",
            Self::Frontend => "Frontend Technologies",
            Self::Backend => "Backend & Database",
            Self::Cloud => "Cloud & DevOps",
            Self::Tools => "Development Tools",
            Self::Ai => "AI & Machine Learning",
        }
    }

    /// Shorter caption for the overview grid.
    fn summary_label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            other => other.title(),
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Languages => IconName::Code,
            Self::Frontend => IconName::Layers,
            Self::Backend => IconName::Zap,
            Self::Cloud => IconName::Cloud,
            Self::Tools => IconName::Wrench,
            Self::Ai => IconName::Brain,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Cloud => "cloud",
            Self::Tools => "tools",
            Self::Ai => "ai",
        }
    }

    fn skills(self, section: &SkillsSection) -> &[String] {
        match self {
            Self::Languages => &section.languages,
            Self::Frontend => &section.frontend,
            Self::Backend => &section.backend,
            Self::Cloud => &section.cloud,
            Self::Tools => &section.tools,
            Self::Ai => &section.ai,
        }
    }
}

fn total_skill_count(section: &SkillsSection) -> usize {
    SkillCategory::ALL
        .into_iter()
        .map(|category| category.skills(section).len())
        .sum()
}

/// Skills shown for a category card and whether more are hidden behind a selection.
fn visible_skills(skills: &[String], expanded: bool) -> (Vec<String>, bool) {
    if expanded || skills.len() <= COLLAPSED_SKILL_LIMIT {
        (skills.to_vec(), false)
    } else {
        (skills[..COLLAPSED_SKILL_LIMIT].to_vec(), true)
    }
}

#[component]
/// Skills window contents.
///
/// Selecting a category card expands its full skill list; selecting it again collapses it.
pub fn SkillsPanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let document = context.services.content_document("skills");
    let selected = create_rw_signal(None::<SkillCategory>);

    view! {
        <div class="app-skills" data-ui-slot="panel-scroll">
            {move || match document.get() {
                None => view! { <LoadingState label="Loading skills" /> }.into_view(),
                Some(Err(_)) => view! {
                    <EmptyState>
                        <p>"Failed to load skills data"</p>
                    </EmptyState>
                }
                .into_view(),
                Some(Ok(document)) => view! {
                    <SkillsOverview skills=document.skills selected />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn SkillsOverview(skills: SkillsSection, selected: RwSignal<Option<SkillCategory>>) -> impl IntoView {
    let total = total_skill_count(&skills);
    let skills = store_value(skills);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading>"Skills & Technologies"</Heading>
                <Text tone=TextTone::Secondary>"My technical expertise and tools I work with"</Text>
            </Stack>

            <Grid gap=LayoutGap::Md ui_slot="categories">
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let is_selected = Signal::derive(move || selected.get() == Some(category));
                        let count = skills.with_value(|s| category.skills(s).len());
                        view! {
                            <Card
                                layout_class=category.token()
                                on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                    selected.update(|current| {
                                        *current = if *current == Some(category) {
                                            None
                                        } else {
                                            Some(category)
                                        };
                                    });
                                })
                            >
                                <Cluster gap=LayoutGap::Sm>
                                    <Icon icon=category.icon() size=IconSize::Lg />
                                    <Stack gap=LayoutGap::None>
                                        <Text role=TextRole::Label>{category.title()}</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                                            {format!("{count} skills")}
                                        </Text>
                                    </Stack>
                                </Cluster>
                                {move || {
                                    let expanded = is_selected.get();
                                    let (shown, truncated) = skills
                                        .with_value(|s| visible_skills(category.skills(s), expanded));
                                    let tone = if expanded { TextTone::Accent } else { TextTone::Secondary };
                                    view! {
                                        <Cluster gap=LayoutGap::Sm ui_slot="skills">
                                            {shown
                                                .into_iter()
                                                .map(|skill| view! { <Badge tone>{skill}</Badge> })
                                                .collect_view()}
                                        </Cluster>
                                        {truncated.then(|| view! {
                                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                                "Click to see all skills..."
                                            </Text>
                                        })}
                                    }
                                }}
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>

            <Card ui_slot="summary">
                <Heading role=TextRole::Label>{format!("Skills Overview ({total} total)")}</Heading>
                <Grid gap=LayoutGap::Md>
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let count = skills.with_value(|s| category.skills(s).len());
                            view! {
                                <Stack gap=LayoutGap::None align=LayoutAlign::Center>
                                    <Heading tone=TextTone::Accent>{count}</Heading>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {category.summary_label()}
                                    </Text>
                                </Stack>
                            }
                        })
                        .collect_view()}
                </Grid>
            </Card>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn total_counts_every_category() {
        let section = SkillsSection {
            languages: names(&["Rust", "TypeScript"]),
            frontend: names(&["React"]),
            backend: names(&["PostgreSQL", "Redis"]),
            cloud: names(&["AWS"]),
            tools: Vec::new(),
            ai: names(&["PyTorch"]),
        };
        assert_eq!(total_skill_count(&section), 7);
        assert_eq!(SkillCategory::Backend.skills(&section), &section.backend[..]);
    }

    #[test]
    fn collapsed_cards_show_six_skills() {
        let skills = names(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let (shown, truncated) = visible_skills(&skills, false);
        assert_eq!(shown.len(), 6);
        assert!(truncated);

        let (shown, truncated) = visible_skills(&skills, true);
        assert_eq!(shown, skills);
        assert!(!truncated);
    }

    #[test]
    fn summary_labels_shorten_long_titles() {
        let labels: Vec<&str> = SkillCategory::ALL
            .into_iter()
            .map(SkillCategory::summary_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Programming Languages",
                "Frontend",
                "Backend",
                "Cloud & DevOps",
                "Development Tools",
                "AI & Machine Learning",
            ]
        );
    }
}
