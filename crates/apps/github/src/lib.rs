//! GitHub panel: profile link, repository statistics, and pinned/all repository listings.
//!
//! Repository data is a bundled snapshot; only the username, pinned names, and commit count come
//! from the content document.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{content::ContentDocument, PanelMountContext};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Repository {
    name: &'static str,
    description: &'static str,
    stars: u32,
    forks: u32,
    language: &'static str,
    url: &'static str,
    updated: &'static str,
}

const REPOSITORIES: [Repository; 4] = [
    Repository {
        name: "ai-chat-platform",
        description: "Real-time chat application with AI-powered responses and smart conversation analytics.",
        stars: 45,
        forks: 12,
        language: "TypeScript",
        url: "https://github.com/example/ai-chat-platform",
        updated: "2024-01-15",
    },
    Repository {
        name: "ecommerce-dashboard",
        description: "Advanced analytics dashboard for e-commerce businesses with real-time data visualization.",
        stars: 38,
        forks: 8,
        language: "JavaScript",
        url: "https://github.com/example/ecommerce-dashboard",
        updated: "2024-01-10",
    },
    Repository {
        name: "sanjayos-ai",
        description: "OS-style portfolio website with integrated AI assistant and modern glassmorphism design.",
        stars: 67,
        forks: 23,
        language: "TypeScript",
        url: "https://github.com/example/sanjayos-ai",
        updated: "2024-01-20",
    },
    Repository {
        name: "leetcode-solutions",
        description: "Collection of optimized solutions to LeetCode problems with detailed explanations.",
        stars: 156,
        forks: 42,
        language: "Python",
        url: "https://github.com/example/leetcode-solutions",
        updated: "2024-01-18",
    },
];

/// Repositories ordered by star count, most starred first.
fn repositories_by_stars() -> Vec<Repository> {
    let mut repos = REPOSITORIES.to_vec();
    repos.sort_by(|a, b| b.stars.cmp(&a.stars).then_with(|| a.name.cmp(b.name)));
    repos
}

fn pinned_repositories(repos: &[Repository], pinned: &[String]) -> Vec<Repository> {
    repos
        .iter()
        .copied()
        .filter(|repo| pinned.iter().any(|name| name == repo.name))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RepositoryTotals {
    stars: u32,
    forks: u32,
    count: usize,
}

impl RepositoryTotals {
    fn of(repos: &[Repository]) -> Self {
        Self {
            stars: repos.iter().map(|repo| repo.stars).sum(),
            forks: repos.iter().map(|repo| repo.forks).sum(),
            count: repos.len(),
        }
    }
}

/// Color token for the language dot; unknown languages share a neutral swatch.
fn language_token(language: &str) -> &'static str {
    match language {
        "TypeScript" => "typescript",
        "JavaScript" => "javascript",
        "Python" => "python",
        "Java" => "java",
        "Go" => "go",
        _ => "other",
    }
}

fn parse_iso_date(iso_date: &str) -> Option<(u32, u32, u32)> {
    let mut parts = iso_date.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some((year, month, day))
}

/// Renders an ISO `YYYY-MM-DD` date as `M/D/YYYY`; anything else is shown unchanged.
fn updated_label(iso_date: &str) -> String {
    match parse_iso_date(iso_date) {
        Some((year, month, day)) => format!("Updated {month}/{day}/{year}"),
        None => format!("Updated {iso_date}"),
    }
}

fn profile_url(username: &str) -> String {
    format!("https://github.com/{username}")
}

#[component]
/// GitHub window contents.
pub fn GitHubPanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let document = context.services.content_document("GitHub");

    view! {
        <div class="app-github" data-ui-slot="panel-scroll">
            {move || match document.get() {
                None => view! { <LoadingState label="Loading GitHub profile" /> }.into_view(),
                Some(Err(_)) => view! {
                    <EmptyState>
                        <p>"Failed to load GitHub data"</p>
                    </EmptyState>
                }
                .into_view(),
                Some(Ok(document)) => view! { <GitHubProfile document /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn GitHubProfile(document: ContentDocument) -> impl IntoView {
    let repos = repositories_by_stars();
    let pinned = pinned_repositories(&repos, &document.github.pinned_repos);
    let totals = RepositoryTotals::of(&repos);
    let commits = document.stats.github_commits;

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                    <Icon icon=IconName::Github size=IconSize::Xl />
                    <Heading>"GitHub Profile"</Heading>
                </Cluster>
                <LinkButton
                    href=profile_url(&document.github.username)
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::ExternalLink
                >
                    "View on GitHub"
                </LinkButton>
            </Stack>

            <Grid gap=LayoutGap::Md ui_slot="stats">
                <StatTile icon=IconName::Star value=totals.stars.to_string() label="Total Stars" tone=TextTone::Warning />
                <StatTile icon=IconName::GitFork value=totals.forks.to_string() label="Total Forks" />
                <StatTile icon=IconName::Code value=totals.count.to_string() label="Repositories" tone=TextTone::Success />
                <StatTile icon=IconName::Calendar value=commits.to_string() label="Commits" />
            </Grid>

            <Stack gap=LayoutGap::Md ui_slot="pinned">
                <Heading role=TextRole::Label>"Pinned Repositories"</Heading>
                {if pinned.is_empty() {
                    view! {
                        <EmptyState>
                            <p>"No pinned repositories"</p>
                        </EmptyState>
                    }
                    .into_view()
                } else {
                    pinned
                        .into_iter()
                        .map(|repo| view! { <RepositoryCard repo compact=false /> })
                        .collect_view()
                }}
            </Stack>

            <Stack gap=LayoutGap::Sm ui_slot="all">
                <Heading role=TextRole::Label>"All Repositories"</Heading>
                {repos
                    .into_iter()
                    .map(|repo| view! { <RepositoryCard repo compact=true /> })
                    .collect_view()}
            </Stack>
        </Stack>
    }
}

#[component]
fn RepositoryCard(repo: Repository, compact: bool) -> impl IntoView {
    let (description_role, padding) = if compact {
        (TextRole::Caption, LayoutPadding::Sm)
    } else {
        (TextRole::Body, LayoutPadding::Md)
    };

    view! {
        <Card ui_slot="repository" padding>
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>{repo.name}</Text>
                    <Text role=description_role tone=TextTone::Secondary>{repo.description}</Text>
                </Stack>
                <LinkButton
                    href=repo.url
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    leading_icon=IconName::ExternalLink
                >
                    <span data-ui-slot="sr-only">{format!("Open {}", repo.name)}</span>
                </LinkButton>
            </Cluster>
            <Cluster justify=LayoutJustify::Between>
                <Cluster gap=LayoutGap::Md ui_slot="meta">
                    <Cluster gap=LayoutGap::Sm>
                        <span
                            data-ui-slot="language-dot"
                            data-ui-variant=language_token(repo.language)
                            aria-hidden="true"
                        ></span>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{repo.language}</Text>
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::Star size=IconSize::Xs />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{repo.stars}</Text>
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::GitFork size=IconSize::Xs />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{repo.forks}</Text>
                    </Cluster>
                </Cluster>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{updated_label(repo.updated)}</Text>
            </Cluster>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repositories_sort_by_stars_descending() {
        let names: Vec<&str> = repositories_by_stars().iter().map(|repo| repo.name).collect();
        assert_eq!(
            names,
            vec![
                "leetcode-solutions",
                "sanjayos-ai",
                "ai-chat-platform",
                "ecommerce-dashboard",
            ]
        );
    }

    #[test]
    fn pinned_filter_keeps_star_order_and_ignores_unknown_names() {
        let repos = repositories_by_stars();
        let pinned = vec![
            "ai-chat-platform".to_string(),
            "missing-repo".to_string(),
            "leetcode-solutions".to_string(),
        ];
        let names: Vec<&str> = pinned_repositories(&repos, &pinned)
            .iter()
            .map(|repo| repo.name)
            .collect();
        assert_eq!(names, vec!["leetcode-solutions", "ai-chat-platform"]);
    }

    #[test]
    fn totals_sum_the_snapshot() {
        assert_eq!(
            RepositoryTotals::of(&REPOSITORIES),
            RepositoryTotals {
                stars: 306,
                forks: 85,
                count: 4,
            }
        );
    }

    #[test]
    fn languages_map_to_color_tokens() {
        assert_eq!(language_token("TypeScript"), "typescript");
        assert_eq!(language_token("Go"), "go");
        assert_eq!(language_token("Rust"), "other");
    }

    #[test]
    fn updated_dates_render_month_first() {
        assert_eq!(updated_label("2024-01-05"), "Updated 1/5/2024");
        assert_eq!(updated_label("2024-13-05"), "Updated 2024-13-05");
        assert_eq!(updated_label("last week"), "Updated last week");
    }

    #[test]
    fn profile_link_targets_the_username() {
        assert_eq!(profile_url("sanjay"), "https://github.com/sanjay");
    }
}
