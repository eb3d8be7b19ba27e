//! LeetCode panel: difficulty breakdown, overall completion, and recent accepted submissions.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::PanelMountContext;
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    fn tone(self) -> TextTone {
        match self {
            Self::Easy => TextTone::Success,
            Self::Medium => TextTone::Warning,
            Self::Hard => TextTone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DifficultyProgress {
    difficulty: Difficulty,
    solved: u32,
    total: u32,
}

impl DifficultyProgress {
    fn percent(self) -> f64 {
        percent(self.solved, self.total)
    }
}

const PROGRESS: [DifficultyProgress; 3] = [
    DifficultyProgress {
        difficulty: Difficulty::Easy,
        solved: 85,
        total: 150,
    },
    DifficultyProgress {
        difficulty: Difficulty::Medium,
        solved: 120,
        total: 300,
    },
    DifficultyProgress {
        difficulty: Difficulty::Hard,
        solved: 40,
        total: 200,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Submission {
    title: &'static str,
    difficulty: Difficulty,
    runtime: &'static str,
    date: &'static str,
}

const RECENT_SUBMISSIONS: [Submission; 4] = [
    Submission {
        title: "Two Sum",
        difficulty: Difficulty::Easy,
        runtime: "68ms",
        date: "2024-01-20",
    },
    Submission {
        title: "Longest Substring Without Repeating Characters",
        difficulty: Difficulty::Medium,
        runtime: "12ms",
        date: "2024-01-19",
    },
    Submission {
        title: "Median of Two Sorted Arrays",
        difficulty: Difficulty::Hard,
        runtime: "24ms",
        date: "2024-01-18",
    },
    Submission {
        title: "Valid Parentheses",
        difficulty: Difficulty::Easy,
        runtime: "0ms",
        date: "2024-01-17",
    },
];

fn percent(solved: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(solved) / f64::from(total) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Overview {
    solved: u32,
    total: u32,
}

impl Overview {
    fn of(progress: &[DifficultyProgress]) -> Self {
        Self {
            solved: progress.iter().map(|entry| entry.solved).sum(),
            total: progress.iter().map(|entry| entry.total).sum(),
        }
    }

    fn completion_label(self) -> String {
        format!("{:.0}%", percent(self.solved, self.total).round())
    }
}

/// Renders an ISO `YYYY-MM-DD` date as `M/D/YYYY`.
fn submitted_label(iso_date: &str) -> String {
    let mut parts = iso_date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => match (month.parse::<u32>(), day.parse::<u32>()) {
            (Ok(month), Ok(day)) => format!("{month}/{day}/{year}"),
            _ => iso_date.to_string(),
        },
        _ => iso_date.to_string(),
    }
}

fn profile_url(username: &str) -> String {
    format!("https://leetcode.com/{username}")
}

#[component]
/// LeetCode window contents.
pub fn LeetCodePanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let document = context.services.content_document("LeetCode");

    view! {
        <div class="app-leetcode" data-ui-slot="panel-scroll">
            {move || match document.get() {
                None => view! { <LoadingState label="Loading LeetCode profile" /> }.into_view(),
                Some(Err(_)) => view! {
                    <EmptyState>
                        <p>"Failed to load LeetCode data"</p>
                    </EmptyState>
                }
                .into_view(),
                Some(Ok(document)) => view! {
                    <LeetCodeProfile username=document.user.leetcode />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn LeetCodeProfile(username: String) -> impl IntoView {
    let overview = Overview::of(&PROGRESS);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                    <Icon icon=IconName::Trophy size=IconSize::Xl />
                    <Heading>"LeetCode Profile"</Heading>
                </Cluster>
                <Text tone=TextTone::Secondary>"Coding challenges and algorithmic problem solving"</Text>
                <LinkButton
                    href=profile_url(&username)
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::ExternalLink
                >
                    "View on LeetCode"
                </LinkButton>
            </Stack>

            <Card ui_slot="overview">
                <Heading role=TextRole::Label>"Overall Progress"</Heading>
                <Grid gap=LayoutGap::Md>
                    <OverviewFigure value=overview.solved.to_string() label="Problems Solved" tone=TextTone::Accent />
                    <OverviewFigure value=overview.total.to_string() label="Total Problems" tone=TextTone::Primary />
                    <OverviewFigure value=overview.completion_label() label="Completion Rate" tone=TextTone::Success />
                    <OverviewFigure value="⭐".to_string() label="LeetCoder" tone=TextTone::Warning />
                </Grid>
            </Card>

            <Stack gap=LayoutGap::Md ui_slot="breakdown">
                <Heading role=TextRole::Label>"Problem Breakdown"</Heading>
                {PROGRESS
                    .into_iter()
                    .map(|progress| view! { <DifficultyCard progress /> })
                    .collect_view()}
            </Stack>

            <Stack gap=LayoutGap::Sm ui_slot="submissions">
                <Heading role=TextRole::Label>"Recent Submissions"</Heading>
                {RECENT_SUBMISSIONS
                    .into_iter()
                    .map(|submission| view! { <SubmissionCard submission /> })
                    .collect_view()}
            </Stack>
        </Stack>
    }
}

#[component]
fn OverviewFigure(value: String, label: &'static str, tone: TextTone) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::None align=LayoutAlign::Center>
            <Heading tone>{value}</Heading>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{label}</Text>
        </Stack>
    }
}

#[component]
fn DifficultyCard(progress: DifficultyProgress) -> impl IntoView {
    let difficulty = progress.difficulty;

    view! {
        <Card ui_slot="difficulty" padding=LayoutPadding::Md>
            <Cluster justify=LayoutJustify::Between>
                <Cluster gap=LayoutGap::Sm>
                    <Text tone=difficulty.tone()><Icon icon=IconName::Target size=IconSize::Sm /></Text>
                    <Text role=TextRole::Label>{difficulty.label()}</Text>
                </Cluster>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format!("{} / {}", progress.solved, progress.total)}
                </Text>
            </Cluster>
            <ProgressBar
                tone=difficulty.tone()
                aria_label=format!("{} problems solved", difficulty.label())
                max=progress.total
                value=progress.solved
            />
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {format!("{:.1}% completed", progress.percent())}
            </Text>
        </Card>
    }
}

#[component]
fn SubmissionCard(submission: Submission) -> impl IntoView {
    let difficulty = submission.difficulty;

    view! {
        <Card ui_slot="submission" padding=LayoutPadding::Sm>
            <Cluster gap=LayoutGap::Sm>
                <Text tone=TextTone::Success><Icon icon=IconName::CheckCircle size=IconSize::Sm /></Text>
                <Text role=TextRole::Label>{submission.title}</Text>
                <Text role=TextRole::Caption tone=difficulty.tone()>{difficulty.label()}</Text>
            </Cluster>
            <Cluster gap=LayoutGap::Md ui_slot="meta">
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::CheckCircle size=IconSize::Xs />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"Accepted"</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Clock size=IconSize::Xs />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{submission.runtime}</Text>
                </Cluster>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {submitted_label(submission.date)}
                </Text>
            </Cluster>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overview_totals_every_difficulty() {
        let overview = Overview::of(&PROGRESS);
        assert_eq!(overview.solved, 245);
        assert_eq!(overview.total, 650);
        assert_eq!(overview.completion_label(), "38%");
    }

    #[test]
    fn difficulty_percentages_use_one_decimal() {
        let labels: Vec<String> = PROGRESS
            .into_iter()
            .map(|progress| format!("{:.1}", progress.percent()))
            .collect();
        assert_eq!(labels, vec!["56.7", "40.0", "20.0"]);
    }

    #[test]
    fn empty_totals_report_zero_percent() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(Overview::of(&[]).completion_label(), "0%");
    }

    #[test]
    fn submission_dates_render_month_first() {
        assert_eq!(submitted_label("2024-01-20"), "1/20/2024");
        assert_eq!(submitted_label("yesterday"), "yesterday");
    }

    #[test]
    fn profile_link_targets_the_username() {
        assert_eq!(profile_url("sanjay"), "https://leetcode.com/sanjay");
    }
}
