use std::time::Duration;

use super::*;
use desktop_app_contract::{content::StatsSection, load_content_document};
use platform_host::ClockSnapshot;
use system_ui::{Icon, IconName, IconSize, StatTile, TextTone, TopBar, TopBarSection};

const FALLBACK_GITHUB_STARS: u32 = 150;
const FALLBACK_GITHUB_COMMITS: u32 = 500;
const FALLBACK_LEETCODE_SOLVED: u32 = 245;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderStats {
    stars: u32,
    commits: u32,
    solved: u32,
}

impl HeaderStats {
    const FALLBACK: Self = Self {
        stars: FALLBACK_GITHUB_STARS,
        commits: FALLBACK_GITHUB_COMMITS,
        solved: FALLBACK_LEETCODE_SOLVED,
    };

    /// Zero counts in the document are treated as missing.
    fn from_document(stats: &StatsSection) -> Self {
        let pick = |value: u32, fallback: u32| if value == 0 { fallback } else { value };
        Self {
            stars: pick(stats.github_stars, FALLBACK_GITHUB_STARS),
            commits: pick(stats.github_commits, FALLBACK_GITHUB_COMMITS),
            solved: pick(stats.leetcode_solved, FALLBACK_LEETCODE_SOLVED),
        }
    }
}

#[component]
pub(super) fn DesktopHeader() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let stats = create_rw_signal(HeaderStats::FALLBACK);
    let clock_now = create_rw_signal(ClockSnapshot::now());

    let content = runtime.host.get_value().content;
    spawn_local(async move {
        match load_content_document(content.as_ref()).await {
            Ok(document) => stats.set(HeaderStats::from_document(&document.stats)),
            Err(err) => logging::warn!("header stats unavailable, using mock values: {err}"),
        }
    });

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <TopBar aria_label="SanjayOS status bar">
            <TopBarSection ui_slot="brand">
                <span data-ui-slot="logo" aria-hidden="true">"S"</span>
                <span data-ui-slot="name">"SanjayOS"</span>
            </TopBarSection>
            <TopBarSection ui_slot="stats">
                <StatTile
                    icon=IconName::Star
                    value=Signal::derive(move || stats.get().stars.to_string())
                    label="Stars"
                    tone=TextTone::Warning
                />
                <StatTile
                    icon=IconName::GitCommit
                    value=Signal::derive(move || stats.get().commits.to_string())
                    label="Commits"
                    tone=TextTone::Success
                />
                <StatTile
                    icon=IconName::Trophy
                    value=Signal::derive(move || stats.get().solved.to_string())
                    label="LeetCode"
                    tone=TextTone::Accent
                />
            </TopBarSection>
            <TopBarSection ui_slot="clock">
                <span data-ui-slot="clock-text">
                    <span data-ui-slot="time">{move || clock_now.get().time_label()}</span>
                    <span data-ui-slot="date">{move || clock_now.get().date_label()}</span>
                </span>
                <Icon icon=IconName::Clock size=IconSize::Md />
            </TopBarSection>
        </TopBar>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_stats_override_mock_values() {
        let stats = StatsSection {
            github_stars: 12,
            github_commits: 340,
            leetcode_solved: 99,
        };
        assert_eq!(
            HeaderStats::from_document(&stats),
            HeaderStats {
                stars: 12,
                commits: 340,
                solved: 99,
            }
        );
    }

    #[test]
    fn missing_counts_keep_mock_values() {
        let stats = StatsSection {
            github_stars: 0,
            github_commits: 42,
            leetcode_solved: 0,
        };
        assert_eq!(
            HeaderStats::from_document(&stats),
            HeaderStats {
                stars: 150,
                commits: 42,
                solved: 245,
            }
        );
        assert_eq!(HeaderStats::from_document(&StatsSection::default()), HeaderStats::FALLBACK);
    }
}
