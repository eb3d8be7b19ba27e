//! Resume panel: profile header, professional summary, experience, and education.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{
    content::{EducationEntry, ExperienceEntry, ResumeSection, UserProfile},
    PanelMountContext,
};
use leptos::*;
use system_ui::prelude::*;

fn gpa_line(entry: &EducationEntry) -> Option<String> {
    entry
        .gpa
        .as_deref()
        .map(str::trim)
        .filter(|gpa| !gpa.is_empty())
        .map(|gpa| format!("GPA: {gpa}"))
}

#[component]
/// Resume window contents.
///
/// Reads the `user` and `resume` sections of the content document. A spinner shows while the
/// document loads and a message replaces the body when it cannot be read.
pub fn ResumePanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let document = context.services.content_document("resume");

    view! {
        <div class="app-resume" data-ui-slot="panel-scroll">
            {move || match document.get() {
                None => view! { <LoadingState label="Loading resume" /> }.into_view(),
                Some(Err(_)) => view! {
                    <EmptyState>
                        <p>"Failed to load resume data"</p>
                    </EmptyState>
                }
                .into_view(),
                Some(Ok(document)) => view! {
                    <ResumeDocument user=document.user resume=document.resume />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn ResumeDocument(user: UserProfile, resume: ResumeSection) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center ui_slot="profile">
                <Heading>{user.name}</Heading>
                <Text tone=TextTone::Accent>{user.title}</Text>
                <Cluster justify=LayoutJustify::Center>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        <Icon icon=IconName::MapPin size=IconSize::Xs />
                        {user.location}
                    </Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        <Icon icon=IconName::Mail size=IconSize::Xs />
                        {user.email}
                    </Text>
                </Cluster>
            </Stack>

            <Stack gap=LayoutGap::Sm ui_slot="summary">
                <Heading role=TextRole::Label>"Professional Summary"</Heading>
                <Text tone=TextTone::Secondary>{resume.summary}</Text>
            </Stack>

            <Stack gap=LayoutGap::Md ui_slot="experience">
                <Heading role=TextRole::Label>
                    <Icon icon=IconName::Briefcase size=IconSize::Md />
                    "Experience"
                </Heading>
                {resume
                    .experience
                    .into_iter()
                    .map(|entry| view! { <ExperienceCard entry /> })
                    .collect_view()}
            </Stack>

            <Stack gap=LayoutGap::Md ui_slot="education">
                <Heading role=TextRole::Label>
                    <Icon icon=IconName::GraduationCap size=IconSize::Md />
                    "Education"
                </Heading>
                {resume
                    .education
                    .into_iter()
                    .map(|entry| view! { <EducationCard entry /> })
                    .collect_view()}
            </Stack>
        </Stack>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <Card>
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                <Stack gap=LayoutGap::None>
                    <Text role=TextRole::Label>{entry.title}</Text>
                    <Text tone=TextTone::Accent>{entry.company}</Text>
                </Stack>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    <Icon icon=IconName::Calendar size=IconSize::Xs />
                    {entry.period}
                </Text>
            </Cluster>
            <Text tone=TextTone::Secondary>{entry.description}</Text>
            <Cluster gap=LayoutGap::Sm ui_slot="technologies">
                {entry
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <Badge tone=TextTone::Accent>{tech}</Badge> })
                    .collect_view()}
            </Cluster>
        </Card>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    let gpa = gpa_line(&entry);
    view! {
        <Card>
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                <Stack gap=LayoutGap::None>
                    <Text role=TextRole::Label>{entry.degree}</Text>
                    <Text tone=TextTone::Accent>{entry.institution}</Text>
                    {gpa.map(|gpa| view! {
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{gpa}</Text>
                    })}
                </Stack>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{entry.year}</Text>
            </Cluster>
        </Card>
    }
}
