//! SanjayBot chat panel.
//!
//! Visitor messages are posted through the injected [`ChatTransport`]. When the endpoint rejects
//! a request the panel answers from a keyword-matched script; when the endpoint cannot be reached
//! it apologizes and offers the default shortcuts. Action buttons open the matching window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppId, PanelHost, PanelMountContext};
use leptos::*;
use platform_host::{ChatTransport, ChatTransportReply, ClockSnapshot};
use serde::Deserialize;
use system_ui::prelude::*;

const GREETING: &str = "👋 Hi! I'm SanjayBot, your AI assistant. I can help you learn about Sanjay's experience, projects, and skills. What would you like to know?";
const CONNECTION_TROUBLE: &str = "I'm having trouble connecting right now. Here's what I can tell you based on the information I have about Sanjay:";

const PROJECTS_ANSWER: &str = "Sanjay has worked on several impressive projects including an AI Chat Platform with real-time responses, an E-commerce Analytics Dashboard with advanced visualizations, and a Smart Weather App with AI-powered predictions. Each project showcases his expertise in modern web technologies and AI integration.";
const SKILLS_ANSWER: &str = "Sanjay is proficient in JavaScript, TypeScript, React, Node.js, Python, and various AI technologies including OpenAI API and TensorFlow. He has experience with cloud platforms like AWS and modern tools like Docker and Kubernetes.";
const EXPERIENCE_ANSWER: &str = "Sanjay is a Senior Full Stack Developer with 5+ years of experience. He currently works at TechCorp Inc., where he leads development of enterprise-scale applications and has implemented AI-powered features that increased user engagement by 40%.";
const CONTACT_ANSWER: &str = "You can reach Sanjay at sanjay@example.com. He's based in San Francisco, CA and is always interested in discussing new opportunities and innovative projects.";
const DEFAULT_ANSWER: &str = "I'd be happy to help you learn more about Sanjay! You can ask me about his projects, skills, experience, or background. What specific aspect interests you the most?";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ChatAction {
    label: String,
    action: String,
}

impl ChatAction {
    fn new(label: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            action: action.to_string(),
        }
    }

    fn view_resume() -> Self {
        Self::new("View Resume", "open-resume")
    }

    fn see_projects() -> Self {
        Self::new("See Projects", "open-projects")
    }

    fn show_skills() -> Self {
        Self::new("Show Skills", "open-skills")
    }

    /// Window opened by this action, for `open-<app>` actions naming a valid app id.
    fn target_app(&self) -> Option<AppId> {
        let app = self.action.strip_prefix("open-")?;
        AppId::new(app).ok()
    }

    fn icon(&self) -> Option<IconName> {
        match self.action.as_str() {
            "open-resume" => Some(IconName::FileText),
            "open-projects" => Some(IconName::FolderOpen),
            "open-skills" => Some(IconName::Zap),
            _ => None,
        }
    }
}

fn default_actions() -> Vec<ChatAction> {
    vec![
        ChatAction::view_resume(),
        ChatAction::see_projects(),
        ChatAction::show_skills(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BotReply {
    content: String,
    actions: Vec<ChatAction>,
}

#[derive(Debug, Deserialize)]
struct EndpointReply {
    answer: String,
    #[serde(default)]
    actions: Vec<ChatAction>,
}

fn fallback_answer(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if mentions(&["project", "work"]) {
        PROJECTS_ANSWER
    } else if mentions(&["skill", "technolog"]) {
        SKILLS_ANSWER
    } else if mentions(&["experienc", "background"]) {
        EXPERIENCE_ANSWER
    } else if mentions(&["contact", "hire", "email"]) {
        CONTACT_ANSWER
    } else {
        DEFAULT_ANSWER
    }
}

fn fallback_actions(input: &str) -> Vec<ChatAction> {
    let lower = input.to_lowercase();

    if lower.contains("project") {
        vec![ChatAction::new("View Projects", "open-projects")]
    } else if lower.contains("skill") {
        vec![ChatAction::show_skills()]
    } else if lower.contains("experienc") || lower.contains("resume") {
        vec![ChatAction::view_resume()]
    } else {
        vec![ChatAction::view_resume(), ChatAction::see_projects()]
    }
}

fn connection_trouble_reply() -> BotReply {
    BotReply {
        content: CONNECTION_TROUBLE.to_string(),
        actions: default_actions(),
    }
}

/// Posts `input` and turns the outcome into the bot's next message.
async fn request_reply(transport: &dyn ChatTransport, input: &str) -> BotReply {
    match transport.send_message(input).await {
        Ok(ChatTransportReply::Answered(body)) => match serde_json::from_str::<EndpointReply>(&body)
        {
            Ok(reply) => BotReply {
                content: reply.answer,
                actions: reply.actions,
            },
            Err(err) => {
                logging::warn!("chat reply decode failed: {err}");
                connection_trouble_reply()
            }
        },
        Ok(ChatTransportReply::Rejected(status)) => {
            logging::log!("chat endpoint returned {status}; answering from fallback script");
            BotReply {
                content: fallback_answer(input).to_string(),
                actions: fallback_actions(input),
            }
        }
        Err(err) => {
            logging::warn!("chat error: {err}");
            connection_trouble_reply()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Author {
    Bot,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    id: u64,
    author: Author,
    content: String,
    actions: Vec<ChatAction>,
    time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatLog {
    next_id: u64,
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    fn with_greeting(time_label: String) -> Self {
        let mut log = Self {
            next_id: 1,
            messages: Vec::new(),
        };
        log.push(Author::Bot, GREETING.to_string(), default_actions(), time_label);
        log
    }

    fn push(
        &mut self,
        author: Author,
        content: String,
        actions: Vec<ChatAction>,
        time_label: String,
    ) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            author,
            content,
            actions,
            time_label,
        });
        self.next_id += 1;
    }
}

fn current_time_label() -> String {
    ClockSnapshot::now().short_time_label()
}

#[component]
/// SanjayBot window contents.
pub fn ChatPanel(
    /// Mount context supplied by the window manager.
    context: PanelMountContext,
) -> impl IntoView {
    let transport = store_value(context.services.chat.clone());
    let host = context.host;
    let log = create_rw_signal(ChatLog::with_greeting(current_time_label()));
    let input = create_rw_signal(String::new());
    let loading = create_rw_signal(false);
    let messages_end = create_node_ref::<html::Div>();

    create_effect(move |_| {
        log.track();
        loading.track();
        if let Some(end) = messages_end.get() {
            end.scroll_into_view();
        }
    });

    let send = move || {
        let message = input.get_untracked();
        if message.trim().is_empty() || loading.get_untracked() {
            return;
        }
        log.update(|log| {
            log.push(
                Author::Visitor,
                message.clone(),
                Vec::new(),
                current_time_label(),
            )
        });
        input.set(String::new());
        loading.set(true);

        let transport = transport.get_value();
        spawn_local(async move {
            let reply = request_reply(transport.as_ref(), &message).await;
            log.update(|log| {
                log.push(Author::Bot, reply.content, reply.actions, current_time_label())
            });
            loading.set(false);
        });
    };

    let send_disabled = Signal::derive(move || input.get().trim().is_empty() || loading.get());

    view! {
        <div class="app-chat" data-ui-slot="panel-fill">
            <Cluster gap=LayoutGap::Md padding=LayoutPadding::Md ui_slot="chat-header">
                <span data-ui-slot="avatar"><Icon icon=IconName::Bot size=IconSize::Md /></span>
                <Stack gap=LayoutGap::None>
                    <Text role=TextRole::Label>"SanjayBot"</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"AI Assistant"</Text>
                </Stack>
                <span data-ui-slot="status-dot" aria-hidden="true"></span>
            </Cluster>

            <div data-ui-slot="chat-messages" role="log" aria-live="polite">
                <For
                    each=move || log.get().messages
                    key=|message| message.id
                    let:message
                >
                    <MessageBubble message host />
                </For>
                <Show when=move || loading.get() fallback=|| ()>
                    <Cluster gap=LayoutGap::Sm ui_slot="thinking">
                        <Icon icon=IconName::Loader size=IconSize::Sm />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "SanjayBot is thinking..."
                        </Text>
                    </Cluster>
                </Show>
                <div node_ref=messages_end></div>
            </div>

            <Cluster gap=LayoutGap::Sm padding=LayoutPadding::Md ui_slot="chat-input">
                <TextField
                    layout_class="chat-input-field"
                    placeholder="Ask me about Sanjay's experience, projects, or skills..."
                    aria_label="Message SanjayBot"
                    value=input
                    disabled=loading
                    on_input=Callback::new(move |ev: web_sys::Event| input.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    })
                />
                <Button
                    variant=ButtonVariant::Primary
                    aria_label="Send message"
                    disabled=send_disabled
                    on_click=Callback::new(move |_: web_sys::MouseEvent| send())
                >
                    <Icon icon=IconName::Send size=IconSize::Sm />
                </Button>
            </Cluster>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage, host: PanelHost) -> impl IntoView {
    let (author_icon, author_label, author_token) = match message.author {
        Author::Bot => (IconName::Bot, "SanjayBot", "bot"),
        Author::Visitor => (IconName::User, "You", "visitor"),
    };
    let actions = message.actions;

    view! {
        <div data-ui-slot="message" data-ui-variant=author_token>
            <Surface variant=SurfaceVariant::Muted padding=LayoutPadding::Sm ui_slot="bubble">
                <p data-ui-slot="content">{message.content}</p>
                {(!actions.is_empty()).then(|| view! {
                    <Cluster gap=LayoutGap::Sm ui_slot="actions">
                        {actions
                            .into_iter()
                            .map(|action| {
                                let target = action.target_app();
                                let icon = action.icon();
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        leading_icon=icon.unwrap_or(IconName::ExternalLink)
                                        disabled=target.is_none()
                                        on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                            if let Some(app_id) = target.clone() {
                                                host.open_app(app_id);
                                            }
                                        })
                                    >
                                        {action.label}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                })}
            </Surface>
            <Cluster gap=LayoutGap::Sm ui_slot="meta">
                <Icon icon=author_icon size=IconSize::Xs />
                <span>{author_label}</span>
                <span aria-hidden="true">"•"</span>
                <span>{message.time_label}</span>
            </Cluster>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::ScriptedChatTransport;
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(actions: &[ChatAction]) -> Vec<&str> {
        actions.iter().map(|action| action.label.as_str()).collect()
    }

    #[test]
    fn fallback_answers_follow_keyword_priority() {
        assert_eq!(fallback_answer("Show me your PROJECTS"), PROJECTS_ANSWER);
        assert_eq!(fallback_answer("what do you work on"), PROJECTS_ANSWER);
        assert_eq!(fallback_answer("Which technologies?"), SKILLS_ANSWER);
        assert_eq!(fallback_answer("tell me about his background"), EXPERIENCE_ANSWER);
        assert_eq!(fallback_answer("how do I hire him"), CONTACT_ANSWER);
        assert_eq!(fallback_answer("hello"), DEFAULT_ANSWER);
        assert_eq!(fallback_answer("project skills"), PROJECTS_ANSWER);
    }

    #[test]
    fn fallback_actions_follow_keyword_priority() {
        assert_eq!(labels(&fallback_actions("projects?")), vec!["View Projects"]);
        assert_eq!(labels(&fallback_actions("skills?")), vec!["Show Skills"]);
        assert_eq!(labels(&fallback_actions("your resume")), vec!["View Resume"]);
        assert_eq!(
            labels(&fallback_actions("hi")),
            vec!["View Resume", "See Projects"]
        );
    }

    #[test]
    fn open_actions_resolve_to_app_ids() {
        assert_eq!(
            ChatAction::view_resume().target_app(),
            Some(AppId::trusted("resume"))
        );
        assert_eq!(ChatAction::new("Docs", "navigate-docs").target_app(), None);
        assert_eq!(ChatAction::new("Bad", "open-Not An App").target_app(), None);
    }

    #[test]
    fn endpoint_answers_are_used_verbatim() {
        let transport = ScriptedChatTransport::default();
        transport.push_reply(Ok(ChatTransportReply::Answered(
            r#"{"answer":"Rust and Leptos.","actions":[{"label":"Show Skills","action":"open-skills"}]}"#
                .to_string(),
        )));

        let reply = block_on(request_reply(&transport, "stack?"));
        assert_eq!(
            reply,
            BotReply {
                content: "Rust and Leptos.".to_string(),
                actions: vec![ChatAction::show_skills()],
            }
        );
        assert_eq!(transport.sent_messages(), vec!["stack?".to_string()]);
    }

    #[test]
    fn answers_without_actions_decode() {
        let transport = ScriptedChatTransport::default();
        transport.push_reply(Ok(ChatTransportReply::Answered(
            r#"{"answer":"Hi there"}"#.to_string(),
        )));

        let reply = block_on(request_reply(&transport, "hi"));
        assert_eq!(reply.content, "Hi there");
        assert!(reply.actions.is_empty());
    }

    #[test]
    fn rejected_requests_use_the_fallback_script() {
        let transport = ScriptedChatTransport::default();
        transport.push_reply(Ok(ChatTransportReply::Rejected(500)));

        let reply = block_on(request_reply(&transport, "Tell me about your skills"));
        assert_eq!(reply.content, SKILLS_ANSWER);
        assert_eq!(labels(&reply.actions), vec!["Show Skills"]);
    }

    #[test]
    fn transport_errors_apologize_with_default_actions() {
        let transport = ScriptedChatTransport::default();
        transport.push_reply(Err("network down".to_string()));

        let reply = block_on(request_reply(&transport, "projects"));
        assert_eq!(reply.content, CONNECTION_TROUBLE);
        assert_eq!(
            labels(&reply.actions),
            vec!["View Resume", "See Projects", "Show Skills"]
        );
    }

    #[test]
    fn log_starts_with_greeting_and_numbers_messages() {
        let mut log = ChatLog::with_greeting("09:00".to_string());
        log.push(Author::Visitor, "hi".to_string(), Vec::new(), "09:01".to_string());

        assert_eq!(log.messages.len(), 2);
        assert_eq!(log.messages[0].content, GREETING);
        assert_eq!(log.messages[0].actions, default_actions());
        assert_eq!(log.messages[1].id, 2);
        assert_eq!(log.messages[1].author, Author::Visitor);
    }
}
