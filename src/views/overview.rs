use crate::data::{ChatSession, DataResult, Insight, Policy, PolicyStatus, SharedProvider, Speaker};
use crate::history::latest_session;
use crate::purchases::{format_currency, format_date, term_progress};
use crate::routes::Route;
use crate::validation::validate_phone;
use crate::views::shared::{DataNotice, FieldError, Loading, format_transcript_time, use_provider, use_session};
use dioxus::prelude::*;
use time::OffsetDateTime;

/// Policies listed under "Recent Purchases".
const RECENT_PURCHASES: usize = 3;

#[derive(Clone, Debug, PartialEq)]
struct OverviewData {
    insights: Vec<Insight>,
    policies: Vec<Policy>,
    sessions: Vec<ChatSession>,
}

async fn load_overview(provider: SharedProvider) -> DataResult<OverviewData> {
    Ok(OverviewData {
        insights: provider.insights().await?,
        policies: provider.policies().await?,
        sessions: provider.chat_sessions().await?,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HelpTab {
    Call,
    Chat,
}

#[component]
pub fn Overview() -> Element {
    let provider = use_provider();
    let session = use_session();
    let data = use_resource(move || load_overview(provider.clone()));

    let loaded = match data.read().clone() {
        None => return rsx! { Loading {} },
        Some(Err(err)) => return rsx! { DataNotice { message: err.to_string() } },
        Some(Ok(loaded)) => loaded,
    };

    let today = OffsetDateTime::now_utc().date();
    let greeting_name = session
        .read()
        .user()
        .and_then(|user| user.split('@').next())
        .unwrap_or("there")
        .to_string();
    let active: Vec<Policy> = loaded
        .policies
        .iter()
        .filter(|policy| policy.status == PolicyStatus::Active)
        .cloned()
        .collect();
    let recent: Vec<Policy> = loaded.policies.iter().take(RECENT_PURCHASES).cloned().collect();
    let last_conversation = latest_session(&loaded.sessions).cloned();

    rsx! {
        div { class: "vstack page",
            div { class: "page-header",
                div {
                    h1 { "Welcome back, {greeting_name}" }
                    p { class: "text-muted", "Here's what's happening with your insurance today." }
                }
            }

            div { class: "card insights",
                div { class: "card-header",
                    h2 { "AI Assistant Insights" }
                    p { class: "text-muted", "Personalized insights based on your profile and conversations" }
                }
                div { class: "grid",
                    for insight in loaded.insights.iter() {
                        div { key: "{insight.title}", class: "insight",
                            h3 { "{insight.title}" }
                            p { "{insight.body}" }
                            Link { class: "link", to: Route::Purchases {}, "{insight.action}" }
                        }
                    }
                }
            }

            div { class: "grid two-col",
                div { class: "card",
                    div { class: "card-header",
                        h2 { "Insurance Summary" }
                        p { class: "text-muted", "Overview of your active policies" }
                    }
                    for policy in active.iter() {
                        div { key: "{policy.id}", class: "policy-summary",
                            div { class: "hstack between",
                                strong { "{policy.name}" }
                                span { class: "badge badge-active", "Active" }
                            }
                            div { class: "hstack between text-muted",
                                span { "Renews" }
                                span { "{format_date(policy.end_date)}" }
                            }
                            div { class: "progress",
                                div { class: "progress-bar", style: "width: {term_progress(policy, today)}%;" }
                            }
                            div { class: "hstack between text-muted",
                                span { "Policy progress" }
                                span { "{term_progress(policy, today)}%" }
                            }
                        }
                    }
                    Link { class: "btn btn-outline btn-block", to: Route::Purchases {}, "View All Policies" }
                }

                div { class: "card",
                    div { class: "card-header",
                        h2 { "Last Conversation" }
                        p { class: "text-muted", "Continue where you left off" }
                    }
                    if let Some(last) = last_conversation {
                        LastConversation { session: last }
                    } else {
                        p { class: "text-muted", "No conversations yet." }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { "Recent Purchases" }
                    p { class: "text-muted", "Your insurance policy history" }
                }
                for policy in recent.iter() {
                    Link { key: "{policy.id}", class: "purchase-row", to: Route::Purchases {},
                        div {
                            strong { "{policy.name}" }
                            p { class: "text-muted", "Policy #{policy.policy_number} | {format_date(policy.start_date)}" }
                        }
                        div { class: "align-end",
                            p { "{format_currency(policy.price)}" }
                            p { class: "text-muted", "{policy.status.label()}" }
                        }
                    }
                }
                Link { class: "btn btn-outline btn-block", to: Route::Purchases {}, "View All Purchases" }
            }

            HelpCard {}
        }
    }
}

#[component]
fn LastConversation(session: ChatSession) -> Element {
    let snippet: Vec<_> = session.messages.iter().rev().take(2).rev().cloned().collect();
    let when = session
        .messages
        .last()
        .map(|line| format!("{} - {}", format_date(session.date), format_transcript_time(line.timestamp)))
        .unwrap_or_else(|| format_date(session.date));

    rsx! {
        div { class: "vstack",
            span { class: "text-muted", "{when}" }
            p { class: "text-muted", "{session.summary}" }
            for (i, line) in snippet.iter().enumerate() {
                div {
                    key: "{i}",
                    class: format_args!("bubble {}", match line.sender { Speaker::User => "user", _ => "assistant" }),
                    "{line.text}"
                }
            }
            Link { class: "btn btn-outline", to: Route::ChatHistory {}, "View Details" }
        }
    }
}

/// Call-back request and chat shortcut.
#[component]
fn HelpCard() -> Element {
    let mut tab = use_signal(|| HelpTab::Call);
    let mut phone = use_signal(String::new);
    let mut phone_error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let on_call = move |_: MouseEvent| {
        let number = phone();
        match validate_phone(&number) {
            Ok(()) => {
                tracing::info!(%number, "call-back requested");
                phone_error.set(None);
                status.set(Some(format!("Initiating call to {number}...")));
            }
            Err(err) => {
                status.set(None);
                phone_error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { "Need Help?" }
                p { class: "text-muted", "Connect with our experts" }
            }
            div { class: "tabs",
                button {
                    class: if tab() == HelpTab::Call { "tab active" } else { "tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(HelpTab::Call),
                    "Call Agent"
                }
                button {
                    class: if tab() == HelpTab::Chat { "tab active" } else { "tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(HelpTab::Chat),
                    "Chat"
                }
            }
            if tab() == HelpTab::Call {
                div { class: "vstack",
                    p { class: "text-muted", "Enter your phone number and we'll call you right away" }
                    input {
                        r#type: "tel",
                        placeholder: "(123) 456-7890",
                        value: "{phone}",
                        oninput: move |ev| {
                            phone.set(ev.value());
                            phone_error.set(None);
                        },
                    }
                    FieldError { message: phone_error() }
                    if let Some(message) = status() {
                        p { class: "status", role: "status", "{message}" }
                    }
                    button { class: "btn btn-primary", r#type: "button", onclick: on_call, "Call Now" }
                }
            } else {
                div { class: "vstack",
                    p { class: "text-muted", "Our AI assistant is ready to help with any insurance questions" }
                    p { class: "text-muted", "Open the assistant with the chat button in the corner." }
                }
            }
        }
    }
}
