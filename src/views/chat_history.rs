use crate::data::{ChatSession, SessionKind, Speaker};
use crate::history::{HistoryTab, find_session, visible_sessions};
use crate::purchases::format_date;
use crate::views::shared::{DataNotice, Loading, format_transcript_time, use_provider};
use dioxus::prelude::*;

#[component]
pub fn ChatHistory() -> Element {
    let provider = use_provider();
    let sessions = use_resource(move || {
        let provider = provider.clone();
        async move { provider.chat_sessions().await }
    });
    let mut query = use_signal(String::new);
    let mut tab = use_signal(HistoryTab::default);
    let mut selected = use_signal(|| Option::<String>::None);

    let records = match sessions.read().clone() {
        None => return rsx! { Loading {} },
        Some(Err(err)) => return rsx! { DataNotice { message: err.to_string() } },
        Some(Ok(records)) => records,
    };

    let current_query = query();
    let current_tab = tab();
    let visible: Vec<ChatSession> = visible_sessions(&records, &current_query, current_tab)
        .into_iter()
        .cloned()
        .collect();
    let active_id = selected();
    let detail = active_id
        .as_deref()
        .and_then(|id| find_session(&records, id))
        .cloned();

    rsx! {
        div { class: "vstack page",
            div { class: "page-header",
                h1 { "Conversation History" }
                p { class: "text-muted", "View and search through your past chats and calls" }
            }

            div { class: "search-bar",
                input {
                    r#type: "search",
                    placeholder: "Search conversations...",
                    value: "{query}",
                    oninput: move |ev| query.set(ev.value()),
                }
            }

            div { class: "grid history-layout",
                div { class: "vstack history-list",
                    div { class: "tabs",
                        for option in HistoryTab::ALL {
                            button {
                                key: "{option.label()}",
                                class: if option == current_tab { "tab active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| tab.set(option),
                                "{option.label()}"
                            }
                        }
                    }

                    for record in visible.iter() {
                        SessionCard {
                            key: "{record.id}",
                            record: record.clone(),
                            active: active_id.as_deref() == Some(record.id.as_str()),
                            on_select: move |id: String| selected.set(Some(id)),
                        }
                    }

                    if visible.is_empty() {
                        p { class: "empty text-muted", "{current_tab.empty_message()}" }
                    }
                }

                div { class: "card history-detail",
                    if let Some(record) = detail {
                        SessionDetail { record }
                    } else {
                        div { class: "empty text-muted",
                            h3 { "No conversation selected" }
                            p { "Select a conversation from the list to view details" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionCard(record: ChatSession, active: bool, on_select: EventHandler<String>) -> Element {
    let id = record.id.clone();
    let kind_class = match record.kind {
        SessionKind::Chat => "chat",
        SessionKind::Call => "call",
    };

    rsx! {
        div {
            class: format_args!("card session-card {} {}", kind_class, if active { "active" } else { "" }),
            onclick: move |_| on_select.call(id.clone()),
            div { class: "hstack between",
                strong { "{record.kind.label()}" }
                span { class: "text-muted", "{format_date(record.date)}" }
            }
            p { class: "text-muted clamp", "{record.summary}" }
        }
    }
}

#[component]
fn SessionDetail(record: ChatSession) -> Element {
    rsx! {
        div { class: "card-header hstack between",
            div {
                h2 { "{record.kind.label()}" }
                p { class: "text-muted", "{format_date(record.date)} • {record.summary}" }
            }
        }
        div { class: "chat-list transcript",
            for (i, line) in record.messages.iter().enumerate() {
                div {
                    key: "{i}",
                    class: format_args!("message-row {}", if line.sender == Speaker::User { "user" } else { "assistant" }),
                    if line.sender != Speaker::User {
                        div { class: "avatar assistant",
                            if line.sender == Speaker::Agent { "AG" } else { "AI" }
                        }
                    }
                    div { class: format_args!("bubble {}", if line.sender == Speaker::User { "user" } else { "assistant" }),
                        p { "{line.text}" }
                        span { class: "message-timestamp", "{format_transcript_time(line.timestamp)}" }
                    }
                }
            }
        }
    }
}
