use crate::config::config;
use crate::timer::{self, TaskSet};
use crate::types::Sender;
use crate::views::shared::format_message_time;
use crate::widget::{ChatWidget, Phase, SUGGESTIONS, pick_reply};
use dioxus::events::Key;
use dioxus::prelude::*;

/// Floating assistant button and panel.
///
/// Reply timers are tracked in a `TaskSet` owned by this component. When the
/// component unmounts the set is dropped and every pending reply is
/// cancelled, so nothing is written to the widget after disposal. Closing
/// the panel only hides it.
#[component]
pub fn AssistantWidget() -> Element {
    let mut widget = use_signal(ChatWidget::new);
    let mut input = use_signal(String::new);
    let mut tasks = use_signal(TaskSet::default);

    let mut send_message = move |text: String| {
        let Some(ticket) = widget.with_mut(|widget| widget.submit(&text)) else {
            return;
        };
        input.set(String::new());

        let reply_text = pick_reply(&mut rand::rng());
        let (handle, reply) = timer::delayed(config().reply_delay, reply_text);
        tasks.with_mut(|tasks| tasks.track(handle));
        spawn(async move {
            if let Some(text) = reply.await {
                widget.with_mut(|widget| widget.deliver(ticket, text));
            }
            tasks.with_mut(|tasks| tasks.prune());
        });
    };

    let state = widget.read();
    let is_open = state.is_open();
    let awaiting = state.phase() == Phase::AwaitingReply;
    let show_suggestions = state.show_suggestions();
    let messages = state.messages().to_vec();
    drop(state);

    rsx! {
        button {
            class: format_args!("chat-fab {}", if is_open { "open" } else { "" }),
            r#type: "button",
            aria_label: if is_open { "Close assistant" } else { "Open assistant" },
            onclick: move |_| widget.with_mut(|widget| widget.toggle()),
            if is_open { "✕" } else { "💬" }
        }

        div {
            class: format_args!("chat-panel {}", if is_open { "open" } else { "" }),
            aria_hidden: (!is_open).to_string(),
            div { class: "chat-panel-header",
                span { class: "avatar assistant", "AI" }
                h3 { "AI Insurance Assistant" }
            }

            div { class: "chat-list",
                for msg in messages.iter() {
                    div {
                        key: "{msg.id}",
                        class: format_args!("message-row {}", match msg.sender { Sender::User => "user", Sender::Ai => "assistant" }),
                        div { class: format_args!("bubble {}", match msg.sender { Sender::User => "user", Sender::Ai => "assistant" }),
                            p { "{msg.text}" }
                            span { class: "message-timestamp", "{format_message_time(msg.timestamp)}" }
                        }
                    }
                }

                if awaiting {
                    div { class: "message-row assistant",
                        div { class: "bubble assistant typing",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }

                if show_suggestions {
                    div { class: "suggestions",
                        for suggestion in SUGGESTIONS {
                            button {
                                key: "{suggestion}",
                                class: "tag-pill",
                                r#type: "button",
                                onclick: move |_| send_message(suggestion.to_string()),
                                "{suggestion}"
                            }
                        }
                    }
                }
            }

            div { class: "composer",
                input {
                    placeholder: "Type your message...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            send_message(input());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: input().trim().is_empty(),
                    onclick: move |_| send_message(input()),
                    "Send"
                }
            }
        }
    }
}
