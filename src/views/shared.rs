use crate::auth::Session;
use crate::data::SharedProvider;
use crate::routes::Route;
use dioxus::prelude::*;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const TRANSCRIPT_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute padding:zero] [period case:upper]");

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_provider() -> SharedProvider {
    use_context::<SharedProvider>()
}

/// Local wall-clock time of a widget message, e.g. `02:35 PM`.
pub fn format_message_time(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_default()
}

/// Transcript line time, e.g. `2:35 PM`.
pub fn format_transcript_time(timestamp: PrimitiveDateTime) -> String {
    timestamp
        .format(TRANSCRIPT_TIME_FORMAT)
        .unwrap_or_default()
}

/// Navigate to `target` once mounted. Used by guards that decide during
/// render but must not navigate from inside it.
#[component]
pub fn RedirectTo(target: Route) -> Element {
    let nav = navigator();
    use_effect(move || {
        nav.replace(target.clone());
    });
    rsx! {}
}

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", role: "alert", "{message}" }
        }
    }
}

#[component]
pub fn DataNotice(message: String) -> Element {
    rsx! {
        div { class: "data-notice", role: "alert",
            p { "{message}" }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            span { class: "shimmer-text", "Loading…" }
        }
    }
}

#[component]
pub fn Brand(to: Route) -> Element {
    rsx! {
        Link { class: "brand", to,
            span { class: "brand-mark", "AI" }
            span { class: "brand-name", "InsureAI" }
        }
    }
}

#[component]
pub fn ToggleSwitch(checked: bool, label: String, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: format_args!("switch {}", if checked { "on" } else { "" }),
            r#type: "button",
            role: "switch",
            aria_checked: checked.to_string(),
            aria_label: "{label}",
            onclick: move |_| on_toggle.call(()),
            span { class: "switch-thumb" }
        }
    }
}
