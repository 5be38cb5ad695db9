use crate::data::{Policy, PolicyStatus};
use crate::purchases::{
    PolicyTab, RENEWAL_WARNING_DAYS, coverage_preview, days_remaining, format_currency, format_date,
    policies_in_tab, summarize,
};
use crate::views::shared::{DataNotice, Loading, use_provider};
use dioxus::prelude::*;
use time::{Date, OffsetDateTime};

#[component]
pub fn Purchases() -> Element {
    let provider = use_provider();
    let policies = use_resource(move || {
        let provider = provider.clone();
        async move { provider.policies().await }
    });
    let mut tab = use_signal(PolicyTab::default);

    let records = match policies.read().clone() {
        None => return rsx! { Loading {} },
        Some(Err(err)) => return rsx! { DataNotice { message: err.to_string() } },
        Some(Ok(records)) => records,
    };

    let summary = summarize(&records);
    let current_tab = tab();
    let shown: Vec<Policy> = policies_in_tab(&records, current_tab)
        .into_iter()
        .cloned()
        .collect();
    let today = OffsetDateTime::now_utc().date();

    rsx! {
        div { class: "vstack page",
            div { class: "page-header",
                h1 { "Your Insurance Purchases" }
                p { class: "text-muted", "View and manage all your insurance policies" }
            }

            div { class: "grid four-col",
                SummaryTile { value: summary.active.to_string(), label: "Active Policies" }
                SummaryTile { value: summary.pending.to_string(), label: "Pending Policies" }
                SummaryTile { value: summary.expired.to_string(), label: "Expired Policies" }
                SummaryTile { value: format_currency(summary.annual_premium), label: "Annual Premium" }
            }

            div { class: "tabs",
                for option in PolicyTab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if option == current_tab { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }

            for policy in shown.iter() {
                PolicyCard { key: "{policy.id}", policy: policy.clone(), today }
            }

            if shown.is_empty() {
                p { class: "empty text-muted", "No policies in this category" }
            }
        }
    }
}

#[component]
fn SummaryTile(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "card summary-tile",
            h3 { "{value}" }
            p { class: "text-muted", "{label}" }
        }
    }
}

#[component]
fn PolicyCard(policy: Policy, today: Date) -> Element {
    let (preview, hidden) = coverage_preview(&policy);
    let preview = preview.to_vec();
    let remaining = if policy.status == PolicyStatus::Active {
        Some(days_remaining(&policy, today))
    } else {
        None
    };
    let badge_class = match policy.status {
        PolicyStatus::Active => "badge badge-active",
        PolicyStatus::Expired => "badge badge-expired",
        PolicyStatus::Pending => "badge badge-pending",
    };
    let action = match policy.renewal_price {
        Some(price) => format!("Renew ({})", format_currency(price)),
        None => "Manage Policy".to_string(),
    };

    rsx! {
        div { class: format_args!("card policy-card policy-{}", policy.kind),
            div { class: "policy-main",
                div { class: "hstack between",
                    div {
                        h3 { "{policy.name}" }
                        p { class: "text-muted", "Policy #{policy.policy_number}" }
                    }
                    span { class: badge_class, "{policy.status.label()}" }
                }
                div { class: "grid two-col",
                    div {
                        p { class: "text-muted", "Coverage Period" }
                        p { "{format_date(policy.start_date)} - {format_date(policy.end_date)}" }
                    }
                    div {
                        p { class: "text-muted", "Premium" }
                        p { "{format_currency(policy.price)}/year" }
                    }
                }
                div {
                    p { class: "text-muted", "Coverage Summary" }
                    div { class: "hstack wrap",
                        for item in preview.iter() {
                            span { key: "{item}", class: "tag-pill", "{item}" }
                        }
                        if hidden > 0 {
                            span { class: "tag-pill outline", "+{hidden} more" }
                        }
                    }
                }
                if let Some(days) = remaining {
                    p {
                        class: if days <= RENEWAL_WARNING_DAYS { "renewal warning" } else { "renewal" },
                        "Renews in {days} days"
                    }
                }
            }
            div { class: "policy-actions",
                p { class: "text-muted", "Documents" }
                ul {
                    for doc in policy.documents.iter() {
                        li { key: "{doc}", a { class: "link", href: "#", "{doc}" } }
                    }
                }
                button { class: "btn btn-primary btn-block", r#type: "button", "View Details" }
                if policy.status == PolicyStatus::Active {
                    button { class: "btn btn-outline btn-block", r#type: "button", "{action}" }
                }
                if policy.status == PolicyStatus::Expired {
                    button { class: "btn btn-outline btn-block", r#type: "button", "Renew Policy" }
                }
            }
        }
    }
}
