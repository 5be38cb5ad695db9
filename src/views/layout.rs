use crate::routes::{Access, Route, authorize, home_route, nav_items};
use crate::views::chat_widget::AssistantWidget;
use crate::views::shared::{Brand, RedirectTo, use_session};
use dioxus::prelude::*;

/// Shell around every `/dashboard` route. Authorization is re-checked on
/// each render, so typing a dashboard URL while signed out lands on login.
#[component]
pub fn DashboardLayout() -> Element {
    let mut session = use_session();
    let route = use_route::<Route>();
    let nav = navigator();
    let mut sidebar_open = use_signal(|| false);

    if let Access::Redirect(target) = authorize(&route, &session.read()) {
        return rsx! { RedirectTo { target } };
    }

    let user = session.read().user().unwrap_or_default().to_string();

    rsx! {
        div { class: "dashboard",
            button {
                class: "btn btn-outline sidebar-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                onclick: move |_| sidebar_open.set(!sidebar_open()),
                if sidebar_open() { "✕" } else { "☰" }
            }

            aside { class: format_args!("sidebar {}", if sidebar_open() { "open" } else { "" }),
                div { class: "sidebar-header",
                    Brand { to: home_route() }
                }
                nav { class: "sidebar-nav",
                    for item in nav_items() {
                        Link {
                            key: "{item.label}",
                            class: "nav-item",
                            active_class: "active",
                            to: item.route.clone(),
                            onclick: move |_| sidebar_open.set(false),
                            "{item.label}"
                        }
                    }
                }
                div { class: "sidebar-footer",
                    if !user.is_empty() {
                        p { class: "text-muted signed-in-as", "Signed in as {user}" }
                    }
                    button {
                        class: "btn btn-outline btn-block",
                        r#type: "button",
                        onclick: move |_| {
                            nav.replace(Route::Landing {});
                            session.with_mut(|session| session.logout());
                        },
                        "Logout"
                    }
                }
            }

            main { class: "dashboard-main",
                div { class: "container",
                    Outlet::<Route> {}
                }
            }

            AssistantWidget {}
        }
    }
}
