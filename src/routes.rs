//! Client-side route table and the authorization decision for each route.

use crate::auth::Session;
use crate::views::{
    ChatHistory, DashboardLayout, Landing, Login, NotFound, Overview, Profile, Purchases, Signup,
};
use dioxus::prelude::*;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Overview {},
            #[route("/chat-history")]
            ChatHistory {},
            #[route("/purchases")]
            Purchases {},
            #[route("/profile")]
            Profile {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

impl Route {
    /// Dashboard routes need a signed-in session.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Overview {} | Route::ChatHistory {} | Route::Purchases {} | Route::Profile {}
        )
    }

    /// Login and signup make no sense once signed in.
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login {} | Route::Signup {})
    }
}

/// Decide whether `session` may see `route`. Checked on every navigation,
/// including a URL typed straight into the address bar.
pub fn authorize(route: &Route, session: &Session) -> Access {
    if route.requires_session() && !session.is_authenticated() {
        tracing::info!(%route, "redirecting signed-out visitor to login");
        return Access::Redirect(Route::Login {});
    }
    if route.is_auth_screen() && session.is_authenticated() {
        return Access::Redirect(home_route());
    }
    Access::Allow
}

/// Where a successful login or signup lands.
pub fn home_route() -> Route {
    Route::Overview {}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar entries of the dashboard layout.
pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem {
            label: "Dashboard",
            route: Route::Overview {},
        },
        NavItem {
            label: "Chat History",
            route: Route::ChatHistory {},
        },
        NavItem {
            label: "Purchases",
            route: Route::Purchases {},
        },
        NavItem {
            label: "Profile",
            route: Route::Profile {},
        },
    ]
}
