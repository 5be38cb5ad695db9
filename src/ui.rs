use crate::auth::Session;
use crate::data::{SharedProvider, default_provider};
use crate::routes::Route;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/insureai.css");

/// Root component. Owns the session and the data provider and hands both
/// down through context.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::default()));
    use_context_provider::<SharedProvider>(default_provider);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
