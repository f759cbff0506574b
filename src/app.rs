use dioxus::prelude::*;
use folio_core::Showcase;

use crate::context::get_projects;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Portfolio page with the project showcase
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, the showcase context, and routing.
#[component]
pub fn App() -> Element {
    // Category index is derived here, once, when the repository is handed over
    let showcase: Signal<Showcase> = use_signal(|| Showcase::new(get_projects()));
    use_context_provider(|| showcase);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
