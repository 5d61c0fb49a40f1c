use dioxus::prelude::*;
use sweetheart_core::PageSession;

use crate::context::{startup_session, PageClock};
use crate::pages::Home;
use crate::theme::{CONFETTI_SRC, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the confetti library, session context and the page.
#[component]
pub fn App() -> Element {
    let session: Signal<PageSession> = use_signal(startup_session);

    // Provide session and clock to all child components
    use_context_provider(|| session);
    use_context_provider(PageClock::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        document::Script { src: CONFETTI_SRC }
        Home {}
    }
}
