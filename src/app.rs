//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::context::RequestContext;
use crate::pages::{
    home::HomePage, login::LoginPage, post_detail::PostDetailPage, register::RegisterPage,
};
use crate::state::session::SessionManager;
use crate::util::storage::BrowserStore;

/// Root application component.
///
/// Constructs the one `SessionManager` for the process, hydrates it from
/// browser storage, and provides it via context before any route renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionManager::new(Arc::new(BrowserStore), RequestContext::default());
    session.hydrate();
    provide_context(session);

    view! {
        <Title text="StoryShare"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("post"), ParamSegment("id")) view=PostDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
