//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionManager;

/// Navigation bar shown on every page.
///
/// Signed out: Home / Login / Register links. Signed in: the user's name
/// and a Logout button. Session-dependent entries wait for hydration so a
/// signed-in user never sees a Login link flash.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let state = session.state();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"StoryShare"</a>
            <div class="navbar__links">
                <a href="/">"Home"</a>
                <Show when=move || state.get().ready clone:on_logout>
                    <Show
                        when=move || state.get().user.is_some()
                        clone:on_logout
                        fallback=|| {
                            view! {
                                <a href="/login">"Login"</a>
                                <a href="/register">"Register"</a>
                            }
                        }
                    >
                        <span class="navbar__user">
                            {move || state.get().user.map(|user| user.name).unwrap_or_default()}
                        </span>
                        <button class="navbar__logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </Show>
            </div>
        </nav>
    }
}
