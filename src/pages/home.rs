//! Home page with hero, category tiles, and featured + recent post grids.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. It fetches the recent and featured
//! post lists concurrently on mount; fetch failures log and degrade to
//! empty sections rather than blocking the page.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::Post;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionManager;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

#[cfg(any(test, feature = "hydrate"))]
const RECENT_LIMIT: u32 = 6;

#[cfg(any(test, feature = "hydrate"))]
const FEATURED_LIMIT: u32 = 3;

fn categories() -> [(&'static str, &'static str); 6] {
    [
        ("Technology", "💻"),
        ("Travel", "✈️"),
        ("Food", "🍕"),
        ("Lifestyle", "🌟"),
        ("Health", "💪"),
        ("Business", "💼"),
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let recent = RwSignal::new(Vec::<Post>::new());
    let featured = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let ctx = expect_context::<SessionManager>().request_context();
        leptos::task::spawn_local(async move {
            let (recent_posts, featured_posts) = futures::join!(
                api::fetch_posts(&ctx, Some(RECENT_LIMIT), false),
                api::fetch_posts(&ctx, Some(FEATURED_LIMIT), true),
            );
            match recent_posts {
                Ok(posts) => recent.set(posts),
                Err(err) => log::error!("failed to fetch recent posts: {err}"),
            }
            match featured_posts {
                Ok(posts) => featured.set(posts),
                Err(err) => log::error!("failed to fetch featured posts: {err}"),
            }
            loading.set(false);
        });
    }

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Share Your Great Story"</h1>
                <p class="hero__subtitle">
                    "Join thousands of writers sharing their experiences, thoughts, and creativity with the world. Your next great read is waiting."
                </p>
                <div class="hero__actions">
                    <a class="hero__cta" href="/register">"Start Writing"</a>
                    <a class="hero__cta hero__cta--ghost" href="#featured">"Explore Stories"</a>
                </div>
            </section>

            <section class="categories">
                <h2>"Explore Categories"</h2>
                <div class="categories__grid">
                    {categories()
                        .into_iter()
                        .map(|(name, icon)| {
                            view! {
                                <div class="category-tile">
                                    <span class="category-tile__icon" aria-hidden="true">{icon}</span>
                                    <h3 class="category-tile__name">{name}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page-spinner" aria-label="Loading"></div> }
            >
                <Show when=move || !featured.get().is_empty()>
                    <section id="featured" class="post-section post-section--featured">
                        <h2>"Featured Stories"</h2>
                        <p class="post-section__lead">
                            "Handpicked stories that inspire, educate, and entertain"
                        </p>
                        <div class="post-grid">
                            {move || {
                                featured
                                    .get()
                                    .into_iter()
                                    .map(|post| view! { <PostCard post=post/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                </Show>

                <section class="post-section">
                    <h2>"Latest Stories"</h2>
                    <p class="post-section__lead">
                        "Fresh perspectives and new ideas from our community"
                    </p>
                    <div class="post-grid">
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>

            <section class="cta-band">
                <h2>"Ready to Share Your Story?"</h2>
                <p>
                    "Join our community of writers and readers. Share your experiences, connect with others, and make your voice heard."
                </p>
                <a class="hero__cta" href="/register">"Start Writing Today"</a>
            </section>
        </div>
    }
}
