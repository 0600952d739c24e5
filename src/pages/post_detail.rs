//! Post detail page with author actions and related stories.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the post for the current route id plus a short related list.
//! The post's author additionally gets a delete action, which asks for
//! confirmation, issues an authenticated request, and navigates home on
//! success.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_navigate, use_params_map};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::components::post_card::PostCard;
use crate::net::types::{Post, User};
use crate::state::session::SessionManager;
use crate::util::format::{author_initial, format_date};

#[cfg(feature = "hydrate")]
use crate::net::api;

#[cfg(test)]
#[path = "post_detail_test.rs"]
mod post_detail_test;

#[cfg(any(test, feature = "hydrate"))]
const RELATED_LIMIT: u32 = 3;

fn is_author(user: Option<&User>, post: &Post) -> bool {
    user.is_some_and(|user| user.id == post.author.id)
}

/// Drop the currently open post from a related-posts candidate list.
#[cfg(any(test, feature = "hydrate"))]
fn related_excluding(posts: Vec<Post>, current_id: &str) -> Vec<Post> {
    posts.into_iter().filter(|post| post.id != current_id).collect()
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session = expect_context::<SessionManager>();
    let state = session.state();
    let navigate = use_navigate();
    let ctx = session.request_context();

    let post = RwSignal::new(None::<Post>);
    let related = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());

    {
        let ctx = ctx.clone();
        Effect::new(move || {
            let id = params.read().get("id").unwrap_or_default();
            if id.is_empty() {
                loading.set(false);
                return;
            }
            loading.set(true);
            notice.set(String::new());
            #[cfg(feature = "hydrate")]
            {
                let ctx = ctx.clone();
                leptos::task::spawn_local(async move {
                    let (found, others) = futures::join!(
                        api::fetch_post(&ctx, &id),
                        api::fetch_posts(&ctx, Some(RELATED_LIMIT), false),
                    );
                    match found {
                        Ok(value) => post.set(Some(value)),
                        Err(err) => {
                            log::warn!("failed to fetch post {id}: {err}");
                            post.set(None);
                        }
                    }
                    match others {
                        Ok(posts) => related.set(related_excluding(posts, &id)),
                        Err(err) => log::warn!("failed to fetch related posts: {err}"),
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &ctx;
        });
    }

    let on_delete = {
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            #[cfg(feature = "hydrate")]
            {
                let confirmed = web_sys::window().is_some_and(|w| {
                    w.confirm_with_message("Are you sure you want to delete this post?")
                        .unwrap_or(false)
                });
                if !confirmed {
                    return;
                }
                let Some(current) = post.get_untracked() else {
                    return;
                };
                let ctx = ctx.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match api::delete_post(&ctx, &current.id).await {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(err) => {
                            log::warn!("failed to delete post {}: {err}", current.id);
                            notice.set("Failed to delete post".to_owned());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&ctx, &navigate);
        }
    };

    let body = move || {
        if loading.get() {
            return view! { <div class="page-spinner" aria-label="Loading"></div> }.into_any();
        }
        let Some(current) = post.get() else {
            return view! {
                <div class="not-found">
                    <h1>"Post Not Found"</h1>
                    <p>"The post you're looking for doesn't exist."</p>
                    <a class="hero__cta" href="/">"Back to Home"</a>
                </div>
            }
            .into_any();
        };

        let author_owns = is_author(state.get().user.as_ref(), &current);
        let featured = current.featured;
        let initial = author_initial(&current.author.name);
        let date = format_date(&current.created_at);
        let read_time = format!("{} min read", current.read_time);
        let tags = current.tags.clone();
        let has_tags = !tags.is_empty();
        let on_delete = on_delete.clone();

        view! {
            <article class="post-detail">
                <div class="post-hero">
                    <img
                        class="post-hero__cover"
                        src=current.cover_image.clone()
                        alt=current.title.clone()
                    />
                    <div class="post-hero__overlay">
                        <Show when=move || featured>
                            <span class="post-card__badge">"Featured"</span>
                        </Show>
                        <h1 class="post-hero__title">{current.title.clone()}</h1>
                        <p class="post-hero__excerpt">{current.excerpt.clone()}</p>
                        <div class="post-hero__meta">
                            <span class="post-card__avatar" aria-hidden="true">{initial.clone()}</span>
                            <span>{current.author.name.clone()}</span>
                            <span class="post-card__dot">"•"</span>
                            <span>{date}</span>
                            <span class="post-card__dot">"•"</span>
                            <span>{current.category.clone()}</span>
                            <span class="post-card__dot">"•"</span>
                            <span>{read_time}</span>
                        </div>
                    </div>
                </div>

                <div class="post-detail__layout">
                    <div class="post-detail__main">
                        <div class="post-content">{current.content.clone()}</div>
                        <Show when=move || has_tags>
                            <div class="post-tags">
                                <h3>"Tags"</h3>
                                {tags
                                    .iter()
                                    .map(|tag| {
                                        view! { <span class="post-tag">{format!("#{tag}")}</span> }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                        <Show when=move || author_owns>
                            <div class="post-actions">
                                <Show when=move || !notice.get().is_empty()>
                                    <p class="auth-message">{move || notice.get()}</p>
                                </Show>
                                <button class="post-actions__delete" on:click=on_delete.clone()>
                                    "Delete Post"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <aside class="post-detail__sidebar">
                        <div class="sidebar-card">
                            <h3>"About the Author"</h3>
                            <div class="sidebar-card__author">
                                <span class="post-card__avatar" aria-hidden="true">{initial}</span>
                                <div>
                                    <p class="sidebar-card__name">{current.author.name.clone()}</p>
                                    <p class="sidebar-card__role">"Blog Writer"</p>
                                </div>
                            </div>
                        </div>
                        <Show when=move || !related.get().is_empty()>
                            <div class="sidebar-card">
                                <h3>"Related Stories"</h3>
                                {move || {
                                    related
                                        .get()
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post compact=true/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </aside>
                </div>
            </article>
        }
        .into_any()
    };

    view! { <div class="post-detail-page">{body}</div> }
}
