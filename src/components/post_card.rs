//! Reusable card component for post list items.
//!
//! DESIGN
//! ======
//! Keeps post presentation consistent between the featured grid, the recent
//! grid, and the related-posts sidebar.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::format::{author_initial, format_date};

/// A clickable card representing a post.
#[component]
pub fn PostCard(post: Post, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = format!("/post/{}", post.id);
    let initial = author_initial(&post.author.name);
    let date = format_date(&post.created_at);
    let featured = post.featured;
    let read_time = format!("{} min read", post.read_time);

    view! {
        <a
            class="post-card"
            class:post-card--compact=compact
            class:post-card--featured=featured
            href=href
        >
            <div class="post-card__media">
                <img class="post-card__cover" src=post.cover_image.clone() alt=post.title.clone()/>
                <Show when=move || featured>
                    <span class="post-card__badge">"Featured"</span>
                </Show>
            </div>
            <div class="post-card__body">
                <div class="post-card__meta">
                    <span class="post-card__category">{post.category.clone()}</span>
                    <span class="post-card__dot">"•"</span>
                    <span>{read_time}</span>
                </div>
                <h3 class="post-card__title">{post.title.clone()}</h3>
                <p class="post-card__excerpt">{post.excerpt.clone()}</p>
                <div class="post-card__footer">
                    <span class="post-card__avatar" aria-hidden="true">{initial}</span>
                    <span class="post-card__author">{post.author.name.clone()}</span>
                    <span class="post-card__date">{date}</span>
                </div>
            </div>
        </a>
    }
}
