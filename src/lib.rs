//! # storyshare
//!
//! Leptos + WASM frontend for the StoryShare blogging application.
//! Pages, components, session state, and the REST API layer live here;
//! the posts/auth backend is a separate service reached over HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
