//! Server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are Leptos components rendered to a string on every request. There
//! is no hydration: the markup is static, so no client bundle is shipped.

pub mod home;
pub mod layout;
pub mod not_found;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use home::HomePage;
use layout::Document;
use not_found::NotFoundPage;

/// Stylesheet served at [`layout::STYLESHEET_HREF`].
pub const GLOBALS_CSS: &str = include_str!("globals.css");

/// Render the landing page inside the root layout.
#[must_use]
pub fn render_home() -> String {
    render_in_owner(|| view! { <Document><HomePage/></Document> }.to_html())
}

/// Render the not-found page inside the root layout.
#[must_use]
pub fn render_not_found() -> String {
    render_in_owner(|| view! { <Document><NotFoundPage/></Document> }.to_html())
}

fn render_in_owner(render: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    owner.with(render)
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
