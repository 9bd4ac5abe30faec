//! Page rendered for paths that match no route or static file.

use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "Esta página não foi encontrada.";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-24">
            <h1 class="text-4xl font-bold text-center">"404"</h1>
            <p class="text-center text-lg">{NOT_FOUND_MESSAGE}</p>
        </main>
    }
}
