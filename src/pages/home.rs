//! Landing page.

use leptos::prelude::*;

use super::layout::{SITE_DESCRIPTION, SITE_TITLE};

/// Badge label and background utility class, in display order.
pub const BADGES: [(&str, &str); 3] = [
    ("✅ Next.js 14", "bg-blue-500"),
    ("✅ TypeScript", "bg-green-500"),
    ("✅ Tailwind CSS", "bg-purple-500"),
];

#[component]
fn Badge(label: &'static str, color: &'static str) -> impl IntoView {
    let class = format!("badge px-4 py-2 {color} text-white rounded-lg");
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-24">
            <div class="z-10 max-w-5xl w-full items-center justify-center font-mono text-sm flex flex-col gap-8">
                <h1 class="text-4xl font-bold text-center">{SITE_TITLE}</h1>
                <p class="text-center text-lg">{SITE_DESCRIPTION}</p>
                <div class="flex gap-4">
                    {BADGES
                        .into_iter()
                        .map(|(label, color)| view! { <Badge label=label color=color/> })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
}
