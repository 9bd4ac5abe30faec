//! Root document layout shared by every page.

use leptos::prelude::*;

pub const SITE_TITLE: &str = "Sistema de Acompanhamento AIOS";
pub const SITE_DESCRIPTION: &str = "Plataforma de aprendizado interativa com mapa mental e AI Tutor";
pub const SITE_LANG: &str = "pt-BR";
pub const STYLESHEET_HREF: &str = "/globals.css";

/// Full HTML document: metadata in `<head>`, page content in `<body>`.
#[component]
pub fn Document(children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=SITE_LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{SITE_TITLE}</title>
                <meta name="description" content=SITE_DESCRIPTION/>
                <link rel="stylesheet" href=STYLESHEET_HREF/>
            </head>
            <body>{children()}</body>
        </html>
    }
}
