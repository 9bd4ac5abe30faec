use super::*;
use layout::{SITE_DESCRIPTION, SITE_LANG, SITE_TITLE, STYLESHEET_HREF};

fn badge_spans(html: &str) -> Vec<&str> {
    html.match_indices(r#"<span class="badge "#)
        .filter_map(|(start, _)| {
            let rest = &html[start..];
            let open_end = rest.find('>')? + 1;
            let close = rest.find("</span>")?;
            Some(&rest[open_end..close])
        })
        .collect()
}

#[test]
fn home_contains_heading_text() {
    let html = render_home();
    assert!(html.contains(">Sistema de Acompanhamento AIOS</h1>"), "{html}");
}

#[test]
fn home_has_exactly_three_badges_in_order() {
    let html = render_home();
    let badges = badge_spans(&html);
    assert_eq!(badges, vec!["✅ Next.js 14", "✅ TypeScript", "✅ Tailwind CSS"]);
}

#[test]
fn badges_carry_their_colors() {
    let html = render_home();
    for (_, color) in home::BADGES {
        assert!(html.contains(&format!("badge px-4 py-2 {color} text-white rounded-lg")), "missing {color}");
    }
}

#[test]
fn home_contains_subtitle() {
    let html = render_home();
    assert!(html.contains(SITE_DESCRIPTION));
}

#[test]
fn document_has_title_and_language() {
    let html = render_home();
    assert_eq!(SITE_TITLE, "Sistema de Acompanhamento AIOS");
    assert_eq!(SITE_LANG, "pt-BR");
    assert!(html.contains(r#"lang="pt-BR""#), "{html}");
    assert!(html.contains("<title>Sistema de Acompanhamento AIOS</title>"), "{html}");
}

#[test]
fn document_has_description_and_stylesheet() {
    let html = render_home();
    assert!(html.contains(
        r#"content="Plataforma de aprendizado interativa com mapa mental e AI Tutor""#
    ));
    assert!(html.contains(&format!(r#"href="{STYLESHEET_HREF}""#)));
    assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
}

#[test]
fn not_found_page_uses_shared_layout() {
    let html = render_not_found();
    assert!(html.contains("<title>Sistema de Acompanhamento AIOS</title>"));
    assert!(html.contains(">404</h1>"));
    assert!(html.contains(not_found::NOT_FOUND_MESSAGE));
    assert!(badge_spans(&html).is_empty());
}

#[test]
fn stylesheet_defines_badge_colors() {
    for class in [".bg-blue-500", ".bg-green-500", ".bg-purple-500", ".rounded-lg"] {
        assert!(GLOBALS_CSS.contains(class), "missing {class}");
    }
}
