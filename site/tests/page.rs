use pretty_assertions::assert_eq;
use seagro_site::content::{FEATURES, NAV_ITEMS};
use seagro_site::{PageOptions, render_fragment, render_page};
use std::thread;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in rendered page"))
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render_page(&PageOptions::default());

    let body = position(&html, "<body");
    let nav = position(&html, "<nav");
    let main = position(&html, "<main");
    let hero = position(&html, "<h1");
    let headline = hero + position(&html[hero..], "Connect. Learn. Grow.");
    let features = position(&html, r#"id="features""#);
    let main_end = position(&html, "</main>");
    let footer = position(&html, "<footer");

    assert!(body < nav && nav < main);
    assert!(main < hero && hero < features && features < main_end);
    assert!(headline < features);
    assert!(main_end < footer);
}

#[test]
fn page_counts_match_content() {
    let html = render_fragment();

    assert_eq!(html.matches(r#"class="nav-item "#).count(), NAV_ITEMS.len());
    assert_eq!(html.matches("<article").count(), FEATURES.len());
    assert_eq!(html.matches(r#"class="footer-column""#).count(), 4);
    assert_eq!(html.matches("<h1").count(), 1);
    assert_eq!(html.matches(r#"class="copyright""#).count(), 1);
}

#[test]
fn footer_columns_are_labeled() {
    let html = render_fragment();
    let footer = &html[position(&html, "<footer")..];

    for heading in ["About SeaGro", "Features", "Resources", "Legal"] {
        let needle = format!(">{heading}</h3>");
        assert_eq!(footer.matches(&needle).count(), 1, "{heading}");
    }
    assert!(footer.contains("2024"));
    assert!(footer.contains("SeaGro. All rights reserved."));
}

#[test]
fn buttons_carry_no_behavior() {
    let html = render_page(&PageOptions::default());

    assert!(!html.contains("onclick"));
    assert!(!html.contains("<form"));
    assert!(!html.contains("<script"));
}

#[test]
fn repeated_renders_are_identical() {
    let first = render_page(&PageOptions::default());
    for _ in 0..3 {
        assert_eq!(first, render_page(&PageOptions::default()));
    }
}

#[test]
fn renders_are_thread_independent() {
    let expected = render_fragment();
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(render_fragment)).collect();
    for handle in handles {
        assert_eq!(expected, handle.join().expect("render thread"));
    }
}
