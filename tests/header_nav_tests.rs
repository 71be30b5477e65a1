//! Behavioral tests for the header's navigation data and rendered markup.
//!
//! Markup assertions go through the SSR string renderer; the header's
//! reactive state is covered by the unit tests colocated with the component.

use app::components::{dropdown, icons};
use app::nav::{self, NavLink};
use app::utils::class_names;
use leptos::prelude::*;

const SINGLE_LINK: [NavLink; 1] = [NavLink {
    label: "A",
    href: "/a",
    icon: None,
}];

const TWO_LINKS: [NavLink; 2] = [
    NavLink {
        label: "First",
        href: "/first",
        icon: None,
    },
    NavLink {
        label: "Second",
        href: "/second",
        icon: None,
    },
];

fn render(view: impl IntoView) -> String {
    let owner = Owner::new();
    owner.set();
    view.to_html()
}

#[test]
fn dropdown_renders_each_link_exactly_once() {
    let html = render(dropdown::component(&SINGLE_LINK));

    assert_eq!(html.matches("href=\"/a\"").count(), 1);
    assert!(html.contains('A'), "label missing from: {html}");
}

#[test]
fn dropdown_preserves_link_order() {
    let html = render(dropdown::component(&TWO_LINKS));

    let first = html.find("href=\"/first\"").expect("first link missing");
    let second = html.find("href=\"/second\"").expect("second link missing");
    assert!(first < second);
}

#[test]
fn social_row_renders_three_external_anchors() {
    let html = render(icons::component());

    assert_eq!(html.matches("_blank").count(), 3);
    for url in [nav::REPO_URL, nav::DISCORD_URL, nav::X_URL] {
        assert!(html.contains(url), "missing social anchor for {url}");
    }
}

#[test]
fn nav_calls_to_action_carry_the_attribution_suffix() {
    for href in ["/pricing", "/blog", "/sign-up", nav::APP_LOGIN_URL] {
        let tagged = nav::nav_ref(href);
        assert!(tagged.ends_with("?ref=nav"), "untagged href: {tagged}");
        assert!(tagged.starts_with(href));
    }
}

#[test]
fn panel_visibility_fragments_compose_cleanly() {
    assert_eq!(class_names(&["hidden", "lg:flex"]), "hidden lg:flex");
    assert_eq!(class_names(&["block", "lg:flex"]), "block lg:flex");
    assert_eq!(class_names(&["", "lg:flex"]), "lg:flex");
}
