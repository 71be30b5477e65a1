use leptos::{
    html::{a, div, span},
    prelude::*,
    svg::svg,
};

use crate::nav::{DISCORD_URL, REPO_URL, X_URL};

/// Renders an `icondata` icon as an inline SVG, sized via `class`.
pub fn svg_icon(icon: icondata::Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("innerHTML", icon.data)
        .attr("fill", "currentColor")
        .attr("role", "graphics-symbol")
        .class(class)
}

/// Wordmark shown inside the header's logo anchor.
pub fn wordmark() -> impl IntoView {
    span()
        .class("text-xl font-bold tracking-tight text-white transition-all duration-500 hover:text-[#7b8cff]")
        .child("skylark")
}

/// Icon-only anchors for the project's social destinations.
pub fn component() -> impl IntoView {
    div().class("flex flex-row items-center").child((
        a().href(REPO_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("GitHub")
            .class("flex items-center py-2 px-3.5 text-white hover:opacity-60")
            .child(svg_icon(icondata::BsGithub, "size-5")),
        a().href(DISCORD_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("Discord")
            .class("flex items-center py-2 px-3.5 text-white hover:opacity-60")
            .child(svg_icon(icondata::BsDiscord, "size-5")),
        a().href(X_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("X")
            .class("flex items-center py-2 px-3.5 text-white hover:opacity-60")
            .child(svg_icon(icondata::BsTwitterX, "size-5")),
    ))
}
