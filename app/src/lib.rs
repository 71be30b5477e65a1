// Core application modules and components
use crate::components::{error_template, header, icons};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod blog;
pub mod components;
mod home;
pub mod nav;
mod pricing;
mod signup;
pub mod utils;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/skylark.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Skylark \u{2013} Durable Background Functions")
                    .build(),
            ),
        )),
        body().class("bg-[#0b0d14]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto text-white font-sans">
                {header::component}
                <main class="min-h-screen">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("pricing") view=pricing::component/>
                        <Route path=StaticSegment("blog") view=blog::component/>
                        <Route path=StaticSegment("sign-up") view=signup::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-8 text-center border-t border-white/10")
        .child(
            div().class("flex flex-col gap-3 justify-center items-center").child((
                p().class("text-gray-400").child((
                    "Built in the open at ",
                    a().href(nav::REPO_URL)
                        .class("hover:underline text-[#7b8cff]")
                        .child("skylark-dev"),
                    format!(" \u{a9} {}", Utc::now().year()),
                )),
                div().class("block lg:hidden").child(icons::component),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        // Test shell function with default options
        let options = LeptosOptions::builder().output_name("skylark").build();
        let shell_view = shell(options);
        // We can't easily inspect the rendered content without a full Leptos
        // context, but we can verify the function executes without panicking.
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        // Following Leptos practice: test logic separately, not component rendering.
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("skylark").build();
        assert_eq!(options.site_addr.port(), 3000); // Default port
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1"); // Default IP
    }
}
