//! Site-wide navigation header.
//!
//! Two pieces of local state drive the rendering: a scroll flag that shades
//! the sticky header once the page moves past a fixed offset, and an
//! open/closed flag for the mobile navigation drawer. Everything else is a
//! pure function of those two flags and the static link data in
//! [`crate::nav`].

use leptos::{ev, prelude::*};
use leptos_router::components::A;

use crate::components::{dropdown, icons};
use crate::nav::{self, learn_links, product_links};
use crate::utils::class_names;

/// Vertical offset, in pixels, past which the header picks up its shaded
/// background.
const SCROLL_SHADE_OFFSET_PX: f64 = 40.0;

fn past_scroll_offset(offset: f64) -> bool {
    offset > SCROLL_SHADE_OFFSET_PX
}

fn header_class(scrolled: bool) -> String {
    class_names(&[
        if scrolled {
            "bg-[#0c0e16]/80 shadow-lg"
        } else {
            ""
        },
        "sticky top-0 right-0 left-0 z-50 backdrop-blur-sm transition-colors duration-200",
    ])
}

fn nav_panel_class(menu_open: bool) -> String {
    class_names(&[
        if menu_open { "block" } else { "hidden" },
        "overflow-y-scroll fixed top-0 bottom-0 left-0 right-0 -z-10 pt-20 w-full h-screen max-h-screen bg-[#10121c] lg:static lg:flex lg:z-0 lg:overflow-visible lg:pt-0 lg:h-auto lg:bottom-auto lg:bg-transparent",
    ])
}

fn toggle_icon(menu_open: bool) -> icondata::Icon {
    if menu_open {
        icondata::BsXLg
    } else {
        icondata::BsList
    }
}

/// Renders the site header: logo, dropdown-driven navigation, social links
/// and the authentication calls to action.
pub fn component() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    // Effects only run on the client, which keeps the subscription out of
    // server rendering. The header stays mounted for the whole page, so the
    // listener handle is deliberately leaked rather than removed.
    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            scrolled.set(past_scroll_offset(offset));
        });
        std::mem::forget(handle);
    });

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="container flex justify-between items-center py-5 px-4 mx-auto max-w-6xl md:px-6 lg:py-0">
                <div class="flex items-center w-full">
                    <A href="/" attr:class="mr-4">
                        {icons::wordmark()}
                    </A>
                    <nav class=move || nav_panel_class(menu_open.get())>
                        <div class="flex flex-col items-start w-full lg:flex-row lg:items-center">
                            <ul class="flex flex-col gap-4 lg:flex-row lg:items-center lg:gap-0">
                                <li class="flex relative items-center text-sm font-medium text-white group lg:py-8 lg:px-5">
                                    <span class="hidden cursor-pointer lg:block transition-opacity group-hover:lg:opacity-40">
                                        "Product"
                                    </span>
                                    {dropdown::component(product_links())}
                                </li>
                                <li class="flex relative flex-col text-sm font-medium text-white group lg:flex-row lg:items-center lg:py-8 lg:px-5">
                                    <span class="hidden cursor-pointer lg:block lg:group-hover:opacity-40 transition-opacity">
                                        "Learn"
                                    </span>
                                    {dropdown::component(learn_links())}
                                </li>
                                <li>
                                    <a
                                        href=nav::nav_ref("/pricing")
                                        class="flex items-center py-2 px-8 mt-4 text-sm font-medium text-white lg:px-5 lg:mt-0 hover:opacity-60"
                                    >
                                        "Pricing"
                                    </a>
                                </li>
                                <li>
                                    <a
                                        href=nav::nav_ref("/blog")
                                        class="flex items-center py-2 px-8 text-sm font-medium text-white lg:px-5 hover:opacity-60"
                                    >
                                        "Blog"
                                    </a>
                                </li>
                            </ul>
                            <div class="mt-2 ml-4 lg:mt-0 lg:ml-0">{icons::component()}</div>
                        </div>
                        <div class="flex gap-6 items-center py-8 px-8 lg:py-0 lg:px-0 lg:w-1/3 lg:justify-end">
                            <a
                                href=nav::nav_ref(nav::APP_LOGIN_URL)
                                class="text-sm font-medium text-white transition-all duration-150 hover:opacity-60"
                            >
                                "Log In"
                            </a>
                            <a
                                href=nav::nav_ref("/sign-up")
                                class="flex gap-0.5 items-center py-2 pr-5 pl-6 text-sm font-medium text-white rounded-full transition-all group bg-indigo-500 hover:bg-indigo-400"
                            >
                                "Sign Up"
                                {icons::svg_icon(
                                    icondata::BsArrowRight,
                                    "relative top-px transition-transform duration-150 size-4 group-hover:translate-x-1.5",
                                )}
                            </a>
                        </div>
                    </nav>
                </div>
                <button
                    class="text-slate-400 lg:hidden"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || icons::svg_icon(toggle_icon(menu_open.get()), "size-6")}
                </button>
            </div>
        </header>
    }
}
