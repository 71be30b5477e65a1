//! Dropdown panel attached to the "Product" and "Learn" groups in the site
//! header.
//!
//! Below the desktop breakpoint the panel renders inline inside the open
//! navigation drawer; at the breakpoint it becomes an absolutely positioned
//! flyout revealed by hovering the group label.

use leptos::prelude::*;

use crate::components::icons;
use crate::nav::NavLink;

pub fn component(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="flex flex-col gap-1 w-full lg:hidden lg:absolute lg:top-full lg:left-0 lg:w-64 lg:p-2 lg:rounded-lg lg:shadow-xl lg:group-hover:flex bg-transparent lg:bg-[#161926]">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a
                                href=link.href
                                class="flex gap-2 items-center py-2 px-3 text-sm text-white rounded-md hover:bg-white/5"
                            >
                                {link.icon.map(|icon| icons::svg_icon(icon, "size-4"))}
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
