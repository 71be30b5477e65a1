//! Landing page for the marketing site.
//!
//! Static, presentational content only: a hero, one section per product
//! pillar (the header's "Product" dropdown anchors point at these), and a
//! closing call to action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav;

struct Pillar {
    id: &'static str,
    title: &'static str,
    copy: &'static str,
}

const PILLARS: [Pillar; 4] = [
    Pillar {
        id: "functions",
        title: "Functions",
        copy: "Write background jobs as plain functions. Skylark handles queueing, \
               retries and fan-out so your code doesn't have to.",
    },
    Pillar {
        id: "scheduling",
        title: "Scheduling",
        copy: "Cron expressions and one-shot timers with the same durability \
               guarantees as every other function run.",
    },
    Pillar {
        id: "events",
        title: "Event streams",
        copy: "Trigger work from your own events, and replay a stream from any \
               point when a deploy goes sideways.",
    },
    Pillar {
        id: "observability",
        title: "Observability",
        copy: "Every run is traced end to end, so the question is never what \
               happened, only what to ship next.",
    },
];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Skylark \u{2013} Durable Background Functions"/>
        <section class="px-4 pt-16 pb-20 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl md:text-7xl">
                    "Ship background functions"
                    <br/>
                    "without the queue plumbing"
                </h1>
                <p class="mb-8 max-w-2xl text-lg text-gray-300">
                    "Skylark runs your functions durably: retries, scheduling and \
                     event-driven fan-out, all from code you keep in your own repo."
                </p>
                <a
                    href=nav::nav_ref("/sign-up")
                    class="inline-block py-3 px-8 text-sm font-medium text-white rounded-full bg-indigo-500 hover:bg-indigo-400"
                >
                    "Start building"
                </a>
            </div>
        </section>
        {PILLARS
            .iter()
            .map(|pillar| {
                view! {
                    <section id=pillar.id class="py-16 px-4 sm:px-6 lg:px-8">
                        <div class="mx-auto max-w-5xl">
                            <h2 class="mb-4 text-3xl font-bold text-[#7b8cff]">{pillar.title}</h2>
                            <p class="max-w-2xl text-gray-300">{pillar.copy}</p>
                        </div>
                    </section>
                }
            })
            .collect_view()}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::product_links;

    #[test]
    fn product_dropdown_anchors_resolve_to_pillar_sections() {
        for link in product_links() {
            let Some(id) = link.href.strip_prefix("/#") else {
                continue;
            };
            assert!(
                PILLARS.iter().any(|pillar| pillar.id == id),
                "missing home section for anchor {id}"
            );
        }
    }
}
