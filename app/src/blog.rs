//! Blog index. Entries are static; the marketing site carries no content
//! backend.

use leptos::prelude::*;
use leptos_meta::Title;

struct BlogEntry {
    title: &'static str,
    summary: &'static str,
    date: &'static str,
}

const ENTRIES: [BlogEntry; 3] = [
    BlogEntry {
        title: "Replaying event streams without replaying side effects",
        summary: "How Skylark deduplicates function runs when you rewind a stream \
                  past work that already happened.",
        date: "2026-07-14",
    },
    BlogEntry {
        title: "Cron is a trigger, not a scheduler",
        summary: "Why we model scheduled work as just another event source, and \
                  what that buys you during incident recovery.",
        date: "2026-05-02",
    },
    BlogEntry {
        title: "Tracing a function across retries",
        summary: "A single run identity across every attempt, queue hop and \
                  fan-out branch.",
        date: "2026-03-19",
    },
];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Blog \u{2013} Skylark"/>
        <section class="py-16 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-3xl">
                <h1 class="mb-12 text-4xl font-extrabold">"Blog"</h1>
                <div class="flex flex-col gap-8">
                    {ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <article class="p-6 rounded-xl border border-white/10 bg-[#10121c]">
                                    <p class="text-xs text-gray-500">{entry.date}</p>
                                    <h2 class="mt-1 text-xl font-semibold">{entry.title}</h2>
                                    <p class="mt-2 text-sm text-gray-300">{entry.summary}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
