//! Pricing page. Three static tiers; checkout happens in the hosted app.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav;

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Hobby",
        price: "$0",
        blurb: "For side projects and evaluation.",
        features: &["25k runs / month", "Community support", "7 day run history"],
    },
    Tier {
        name: "Team",
        price: "$50 / month",
        blurb: "For production workloads.",
        features: &[
            "1M runs / month",
            "Concurrency controls",
            "30 day run history",
            "Email support",
        ],
    },
    Tier {
        name: "Scale",
        price: "Custom",
        blurb: "For platforms built on Skylark.",
        features: &[
            "Unlimited runs",
            "Dedicated throughput",
            "SSO and audit logs",
            "Support SLA",
        ],
    },
];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Pricing \u{2013} Skylark"/>
        <section class="py-16 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <h1 class="mb-12 text-4xl font-extrabold">"Pricing"</h1>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                    {TIERS
                        .iter()
                        .map(|tier| {
                            view! {
                                <div class="flex flex-col p-6 rounded-xl border border-white/10 bg-[#10121c]">
                                    <h2 class="text-lg font-semibold">{tier.name}</h2>
                                    <p class="mt-2 text-3xl font-bold">{tier.price}</p>
                                    <p class="mt-1 text-sm text-gray-400">{tier.blurb}</p>
                                    <ul class="flex flex-col gap-2 mt-6 mb-8 text-sm text-gray-300">
                                        {tier
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a
                                        href=nav::APP_SIGNUP_URL
                                        class="py-2 px-6 mt-auto text-sm font-medium text-center text-white rounded-full bg-indigo-500 hover:bg-indigo-400"
                                    >
                                        "Get started"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
