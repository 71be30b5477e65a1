//! Sign-up page. Account creation lives in the hosted app; this page hands
//! visitors off to it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::nav;

pub fn component() -> impl IntoView {
    view! {
        <Title text="Sign Up \u{2013} Skylark"/>
        <section class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="flex flex-col items-center p-10 mx-auto max-w-xl text-center rounded-xl border border-white/10 bg-[#10121c]">
                <h1 class="mb-4 text-3xl font-extrabold">"Create your account"</h1>
                <p class="mb-8 text-gray-300">
                    "The free tier covers 25k function runs a month. No credit card, \
                     no trial clock."
                </p>
                <a
                    href=nav::APP_SIGNUP_URL
                    class="py-3 px-8 text-sm font-medium text-white rounded-full bg-indigo-500 hover:bg-indigo-400"
                >
                    "Continue to the app"
                </a>
                <p class="mt-6 text-sm text-gray-400">
                    "Already have an account? "
                    <a href=nav::APP_LOGIN_URL class="hover:underline text-[#7b8cff]">
                        "Log in"
                    </a>
                </p>
            </div>
        </section>
    }
}
