//! Marketing home page: hero, feature highlights, pricing tiers.

use leptos::prelude::*;

use crate::components::button::{ButtonVariant, button_classes};
use crate::components::{Footer, Header};
use crate::shell;
use crate::util::urls::login_href;

/// Pricing tier slugs as they appear in checkout-start URLs. `super` is the
/// historical slug for the Unlimited tier.
pub const TIER_FREE: &str = "free";
pub const TIER_PRO: &str = "pro";
pub const TIER_SUPER: &str = "super";

/// Where a pricing card's "Get started" action routes: sign-in first, then
/// either the lesson form (free) or the account page's upgrade flow.
#[must_use]
pub fn checkout_start_href(tier: &str) -> String {
    match tier {
        TIER_PRO => login_href("/account?upgrade=pro"),
        TIER_SUPER => login_href("/account?upgrade=super"),
        _ => login_href("/lessons/new"),
    }
}

pub fn render() -> String {
    shell::document("Lessongo", view! { <HomePage/> })
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen py-2 mx-auto">
            <Header/>
            <main class="w-full">
                <div class="flex flex-col items-center flex-1 w-full px-4 mt-8 text-center sm:mt-12">
                    <img
                        src="/public/robot.svg"
                        alt="smiling nerdy robot"
                        class="mx-auto"
                        width="320"
                        height="320"
                    />
                    <h1 class="max-w-4xl px-4 mt-5 text-3xl font-bold tracking-tight md:text-6xl sm:text-5xl text-slate-900">
                        "Create " <span class="text-green-700">"super"</span> " lesson plans"
                        <br/>
                        "with " <span class="text-green-700">"superhuman"</span> " speed!"
                    </h1>
                    <p class="max-w-xl mt-10 text-lg sm:text-xl text-slate-700">
                        "The future of lesson planning is here. Our AI assistant helps you go from "
                        <strong>"blank slate"</strong> " to " <strong>"finished lesson plan"</strong>
                        " in a flash."
                    </p>
                    <div class="relative flex flex-col gap-5 mt-16 sm:flex-row">
                        <a href="/lessons/new" class=format!("w-64 {}", button_classes(ButtonVariant::Primary, false))>
                            "Plan my lesson"
                        </a>
                        <a href="/lessons" class=format!("w-64 {}", button_classes(ButtonVariant::Outline, false))>
                            "Browse lesson plans"
                        </a>
                    </div>
                </div>
                <FeatureSection/>
                <PricingSection/>
            </main>
            <Footer/>
        </div>
    }
}

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Activity ideas",
        blurb: "Generate ideas for activities tailored specifically to your class.",
    },
    Feature {
        title: "Lesson plans",
        blurb: "Auto-generate a custom lesson plan with everything you need, then edit it to your liking.",
    },
    Feature {
        title: "Assessments",
        blurb: "Save the hassle of creating assessment materials from scratch. We'll draft custom \
                assessment questions based on your lesson.",
    },
    Feature {
        title: "Stay organized",
        blurb: "Keep your lesson plans organized and share your nicely formatted documents.",
    },
];

#[component]
fn FeatureSection() -> impl IntoView {
    view! {
        <section class="relative flex flex-col items-center w-full px-4 pb-12 mt-20 bg-gradient-to-tl from-green-500 to-green-900">
            <div class="max-w-2xl mt-16 mb-12 text-center text-white">
                <h2 class="mt-6 text-4xl font-bold">
                    "Personalize your lesson plans with a little help from our AI lesson robot."
                </h2>
            </div>
            <div class="grid max-w-4xl grid-cols-1 gap-4 pb-4 mb-4 sm:grid-cols-2">
                {FEATURES.iter().map(|feature| view! {
                    <div class="p-6 text-white bg-white/10 ring-1 ring-inset ring-white/10 rounded-xl">
                        <h3 class="mb-2 text-lg font-bold">{feature.title}</h3>
                        <p class="text-white/90">{feature.blurb}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

struct PricingCard {
    name: &'static str,
    blurb: &'static str,
    price: &'static str,
    cadence: &'static str,
    tier: &'static str,
    highlighted: bool,
    features: [&'static str; 3],
}

const PRICING: &[PricingCard] = &[
    PricingCard {
        name: "Free trial",
        blurb: "Create your first 5 lessons free before you commit.",
        price: "$0",
        cadence: "",
        tier: TIER_FREE,
        highlighted: false,
        features: [
            "5 lessons for free",
            "Save, organize, and print your lessons",
            "Access to all features",
        ],
    },
    PricingCard {
        name: "Pro",
        blurb: "Everything you need to plan your lessons for the year.",
        price: "$59",
        cadence: "/ year",
        tier: TIER_PRO,
        highlighted: true,
        features: [
            "30 lesson plans per month (360 lessons total)",
            "Save, organize, and print your lessons",
            "Access to all features",
        ],
    },
    PricingCard {
        name: "Unlimited",
        blurb: "For educators who want to be unstoppable planning machines.",
        price: "$189",
        cadence: "/ year",
        tier: TIER_SUPER,
        highlighted: false,
        features: [
            "Unlimited lesson plans for one user",
            "Save, organize, and print your lessons",
            "Access to all features",
        ],
    },
];

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section class="w-full pt-20">
            <div class="px-4 mx-auto sm:text-center sm:px-8">
                <h2 class="mb-6 text-xl font-bold text-green-700">"Pricing"</h2>
                <h3 class="text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">
                    "Save hours of time and get back to teaching."
                </h3>
                <p class="max-w-2xl mx-auto mt-6 text-lg leading-8 text-gray-600">
                    "We made it free for you to try Lessongo, so that you see just how much it \
                     helps. Give it a try, then get your whole year of lesson planning done for \
                     just $59."
                </p>
                <div class="flex flex-col gap-2 md:flex-row md:space-x-4">
                    {PRICING.iter().map(pricing_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn pricing_card(card: &PricingCard) -> impl IntoView {
    let ring = if card.highlighted { "ring-2 ring-green-700" } else { "ring-1 ring-gray-200" };
    let variant = if card.highlighted { ButtonVariant::Primary } else { ButtonVariant::Outline };
    view! {
        <div class=format!("flex flex-col max-w-2xl p-12 mx-auto mt-16 space-y-8 md:w-1/3 rounded-3xl {ring}")>
            <h4 class="text-2xl font-bold">{card.name}</h4>
            <p class="text-gray-600">{card.blurb}</p>
            <div>
                <span class="text-4xl font-bold">{card.price}</span>
                <span class="font-medium text-gray-600">{card.cadence}</span>
            </div>
            <a href=checkout_start_href(card.tier) class=button_classes(variant, true)>
                "Get started"
            </a>
            <ul class="space-y-4">
                {card.features.iter().map(|feature| view! {
                    <li class="flex flex-row text-gray-600 text-start">
                        <svg viewBox="0 0 20 20" class="w-5 mr-4 text-green-700 shrink-0" fill="currentColor" aria-hidden="true">
                            <path d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.7-9.3a1 1 0 00-1.4-1.4L9 10.59l-1.3-1.3a1 1 0 00-1.4 1.42l2 2a1 1 0 001.4 0l4-4z"/>
                        </svg>
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
