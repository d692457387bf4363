use yew::prelude::*;
use yew_router::prelude::*;
use webcraft_shared::content::{Icon, PricingTier, BUSINESS, PRICING_TIERS};

use crate::base::Base;
use crate::components::LucideIcon;
use crate::hooks::use_document_metadata;
use crate::Route;

fn website_label(url: &str) -> &str {
    url.trim_start_matches("https://").trim_start_matches("http://")
}

fn tier_card(tier: &PricingTier) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-8 border-t-4 border-indigo-500">
            <div class="flex items-start gap-4">
                <div class="p-3 bg-indigo-100 dark:bg-indigo-900/40 rounded-full">
                    <svg class="w-6 h-6 text-indigo-600 dark:text-indigo-300" fill="currentColor" viewBox="0 0 24 24">
                        <path d={tier.icon_path} />
                    </svg>
                </div>
                <div class="flex-1">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{tier.title}</h2>
                    <p class="mt-1 text-gray-600 dark:text-gray-300">{tier.summary}</p>
                </div>
            </div>
            <div class="mt-6 flex items-baseline gap-2">
                <span class="text-3xl font-extrabold text-gray-900 dark:text-white">{tier.inr_from}</span>
                <span class="text-xl font-semibold text-gray-600 dark:text-gray-300">{format!("– {}", tier.inr_to)}</span>
            </div>
            <div class="text-sm text-gray-500 dark:text-gray-400 mb-4">{tier.usd_range}</div>
            <ul class="space-y-1 text-gray-700 dark:text-gray-300 list-disc list-inside">
                { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_document_metadata(Some("Pricing"));
    let website = website_label(BUSINESS.website);

    html! {
        <Base>
            <section class="min-h-screen bg-gray-50 dark:bg-gray-900 py-12 font-sans">
                <div class="max-w-5xl mx-auto px-6">
                    <div class="text-center mb-10">
                        <h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight text-gray-900 dark:text-white">
                            {BUSINESS.company}
                        </h1>
                        <p class="mt-2 text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">{BUSINESS.tagline}</p>
                    </div>

                    <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4 p-6 mb-12">
                        <div class="flex flex-col">
                            <span class="text-sm uppercase font-medium text-indigo-600">{"Company"}</span>
                            <span class="mt-1 font-semibold text-gray-800 dark:text-gray-100">{BUSINESS.company}</span>
                        </div>
                        <div class="flex flex-col">
                            <span class="text-sm uppercase font-medium text-indigo-600">{"Location"}</span>
                            <span class="mt-1 text-gray-800 dark:text-gray-100">
                                { for BUSINESS.address.iter().map(|line| html! { <>{*line}<br /></> }) }
                            </span>
                        </div>
                        <div class="flex flex-col">
                            <span class="text-sm uppercase font-medium text-indigo-600">{"Contact"}</span>
                            <span class="mt-1 text-gray-800 dark:text-gray-100">{BUSINESS.phone}</span>
                            <span class="mt-1 text-gray-800 dark:text-gray-100 break-all">{BUSINESS.email}</span>
                        </div>
                        <div class="flex flex-col">
                            <span class="text-sm uppercase font-medium text-indigo-600">{"Online"}</span>
                            <a
                                href={BUSINESS.website}
                                class="mt-1 text-indigo-600 font-semibold hover:underline break-all"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {website}
                            </a>
                        </div>
                    </div>

                    <div class="grid gap-8 lg:grid-cols-2 mb-12">
                        { for PRICING_TIERS.iter().map(tier_card) }
                    </div>

                    <div class="text-center mt-12 mb-8">
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{"Ready to Start?"}</h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-4">
                            {"Let's build something great together. Transparent pricing, clean code, and real results."}
                        </p>
                        <Link<Route>
                            to={Route::Home}
                            classes={classes!("inline-flex", "items-center", "gap-2", "bg-gradient-to-r", "from-blue-600", "to-purple-600",
                                "text-white", "px-8", "py-3", "rounded-full", "font-semibold", "shadow-lg", "hover:brightness-105", "transition")}
                        >
                            {"Start Your Project"}
                            <LucideIcon icon={Icon::ArrowRight} />
                        </Link<Route>>
                    </div>

                    <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6 flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                        <div>
                            <p class="text-sm text-gray-600 dark:text-gray-300">
                                <span class="font-medium">{BUSINESS.owner}</span>
                                {format!(" – {}", BUSINESS.company)}
                            </p>
                            <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                                {"Professional website development tailored to your goals."}
                            </p>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-6 text-sm">
                            <div>
                                <span class="font-semibold">{"Email: "}</span>
                                <a href={format!("mailto:{}", BUSINESS.email)} class="text-indigo-600 hover:underline">{BUSINESS.email}</a>
                            </div>
                            <div>
                                <span class="font-semibold">{"Phone: "}</span>
                                <a href={BUSINESS.phone_href} class="text-indigo-600 hover:underline">{BUSINESS.phone}</a>
                            </div>
                            <div>
                                <span class="font-semibold">{"Website: "}</span>
                                <a href={BUSINESS.website} class="text-indigo-600 hover:underline" target="_blank" rel="noopener noreferrer">
                                    {website}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </Base>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_label_drops_scheme() {
        assert_eq!(website_label(BUSINESS.website), "webcraft-atulmishra.vercel.app");
    }
}
