use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;
use webcraft_shared::content::{FooterLink, Icon, BRAND, BUSINESS, FOOTER_QUICK_LINKS, FOOTER_SERVICE_LINKS, SOCIAL_LINKS};
use webcraft_shared::SectionId;

use crate::components::LucideIcon;
use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let link_list = |links: &'static [FooterLink]| {
        html! {
            <ul class="space-y-2">
                { for links.iter().map(|link| {
                    let on_navigate = props.on_navigate.clone();
                    let target = link.target;
                    html! {
                        <li>
                            <button
                                type="button"
                                class={styles::FOOTER_LINK}
                                onclick={Callback::from(move |_| on_navigate.emit(target))}
                            >
                                {link.label}
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <footer class={styles::FOOTER}>
            <div class={styles::CONTAINER}>
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent mb-4">
                            {BRAND}
                        </h3>
                        <p class="text-gray-400 mb-6 max-w-md">
                            {"Transforming ideas into exceptional digital experiences. Let's build something amazing together."}
                        </p>
                        <div class="flex space-x-4">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                    class={styles::SOCIAL_BUTTON}
                                >
                                    <LucideIcon icon={social.icon} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4 class={styles::FOOTER_HEADING}>{"Services"}</h4>
                        {link_list(FOOTER_SERVICE_LINKS)}
                    </div>

                    <div>
                        <h4 class={styles::FOOTER_HEADING}>{"Quick Links"}</h4>
                        {link_list(FOOTER_QUICK_LINKS)}
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-gray-400 text-sm">
                        {format!("© {} {}. All rights reserved. Crafted by {}.", year, BRAND, BUSINESS.owner)}
                    </p>
                    <div class="flex items-center gap-6 text-sm">
                        <Link<Route> to={Route::Pricing} classes={classes!(styles::FOOTER_LINK)}>
                            {"Pricing"}
                        </Link<Route>>
                        <a href={format!("mailto:{}", BUSINESS.email)} class={classes!(styles::FOOTER_LINK, "inline-flex", "items-center", "gap-2")}>
                            <LucideIcon icon={Icon::Mail} size={16} />
                            {BUSINESS.email}
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
