use yew::prelude::*;
use webcraft_shared::animation::{Motion, Stagger};
use webcraft_shared::content::{ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, ABOUT_STATS, BUSINESS};
use webcraft_shared::SectionId;

use crate::components::{LucideIcon, Reveal, SectionHeading};
use crate::styles;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class={classes!(styles::SECTION, "bg-white", "dark:bg-gray-900")}>
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title={format!("About {}", BUSINESS.company)}
                    subtitle="Transforming ideas into powerful digital solutions that drive business success"
                />

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal motion={Motion::SlideInLeft} class={classes!("space-y-6")}>
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                            {"Building the Future of Web Development"}
                        </h3>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">{*paragraph}</p>
                        }) }
                        <div class="grid grid-cols-2 gap-4 pt-4">
                            { for ABOUT_HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                                <Reveal motion={Motion::FadeInUp} delay_ms={Stagger::LIST.delay_for(i)} class={classes!("flex", "items-center", "space-x-3")}>
                                    <div class="text-blue-600 dark:text-blue-400">
                                        <LucideIcon icon={highlight.icon} />
                                    </div>
                                    <span class="font-medium text-gray-700 dark:text-gray-300">{highlight.label}</span>
                                </Reveal>
                            }) }
                        </div>
                    </Reveal>

                    <Reveal motion={Motion::SlideInRight}>
                        <div class="bg-gradient-to-br from-blue-50 to-purple-50 dark:from-gray-800 dark:to-gray-700 rounded-2xl p-8">
                            <div class="grid grid-cols-2 gap-6">
                                { for ABOUT_STATS.iter().enumerate().map(|(i, stat)| html! {
                                    <Reveal motion={Motion::ScaleIn} delay_ms={Stagger::LIST.delay_for(i)} class={classes!(styles::STAT_CARD)}>
                                        <div class="flex justify-center mb-3 text-blue-600 dark:text-blue-400">
                                            <LucideIcon icon={stat.icon} size={32} />
                                        </div>
                                        <div class="text-3xl font-bold text-gray-900 dark:text-white mb-2">{stat.number}</div>
                                        <div class="text-sm text-gray-600 dark:text-gray-400">{stat.label}</div>
                                    </Reveal>
                                }) }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
